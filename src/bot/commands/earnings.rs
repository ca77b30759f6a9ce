//! Earning record Discord commands.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::{BotData, acknowledge, fit_lines, handlers::autocomplete},
        core::{accounts, earnings},
        dashboard::earnings::EarningForm,
        errors::{Error, Result},
    };

    /// Parent command for earning records.
    #[poise::command(
        slash_command,
        subcommands("earning_add", "earning_list", "earning_delete")
    )]
    pub async fn earning(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let help_text = "Earning commands. Available subcommands:\n\
            `/earning add` - Record what an account earned\n\
            `/earning list` - List earning records\n\
            `/earning delete` - Delete a record";

        ctx.say(help_text).await?;
        Ok(())
    }

    /// Records an amount earned by an account on a device.
    #[poise::command(slash_command, rename = "add")]
    pub async fn earning_add(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Device the money was earned on"]
        #[autocomplete = "autocomplete::autocomplete_device"]
        device: String,
        #[description = "Account that earned it"]
        #[autocomplete = "autocomplete::autocomplete_account"]
        account: String,
        #[description = "Amount earned (e.g., 12.50)"] amount: f64,
    ) -> Result<()> {
        let dashboard = &ctx.data().dashboard;

        let on_device = dashboard
            .store()
            .read(|state| {
                accounts::accounts_for_device(state, &device)
                    .iter()
                    .any(|a| a.id == account)
            })
            .await;
        if !on_device {
            ctx.say("❌ That account is not on the selected device.")
                .await?;
            return Ok(());
        }

        let form = EarningForm {
            device_id: device,
            account_id: account,
            amount: Some(amount),
        };
        let outcome = dashboard.add_earning(form).await?;
        acknowledge(ctx, &outcome, "An earning needs a device, an account and an amount.").await
    }

    /// Lists earning records, newest first.
    #[poise::command(slash_command, rename = "list")]
    pub async fn earning_list(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let state = ctx.data().dashboard.store().snapshot().await;
        let rows = earnings::earning_rows(&state);

        if rows.is_empty() {
            ctx.say("💵 No earnings recorded yet. Add one with `/earning add`.")
                .await?;
            return Ok(());
        }

        let header = format!(
            "💵 **Earnings** (total ${:.2})\n\n",
            earnings::earnings_total(&state)
        );
        let lines: Vec<String> = rows
            .iter()
            .map(|row| {
                format!(
                    "• **${:.2}** - {} on {} · {}",
                    row.record.amount,
                    row.account_label,
                    row.device_label,
                    row.record.date.format("%Y-%m-%d %H:%M")
                )
            })
            .collect();

        let response = fit_lines(header, &lines);
        ctx.say(response).await?;
        Ok(())
    }

    /// Deletes an earning record.
    #[poise::command(slash_command, rename = "delete")]
    pub async fn earning_delete(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Record to delete"]
        #[autocomplete = "autocomplete::autocomplete_earning"]
        record: String,
    ) -> Result<()> {
        let outcome = ctx.data().dashboard.delete_earning(&record).await?;
        acknowledge(ctx, &outcome, "No earning record with that id.").await
    }
}

// Re-export all commands
pub use inner::*;
