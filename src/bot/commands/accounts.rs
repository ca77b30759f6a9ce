//! Device and account Discord commands.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::{BotData, acknowledge, fit_lines, handlers::autocomplete},
        core::accounts,
        dashboard::accounts::{AccountForm, DeviceForm},
        errors::{Error, Result},
    };
    use std::fmt::Write;

    /// Parent command for devices.
    #[poise::command(
        slash_command,
        subcommands("device_add", "device_list", "device_delete")
    )]
    pub async fn device(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let help_text = "Device commands. Available subcommands:\n\
            `/device add` - Register a device\n\
            `/device list` - List devices\n\
            `/device delete` - Delete a device (its accounts are kept)";

        ctx.say(help_text).await?;
        Ok(())
    }

    /// Registers a device.
    #[poise::command(slash_command, rename = "add")]
    pub async fn device_add(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Device name (e.g., 'Samsung A52')"] name: String,
    ) -> Result<()> {
        let outcome = ctx.data().dashboard.add_device(DeviceForm { name }).await?;
        acknowledge(ctx, &outcome, "A device needs a name.").await
    }

    /// Lists devices with their account counts.
    #[poise::command(slash_command, rename = "list")]
    pub async fn device_list(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let state = ctx.data().dashboard.store().snapshot().await;
        let groups = accounts::accounts_by_device(&state);

        if groups.is_empty() {
            ctx.say("📱 No devices yet. Register one with `/device add`.")
                .await?;
            return Ok(());
        }

        let lines: Vec<String> = groups
            .iter()
            .map(|group| {
                format!(
                    "• **{}** - {} account{}",
                    group.device.name,
                    group.accounts.len(),
                    if group.accounts.len() == 1 { "" } else { "s" }
                )
            })
            .collect();

        let response = fit_lines("📱 **Devices**\n\n".to_string(), &lines);
        ctx.say(response).await?;
        Ok(())
    }

    /// Deletes a device. Accounts on it are kept.
    #[poise::command(slash_command, rename = "delete")]
    pub async fn device_delete(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Device to delete"]
        #[autocomplete = "autocomplete::autocomplete_device"]
        device: String,
    ) -> Result<()> {
        let outcome = ctx.data().dashboard.delete_device(&device).await?;
        acknowledge(ctx, &outcome, "No device with that id.").await
    }

    /// Parent command for accounts.
    #[poise::command(
        slash_command,
        subcommands("account_add", "account_list", "account_show", "account_delete")
    )]
    pub async fn account(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let help_text = "Account commands. Available subcommands:\n\
            `/account add` - Add an account to a device\n\
            `/account list` - Accounts grouped by device\n\
            `/account show` - Login details of one account\n\
            `/account delete` - Delete an account";

        ctx.say(help_text).await?;
        Ok(())
    }

    /// Adds an account to a device.
    #[poise::command(slash_command, rename = "add")]
    pub async fn account_add(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Device the account lives on"]
        #[autocomplete = "autocomplete::autocomplete_device"]
        device: String,
        #[description = "Account name"] name: String,
        #[description = "Login email"] email: Option<String>,
        #[description = "Login password"] password: Option<String>,
        #[description = "Profile link"] link: Option<String>,
    ) -> Result<()> {
        let form = AccountForm {
            device_id: device,
            name,
            email: email.unwrap_or_default(),
            password: password.unwrap_or_default(),
            link: link.unwrap_or_default(),
        };
        let outcome = ctx.data().dashboard.add_account(form).await?;
        acknowledge(ctx, &outcome, "An account needs a name and a device.").await
    }

    /// Lists accounts grouped by device.
    #[poise::command(slash_command, rename = "list")]
    pub async fn account_list(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let state = ctx.data().dashboard.store().snapshot().await;
        let groups = accounts::accounts_by_device(&state);

        if groups.is_empty() {
            ctx.say("👤 No devices yet. Register one with `/device add`.")
                .await?;
            return Ok(());
        }

        let mut lines = Vec::new();
        for group in groups {
            lines.push(format!("📱 **{}**", group.device.name));
            if group.accounts.is_empty() {
                lines.push("_No accounts_".to_string());
            }
            for account in group.accounts {
                lines.push(format!("• {} ({})", account.name, account.email));
            }
        }

        let response = fit_lines("👤 **Accounts by Device**\n\n".to_string(), &lines);
        ctx.say(response).await?;
        Ok(())
    }

    /// Shows one account's login details, visible only to you.
    #[poise::command(slash_command, rename = "show")]
    pub async fn account_show(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Account to show"]
        #[autocomplete = "autocomplete::autocomplete_account"]
        account: String,
    ) -> Result<()> {
        let state = ctx.data().dashboard.store().snapshot().await;

        let Some(details) = accounts::account_details(&state, &account) else {
            ctx.say("❌ No account with that id.").await?;
            return Ok(());
        };

        let mut response = format!("👤 **{}**\n\n", details.account.name);
        writeln!(&mut response, "📱 Device: {}", details.device_label)?;
        writeln!(&mut response, "✉️ Email: {}", details.account.email)?;
        writeln!(&mut response, "🔑 Password: ||{}||", details.account.password)?;
        if let Some(link) = &details.account.link {
            writeln!(&mut response, "🔗 Link: <{link}>")?;
        }

        ctx.send(
            poise::CreateReply::default()
                .content(response)
                .ephemeral(true),
        )
        .await?;
        Ok(())
    }

    /// Deletes an account. Its earning records are kept.
    #[poise::command(slash_command, rename = "delete")]
    pub async fn account_delete(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Account to delete"]
        #[autocomplete = "autocomplete::autocomplete_account"]
        account: String,
    ) -> Result<()> {
        let outcome = ctx.data().dashboard.delete_account(&account).await?;
        acknowledge(ctx, &outcome, "No account with that id.").await
    }
}

// Re-export all commands
pub use inner::*;
