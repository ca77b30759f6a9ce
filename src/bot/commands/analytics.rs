//! Analytics Discord command - counters, placeholder chart and reported tasks.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::BotData,
        core::analytics::Timeframe,
        dashboard::analytics::analytics_view,
        errors::{Error, Result},
    };
    use std::fmt::Write;

    /// Width of the longest chart bar in characters
    const BAR_WIDTH: u32 = 20;

    /// Timeframe picker for `/analytics`
    #[derive(Debug, Clone, Copy, poise::ChoiceParameter)]
    pub enum TimeframeChoice {
        #[name = "daily"]
        Daily,
        #[name = "weekly"]
        Weekly,
        #[name = "monthly"]
        Monthly,
    }

    impl From<TimeframeChoice> for Timeframe {
        fn from(choice: TimeframeChoice) -> Self {
            match choice {
                TimeframeChoice::Daily => Self::Daily,
                TimeframeChoice::Weekly => Self::Weekly,
                TimeframeChoice::Monthly => Self::Monthly,
            }
        }
    }

    /// Shows today's counters, the activity chart and tasks that need attention.
    #[poise::command(slash_command, prefix_command)]
    pub async fn analytics(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Chart window (defaults to daily)"] timeframe: Option<TimeframeChoice>,
    ) -> Result<()> {
        let timeframe = timeframe.map(Timeframe::from).unwrap_or_default();
        let state = ctx.data().dashboard.store().snapshot().await;
        let view = analytics_view(&state, timeframe, chrono::Utc::now().date_naive());

        let mut response = String::from("📊 **Dashboard**\n\n");
        writeln!(
            &mut response,
            "🆕 Tasks added today: **{}**",
            view.summary.tasks_added_today
        )?;
        writeln!(
            &mut response,
            "🚩 Reported tasks: **{}**",
            view.summary.reported_tasks
        )?;
        writeln!(
            &mut response,
            "👤 Accounts: **{}**",
            view.summary.total_accounts
        )?;
        writeln!(
            &mut response,
            "💵 Total earnings: **${:.2}**",
            view.summary.total_earnings
        )?;
        writeln!(
            &mut response,
            "🧾 Task payouts: **${:.2}**",
            view.task_payout_total
        )?;

        writeln!(&mut response, "\n**Activity ({:?})**\n```", view.timeframe)?;
        let peak = view.chart.iter().map(|p| p.value).max().unwrap_or(1).max(1);
        for point in view.chart {
            let filled = point.value * BAR_WIDTH / peak;
            writeln!(
                &mut response,
                "{:<10} {:<20} {}",
                point.label,
                "█".repeat(filled as usize),
                point.value
            )?;
        }
        writeln!(&mut response, "```")?;

        if view.reported.is_empty() {
            writeln!(&mut response, "✅ No reported tasks")?;
        } else {
            writeln!(
                &mut response,
                "**Reported tasks** ({} need action)",
                view.reported.len()
            )?;
            for task in view.reported.iter().take(10) {
                writeln!(&mut response, "• {} [{}]", task.name, task.category)?;
            }
        }

        ctx.say(response).await?;
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;
