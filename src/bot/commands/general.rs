//! General Discord commands - ping, help and status.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::BotData,
        errors::{Error, Result},
    };
    use std::fmt::Write;

    /// Responds with "Pong!" to test bot connectivity.
    #[poise::command(slash_command, prefix_command)]
    pub async fn ping(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        ctx.say("Pong!").await?;
        Ok(())
    }

    /// Displays help information about available commands.
    #[poise::command(slash_command, prefix_command)]
    pub async fn help(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let help_text = "**Micro-job Admin Help**\n\
        **Tasks**\n\
        • `/task add|list|delete|report` - Log tasks and flag problem ones.\n\
        • `/category add|list|delete` - Manage task categories.\n\n\
        **Accounts**\n\
        • `/device add|list|delete` - Manage devices.\n\
        • `/account add|list|show|delete` - Manage accounts per device.\n\n\
        **Money & media**\n\
        • `/earning add|list|delete` - Record what each account earned.\n\
        • `/shared add|list|delete` - Share links, images and notes.\n\n\
        **Overview**\n\
        • `/analytics [timeframe]` - Counters, activity chart and reported tasks.\n\
        • `/status` - Cloud backend status and the current notice.\n\
        • `/ping` - Checks if the bot is responsive.";

        ctx.say(help_text).await?;
        Ok(())
    }

    /// Shows the cloud backend status and the notice currently visible.
    #[poise::command(slash_command, prefix_command)]
    pub async fn status(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let dashboard = &ctx.data().dashboard;

        let mut response = String::from("🛰️ **Desk Status**\n\n");
        writeln!(&mut response, "{}", dashboard.backend_status())?;
        match dashboard.notifier().current() {
            Some(notice) => writeln!(
                &mut response,
                "🔔 Notice: **{}** - {}",
                notice.title, notice.message
            )?,
            None => writeln!(&mut response, "🔕 No notice showing")?,
        }

        ctx.say(response).await?;
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;
