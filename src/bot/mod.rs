//! Bot layer - Discord shell over the dashboard views
//!
//! Slash commands stand in for the dashboard's manager pages. Every command
//! forwards its arguments to a [`Dashboard`] action and replies with the
//! notice the action produced.

/// Discord command implementations (tasks, accounts, earnings, media, analytics, general)
pub mod commands;
/// Discord interaction handlers (autocomplete, etc.)
pub mod handlers;

use crate::{
    dashboard::{Dashboard, Outcome},
    errors::{Error, Result},
};
use poise::serenity_prelude as serenity;
use std::fmt::Write as _;
use tracing::{info, instrument};

/// Shared data available to all bot commands.
#[derive(Debug)]
pub struct BotData {
    /// The dashboard every command acts on
    pub dashboard: Dashboard,
}

impl BotData {
    /// Creates a new `BotData` instance around the dashboard.
    #[must_use]
    pub const fn new(dashboard: Dashboard) -> Self {
        Self { dashboard }
    }
}

/// Characters a list reply may use; Discord rejects content above 2000
pub(crate) const MESSAGE_BUDGET: usize = 1900;

/// Appends `lines` to `header` while they fit in [`MESSAGE_BUDGET`]. The
/// first line that would not fit is replaced by an "…and N more" trailer.
pub(crate) fn fit_lines(header: String, lines: &[String]) -> String {
    let mut response = header;
    let mut used = response.chars().count();
    for (shown, line) in lines.iter().enumerate() {
        let len = line.chars().count() + 1;
        if used + len > MESSAGE_BUDGET {
            let _ = writeln!(response, "…and {} more", lines.len() - shown);
            return response;
        }
        response.push_str(line);
        response.push('\n');
        used += len;
    }
    response
}

/// Replies with the notice of an action that ran, or with `skipped` when the
/// action was not attempted.
pub(crate) async fn acknowledge<T>(
    ctx: poise::Context<'_, BotData, Error>,
    outcome: &Outcome<T>,
    skipped: &str,
) -> Result<()> {
    match outcome {
        Some(done) => {
            ctx.say(format!("✅ **{}** - {}", done.notice.title, done.notice.message))
                .await?;
        }
        None => {
            ctx.send(
                poise::CreateReply::default()
                    .content(format!("ℹ️ {skipped}"))
                    .ephemeral(true),
            )
            .await?;
        }
    }
    Ok(())
}

async fn on_error(error: poise::FrameworkError<'_, BotData, Error>) {
    match error {
        poise::FrameworkError::Setup { error, .. } => {
            tracing::error!("Failed to start bot: {:?}", error);
        }
        poise::FrameworkError::Command { error, ctx, .. } => {
            tracing::error!("Error in command `{}`: {:?}", ctx.command().name, error);
            if let Err(e) = ctx.say(format!("❌ An error occurred: {error}")).await {
                tracing::error!("Failed to send error message: {}", e);
            }
        }
        error => {
            if let Err(e) = poise::builtins::on_error(error).await {
                tracing::error!("Error while handling error: {}", e);
            }
        }
    }
}

/// Registers every command and runs the Discord client until it stops.
///
/// # Errors
/// Returns an error if the client cannot be built or the gateway connection fails.
#[instrument(skip(token, data))]
pub async fn run_bot(token: String, data: BotData) -> Result<()> {
    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: vec![
                commands::ping(),
                commands::help(),
                commands::status(),
                commands::analytics(),
                commands::task(),
                commands::category(),
                commands::device(),
                commands::account(),
                commands::earning(),
                commands::shared(),
            ],
            on_error: |error| Box::pin(on_error(error)),
            ..Default::default()
        })
        .setup(|ctx, ready, framework| {
            Box::pin(async move {
                info!("Logged in as {}", ready.user.name);
                info!("Registering commands globally...");
                poise::builtins::register_globally(ctx, &framework.options().commands).await?;
                Ok(data)
            })
        })
        .build();

    let intents = serenity::GatewayIntents::non_privileged();

    info!("Setting up Serenity client for Poise framework...");
    let mut client = serenity::ClientBuilder::new(token, intents)
        .framework(framework)
        .await?;

    info!("Starting bot client...");
    client.start().await?;
    Ok(())
}
