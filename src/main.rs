use dotenvy::dotenv;
use microjob_admin::{
    bot::{self, BotData},
    config::{database, settings},
    core::backend::BackendHandle,
    dashboard::{Dashboard, Notifier},
    errors::{Error, Result},
    store::Store,
};
use std::env;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // env vars can also be set externally
    dotenv().ok();
    info!("Attempted to load .env file.");

    let settings = settings::load_default_settings()
        .inspect_err(|e| error!("Failed to load settings: {}", e))?;

    let db = database::create_connection()
        .await
        .inspect(|_| info!("Database initialized successfully."))
        .inspect_err(|e| error!("Failed to initialize database: {}", e))?;

    let store = Store::load(db).await?;
    let backend = BackendHandle::from_settings(settings.cloud.as_ref());
    let dashboard = Dashboard::new(
        store,
        Notifier::new(settings.notifications.dismiss_after()),
        backend,
    );
    info!("Backend status: {}", dashboard.backend_status());

    let token = env::var("DISCORD_BOT_TOKEN")
        .inspect_err(|e| error!("DISCORD_BOT_TOKEN not found: {}", e))
        .map_err(Error::EnvVar)?;

    bot::run_bot(token, BotData::new(dashboard)).await
}
