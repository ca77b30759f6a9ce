//! Shared test utilities.
//!
//! Helpers for in-memory databases, stores, and records with sensible
//! defaults.

use crate::{
    config::database,
    core::{accounts, devices, tasks},
    dashboard::{Dashboard, Notifier},
    errors::Result,
    models::{Account, Device, Task},
    store::Store,
};
use sea_orm::DatabaseConnection;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

/// Installs a test-friendly tracing subscriber once per process.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .with_test_writer()
        .try_init();
}

/// Creates an in-memory `SQLite` database with all tables initialized.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    database::create_tables(&db).await?;
    Ok(db)
}

/// Creates a store over a fresh in-memory database.
pub async fn setup_test_store() -> Result<Store> {
    Store::load(setup_test_db().await?).await
}

/// Creates a dashboard over a fresh store with the default notice delay
/// and no cloud backend.
pub async fn setup_test_dashboard() -> Result<Dashboard> {
    Ok(Dashboard::new(
        setup_test_store().await?,
        Notifier::new(Duration::from_millis(2500)),
        None,
    ))
}

/// Adds a device with the given name.
pub async fn create_test_device(store: &Store, name: &str) -> Result<Device> {
    devices::add_device(store, name.to_string()).await
}

/// Adds an account on `device_id`.
///
/// # Defaults
/// * `email`: `"<name>@example.com"`
/// * `password`: `"secret"`
/// * `link`: None
pub async fn create_test_account(store: &Store, device_id: &str, name: &str) -> Result<Account> {
    accounts::add_account(
        store,
        accounts::NewAccount {
            device_id: device_id.to_string(),
            name: name.to_string(),
            email: format!("{name}@example.com"),
            password: "secret".to_string(),
            link: None,
        },
    )
    .await
}

/// Adds a task with the given name, category and payout.
///
/// # Defaults
/// * `link`: empty
pub async fn create_test_task(
    store: &Store,
    name: &str,
    category: &str,
    earnings: f64,
) -> Result<Task> {
    tasks::add_task(
        store,
        tasks::NewTask {
            category: category.to_string(),
            name: name.to_string(),
            earnings,
            link: String::new(),
        },
    )
    .await
}

/// Sets up a store holding one device with one account.
pub async fn setup_with_account() -> Result<(Store, Device, Account)> {
    let store = setup_test_store().await?;
    let device = create_test_device(&store, "Test Device").await?;
    let account = create_test_account(&store, &device.id, "test_account").await?;
    Ok((store, device, account))
}
