/// Database configuration and connection management
pub mod database;

/// Desk settings loaded from config.toml
pub mod settings;

pub use settings::{CloudSettings, NotificationSettings, Settings};
