//! Desk settings loaded from config.toml
//!
//! Every table is optional. A missing file means defaults; a file that
//! exists but does not parse is a configuration error.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// How long a notification stays visible unless replaced or dismissed.
pub const DEFAULT_DISMISS_AFTER_MS: u64 = 2500;

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Default, Deserialize, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Notification behavior
    #[serde(default)]
    pub notifications: NotificationSettings,
    /// Cloud backend handle; absent means the backend is not initialized
    #[serde(default)]
    pub cloud: Option<CloudSettings>,
}

/// `[notifications]` table
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct NotificationSettings {
    /// Auto-dismiss delay in milliseconds
    #[serde(default = "default_dismiss_after_ms")]
    pub dismiss_after_ms: u64,
}

impl NotificationSettings {
    /// Auto-dismiss delay
    #[must_use]
    pub const fn dismiss_after(&self) -> Duration {
        Duration::from_millis(self.dismiss_after_ms)
    }
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            dismiss_after_ms: DEFAULT_DISMISS_AFTER_MS,
        }
    }
}

const fn default_dismiss_after_ms() -> u64 {
    DEFAULT_DISMISS_AFTER_MS
}

/// `[cloud]` table
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct CloudSettings {
    /// Backend project identifier
    pub project_id: String,
}

/// Parses settings from TOML text.
///
/// # Errors
/// Returns `Error::Config` if the TOML syntax is invalid or a field has the wrong type.
pub fn parse_settings(contents: &str) -> Result<Settings> {
    toml::from_str(contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config.toml: {e}"),
    })
}

/// Loads settings from a TOML file, falling back to defaults when the file is absent.
///
/// # Errors
/// Returns an error if:
/// - The file exists but cannot be read
/// - The TOML syntax is invalid
pub fn load_settings<P: AsRef<Path>>(path: P) -> Result<Settings> {
    let path = path.as_ref();
    if !path.exists() {
        tracing::info!("No settings file at {}, using defaults", path.display());
        return Ok(Settings::default());
    }

    let contents = std::fs::read_to_string(path).map_err(|e| Error::Config {
        message: format!("Failed to read config file: {e}"),
    })?;
    parse_settings(&contents)
}

/// Loads settings from the default location (./config.toml)
pub fn load_default_settings() -> Result<Settings> {
    load_settings("config.toml")
}
