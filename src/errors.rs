//! Unified error type for the admin desk.
//!
//! Every fallible operation in the crate returns [`Result`]. Storage and
//! encoding failures are propagated unchanged so the caller decides how to
//! report them; nothing in the mutation path swallows an error.

use thiserror::Error;

/// Crate-wide error type
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid or unreadable configuration
    #[error("Configuration error: {message}")]
    Config {
        /// What went wrong
        message: String,
    },

    /// Failure talking to the local key-value store
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// The aggregate could not be encoded for persistence
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Filesystem failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Required environment variable missing or unreadable
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),

    /// Text formatting failure while building a reply
    #[error("Formatting error: {0}")]
    Format(#[from] std::fmt::Error),

    /// Serenity/Poise framework failure
    #[error("Serenity/Poise framework error: {0}")]
    Framework(Box<poise::serenity_prelude::Error>),
}

impl From<poise::serenity_prelude::Error> for Error {
    fn from(value: poise::serenity_prelude::Error) -> Self {
        Self::Framework(Box::new(value))
    }
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_config_error_message() {
        let err = Error::Config {
            message: "missing [cloud] table".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Configuration error: missing [cloud] table"
        );
    }

    #[test]
    fn test_serialization_error_converts() {
        let raw = serde_json::from_str::<serde_json::Value>("{not json");
        let err: Error = raw.unwrap_err().into();
        assert!(matches!(err, Error::Serialization(_)));
    }
}
