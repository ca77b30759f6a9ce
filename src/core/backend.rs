//! Cloud backend presence.
//!
//! The desk only reports whether a backend handle was initialized. No read
//! or write goes through it.

use crate::config::CloudSettings;
use std::fmt;

/// An initialized cloud backend handle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendHandle {
    project_id: String,
}

impl BackendHandle {
    /// Initializes a handle from `[cloud]` settings, if any.
    #[must_use]
    pub fn from_settings(settings: Option<&CloudSettings>) -> Option<Self> {
        settings.map(|cloud| Self {
            project_id: cloud.project_id.clone(),
        })
    }

    /// Backend project identifier
    #[must_use]
    pub fn project_id(&self) -> &str {
        &self.project_id
    }
}

/// What the shell shows in its connectivity indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendStatus {
    /// A handle exists
    Connected,
    /// No handle was initialized
    Disconnected,
}

impl BackendStatus {
    /// Status for an optional handle.
    #[must_use]
    pub const fn of(handle: Option<&BackendHandle>) -> Self {
        if handle.is_some() {
            Self::Connected
        } else {
            Self::Disconnected
        }
    }
}

impl fmt::Display for BackendStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Connected => f.write_str("Cloud backend connected"),
            Self::Disconnected => f.write_str("Cloud backend not connected"),
        }
    }
}
