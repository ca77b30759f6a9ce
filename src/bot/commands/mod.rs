//! Discord command implementations organized by dashboard page.

#![allow(clippy::too_long_first_doc_paragraph)]

/// Device and account commands
pub mod accounts;

/// Analytics command
pub mod analytics;

/// Earning record commands
pub mod earnings;

/// General utility commands
pub mod general;

/// Shared link/image/note commands
pub mod media;

/// Task and category commands
pub mod tasks;

// Export commands
pub use accounts::*;
pub use analytics::*;
pub use earnings::*;
pub use general::*;
pub use media::*;
pub use tasks::*;
