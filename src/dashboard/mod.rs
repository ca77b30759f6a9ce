//! Framework-agnostic dashboard views.
//!
//! Each manager view reads the aggregate, collects transient form input and
//! performs exactly one store operation per action. When a form is missing a
//! required field the action is not attempted and no notice is shown. A
//! successful action shows a notice through the shared [`Notifier`].
//!
//! The Discord layer in [`crate::bot`] is one shell over these views.

/// Task, category and report actions
pub mod tasks;
/// Device and account actions
pub mod accounts;
/// Earning record actions
pub mod earnings;
/// Shared link/image/note actions
pub mod media;
/// Read-only analytics view model
pub mod analytics;
/// Auto-dismissing notification slot
pub mod notice;

pub use notice::{Notice, Notifier};

use crate::{
    core::backend::{BackendHandle, BackendStatus},
    store::Store,
};

/// Notice title after something was added
pub const TITLE_SUCCESS: &str = "Success";
/// Notice title after something was deleted
pub const TITLE_DELETED: &str = "Deleted";
/// Notice title after a task was flagged
pub const TITLE_REPORTED: &str = "Reported";
/// Notice title after a task flag was cleared
pub const TITLE_UNREPORTED: &str = "Unreported";

/// Result of an action that ran
#[derive(Debug, Clone, PartialEq)]
pub struct Done<T> {
    /// What the action produced
    pub value: T,
    /// The notice that was shown
    pub notice: Notice,
}

/// `None` when the action was not attempted
pub type Outcome<T> = Option<Done<T>>;

/// The admin dashboard: the store, the notice slot and the backend status.
#[derive(Debug)]
pub struct Dashboard {
    store: Store,
    notifier: Notifier,
    backend: Option<BackendHandle>,
}

impl Dashboard {
    /// Assembles a dashboard.
    #[must_use]
    pub const fn new(store: Store, notifier: Notifier, backend: Option<BackendHandle>) -> Self {
        Self {
            store,
            notifier,
            backend,
        }
    }

    /// The state store
    #[must_use]
    pub const fn store(&self) -> &Store {
        &self.store
    }

    /// The notice slot
    #[must_use]
    pub const fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    /// Whether a cloud backend handle was initialized
    #[must_use]
    pub const fn backend_status(&self) -> BackendStatus {
        BackendStatus::of(self.backend.as_ref())
    }

    fn done<T>(&self, value: T, title: &str, message: &str) -> Outcome<T> {
        let notice = self.notifier.show(title, message);
        Some(Done { value, notice })
    }
}

/// A required text field counts as missing when it is blank.
pub(crate) fn is_blank(field: &str) -> bool {
    field.trim().is_empty()
}
