//! Single-slot notification that dismisses itself.
//!
//! Showing a notice replaces whatever is visible and cancels its dismiss
//! timer. There is no queue.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::debug;

/// A short acknowledgement shown after a successful action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Headline (e.g. "Success")
    pub title: String,
    /// Body text
    pub message: String,
}

#[derive(Debug, Default)]
struct Slot {
    current: Option<Notice>,
    generation: u64,
    timer: Option<JoinHandle<()>>,
}

/// Holder of the visible notice.
///
/// Cloning shares the slot.
#[derive(Debug, Clone)]
pub struct Notifier {
    slot: Arc<Mutex<Slot>>,
    dismiss_after: Duration,
}

impl Notifier {
    /// Creates a notifier whose notices disappear after `dismiss_after`.
    #[must_use]
    pub fn new(dismiss_after: Duration) -> Self {
        Self {
            slot: Arc::new(Mutex::new(Slot::default())),
            dismiss_after,
        }
    }

    fn lock(&self) -> MutexGuard<'_, Slot> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Shows a notice, replacing the current one. Must be called from within
    /// a tokio runtime.
    pub fn show(&self, title: &str, message: &str) -> Notice {
        let notice = Notice {
            title: title.to_string(),
            message: message.to_string(),
        };

        let mut slot = self.lock();
        if let Some(timer) = slot.timer.take() {
            timer.abort();
        }
        slot.generation += 1;
        slot.current = Some(notice.clone());

        let generation = slot.generation;
        let shared = Arc::clone(&self.slot);
        let delay = self.dismiss_after;
        slot.timer = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let mut slot = shared.lock().unwrap_or_else(PoisonError::into_inner);
            if slot.generation == generation {
                slot.current = None;
                slot.timer = None;
                debug!("Notice dismissed");
            }
        }));

        debug!("Showing notice: {}", notice.title);
        notice
    }

    /// The notice currently visible, if any.
    #[must_use]
    pub fn current(&self) -> Option<Notice> {
        self.lock().current.clone()
    }

    /// Closes the visible notice early.
    pub fn dismiss(&self) {
        let mut slot = self.lock();
        if let Some(timer) = slot.timer.take() {
            timer.abort();
        }
        slot.generation += 1;
        slot.current = None;
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use tokio::time::sleep;

    const DISMISS: Duration = Duration::from_millis(2500);

    #[tokio::test(start_paused = true)]
    async fn test_notice_dismisses_after_delay() {
        let notifier = Notifier::new(DISMISS);
        let shown = notifier.show("Success", "Task added");

        assert_eq!(notifier.current(), Some(shown));
        sleep(Duration::from_millis(2400)).await;
        assert!(notifier.current().is_some());

        sleep(Duration::from_millis(200)).await;
        assert!(notifier.current().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_new_notice_replaces_and_restarts_timer() {
        let notifier = Notifier::new(DISMISS);
        notifier.show("Success", "first");

        sleep(Duration::from_millis(2000)).await;
        notifier.show("Deleted", "second");

        // the first notice's timer would have fired at 2500ms
        sleep(Duration::from_millis(1000)).await;
        let current = notifier.current().unwrap();
        assert_eq!(current.title, "Deleted");
        assert_eq!(current.message, "second");

        sleep(Duration::from_millis(1600)).await;
        assert!(notifier.current().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_manual_dismiss() {
        let notifier = Notifier::new(DISMISS);
        notifier.show("Success", "Device added");
        notifier.dismiss();
        assert!(notifier.current().is_none());

        let clone = notifier.clone();
        clone.show("Success", "Account added");
        assert_eq!(notifier.current().unwrap().message, "Account added");
    }
}
