//! Timestamp-derived record ids.
//!
//! Ids look like `dev-1760868000123`: a type prefix and the creation time in
//! milliseconds. One counter is shared by every prefix, so tokens are strictly
//! increasing across all record kinds within a process and two records created
//! in the same millisecond still get distinct ids.

use chrono::Utc;
use std::sync::atomic::{AtomicI64, Ordering};

/// Prefix for task ids
pub const TASK_ID_PREFIX: &str = "task";
/// Prefix for category ids
pub const CATEGORY_ID_PREFIX: &str = "cat";
/// Prefix for device ids
pub const DEVICE_ID_PREFIX: &str = "dev";
/// Prefix for account ids
pub const ACCOUNT_ID_PREFIX: &str = "acc";
/// Prefix for earning record ids
pub const EARNING_ID_PREFIX: &str = "earn";
/// Prefix for shared item ids
pub const SHARED_ITEM_ID_PREFIX: &str = "s";

/// Largest token taken from a stored id (9999-12-31T23:59:59.999Z). Larger
/// trailing numbers are not creation times and are ignored.
const MAX_OBSERVED_TOKEN: i64 = 253_402_300_799_999;

/// Monotonic id source shared by all record kinds.
#[derive(Debug, Default)]
pub struct IdGenerator {
    last: AtomicI64,
}

impl IdGenerator {
    /// Creates a generator with no issued tokens.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            last: AtomicI64::new(0),
        }
    }

    /// Issues the next id for `prefix`.
    pub fn next(&self, prefix: &str) -> String {
        let token = self.next_token(Utc::now().timestamp_millis());
        format!("{prefix}-{token}")
    }

    fn next_token(&self, now_ms: i64) -> i64 {
        match self
            .last
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
                Some(now_ms.max(last.saturating_add(1)))
            }) {
            Ok(prev) | Err(prev) => now_ms.max(prev.saturating_add(1)),
        }
    }

    /// Records an existing id so later tokens sort after it even if the
    /// clock has moved backwards since it was issued. Ids of every kind feed
    /// the same counter.
    pub fn observe(&self, id: &str) {
        if let Some(token) = id
            .rsplit('-')
            .next()
            .and_then(|t| t.parse::<i64>().ok())
            .filter(|t| *t <= MAX_OBSERVED_TOKEN)
        {
            self.last.fetch_max(token, Ordering::SeqCst);
        }
    }
}
