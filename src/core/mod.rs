//! Named operations over the admin aggregate.
//!
//! Every mutating function here is a thin wrapper around
//! [`Store::update`](crate::store::Store::update): it builds a record with a
//! fresh id, or filters or maps one collection. None of them validate input;
//! required-field checks belong to the form layer in [`crate::dashboard`].
//! Read-side helpers take `&AppState` and resolve soft references with
//! fallback labels instead of failing.

/// Account operations and lookups
pub mod accounts;
/// Dashboard counters and placeholder chart series
pub mod analytics;
/// Cloud backend presence
pub mod backend;
/// Category operations
pub mod categories;
/// Device operations and lookups
pub mod devices;
/// Earning record operations
pub mod earnings;
/// Shared link/image/note operations
pub mod shared;
/// Task operations
pub mod tasks;

/// Removes every item whose id equals `id`, keeping the others in order.
/// Returns whether anything was removed.
pub(crate) fn remove_by_id<T>(items: &mut Vec<T>, id: &str, item_id: impl Fn(&T) -> &str) -> bool {
    let before = items.len();
    items.retain(|item| item_id(item) != id);
    items.len() != before
}
