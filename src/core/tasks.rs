//! Task business logic.
//!
//! Tasks are kept newest-first. A task stores its category by name, so
//! renaming or deleting a category never touches existing tasks.

use crate::{
    core::remove_by_id,
    errors::Result,
    models::{AppState, Task, TaskStatus},
    store::{Store, ids::TASK_ID_PREFIX},
};
use chrono::Utc;
use tracing::info;

/// Input for [`add_task`]
#[derive(Debug, Clone, PartialEq)]
pub struct NewTask {
    /// Category name to copy onto the task
    pub category: String,
    /// Task title
    pub name: String,
    /// Payout per completion
    pub earnings: f64,
    /// Task link; may be empty
    pub link: String,
}

/// Logs a new pending task at the front of the list.
///
/// # Errors
/// Returns an error if the updated state cannot be persisted.
pub async fn add_task(store: &Store, new_task: NewTask) -> Result<Task> {
    let task = Task {
        id: store.next_id(TASK_ID_PREFIX),
        category: new_task.category,
        name: new_task.name,
        earnings: new_task.earnings,
        link: new_task.link,
        date: Utc::now(),
        status: TaskStatus::Pending,
        is_reported: None,
    };

    let created = task.clone();
    store
        .update(move |mut state| {
            state.tasks.insert(0, task);
            state
        })
        .await?;

    info!("Added task {} ({})", created.id, created.name);
    Ok(created)
}

/// Deletes the task with `id`. Returns whether a task was removed.
///
/// # Errors
/// Returns an error if the updated state cannot be persisted.
pub async fn delete_task(store: &Store, id: &str) -> Result<bool> {
    let mut removed = false;
    store
        .update(|mut state| {
            removed = remove_by_id(&mut state.tasks, id, |t| &t.id);
            state
        })
        .await?;
    Ok(removed)
}

/// Flips the report flag of the task with `id`.
///
/// # Returns
/// * `Ok(Some(flag))` - The task's new flag value
/// * `Ok(None)` - No task has that id; the state is rewritten unchanged
///
/// # Errors
/// Returns an error if the updated state cannot be persisted.
pub async fn toggle_task_report(store: &Store, id: &str) -> Result<Option<bool>> {
    let mut flipped = None;
    store
        .update(|mut state| {
            for task in state.tasks.iter_mut().filter(|t| t.id == id) {
                let reported = !task.is_reported();
                task.is_reported = Some(reported);
                flipped = Some(reported);
            }
            state
        })
        .await?;
    Ok(flipped)
}

/// Finds a task by id.
#[must_use]
pub fn find_task<'a>(state: &'a AppState, id: &str) -> Option<&'a Task> {
    state.tasks.iter().find(|t| t.id == id)
}

/// Tasks currently flagged as reported, in list order.
#[must_use]
pub fn reported_tasks(state: &AppState) -> Vec<&Task> {
    state.tasks.iter().filter(|t| t.is_reported()).collect()
}

/// Sum of the payouts of every logged task.
#[must_use]
pub fn task_payout_total(state: &AppState) -> f64 {
    state.tasks.iter().map(|t| t.earnings).sum()
}
