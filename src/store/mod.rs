//! The state store: one aggregate, one writer, write-through persistence.
//!
//! [`Store::load`] reads the persisted snapshot once. After that every change
//! goes through [`Store::update`], which applies a whole-aggregate
//! transformation, writes the result to the key-value table and only then
//! makes it visible. Updates are serialized by an async mutex held across the
//! write, so concurrent callers never interleave.

pub mod ids;
pub mod persistence;

use crate::{errors::Result, models::AppState};
use ids::IdGenerator;
use sea_orm::DatabaseConnection;
use tokio::sync::Mutex;
use tracing::{debug, info, instrument};

/// Owner of the admin aggregate.
#[derive(Debug)]
pub struct Store {
    db: DatabaseConnection,
    state: Mutex<AppState>,
    ids: IdGenerator,
}

impl Store {
    /// Loads the persisted aggregate (or the empty default) and wraps it.
    ///
    /// # Errors
    /// Returns an error if the key-value table cannot be read.
    #[instrument(skip(db))]
    pub async fn load(db: DatabaseConnection) -> Result<Self> {
        let state = persistence::load_state(&db).await?;
        // one counter for every collection
        let ids = IdGenerator::new();
        for id in all_ids(&state) {
            ids.observe(id);
        }

        info!(
            "Loaded state: {} tasks, {} categories, {} devices, {} accounts, {} shared items, {} earnings",
            state.tasks.len(),
            state.categories.len(),
            state.devices.len(),
            state.accounts.len(),
            state.shared_items.len(),
            state.earnings.len()
        );

        Ok(Self {
            db,
            state: Mutex::new(state),
            ids,
        })
    }

    /// Returns a copy of the current aggregate.
    pub async fn snapshot(&self) -> AppState {
        self.state.lock().await.clone()
    }

    /// Runs `f` against the current aggregate without copying it.
    pub async fn read<R>(&self, f: impl FnOnce(&AppState) -> R) -> R {
        let guard = self.state.lock().await;
        f(&guard)
    }

    /// Replaces the aggregate with `transform(current)` and persists it.
    ///
    /// The new aggregate becomes visible only after it has been written. If
    /// encoding or the write fails the error is returned and the previous
    /// aggregate stays in place.
    ///
    /// # Errors
    /// Returns `Error::Serialization` or `Error::Database` when the snapshot
    /// cannot be persisted.
    #[instrument(skip_all)]
    pub async fn update<F>(&self, transform: F) -> Result<()>
    where
        F: FnOnce(AppState) -> AppState,
    {
        let mut current = self.state.lock().await;
        let next = transform(current.clone());
        persistence::save_state(&self.db, &next).await?;
        *current = next;
        debug!("State updated and persisted");
        Ok(())
    }

    /// Issues a fresh id for a record of the given kind.
    pub fn next_id(&self, prefix: &str) -> String {
        self.ids.next(prefix)
    }
}

fn all_ids(state: &AppState) -> impl Iterator<Item = &str> {
    state
        .tasks
        .iter()
        .map(|t| t.id.as_str())
        .chain(state.categories.iter().map(|c| c.id.as_str()))
        .chain(state.devices.iter().map(|d| d.id.as_str()))
        .chain(state.accounts.iter().map(|a| a.id.as_str()))
        .chain(state.shared_items.iter().map(|s| s.id.as_str()))
        .chain(state.earnings.iter().map(|e| e.id.as_str()))
}
