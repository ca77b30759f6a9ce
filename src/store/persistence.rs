//! Snapshot persistence over the `system_state` key-value table.
//!
//! The aggregate is written as one JSON document under [`STATE_KEY`]. There
//! is no partial write: every save replaces the whole value.

use crate::{
    entities::{SystemState, system_state},
    errors::Result,
    models::AppState,
};
use chrono::Utc;
use sea_orm::{Set, prelude::*};
use tracing::{debug, instrument, warn};

/// Storage key of the admin snapshot
pub const STATE_KEY: &str = "microjob_admin_state";

/// Reads the raw value stored under `key`.
///
/// # Returns
/// * `Ok(Some(value))` - The key exists
/// * `Ok(None)` - Nothing stored yet
pub async fn read_value<C>(db: &C, key: &str) -> Result<Option<String>>
where
    C: ConnectionTrait,
{
    let row = SystemState::find()
        .filter(system_state::Column::Key.eq(key))
        .one(db)
        .await?;
    Ok(row.map(|r| r.value))
}

/// Inserts or replaces the value stored under `key`.
pub async fn write_value<C>(db: &C, key: &str, value: String) -> Result<()>
where
    C: ConnectionTrait,
{
    let now = Utc::now().naive_utc();

    let existing = SystemState::find()
        .filter(system_state::Column::Key.eq(key))
        .one(db)
        .await?;

    if let Some(row) = existing {
        let mut active_model: system_state::ActiveModel = row.into();
        active_model.value = Set(value);
        active_model.updated_at = Set(now);
        active_model.update(db).await?;
    } else {
        let new_row = system_state::ActiveModel {
            key: Set(key.to_string()),
            value: Set(value),
            updated_at: Set(now),
            ..Default::default()
        };
        new_row.insert(db).await?;
    }

    Ok(())
}

/// Turns a stored document into an aggregate.
///
/// A missing document or one that fails to decode yields the empty default.
#[must_use]
pub fn decode_state(raw: Option<&str>) -> AppState {
    let Some(raw) = raw else {
        debug!("No stored snapshot, starting empty");
        return AppState::default();
    };

    match AppState::from_json(raw) {
        Ok(state) => state,
        Err(e) => {
            warn!("Stored snapshot could not be decoded, starting empty: {e}");
            AppState::default()
        }
    }
}

/// Loads the persisted aggregate.
///
/// # Errors
/// Returns an error only if the table cannot be read. Undecodable data is
/// replaced by the empty default.
#[instrument(skip(db))]
pub async fn load_state<C>(db: &C) -> Result<AppState>
where
    C: ConnectionTrait,
{
    let raw = read_value(db, STATE_KEY).await?;
    Ok(decode_state(raw.as_deref()))
}

/// Writes the full aggregate under [`STATE_KEY`].
///
/// # Errors
/// Returns an error if encoding or the database write fails.
#[instrument(skip_all)]
pub async fn save_state<C>(db: &C, state: &AppState) -> Result<()>
where
    C: ConnectionTrait,
{
    let encoded = state.to_json()?;
    debug!("Writing snapshot ({} bytes)", encoded.len());
    write_value(db, STATE_KEY, encoded).await
}
