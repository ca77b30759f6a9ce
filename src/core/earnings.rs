//! Earning record business logic.
//!
//! Records are kept newest-first and keep their device and account ids even
//! after those are deleted; display rows resolve them with fallback labels.

use crate::{
    core::{accounts, devices, remove_by_id},
    errors::Result,
    models::{AppState, EarningRecord},
    store::{Store, ids::EARNING_ID_PREFIX},
};
use chrono::Utc;
use tracing::info;

/// Input for [`add_earning`]
#[derive(Debug, Clone, PartialEq)]
pub struct NewEarning {
    /// Device the money was earned on
    pub device_id: String,
    /// Account that earned it
    pub account_id: String,
    /// Amount earned
    pub amount: f64,
}

/// An earning record with names resolved for display
#[derive(Debug, Clone, PartialEq)]
pub struct EarningRow<'a> {
    /// The record
    pub record: &'a EarningRecord,
    /// Device name or [`devices::UNKNOWN_DEVICE_LABEL`]
    pub device_label: &'a str,
    /// Account name or [`accounts::UNKNOWN_ACCOUNT_LABEL`]
    pub account_label: &'a str,
}

/// Records an amount earned, newest first.
///
/// # Errors
/// Returns an error if the updated state cannot be persisted.
pub async fn add_earning(store: &Store, new_earning: NewEarning) -> Result<EarningRecord> {
    let record = EarningRecord {
        id: store.next_id(EARNING_ID_PREFIX),
        device_id: new_earning.device_id,
        account_id: new_earning.account_id,
        amount: new_earning.amount,
        date: Utc::now(),
    };

    let created = record.clone();
    store
        .update(move |mut state| {
            state.earnings.insert(0, record);
            state
        })
        .await?;

    info!(
        "Recorded earning {} of {:.2} for account {}",
        created.id, created.amount, created.account_id
    );
    Ok(created)
}

/// Deletes the earning record with `id`. Returns whether a record was removed.
///
/// # Errors
/// Returns an error if the updated state cannot be persisted.
pub async fn delete_earning(store: &Store, id: &str) -> Result<bool> {
    let mut removed = false;
    store
        .update(|mut state| {
            removed = remove_by_id(&mut state.earnings, id, |e| &e.id);
            state
        })
        .await?;
    Ok(removed)
}

/// Every earning record with device and account names resolved.
#[must_use]
pub fn earning_rows(state: &AppState) -> Vec<EarningRow<'_>> {
    state
        .earnings
        .iter()
        .map(|record| EarningRow {
            record,
            device_label: devices::device_label(state, &record.device_id),
            account_label: accounts::account_label(state, &record.account_id),
        })
        .collect()
}

/// Sum of every recorded earning.
#[must_use]
pub fn earnings_total(state: &AppState) -> f64 {
    state.earnings.iter().map(|e| e.amount).sum()
}
