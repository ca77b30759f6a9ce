//! Account business logic.
//!
//! Accounts belong to a device through a plain `device_id` string. Nothing
//! checks that the device exists, and deleting either side leaves the other
//! in place. Grouped views simply skip accounts whose device is gone.

use crate::{
    core::{devices, remove_by_id},
    errors::Result,
    models::{Account, AppState, Device},
    store::{Store, ids::ACCOUNT_ID_PREFIX},
};
use tracing::info;

/// Shown in place of an account name when the account no longer exists
pub const UNKNOWN_ACCOUNT_LABEL: &str = "unknown";

/// Input for [`add_account`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAccount {
    /// Device the account lives on
    pub device_id: String,
    /// Account display name
    pub name: String,
    /// Login email
    pub email: String,
    /// Login password
    pub password: String,
    /// Optional profile link
    pub link: Option<String>,
}

/// A device together with the accounts on it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceAccounts<'a> {
    /// The device
    pub device: &'a Device,
    /// Accounts whose `device_id` matches, in creation order
    pub accounts: Vec<&'a Account>,
}

/// One account with its device resolved for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountDetails<'a> {
    /// The account
    pub account: &'a Account,
    /// Device name or [`devices::UNKNOWN_DEVICE_LABEL`]
    pub device_label: &'a str,
}

/// Appends a new account.
///
/// # Errors
/// Returns an error if the updated state cannot be persisted.
pub async fn add_account(store: &Store, new_account: NewAccount) -> Result<Account> {
    let account = Account {
        id: store.next_id(ACCOUNT_ID_PREFIX),
        device_id: new_account.device_id,
        name: new_account.name,
        email: new_account.email,
        password: new_account.password,
        link: new_account.link,
    };

    let created = account.clone();
    store
        .update(move |mut state| {
            state.accounts.push(account);
            state
        })
        .await?;

    info!(
        "Added account {} ({}) on device {}",
        created.id, created.name, created.device_id
    );
    Ok(created)
}

/// Deletes the account with `id`. Returns whether an account was removed.
///
/// Earning records for the account are kept.
///
/// # Errors
/// Returns an error if the updated state cannot be persisted.
pub async fn delete_account(store: &Store, id: &str) -> Result<bool> {
    let mut removed = false;
    store
        .update(|mut state| {
            removed = remove_by_id(&mut state.accounts, id, |a| &a.id);
            state
        })
        .await?;
    Ok(removed)
}

/// Finds an account by id.
#[must_use]
pub fn find_account<'a>(state: &'a AppState, id: &str) -> Option<&'a Account> {
    state.accounts.iter().find(|a| a.id == id)
}

/// Account name for `id`, or [`UNKNOWN_ACCOUNT_LABEL`] if it is gone.
#[must_use]
pub fn account_label<'a>(state: &'a AppState, id: &str) -> &'a str {
    find_account(state, id).map_or(UNKNOWN_ACCOUNT_LABEL, |a| a.name.as_str())
}

/// Accounts on `device_id`, in creation order.
#[must_use]
pub fn accounts_for_device<'a>(state: &'a AppState, device_id: &str) -> Vec<&'a Account> {
    state
        .accounts
        .iter()
        .filter(|a| a.device_id == device_id)
        .collect()
}

/// Every device with its accounts. Accounts on deleted devices are not listed.
#[must_use]
pub fn accounts_by_device(state: &AppState) -> Vec<DeviceAccounts<'_>> {
    state
        .devices
        .iter()
        .map(|device| DeviceAccounts {
            device,
            accounts: accounts_for_device(state, &device.id),
        })
        .collect()
}

/// The account with `id` and its device label.
#[must_use]
pub fn account_details<'a>(state: &'a AppState, id: &str) -> Option<AccountDetails<'a>> {
    find_account(state, id).map(|account| AccountDetails {
        account,
        device_label: devices::device_label(state, &account.device_id),
    })
}
