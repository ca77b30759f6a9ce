//! Device business logic.
//!
//! Devices are appended in creation order. Deleting a device does not delete
//! the accounts or earning records that point at it; lookups for those fall
//! back to [`UNKNOWN_DEVICE_LABEL`].

use crate::{
    core::remove_by_id,
    errors::Result,
    models::{AppState, Device},
    store::{Store, ids::DEVICE_ID_PREFIX},
};
use tracing::info;

/// Shown in place of a device name when the device no longer exists
pub const UNKNOWN_DEVICE_LABEL: &str = "no device";

/// Registers a new device.
///
/// # Errors
/// Returns an error if the updated state cannot be persisted.
pub async fn add_device(store: &Store, name: String) -> Result<Device> {
    let device = Device {
        id: store.next_id(DEVICE_ID_PREFIX),
        name,
    };

    let created = device.clone();
    store
        .update(move |mut state| {
            state.devices.push(device);
            state
        })
        .await?;

    info!("Added device {} ({})", created.id, created.name);
    Ok(created)
}

/// Deletes the device with `id`. Returns whether a device was removed.
///
/// Accounts on the device are kept.
///
/// # Errors
/// Returns an error if the updated state cannot be persisted.
pub async fn delete_device(store: &Store, id: &str) -> Result<bool> {
    let mut removed = false;
    store
        .update(|mut state| {
            removed = remove_by_id(&mut state.devices, id, |d| &d.id);
            state
        })
        .await?;
    Ok(removed)
}

/// Finds a device by id.
#[must_use]
pub fn find_device<'a>(state: &'a AppState, id: &str) -> Option<&'a Device> {
    state.devices.iter().find(|d| d.id == id)
}

/// Device name for `id`, or [`UNKNOWN_DEVICE_LABEL`] if it is gone.
#[must_use]
pub fn device_label<'a>(state: &'a AppState, id: &str) -> &'a str {
    find_device(state, id).map_or(UNKNOWN_DEVICE_LABEL, |d| d.name.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    #[tokio::test]
    async fn test_add_device_appends() -> Result<()> {
        let store = setup_test_store().await?;
        let a = add_device(&store, "Samsung A52".to_string()).await?;
        let b = add_device(&store, "Pixel 6".to_string()).await?;

        let state = store.snapshot().await;
        assert_eq!(state.devices, vec![a.clone(), b]);
        assert!(a.id.starts_with("dev-"));
        assert_eq!(device_label(&state, &a.id), "Samsung A52");
        Ok(())
    }

    #[tokio::test]
    async fn test_delete_device_keeps_accounts() -> Result<()> {
        let (store, device, account) = setup_with_account().await?;

        assert!(delete_device(&store, &device.id).await?);

        let state = store.snapshot().await;
        assert!(state.devices.is_empty());
        assert_eq!(state.accounts, vec![account.clone()]);
        assert_eq!(device_label(&state, &account.device_id), UNKNOWN_DEVICE_LABEL);
        Ok(())
    }

    #[tokio::test]
    async fn test_delete_unknown_device() -> Result<()> {
        let store = setup_test_store().await?;
        assert!(!delete_device(&store, "dev-1").await?);
        Ok(())
    }
}
