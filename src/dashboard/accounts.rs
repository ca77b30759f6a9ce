//! Device and account manager.

use super::{Dashboard, Outcome, TITLE_DELETED, TITLE_SUCCESS, is_blank};
use crate::{
    core::{accounts, devices},
    errors::Result,
    models::{Account, Device},
};

/// Inputs of the "add device" form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeviceForm {
    /// Device name (required)
    pub name: String,
}

/// Inputs of the "add account" form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountForm {
    /// Selected device id (required)
    pub device_id: String,
    /// Account name (required)
    pub name: String,
    /// Login email
    pub email: String,
    /// Login password
    pub password: String,
    /// Profile link; blank means none
    pub link: String,
}

impl Dashboard {
    /// Registers a device from the form.
    pub async fn add_device(&self, form: DeviceForm) -> Result<Outcome<Device>> {
        if is_blank(&form.name) {
            return Ok(None);
        }
        let device = devices::add_device(self.store(), form.name).await?;
        Ok(self.done(device, TITLE_SUCCESS, "Device added"))
    }

    /// Deletes a device. Its accounts stay.
    pub async fn delete_device(&self, id: &str) -> Result<Outcome<()>> {
        if !devices::delete_device(self.store(), id).await? {
            return Ok(None);
        }
        Ok(self.done((), TITLE_DELETED, "Device deleted"))
    }

    /// Adds an account from the form.
    pub async fn add_account(&self, form: AccountForm) -> Result<Outcome<Account>> {
        if is_blank(&form.name) || is_blank(&form.device_id) {
            return Ok(None);
        }

        let link = (!is_blank(&form.link)).then_some(form.link);
        let account = accounts::add_account(
            self.store(),
            accounts::NewAccount {
                device_id: form.device_id,
                name: form.name,
                email: form.email,
                password: form.password,
                link,
            },
        )
        .await?;
        Ok(self.done(account, TITLE_SUCCESS, "Account added"))
    }

    /// Deletes an account. Its earning records stay.
    pub async fn delete_account(&self, id: &str) -> Result<Outcome<()>> {
        if !accounts::delete_account(self.store(), id).await? {
            return Ok(None);
        }
        Ok(self.done((), TITLE_DELETED, "Account deleted"))
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::core::accounts::{account_details, accounts_by_device};
    use crate::core::devices::UNKNOWN_DEVICE_LABEL;
    use crate::test_utils::setup_test_dashboard;

    fn account_form(device_id: &str, name: &str) -> AccountForm {
        AccountForm {
            device_id: device_id.to_string(),
            name: name.to_string(),
            email: format!("{name}@mail.example"),
            password: "pa55".to_string(),
            link: String::new(),
        }
    }

    #[tokio::test]
    async fn test_device_then_account_grouped() -> Result<()> {
        let dashboard = setup_test_dashboard().await?;
        let device = dashboard
            .add_device(DeviceForm {
                name: "Samsung A52".to_string(),
            })
            .await?
            .unwrap()
            .value;
        let done = dashboard
            .add_account(account_form(&device.id, "acc1"))
            .await?
            .unwrap();
        assert_eq!(done.notice.title, TITLE_SUCCESS);
        assert_eq!(done.value.link, None);

        let state = dashboard.store().snapshot().await;
        let groups = accounts_by_device(&state);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].device.name, "Samsung A52");
        let names: Vec<&str> = groups[0].accounts.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["acc1"]);
        Ok(())
    }

    #[tokio::test]
    async fn test_account_requires_name_and_device() -> Result<()> {
        let dashboard = setup_test_dashboard().await?;

        assert!(dashboard.add_account(account_form("", "acc1")).await?.is_none());
        assert!(dashboard.add_account(account_form("dev-1", " ")).await?.is_none());
        assert!(dashboard.add_device(DeviceForm::default()).await?.is_none());

        let state = dashboard.store().snapshot().await;
        assert!(state.accounts.is_empty());
        assert!(state.devices.is_empty());
        assert!(dashboard.notifier().current().is_none());
        Ok(())
    }

    #[tokio::test]
    async fn test_account_link_kept_when_given() -> Result<()> {
        let dashboard = setup_test_dashboard().await?;
        let form = AccountForm {
            link: "https://profile.example/acc1".to_string(),
            ..account_form("dev-1", "acc1")
        };
        let account = dashboard.add_account(form).await?.unwrap().value;
        assert_eq!(account.link.as_deref(), Some("https://profile.example/acc1"));
        Ok(())
    }

    #[tokio::test]
    async fn test_deleting_device_orphans_accounts() -> Result<()> {
        let dashboard = setup_test_dashboard().await?;
        let device = dashboard
            .add_device(DeviceForm {
                name: "Pixel".to_string(),
            })
            .await?
            .unwrap()
            .value;
        let account = dashboard
            .add_account(account_form(&device.id, "acc1"))
            .await?
            .unwrap()
            .value;

        let done = dashboard.delete_device(&device.id).await?.unwrap();
        assert_eq!(done.notice.title, TITLE_DELETED);

        let state = dashboard.store().snapshot().await;
        assert_eq!(state.accounts.len(), 1);
        let details = account_details(&state, &account.id).unwrap();
        assert_eq!(details.device_label, UNKNOWN_DEVICE_LABEL);

        assert!(dashboard.delete_account(&account.id).await?.is_some());
        assert!(dashboard.delete_account(&account.id).await?.is_none());
        Ok(())
    }
}
