//! Earnings manager.

use super::{Dashboard, Outcome, TITLE_DELETED, TITLE_SUCCESS, is_blank};
use crate::{core::earnings, errors::Result, models::EarningRecord};

/// Inputs of the "add earning" form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EarningForm {
    /// Selected device id (required)
    pub device_id: String,
    /// Selected account id (required)
    pub account_id: String,
    /// Amount earned (required, finite)
    pub amount: Option<f64>,
}

impl Dashboard {
    /// Records an earning from the form.
    pub async fn add_earning(&self, form: EarningForm) -> Result<Outcome<EarningRecord>> {
        let Some(amount) = form.amount.filter(|a| a.is_finite()) else {
            return Ok(None);
        };
        if is_blank(&form.device_id) || is_blank(&form.account_id) {
            return Ok(None);
        }

        let record = earnings::add_earning(
            self.store(),
            earnings::NewEarning {
                device_id: form.device_id,
                account_id: form.account_id,
                amount,
            },
        )
        .await?;
        Ok(self.done(record, TITLE_SUCCESS, "Earning recorded"))
    }

    /// Deletes an earning record.
    pub async fn delete_earning(&self, id: &str) -> Result<Outcome<()>> {
        if !earnings::delete_earning(self.store(), id).await? {
            return Ok(None);
        }
        Ok(self.done((), TITLE_DELETED, "Earning deleted"))
    }
}
