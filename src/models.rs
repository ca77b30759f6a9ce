//! The admin aggregate and its six record types.
//!
//! `AppState` is the whole persisted document. Field names are encoded in
//! camelCase so a stored snapshot reads `deviceId`, `isReported`, and so on.
//! Cross-references (`Task::category`, `Account::device_id`,
//! `EarningRecord::account_id`, ...) are plain strings; nothing here enforces
//! that the referenced record exists.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle of a logged task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    /// Logged but not yet done
    #[default]
    Pending,
    /// Done
    Completed,
}

/// A micro-task and its payout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Opaque identifier, unique within `AppState::tasks`
    pub id: String,
    /// Category name copied at creation time (not a category id)
    pub category: String,
    /// Short task title (e.g. "Twitter follow")
    pub name: String,
    /// Payout for one completion
    pub earnings: f64,
    /// Where the task is performed; may be empty
    pub link: String,
    /// Creation time
    pub date: DateTime<Utc>,
    /// Current status
    pub status: TaskStatus,
    /// Report flag; absent on records written before reporting existed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_reported: Option<bool>,
}

impl Task {
    /// Whether the task is currently flagged, treating an absent flag as unflagged.
    #[must_use]
    pub fn is_reported(&self) -> bool {
        self.is_reported.unwrap_or(false)
    }
}

/// A task category. Names are not unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Opaque identifier
    pub id: String,
    /// Display name
    pub name: String,
}

/// A physical handset that accounts live on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    /// Opaque identifier
    pub id: String,
    /// Display name (e.g. "Samsung A52")
    pub name: String,
}

/// A platform account attached to a device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// Opaque identifier
    pub id: String,
    /// Owning device id; may dangle after the device is deleted
    pub device_id: String,
    /// Account display name
    pub name: String,
    /// Login email
    pub email: String,
    /// Login password, stored as entered
    pub password: String,
    /// Profile link
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

/// Money earned by one account on one device.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EarningRecord {
    /// Opaque identifier
    pub id: String,
    /// Device id at the time of recording
    pub device_id: String,
    /// Account id at the time of recording
    pub account_id: String,
    /// Amount earned
    pub amount: f64,
    /// When the record was added
    pub date: DateTime<Utc>,
}

/// How a shared item's `content` is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SharedItemKind {
    /// `content` is a URL to open
    Link,
    /// `content` is an image URL
    Image,
    /// `content` is free text
    Note,
}

impl SharedItemKind {
    /// Lowercase name as stored
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Link => "link",
            Self::Image => "image",
            Self::Note => "note",
        }
    }
}

/// A link, image or note shared from the desk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SharedItem {
    /// Opaque identifier
    pub id: String,
    /// Content interpretation
    #[serde(rename = "type")]
    pub kind: SharedItemKind,
    /// Title
    pub name: String,
    /// Short description; may be empty
    pub description: String,
    /// URL or note text depending on `kind`
    pub content: String,
    /// When the item was shared
    pub date: DateTime<Utc>,
}

/// The single persisted aggregate.
///
/// Tasks, earnings and shared items are kept newest-first; categories,
/// devices and accounts in creation order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    /// Logged tasks
    #[serde(default)]
    pub tasks: Vec<Task>,
    /// Task categories
    #[serde(default)]
    pub categories: Vec<Category>,
    /// Registered devices
    #[serde(default)]
    pub devices: Vec<Device>,
    /// Accounts across all devices
    #[serde(default)]
    pub accounts: Vec<Account>,
    /// Shared links, images and notes
    #[serde(default)]
    pub shared_items: Vec<SharedItem>,
    /// Earning records
    #[serde(default)]
    pub earnings: Vec<EarningRecord>,
}

impl AppState {
    /// Encodes the aggregate as the JSON document kept in storage.
    pub fn to_json(&self) -> crate::errors::Result<String> {
        serde_json::to_string(self).map_err(Into::into)
    }

    /// Decodes a stored JSON document.
    pub fn from_json(raw: &str) -> crate::errors::Result<Self> {
        serde_json::from_str(raw).map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use chrono::TimeZone;

    fn sample_state() -> AppState {
        let date = Utc.with_ymd_and_hms(2026, 3, 14, 9, 30, 0).unwrap();
        AppState {
            tasks: vec![Task {
                id: "task-1".to_string(),
                category: "Social".to_string(),
                name: "Follow".to_string(),
                earnings: 0.05,
                link: "https://example.com/follow".to_string(),
                date,
                status: TaskStatus::Pending,
                is_reported: Some(true),
            }],
            categories: vec![Category {
                id: "cat-1".to_string(),
                name: "Social".to_string(),
            }],
            devices: vec![Device {
                id: "dev-1".to_string(),
                name: "Samsung A52".to_string(),
            }],
            accounts: vec![Account {
                id: "acc-1".to_string(),
                device_id: "dev-1".to_string(),
                name: "acc1".to_string(),
                email: "acc1@example.com".to_string(),
                password: "hunter2".to_string(),
                link: None,
            }],
            shared_items: vec![SharedItem {
                id: "s-1".to_string(),
                kind: SharedItemKind::Note,
                name: "Shift notes".to_string(),
                description: String::new(),
                content: "Rotate devices at noon".to_string(),
                date,
            }],
            earnings: vec![EarningRecord {
                id: "earn-1".to_string(),
                device_id: "dev-1".to_string(),
                account_id: "acc-1".to_string(),
                amount: 12.5,
                date,
            }],
        }
    }

    #[test]
    fn test_json_uses_camel_case_keys() {
        let json = sample_state().to_json().unwrap();
        assert!(json.contains("\"sharedItems\""));
        assert!(json.contains("\"deviceId\""));
        assert!(json.contains("\"accountId\""));
        assert!(json.contains("\"isReported\":true"));
        assert!(json.contains("\"type\":\"note\""));
        assert!(json.contains("\"status\":\"pending\""));
        // absent optional link is omitted rather than written as null
        assert!(!json.contains("\"link\":null"));
    }

    #[test]
    fn test_round_trip_preserves_state() {
        let state = sample_state();
        let decoded = AppState::from_json(&state.to_json().unwrap()).unwrap();
        assert_eq!(decoded, state);
    }

    #[test]
    fn test_decodes_document_without_report_flag() {
        let raw = r#"{
            "tasks": [{
                "id": "1718000000000",
                "category": "Social",
                "name": "Like",
                "earnings": 0.02,
                "link": "",
                "date": "2024-06-10T06:13:20.000Z",
                "status": "pending"
            }],
            "categories": [],
            "devices": [],
            "accounts": [{
                "id": "acc-1",
                "deviceId": "dev-1",
                "name": "old",
                "email": "",
                "password": "",
                "link": ""
            }],
            "sharedItems": [],
            "earnings": []
        }"#;

        let state = AppState::from_json(raw).unwrap();
        assert_eq!(state.tasks.len(), 1);
        assert_eq!(state.tasks[0].is_reported, None);
        assert!(!state.tasks[0].is_reported());
        assert_eq!(state.accounts[0].link.as_deref(), Some(""));
    }

    #[test]
    fn test_missing_collections_default_to_empty() {
        let state = AppState::from_json(r#"{"devices":[{"id":"dev-1","name":"Pixel"}]}"#).unwrap();
        assert_eq!(state.devices.len(), 1);
        assert!(state.tasks.is_empty());
        assert!(state.earnings.is_empty());
    }

    #[test]
    fn test_rejects_unknown_shared_kind() {
        let raw = r#"{"sharedItems":[{"id":"s-1","type":"video","name":"n","description":"","content":"c","date":"2024-06-10T06:13:20.000Z"}]}"#;
        assert!(AppState::from_json(raw).is_err());
    }
}
