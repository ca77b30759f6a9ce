//! Shared media manager.

use super::{Dashboard, Outcome, TITLE_DELETED, TITLE_SUCCESS, is_blank};
use crate::{
    core::shared,
    errors::Result,
    models::{SharedItem, SharedItemKind},
};

/// Inputs of the "share" form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharedItemForm {
    /// Selected kind
    pub kind: SharedItemKind,
    /// Title (required)
    pub name: String,
    /// Short description
    pub description: String,
    /// URL or note text (required)
    pub content: String,
}

impl Default for SharedItemForm {
    fn default() -> Self {
        Self {
            kind: SharedItemKind::Link,
            name: String::new(),
            description: String::new(),
            content: String::new(),
        }
    }
}

impl Dashboard {
    /// Shares an item from the form.
    pub async fn add_shared_item(&self, form: SharedItemForm) -> Result<Outcome<SharedItem>> {
        if is_blank(&form.name) || is_blank(&form.content) {
            return Ok(None);
        }
        let item = shared::add_shared_item(
            self.store(),
            shared::NewSharedItem {
                kind: form.kind,
                name: form.name,
                description: form.description,
                content: form.content,
            },
        )
        .await?;
        Ok(self.done(item, TITLE_SUCCESS, "Item shared"))
    }

    /// Deletes a shared item.
    pub async fn delete_shared_item(&self, id: &str) -> Result<Outcome<()>> {
        if !shared::delete_shared_item(self.store(), id).await? {
            return Ok(None);
        }
        Ok(self.done((), TITLE_DELETED, "Item deleted"))
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::setup_test_dashboard;

    #[tokio::test]
    async fn test_share_link_and_delete() -> Result<()> {
        let dashboard = setup_test_dashboard().await?;
        let done = dashboard
            .add_shared_item(SharedItemForm {
                name: "Signup page".to_string(),
                content: "https://gigs.example/signup".to_string(),
                ..SharedItemForm::default()
            })
            .await?
            .unwrap();
        assert_eq!(done.notice.title, TITLE_SUCCESS);
        assert_eq!(done.value.kind, SharedItemKind::Link);

        let deleted = dashboard.delete_shared_item(&done.value.id).await?.unwrap();
        assert_eq!(deleted.notice.title, TITLE_DELETED);
        assert!(dashboard.store().snapshot().await.shared_items.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_share_requires_name_and_content() -> Result<()> {
        let dashboard = setup_test_dashboard().await?;
        let note = SharedItemForm {
            kind: SharedItemKind::Note,
            name: "Reminder".to_string(),
            description: String::new(),
            content: String::new(),
        };
        assert!(dashboard.add_shared_item(note.clone()).await?.is_none());
        assert!(
            dashboard
                .add_shared_item(SharedItemForm {
                    name: String::new(),
                    content: "text".to_string(),
                    ..note
                })
                .await?
                .is_none()
        );
        assert!(dashboard.store().snapshot().await.shared_items.is_empty());
        Ok(())
    }
}
