//! Shared link, image and note business logic.

use crate::{
    core::remove_by_id,
    errors::Result,
    models::{SharedItem, SharedItemKind},
    store::{Store, ids::SHARED_ITEM_ID_PREFIX},
};
use chrono::Utc;
use tracing::info;

/// Input for [`add_shared_item`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSharedItem {
    /// How `content` is interpreted
    pub kind: SharedItemKind,
    /// Title
    pub name: String,
    /// Short description; may be empty
    pub description: String,
    /// URL for links and images, text for notes
    pub content: String,
}

/// Shares a new item, newest first.
///
/// # Errors
/// Returns an error if the updated state cannot be persisted.
pub async fn add_shared_item(store: &Store, new_item: NewSharedItem) -> Result<SharedItem> {
    let item = SharedItem {
        id: store.next_id(SHARED_ITEM_ID_PREFIX),
        kind: new_item.kind,
        name: new_item.name,
        description: new_item.description,
        content: new_item.content,
        date: Utc::now(),
    };

    let created = item.clone();
    store
        .update(move |mut state| {
            state.shared_items.insert(0, item);
            state
        })
        .await?;

    info!(
        "Shared {} {} ({})",
        created.kind.as_str(),
        created.id,
        created.name
    );
    Ok(created)
}

/// Deletes the shared item with `id`. Returns whether an item was removed.
///
/// # Errors
/// Returns an error if the updated state cannot be persisted.
pub async fn delete_shared_item(store: &Store, id: &str) -> Result<bool> {
    let mut removed = false;
    store
        .update(|mut state| {
            removed = remove_by_id(&mut state.shared_items, id, |s| &s.id);
            state
        })
        .await?;
    Ok(removed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    fn note(name: &str) -> NewSharedItem {
        NewSharedItem {
            kind: SharedItemKind::Note,
            name: name.to_string(),
            description: String::new(),
            content: "Rotate proxies before 9am".to_string(),
        }
    }

    #[tokio::test]
    async fn test_add_shared_item_prepends() -> Result<()> {
        let store = setup_test_store().await?;
        let first = add_shared_item(&store, note("first")).await?;
        let second = add_shared_item(
            &store,
            NewSharedItem {
                kind: SharedItemKind::Image,
                name: "banner".to_string(),
                description: "campaign banner".to_string(),
                content: "https://i.example.com/banner.png".to_string(),
            },
        )
        .await?;

        let items = store.snapshot().await.shared_items;
        assert_eq!(items, vec![second.clone(), first.clone()]);
        assert_eq!(second.kind, SharedItemKind::Image);
        assert!(first.id.starts_with("s-"));
        Ok(())
    }

    #[tokio::test]
    async fn test_delete_shared_item() -> Result<()> {
        let store = setup_test_store().await?;
        let a = add_shared_item(&store, note("a")).await?;
        let b = add_shared_item(&store, note("b")).await?;
        let c = add_shared_item(&store, note("c")).await?;

        assert!(delete_shared_item(&store, &b.id).await?);
        assert_eq!(store.snapshot().await.shared_items, vec![c, a]);
        Ok(())
    }
}
