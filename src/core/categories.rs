//! Category business logic.
//!
//! Categories are appended in creation order. Names are not unique, and
//! deleting a category leaves tasks that copied its name untouched.

use crate::{
    core::remove_by_id,
    errors::Result,
    models::{AppState, Category},
    store::{Store, ids::CATEGORY_ID_PREFIX},
};
use tracing::info;

/// Appends a new category.
///
/// # Errors
/// Returns an error if the updated state cannot be persisted.
pub async fn add_category(store: &Store, name: String) -> Result<Category> {
    let category = Category {
        id: store.next_id(CATEGORY_ID_PREFIX),
        name,
    };

    let created = category.clone();
    store
        .update(move |mut state| {
            state.categories.push(category);
            state
        })
        .await?;

    info!("Added category {} ({})", created.id, created.name);
    Ok(created)
}

/// Deletes the category with `id`. Returns whether a category was removed.
///
/// # Errors
/// Returns an error if the updated state cannot be persisted.
pub async fn delete_category(store: &Store, id: &str) -> Result<bool> {
    let mut removed = false;
    store
        .update(|mut state| {
            removed = remove_by_id(&mut state.categories, id, |c| &c.id);
            state
        })
        .await?;
    Ok(removed)
}

/// Category names offered when logging a task, in creation order.
#[must_use]
pub fn category_names(state: &AppState) -> Vec<&str> {
    state.categories.iter().map(|c| c.name.as_str()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    #[tokio::test]
    async fn test_add_category_appends() -> Result<()> {
        let store = setup_test_store().await?;
        let social = add_category(&store, "Social".to_string()).await?;
        let video = add_category(&store, "Video".to_string()).await?;

        let state = store.snapshot().await;
        assert_eq!(state.categories, vec![social.clone(), video]);
        assert!(social.id.starts_with("cat-"));
        assert_eq!(category_names(&state), vec!["Social", "Video"]);
        Ok(())
    }

    #[tokio::test]
    async fn test_duplicate_names_allowed() -> Result<()> {
        let store = setup_test_store().await?;
        let a = add_category(&store, "Social".to_string()).await?;
        let b = add_category(&store, "Social".to_string()).await?;

        assert_ne!(a.id, b.id);
        assert_eq!(store.snapshot().await.categories.len(), 2);
        Ok(())
    }

    #[tokio::test]
    async fn test_delete_category_does_not_touch_tasks() -> Result<()> {
        let store = setup_test_store().await?;
        let category = add_category(&store, "X".to_string()).await?;
        let task = create_test_task(&store, "Follow", &category.name, 0.05).await?;

        assert!(delete_category(&store, &category.id).await?);

        let state = store.snapshot().await;
        assert!(state.categories.is_empty());
        assert_eq!(state.tasks.len(), 1);
        assert_eq!(state.tasks[0].id, task.id);
        assert_eq!(state.tasks[0].category, "X");
        Ok(())
    }
}
