//! Task and category manager.

use super::{
    Dashboard, Outcome, TITLE_DELETED, TITLE_REPORTED, TITLE_SUCCESS, TITLE_UNREPORTED, is_blank,
};
use crate::{
    core::{categories, tasks},
    errors::Result,
    models::{Category, Task},
};

/// Inputs of the "add task" form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskForm {
    /// Selected category name (required)
    pub category: String,
    /// Task title (required)
    pub name: String,
    /// Payout; absent or non-finite input counts as 0
    pub earnings: Option<f64>,
    /// Task link
    pub link: String,
}

/// Inputs of the "add category" form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryForm {
    /// Category name (required)
    pub name: String,
}

impl Dashboard {
    /// Logs a task from the form.
    pub async fn add_task(&self, form: TaskForm) -> Result<Outcome<Task>> {
        if is_blank(&form.name) || is_blank(&form.category) {
            return Ok(None);
        }

        let earnings = form.earnings.filter(|e| e.is_finite()).unwrap_or(0.0);
        let task = tasks::add_task(
            self.store(),
            tasks::NewTask {
                category: form.category,
                name: form.name,
                earnings,
                link: form.link,
            },
        )
        .await?;
        Ok(self.done(task, TITLE_SUCCESS, "Task added"))
    }

    /// Deletes a task.
    pub async fn delete_task(&self, id: &str) -> Result<Outcome<()>> {
        if !tasks::delete_task(self.store(), id).await? {
            return Ok(None);
        }
        Ok(self.done((), TITLE_DELETED, "Task deleted"))
    }

    /// Flips a task's report flag. The notice title tells whether the task is
    /// now reported or no longer reported.
    pub async fn toggle_task_report(&self, id: &str) -> Result<Outcome<bool>> {
        let Some(reported) = tasks::toggle_task_report(self.store(), id).await? else {
            return Ok(None);
        };
        let title = if reported {
            TITLE_REPORTED
        } else {
            TITLE_UNREPORTED
        };
        Ok(self.done(reported, title, "Task report updated"))
    }

    /// Adds a category from the form.
    pub async fn add_category(&self, form: CategoryForm) -> Result<Outcome<Category>> {
        if is_blank(&form.name) {
            return Ok(None);
        }
        let category = categories::add_category(self.store(), form.name).await?;
        Ok(self.done(category, TITLE_SUCCESS, "Category added"))
    }

    /// Deletes a category. Tasks keep the category name they were logged with.
    pub async fn delete_category(&self, id: &str) -> Result<Outcome<()>> {
        if !categories::delete_category(self.store(), id).await? {
            return Ok(None);
        }
        Ok(self.done((), TITLE_DELETED, "Category deleted"))
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::core::tasks::task_payout_total;
    use crate::test_utils::setup_test_dashboard;

    fn follow_form() -> TaskForm {
        TaskForm {
            category: "Social".to_string(),
            name: "Follow".to_string(),
            earnings: Some(0.05),
            link: "https://x.example/follow".to_string(),
        }
    }

    #[tokio::test]
    async fn test_add_task_shows_success() -> Result<()> {
        let dashboard = setup_test_dashboard().await?;

        let done = dashboard.add_task(follow_form()).await?.unwrap();
        assert_eq!(done.notice.title, TITLE_SUCCESS);
        assert_eq!(done.value.name, "Follow");
        assert_eq!(dashboard.notifier().current(), Some(done.notice));
        Ok(())
    }

    #[tokio::test]
    async fn test_add_task_requires_name_and_category() -> Result<()> {
        let dashboard = setup_test_dashboard().await?;

        let no_name = TaskForm {
            name: "  ".to_string(),
            ..follow_form()
        };
        let no_category = TaskForm {
            category: String::new(),
            ..follow_form()
        };
        assert!(dashboard.add_task(no_name).await?.is_none());
        assert!(dashboard.add_task(no_category).await?.is_none());

        assert!(dashboard.store().snapshot().await.tasks.is_empty());
        assert!(dashboard.notifier().current().is_none());
        Ok(())
    }

    #[tokio::test]
    async fn test_missing_payout_is_zero() -> Result<()> {
        let dashboard = setup_test_dashboard().await?;
        let missing = TaskForm {
            earnings: None,
            ..follow_form()
        };
        let nan = TaskForm {
            earnings: Some(f64::NAN),
            ..follow_form()
        };

        assert_eq!(dashboard.add_task(missing).await?.unwrap().value.earnings, 0.0);
        assert_eq!(dashboard.add_task(nan).await?.unwrap().value.earnings, 0.0);
        Ok(())
    }

    #[tokio::test]
    async fn test_same_task_twice_gives_two_records() -> Result<()> {
        let dashboard = setup_test_dashboard().await?;

        let first = dashboard.add_task(follow_form()).await?.unwrap().value;
        let second = dashboard.add_task(follow_form()).await?.unwrap().value;

        let state = dashboard.store().snapshot().await;
        assert_eq!(state.tasks.len(), 2);
        assert_ne!(first.id, second.id);
        assert!((task_payout_total(&state) - 0.10).abs() < 1e-9);
        Ok(())
    }

    #[tokio::test]
    async fn test_report_toggle_titles() -> Result<()> {
        let dashboard = setup_test_dashboard().await?;
        let task = dashboard.add_task(follow_form()).await?.unwrap().value;

        let on = dashboard.toggle_task_report(&task.id).await?.unwrap();
        assert!(on.value);
        assert_eq!(on.notice.title, TITLE_REPORTED);

        let off = dashboard.toggle_task_report(&task.id).await?.unwrap();
        assert!(!off.value);
        assert_eq!(off.notice.title, TITLE_UNREPORTED);

        assert!(dashboard.toggle_task_report("task-0").await?.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn test_deleted_category_name_stays_on_task() -> Result<()> {
        let dashboard = setup_test_dashboard().await?;
        let category = dashboard
            .add_category(CategoryForm {
                name: "X".to_string(),
            })
            .await?
            .unwrap()
            .value;
        let task = dashboard
            .add_task(TaskForm {
                category: category.name.clone(),
                ..follow_form()
            })
            .await?
            .unwrap()
            .value;

        let deleted = dashboard.delete_category(&category.id).await?.unwrap();
        assert_eq!(deleted.notice.title, TITLE_DELETED);

        let state = dashboard.store().snapshot().await;
        assert!(state.categories.is_empty());
        assert_eq!(tasks::find_task(&state, &task.id).unwrap().category, "X");
        Ok(())
    }

    #[tokio::test]
    async fn test_delete_task_and_unknown_ids() -> Result<()> {
        let dashboard = setup_test_dashboard().await?;
        let task = dashboard.add_task(follow_form()).await?.unwrap().value;

        assert!(dashboard.delete_task(&task.id).await?.is_some());
        assert!(dashboard.delete_task(&task.id).await?.is_none());
        assert!(dashboard.delete_category("cat-0").await?.is_none());
        assert!(
            dashboard
                .add_category(CategoryForm::default())
                .await?
                .is_none()
        );
        Ok(())
    }
}
