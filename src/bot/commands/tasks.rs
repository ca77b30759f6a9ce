//! Task and category Discord commands.
//!
//! `/task` logs, lists, deletes and reports tasks; `/category` manages the
//! category names offered when logging a task.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::{BotData, acknowledge, fit_lines, handlers::autocomplete},
        core::{categories, tasks},
        dashboard::tasks::{CategoryForm, TaskForm},
        errors::{Error, Result},
    };

    /// Parent command for logged tasks.
    #[poise::command(
        slash_command,
        subcommands("task_add", "task_list", "task_delete", "task_report")
    )]
    pub async fn task(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let help_text = "Task commands. Available subcommands:\n\
            `/task add` - Log a new task\n\
            `/task list` - List logged tasks\n\
            `/task delete` - Delete a task\n\
            `/task report` - Flag or unflag a task";

        ctx.say(help_text).await?;
        Ok(())
    }

    /// Logs a new task with its payout.
    #[poise::command(slash_command, rename = "add")]
    pub async fn task_add(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Category of the task"]
        #[autocomplete = "autocomplete::autocomplete_category_name"]
        category: String,
        #[description = "Task name (e.g., 'Twitter follow')"] name: String,
        #[description = "Payout per completion (e.g., 0.05)"] earnings: Option<f64>,
        #[description = "Link to the task"] link: Option<String>,
    ) -> Result<()> {
        let form = TaskForm {
            category,
            name,
            earnings,
            link: link.unwrap_or_default(),
        };
        let outcome = ctx.data().dashboard.add_task(form).await?;
        acknowledge(ctx, &outcome, "A task needs a name and a category.").await
    }

    /// Lists logged tasks, newest first.
    #[poise::command(slash_command, rename = "list")]
    pub async fn task_list(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let state = ctx.data().dashboard.store().snapshot().await;

        if state.tasks.is_empty() {
            ctx.say("📋 No tasks yet. Log one with `/task add`.").await?;
            return Ok(());
        }

        let header = format!(
            "📋 **Tasks** ({} total, {} reported, payouts ${:.2})\n\n",
            state.tasks.len(),
            tasks::reported_tasks(&state).len(),
            tasks::task_payout_total(&state)
        );
        let lines: Vec<String> = state
            .tasks
            .iter()
            .map(|task| {
                let flag = if task.is_reported() { "🚩" } else { "▫️" };
                let mut line = format!(
                    "{flag} **{}** [{}] ${:.2} · {}",
                    task.name,
                    task.category,
                    task.earnings,
                    task.date.format("%Y-%m-%d")
                );
                if !task.link.is_empty() {
                    line.push_str(&format!(" · <{}>", task.link));
                }
                line
            })
            .collect();

        let response = fit_lines(header, &lines);
        ctx.say(response).await?;
        Ok(())
    }

    /// Deletes a task.
    #[poise::command(slash_command, rename = "delete")]
    pub async fn task_delete(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Task to delete"]
        #[autocomplete = "autocomplete::autocomplete_task"]
        task: String,
    ) -> Result<()> {
        let outcome = ctx.data().dashboard.delete_task(&task).await?;
        acknowledge(ctx, &outcome, "No task with that id.").await
    }

    /// Flags a task as reported, or clears the flag.
    #[poise::command(slash_command, rename = "report")]
    pub async fn task_report(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Task to flag or unflag"]
        #[autocomplete = "autocomplete::autocomplete_task"]
        task: String,
    ) -> Result<()> {
        let outcome = ctx.data().dashboard.toggle_task_report(&task).await?;
        acknowledge(ctx, &outcome, "No task with that id.").await
    }

    /// Parent command for task categories.
    #[poise::command(
        slash_command,
        subcommands("category_add", "category_list", "category_delete")
    )]
    pub async fn category(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let help_text = "Category commands. Available subcommands:\n\
            `/category add` - Add a category\n\
            `/category list` - List categories\n\
            `/category delete` - Delete a category (tasks keep their category text)";

        ctx.say(help_text).await?;
        Ok(())
    }

    /// Adds a task category.
    #[poise::command(slash_command, rename = "add")]
    pub async fn category_add(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Category name"] name: String,
    ) -> Result<()> {
        let outcome = ctx
            .data()
            .dashboard
            .add_category(CategoryForm { name })
            .await?;
        acknowledge(ctx, &outcome, "A category needs a name.").await
    }

    /// Lists task categories in creation order.
    #[poise::command(slash_command, rename = "list")]
    pub async fn category_list(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let names: Vec<String> = ctx
            .data()
            .dashboard
            .store()
            .read(|state| {
                categories::category_names(state)
                    .into_iter()
                    .map(str::to_string)
                    .collect()
            })
            .await;

        if names.is_empty() {
            ctx.say("🏷️ No categories yet. Add one with `/category add`.")
                .await?;
            return Ok(());
        }

        let lines: Vec<String> = names.iter().map(|name| format!("• {name}")).collect();
        let response = fit_lines("🏷️ **Categories**\n\n".to_string(), &lines);
        ctx.say(response).await?;
        Ok(())
    }

    /// Deletes a task category.
    #[poise::command(slash_command, rename = "delete")]
    pub async fn category_delete(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Category to delete"]
        #[autocomplete = "autocomplete::autocomplete_category"]
        category: String,
    ) -> Result<()> {
        let outcome = ctx.data().dashboard.delete_category(&category).await?;
        acknowledge(ctx, &outcome, "No category with that id.").await
    }
}

// Re-export all commands
pub use inner::*;
