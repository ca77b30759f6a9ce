//! Autocomplete handlers for Discord slash command parameters.
//!
//! Record pickers show a readable label and submit the record id, so commands
//! receive ids while users choose by name.

use crate::{
    bot::BotData,
    core::{devices, earnings},
    errors::Error,
};
use poise::serenity_prelude as serenity;

/// Discord accepts at most 25 suggestions
const MAX_SUGGESTIONS: usize = 25;
/// Discord caps a choice label at 100 characters
const MAX_LABEL_CHARS: usize = 100;

fn matching_choices<'a>(
    candidates: impl Iterator<Item = (String, &'a str)>,
    partial: &str,
) -> Vec<serenity::AutocompleteChoice> {
    let partial_lower = partial.to_lowercase();
    candidates
        .filter(|(label, _)| label.to_lowercase().contains(&partial_lower))
        .take(MAX_SUGGESTIONS)
        .map(|(label, id)| {
            let label: String = label.chars().take(MAX_LABEL_CHARS).collect();
            serenity::AutocompleteChoice::new(label, id.to_string())
        })
        .collect()
}

/// Suggests category names for a new task.
pub async fn autocomplete_category_name(
    ctx: poise::Context<'_, BotData, Error>,
    partial: &str,
) -> Vec<String> {
    let partial_lower = partial.to_lowercase();
    let mut names: Vec<String> = ctx
        .data()
        .dashboard
        .store()
        .read(|state| {
            state
                .categories
                .iter()
                .map(|c| c.name.clone())
                .filter(|name| name.to_lowercase().contains(&partial_lower))
                .collect()
        })
        .await;

    names.sort();
    names.dedup();
    names.truncate(MAX_SUGGESTIONS);
    names
}

/// Suggests categories by name, submitting the category id.
pub async fn autocomplete_category(
    ctx: poise::Context<'_, BotData, Error>,
    partial: &str,
) -> Vec<serenity::AutocompleteChoice> {
    ctx.data()
        .dashboard
        .store()
        .read(|state| {
            matching_choices(
                state
                    .categories
                    .iter()
                    .map(|c| (c.name.clone(), c.id.as_str())),
                partial,
            )
        })
        .await
}

/// Suggests tasks, submitting the task id.
pub async fn autocomplete_task(
    ctx: poise::Context<'_, BotData, Error>,
    partial: &str,
) -> Vec<serenity::AutocompleteChoice> {
    ctx.data()
        .dashboard
        .store()
        .read(|state| {
            matching_choices(
                state.tasks.iter().map(|t| {
                    let flag = if t.is_reported() { "🚩 " } else { "" };
                    (format!("{flag}{} ({})", t.name, t.category), t.id.as_str())
                }),
                partial,
            )
        })
        .await
}

/// Suggests devices, submitting the device id.
pub async fn autocomplete_device(
    ctx: poise::Context<'_, BotData, Error>,
    partial: &str,
) -> Vec<serenity::AutocompleteChoice> {
    ctx.data()
        .dashboard
        .store()
        .read(|state| {
            matching_choices(
                state.devices.iter().map(|d| (d.name.clone(), d.id.as_str())),
                partial,
            )
        })
        .await
}

/// Suggests accounts labelled with their device, submitting the account id.
pub async fn autocomplete_account(
    ctx: poise::Context<'_, BotData, Error>,
    partial: &str,
) -> Vec<serenity::AutocompleteChoice> {
    ctx.data()
        .dashboard
        .store()
        .read(|state| {
            matching_choices(
                state.accounts.iter().map(|a| {
                    let device = devices::device_label(state, &a.device_id);
                    (format!("{} @ {device}", a.name), a.id.as_str())
                }),
                partial,
            )
        })
        .await
}

/// Suggests earning records, submitting the record id.
pub async fn autocomplete_earning(
    ctx: poise::Context<'_, BotData, Error>,
    partial: &str,
) -> Vec<serenity::AutocompleteChoice> {
    ctx.data()
        .dashboard
        .store()
        .read(|state| {
            matching_choices(
                earnings::earning_rows(state).into_iter().map(|row| {
                    (
                        format!(
                            "{:.2} · {} · {} · {}",
                            row.record.amount,
                            row.account_label,
                            row.device_label,
                            row.record.date.format("%Y-%m-%d")
                        ),
                        row.record.id.as_str(),
                    )
                }),
                partial,
            )
        })
        .await
}

/// Suggests shared items, submitting the item id.
pub async fn autocomplete_shared_item(
    ctx: poise::Context<'_, BotData, Error>,
    partial: &str,
) -> Vec<serenity::AutocompleteChoice> {
    ctx.data()
        .dashboard
        .store()
        .read(|state| {
            matching_choices(
                state
                    .shared_items
                    .iter()
                    .map(|s| (format!("[{}] {}", s.kind.as_str(), s.name), s.id.as_str())),
                partial,
            )
        })
        .await
}

