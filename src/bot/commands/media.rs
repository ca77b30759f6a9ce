//! Shared link, image and note Discord commands.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::{BotData, acknowledge, handlers::autocomplete},
        dashboard::media::SharedItemForm,
        errors::{Error, Result},
        models::SharedItemKind,
    };
    use poise::serenity_prelude as serenity;

    /// Kind picker for `/shared add`
    #[derive(Debug, Clone, Copy, poise::ChoiceParameter)]
    pub enum KindChoice {
        #[name = "link"]
        Link,
        #[name = "image"]
        Image,
        #[name = "note"]
        Note,
    }

    impl From<KindChoice> for SharedItemKind {
        fn from(choice: KindChoice) -> Self {
            match choice {
                KindChoice::Link => Self::Link,
                KindChoice::Image => Self::Image,
                KindChoice::Note => Self::Note,
            }
        }
    }

    /// Items shown per listing
    const LIST_LIMIT: usize = 10;

    /// Parent command for shared items.
    #[poise::command(
        slash_command,
        subcommands("shared_add", "shared_list", "shared_delete")
    )]
    pub async fn shared(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let help_text = "Shared content commands. Available subcommands:\n\
            `/shared add` - Share a link, image URL or note\n\
            `/shared list` - Show shared items\n\
            `/shared delete` - Delete a shared item";

        ctx.say(help_text).await?;
        Ok(())
    }

    /// Shares a link, an image URL or a note.
    #[poise::command(slash_command, rename = "add")]
    pub async fn shared_add(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "What the content is"] kind: KindChoice,
        #[description = "Title"] name: String,
        #[description = "URL for links and images, text for notes"] content: String,
        #[description = "Short description"] description: Option<String>,
    ) -> Result<()> {
        let form = SharedItemForm {
            kind: kind.into(),
            name,
            description: description.unwrap_or_default(),
            content,
        };
        let outcome = ctx.data().dashboard.add_shared_item(form).await?;
        acknowledge(ctx, &outcome, "A shared item needs a name and content.").await
    }

    /// Shows shared items, newest first. Images are rendered as embeds.
    #[poise::command(slash_command, rename = "list")]
    pub async fn shared_list(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let items = ctx.data().dashboard.store().snapshot().await.shared_items;

        if items.is_empty() {
            ctx.say("📎 Nothing shared yet. Share something with `/shared add`.")
                .await?;
            return Ok(());
        }

        let embeds = items.iter().take(LIST_LIMIT).map(|item| {
            let mut embed = serenity::CreateEmbed::default()
                .title(format!("[{}] {}", item.kind.as_str(), item.name))
                .footer(serenity::CreateEmbedFooter::new(
                    item.date.format("%Y-%m-%d %H:%M").to_string(),
                ));
            let description = match item.kind {
                SharedItemKind::Image => item.description.clone(),
                SharedItemKind::Link | SharedItemKind::Note => {
                    if item.description.is_empty() {
                        item.content.clone()
                    } else {
                        format!("{}\n\n{}", item.description, item.content)
                    }
                }
            };
            if !description.is_empty() {
                embed = embed.description(description);
            }
            if item.kind == SharedItemKind::Image {
                embed = embed.image(item.content.clone());
            }
            embed
        });

        let mut reply = poise::CreateReply::default();
        for embed in embeds {
            reply = reply.embed(embed);
        }
        if items.len() > LIST_LIMIT {
            reply = reply.content(format!(
                "📎 Showing {LIST_LIMIT} of {} shared items",
                items.len()
            ));
        }

        ctx.send(reply).await?;
        Ok(())
    }

    /// Deletes a shared item.
    #[poise::command(slash_command, rename = "delete")]
    pub async fn shared_delete(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Item to delete"]
        #[autocomplete = "autocomplete::autocomplete_shared_item"]
        item: String,
    ) -> Result<()> {
        let outcome = ctx.data().dashboard.delete_shared_item(&item).await?;
        acknowledge(ctx, &outcome, "No shared item with that id.").await
    }
}

// Re-export all commands
pub use inner::*;
