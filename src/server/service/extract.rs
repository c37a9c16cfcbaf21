//! Turns Discord messages into gallery items.
//!
//! A message contributes one item per image attachment, one per embed with an image,
//! and at most one for the first image link in its text. Rules are applied independently,
//! so one message can yield several items and nothing is deduplicated.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::server::{
    model::{
        gallery::{GalleryItem, ItemOrigin},
        message::DiscordMessage,
    },
    util::image::{is_embed_image_candidate, is_image_attachment},
};

/// First `http(s)://` URL ending in an image extension, followed by an ASCII word boundary.
static IMAGE_LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)https?://\S+\.(png|jpe?g|gif|webp)(?-u:\b)")
        .expect("image link pattern is valid")
});

/// Extracts every gallery item a single message contributes.
///
/// # Arguments
/// - `message` - Leniently decoded Discord message
///
/// # Returns
/// - `Vec<GalleryItem>` - Attachment items, then embed items, then the text link item
pub fn extract_items(message: &DiscordMessage) -> Vec<GalleryItem> {
    let text = message.text();
    let author = message.author_name();
    let item = |src: &str, title: &str, origin: ItemOrigin| GalleryItem {
        src: src.to_string(),
        title: title.to_string(),
        author: author.clone(),
        id: message.id().to_string(),
        ts: message.timestamp.clone(),
        origin,
    };

    let mut items = Vec::new();

    for attachment in message.attachments.iter().filter(|a| is_image_attachment(a)) {
        let Some(src) = attachment.url.as_deref() else {
            continue;
        };
        let title = text
            .or_else(|| {
                attachment
                    .filename
                    .as_deref()
                    .map(str::trim)
                    .filter(|name| !name.is_empty())
            })
            .unwrap_or(ItemOrigin::Attachment.fallback_title());

        items.push(item(src, title, ItemOrigin::Attachment));
    }

    for embed in &message.embeds {
        let Some(src) = embed.candidate_urls().find(|url| is_embed_image_candidate(url)) else {
            continue;
        };
        let title = text
            .or_else(|| embed.title())
            .unwrap_or(ItemOrigin::Embed.fallback_title());

        items.push(item(src, title, ItemOrigin::Embed));
    }

    if let Some((src, title)) = text.and_then(image_link) {
        let title = if title.is_empty() {
            ItemOrigin::Link.fallback_title()
        } else {
            title.as_str()
        };

        items.push(item(src, title, ItemOrigin::Link));
    }

    items
}

/// Finds the first image link in a text and returns it with the remaining text.
///
/// # Returns
/// - `Some((link, rest))` - The matched URL and the text without it, trimmed
/// - `None` - The text holds no image link
pub fn image_link(text: &str) -> Option<(&str, String)> {
    let link = IMAGE_LINK.find(text)?;
    let rest = format!("{}{}", &text[..link.start()], &text[link.end()..]);

    Some((link.as_str(), rest.trim().to_string()))
}

/// Extracts the items of a batch of raw upstream messages, newest first.
///
/// Values that are not readable messages are skipped.
pub fn aggregate(messages: &[Value]) -> Vec<GalleryItem> {
    let mut items: Vec<GalleryItem> = messages
        .iter()
        .filter_map(|value| {
            let message = DiscordMessage::from_value(value);
            if message.is_none() {
                tracing::warn!("Skipping unreadable message: {}", value);
            }
            message
        })
        .flat_map(|message| extract_items(&message))
        .collect();

    let count = |origin: ItemOrigin| items.iter().filter(|item| item.origin == origin).count();
    tracing::debug!(
        "Extracted {} items from {} messages ({} attachments, {} embeds, {} links)",
        items.len(),
        messages.len(),
        count(ItemOrigin::Attachment),
        count(ItemOrigin::Embed),
        count(ItemOrigin::Link)
    );

    sort_newest_first(&mut items);
    items
}

/// Sorts items by descending message id.
///
/// Ids are compared as strings. Snowflakes of one channel have the same width, which
/// makes this match creation order; ids of different widths do not compare numerically.
/// The sort is stable, so items of one message keep their extraction order.
pub fn sort_newest_first(items: &mut [GalleryItem]) {
    items.sort_by(|a, b| b.id.cmp(&a.id));
}
