//! Lenient views of the Discord message objects the gallery reads.
//!
//! Discord omits, nulls or reshapes fields depending on message type and API version.
//! Every field here is optional: a value of the wrong type decodes as absent, a `null`
//! list decodes as empty, and list entries that cannot be read are dropped. Missing data
//! is defaulted later during extraction, never treated as an error.

use serde::{Deserialize, Deserializer};

mod lenient {
    use serde::{de::DeserializeOwned, Deserialize, Deserializer};

    /// Decodes a field, falling back to `None` when it has an unexpected shape.
    pub fn optional<'de, D, T>(d: D) -> Result<Option<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned,
    {
        let value = Option::<serde_json::Value>::deserialize(d)?;
        Ok(value.and_then(|v| serde_json::from_value(v).ok()))
    }

    /// Decodes a list, treating `null` or a non-list as empty and dropping unreadable entries.
    pub fn list<'de, D, T>(d: D) -> Result<Vec<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned,
    {
        let value = Option::<serde_json::Value>::deserialize(d)?;
        let items = match value {
            Some(serde_json::Value::Array(items)) => items,
            _ => return Ok(Vec::new()),
        };

        Ok(items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect())
    }
}

/// A channel or thread message as returned by `GET /channels/{id}/messages`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DiscordMessage {
    #[serde(default, deserialize_with = "lenient::optional")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional")]
    pub content: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional")]
    pub timestamp: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional")]
    pub author: Option<DiscordAuthor>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub attachments: Vec<DiscordAttachment>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub embeds: Vec<DiscordEmbed>,
}

impl DiscordMessage {
    /// Reads a message out of a raw upstream JSON value.
    ///
    /// # Returns
    /// - `Some(DiscordMessage)` - The value is an object carrying a message id
    /// - `None` - The value is not a message the gallery can attribute items to
    pub fn from_value(value: &serde_json::Value) -> Option<Self> {
        if !value.is_object() {
            return None;
        }

        let message = Self::deserialize(value).ok()?;
        message.id.as_ref().filter(|id| !id.is_empty())?;

        Some(message)
    }

    /// Message id; empty only for values not obtained through `from_value`.
    pub fn id(&self) -> &str {
        self.id.as_deref().unwrap_or_default()
    }

    /// Text content, trimmed, or `None` when blank.
    pub fn text(&self) -> Option<&str> {
        non_blank(self.content.as_deref())
    }

    pub fn author_id(&self) -> Option<&str> {
        self.author.as_ref().and_then(|author| author.id.as_deref())
    }

    /// Author display name, falling back to the username, then to `"Unknown"`.
    pub fn author_name(&self) -> String {
        self.author
            .as_ref()
            .and_then(|author| {
                non_blank(author.global_name.as_deref())
                    .or_else(|| non_blank(author.username.as_deref()))
            })
            .unwrap_or("Unknown")
            .to_string()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DiscordAuthor {
    #[serde(default, deserialize_with = "lenient::optional")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional")]
    pub username: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional")]
    pub global_name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DiscordAttachment {
    #[serde(default, deserialize_with = "lenient::optional")]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional")]
    pub filename: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional")]
    pub content_type: Option<String>,
    /// Only populated by Discord for images and videos.
    #[serde(default, deserialize_with = "lenient::optional")]
    pub width: Option<serde_json::Number>,
    #[serde(default, deserialize_with = "lenient::optional")]
    pub height: Option<serde_json::Number>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DiscordEmbed {
    #[serde(default, deserialize_with = "lenient::optional")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional")]
    pub image: Option<EmbedMedia>,
    #[serde(default, deserialize_with = "lenient::optional")]
    pub thumbnail: Option<EmbedMedia>,
}

impl DiscordEmbed {
    /// Candidate image URLs in preference order: image, proxied image, thumbnail,
    /// proxied thumbnail.
    pub fn candidate_urls(&self) -> impl Iterator<Item = &str> {
        [&self.image, &self.thumbnail]
            .into_iter()
            .flatten()
            .flat_map(|media| [media.url.as_deref(), media.proxy_url.as_deref()])
            .flatten()
    }

    pub fn title(&self) -> Option<&str> {
        non_blank(self.title.as_deref())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmbedMedia {
    #[serde(default, deserialize_with = "lenient::optional")]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional")]
    pub proxy_url: Option<String>,
}

/// Body of `GET /channels/{id}/threads/active` and `.../threads/archived/public`.
#[derive(Debug, Clone, Default)]
pub struct ThreadList {
    pub thread_ids: Vec<String>,
}

impl<'de> Deserialize<'de> for ThreadList {
    fn deserialize<D>(d: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Thread {
            #[serde(default, deserialize_with = "lenient::optional")]
            id: Option<String>,
        }

        #[derive(Deserialize)]
        struct Body {
            #[serde(default, deserialize_with = "lenient::list")]
            threads: Vec<Thread>,
        }

        let body = Body::deserialize(d)?;

        Ok(Self {
            thread_ids: body
                .threads
                .into_iter()
                .filter_map(|thread| thread.id)
                .filter(|id| !id.is_empty())
                .collect(),
        })
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn tolerates_missing_and_mistyped_fields() {
        let message = DiscordMessage::from_value(&json!({
            "id": "1100000000000000001",
            "content": null,
            "author": "not an object",
            "attachments": null,
            "embeds": [42, { "title": "ok" }],
        }))
        .unwrap();

        assert_eq!(message.text(), None);
        assert_eq!(message.author_name(), "Unknown");
        assert!(message.attachments.is_empty());
        assert_eq!(message.embeds.len(), 1);
    }

    #[test]
    fn rejects_values_without_an_id() {
        assert!(DiscordMessage::from_value(&json!({ "content": "hi" })).is_none());
        assert!(DiscordMessage::from_value(&json!("message")).is_none());
    }

    #[test]
    fn prefers_display_name_over_username() {
        let message = DiscordMessage::from_value(&json!({
            "id": "1",
            "author": { "id": "7", "username": "painter", "global_name": "The Painter" },
        }))
        .unwrap();
        assert_eq!(message.author_name(), "The Painter");

        let message = DiscordMessage::from_value(&json!({
            "id": "1",
            "author": { "id": "7", "username": "painter", "global_name": null },
        }))
        .unwrap();
        assert_eq!(message.author_name(), "painter");
    }

    #[test]
    fn embed_candidates_follow_preference_order() {
        let embed: DiscordEmbed = serde_json::from_value(json!({
            "image": { "url": "https://a/1", "proxy_url": "https://a/2" },
            "thumbnail": { "url": "https://a/3", "proxy_url": "https://a/4" },
        }))
        .unwrap();

        let urls: Vec<&str> = embed.candidate_urls().collect();
        assert_eq!(urls, ["https://a/1", "https://a/2", "https://a/3", "https://a/4"]);
    }

    #[test]
    fn thread_list_keeps_ids_only() {
        let list: ThreadList = serde_json::from_value(json!({
            "threads": [{ "id": "10" }, { "name": "no id" }, { "id": "11" }],
            "has_more": false,
        }))
        .unwrap();

        assert_eq!(list.thread_ids, ["10", "11"]);
    }
}
