//! Builder for Discord message JSON.

use serde_json::{json, Value};

use crate::snowflake::next_snowflake;

/// Builder for a message object as returned by `GET /channels/{id}/messages`.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::fixture::MessageBuilder;
///
/// let message = MessageBuilder::new()
///     .id("1200000000000000042")
///     .content("look https://example.com/a.png")
///     .author("42", "painter")
///     .build();
/// ```
pub struct MessageBuilder {
    id: String,
    content: String,
    timestamp: String,
    author: Value,
    attachments: Vec<Value>,
    embeds: Vec<Value>,
}

impl MessageBuilder {
    /// Creates a new MessageBuilder with default values.
    ///
    /// Defaults:
    /// - id: next unique snowflake
    /// - content: empty
    /// - timestamp: `"2024-01-01T00:00:00.000000+00:00"`
    /// - author: user `"1"` named `"artist"` without display name
    /// - no attachments, no embeds
    pub fn new() -> Self {
        Self {
            id: next_snowflake(),
            content: String::new(),
            timestamp: "2024-01-01T00:00:00.000000+00:00".to_string(),
            author: json!({ "id": "1", "username": "artist", "global_name": null }),
            attachments: Vec::new(),
            embeds: Vec::new(),
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.timestamp = timestamp.into();
        self
    }

    /// Sets the author by id and username.
    pub fn author(mut self, id: &str, username: &str) -> Self {
        self.author = json!({ "id": id, "username": username, "global_name": null });
        self
    }

    /// Sets the author display name shown instead of the username.
    pub fn display_name(mut self, global_name: &str) -> Self {
        self.author["global_name"] = json!(global_name);
        self
    }

    pub fn attachment(mut self, attachment: Value) -> Self {
        self.attachments.push(attachment);
        self
    }

    pub fn embed(mut self, embed: Value) -> Self {
        self.embeds.push(embed);
        self
    }

    /// Builds the message JSON.
    ///
    /// # Returns
    /// - `Value` - Message object with the configured fields
    pub fn build(self) -> Value {
        json!({
            "id": self.id,
            "type": 0,
            "content": self.content,
            "timestamp": self.timestamp,
            "author": self.author,
            "attachments": self.attachments,
            "embeds": self.embeds,
        })
    }
}

impl Default for MessageBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Creates a message carrying one image attachment.
///
/// # Arguments
/// - `id` - Message snowflake
/// - `url` - Attachment URL
pub fn with_image(id: &str, url: &str) -> Value {
    MessageBuilder::new()
        .id(id)
        .attachment(super::attachment::image(url))
        .build()
}

/// Creates a message with text only.
pub fn text(id: &str, content: &str) -> Value {
    MessageBuilder::new().id(id).content(content).build()
}
