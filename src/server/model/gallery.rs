//! Gallery domain models and request parameters.

use crate::model::gallery::GalleryItemDto;

/// Upper bound for the `pages` query parameter.
pub const MAX_PAGES: usize = 5;
/// Upper bound for the `limit` query parameter, also Discord's page size cap.
pub const MAX_PAGE_SIZE: usize = 100;

/// Which extraction rule produced an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemOrigin {
    Attachment,
    Embed,
    Link,
}

impl ItemOrigin {
    /// Title used when neither the message text nor the attachment/embed supplies one.
    pub fn fallback_title(&self) -> &'static str {
        match self {
            Self::Attachment => "Attachment",
            Self::Embed => "Embed",
            Self::Link => "Link",
        }
    }
}

/// One image found in a Discord message.
///
/// Built fresh for every request and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryItem {
    /// Absolute image URL.
    pub src: String,
    /// Caption, never empty.
    pub title: String,
    /// Author display name, `"Unknown"` when Discord did not say.
    pub author: String,
    /// Snowflake of the source message, also the sort key.
    pub id: String,
    /// Source message timestamp, informational only.
    pub ts: Option<String>,
    pub origin: ItemOrigin,
}

impl GalleryItem {
    /// Converts domain model to DTO for API responses.
    pub fn into_dto(self) -> GalleryItemDto {
        GalleryItemDto {
            src: self.src,
            title: self.title,
            author: self.author,
            id: self.id,
            ts: self.ts,
        }
    }
}

/// Validated parameters of one gallery request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryRequest {
    /// Channel to read, already resolved against the configured default.
    pub channel_id: String,
    /// Only keep messages sent by this user.
    pub user_id: Option<String>,
    /// Read channel history older than this message.
    pub before: Option<String>,
    /// Number of history pages to read, 1..=`MAX_PAGES`.
    pub pages: usize,
    /// Messages per page, 1..=`MAX_PAGE_SIZE`.
    pub limit: usize,
}

impl GalleryRequest {
    /// Creates a request for the most recent page of a channel.
    pub fn new(channel_id: impl Into<String>) -> Self {
        Self {
            channel_id: channel_id.into(),
            user_id: None,
            before: None,
            pages: 1,
            limit: MAX_PAGE_SIZE,
        }
    }

    /// Sets the page count, clamped to 1..=`MAX_PAGES`.
    pub fn pages(mut self, pages: i64) -> Self {
        self.pages = pages.clamp(1, MAX_PAGES as i64) as usize;
        self
    }

    /// Sets the page size, clamped to 1..=`MAX_PAGE_SIZE`.
    pub fn limit(mut self, limit: i64) -> Self {
        self.limit = limit.clamp(1, MAX_PAGE_SIZE as i64) as usize;
        self
    }

    pub fn user_id(mut self, user_id: Option<String>) -> Self {
        self.user_id = user_id;
        self
    }

    pub fn before(mut self, before: Option<String>) -> Self {
        self.before = before;
        self
    }
}
