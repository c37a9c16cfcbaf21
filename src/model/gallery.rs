//! Wire format of the gallery endpoint.
//!
//! These DTOs are what the gallery grid and slideshow pages consume. Field names are
//! camelCase on the wire.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One image shown in the gallery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GalleryItemDto {
    /// Absolute URL of the image
    pub src: String,
    /// Caption derived from the message text, filename or embed title
    pub title: String,
    /// Display name of the message author
    pub author: String,
    /// Snowflake of the source message
    pub id: String,
    /// Timestamp of the source message as sent by Discord
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ts: Option<String>,
}

/// Default response: the extracted items, newest first.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct GalleryResponseDto {
    pub items: Vec<GalleryItemDto>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debug: Option<DebugDto>,
}

/// Response for `one=1`: at most one item plus the cursor to continue from.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SingleItemResponseDto {
    pub items: Vec<GalleryItemDto>,
    /// Message id to pass back as `before` for the next item, `null` when nothing matched
    pub next_before: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debug: Option<DebugDto>,
}

/// Response for `raw=1`: upstream messages exactly as Discord returned them.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RawMessagesDto {
    #[schema(value_type = Vec<Object>)]
    pub messages: Vec<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debug: Option<DebugDto>,
}

/// Diagnostic payload included with `debug=1`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DebugDto {
    pub channel_id: String,
    /// `threads` when posts came from forum threads, `channel` for flat history
    pub source: String,
    pub message_count: usize,
    pub page_count: usize,
    pub thread_count: usize,
    pub item_count: usize,
    pub failures: Vec<FetchFailureDto>,
    pub fetched_at: DateTime<Utc>,
}

/// A sub-fetch that failed and was skipped.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FetchFailureDto {
    pub stage: String,
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    pub message: String,
}
