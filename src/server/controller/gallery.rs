use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::IntoParams;

use crate::{
    model::{
        api::ErrorDto,
        gallery::{GalleryItemDto, GalleryResponseDto, RawMessagesDto, SingleItemResponseDto},
    },
    server::{
        error::AppError,
        model::gallery::{GalleryItem, GalleryRequest, MAX_PAGE_SIZE},
        service::{discord::MessageFetcher, gallery::GalleryService},
        state::AppState,
        util::parse::{parse_optional_snowflake, parse_snowflake},
    },
};

/// Tag for grouping gallery endpoints in OpenAPI documentation
pub static GALLERY_TAG: &str = "gallery";

/// Query parameters of the gallery endpoint.
///
/// Everything is read as text: flags are on when set to `1`, and numbers that do not
/// parse fall back to their defaults instead of failing the request.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct GalleryQuery {
    /// `1` to include the diagnostic payload
    pub debug: Option<String>,
    /// History pages to read, clamped to 1..=5 (default 1)
    pub pages: Option<String>,
    /// Messages per page, clamped to 1..=100 (default 100)
    pub limit: Option<String>,
    /// Channel to read instead of the configured default
    pub channel_id: Option<String>,
    /// Only include messages by this user
    pub user_id: Option<String>,
    /// Read history older than this message id
    pub before: Option<String>,
    /// `1` to return only the newest item plus a continuation cursor
    pub one: Option<String>,
    /// `1` to return upstream messages verbatim instead of items
    pub raw: Option<String>,
}

impl GalleryQuery {
    pub fn debug(&self) -> bool {
        flag(self.debug.as_deref())
    }

    pub fn one(&self) -> bool {
        flag(self.one.as_deref())
    }

    pub fn raw(&self) -> bool {
        flag(self.raw.as_deref())
    }

    /// Channel id given with the request, if any.
    pub fn channel_override(&self) -> Option<&str> {
        self.channel_id
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
    }

    /// Validates identifiers and clamps numbers into a `GalleryRequest`.
    ///
    /// # Arguments
    /// - `channel_id` - Channel resolved from the query or the configured default
    ///
    /// # Returns
    /// - `Ok(GalleryRequest)` - Request ready for the fetcher
    /// - `Err(AppError::BadRequest)` - An identifier is not a snowflake
    pub fn to_request(&self, channel_id: &str) -> Result<GalleryRequest, AppError> {
        let request = GalleryRequest::new(parse_snowflake("channelId", channel_id)?)
            .pages(number(self.pages.as_deref()).unwrap_or(1))
            .limit(number(self.limit.as_deref()).unwrap_or(MAX_PAGE_SIZE as i64))
            .user_id(parse_optional_snowflake("userId", self.user_id.as_deref())?)
            .before(parse_optional_snowflake("before", self.before.as_deref())?);

        Ok(request)
    }
}

/// Get the images posted in a Discord channel.
///
/// Reads the channel through the Discord REST API and returns every image found in
/// attachments, embeds and message text, newest first. Forum and media channels are
/// read from the starter post of each thread; other channels from their message
/// history. Sub-fetches that fail are skipped and reported in the debug payload.
///
/// Response shape depends on the flags:
/// - default: `{ items }`
/// - `one=1`: `{ items: [first], nextBefore }`
/// - `raw=1`: `{ messages }` with upstream messages verbatim, no extraction
///
/// Each shape gains a `debug` object when `debug=1` is set.
///
/// # Arguments
/// - `state` - Application state with configuration and Discord access
/// - `query` - Gallery query parameters
///
/// # Returns
/// - `200 OK` - Gallery items, possibly empty
/// - `400 Bad Request` - `channelId`, `userId` or `before` is not a snowflake
/// - `4xx/5xx` - Discord rejected the first history page; its status is propagated
/// - `500 Internal Server Error` - Bot token or channel id not configured, or Discord unreachable
#[utoipa::path(
    get,
    path = "/api/discord-gallery",
    tag = GALLERY_TAG,
    params(GalleryQuery),
    responses(
        (status = 200, description = "Gallery items, newest first", body = GalleryResponseDto),
        (status = 400, description = "Malformed identifier in the query", body = ErrorDto),
        (status = 500, description = "Missing configuration or upstream failure", body = ErrorDto)
    ),
)]
pub async fn get_gallery(
    State(state): State<AppState>,
    Query(query): Query<GalleryQuery>,
) -> Result<Response, AppError> {
    // Configuration is checked before anything touches the network
    let credentials = state.config.credentials(query.channel_override())?;
    let request = query.to_request(&credentials.channel_id)?;

    tracing::debug!(
        "Gallery request: channel={} pages={} limit={} user={:?} before={:?} debug={} one={} raw={}",
        request.channel_id,
        request.pages,
        request.limit,
        request.user_id,
        request.before,
        query.debug(),
        query.one(),
        query.raw()
    );

    let fetcher = MessageFetcher::new(state.discord.as_ref(), &credentials.bot_token)
        .page_delay(state.config.page_delay)
        .scan_threads(state.config.scan_threads);
    let service = GalleryService::new(fetcher);

    if query.raw() {
        let report = service.messages(&request).await?;
        let debug = query
            .debug()
            .then(|| report.debug_dto(&request.channel_id, 0));

        tracing::info!(
            "Returning {} raw messages from channel {}",
            report.messages.len(),
            request.channel_id
        );

        return Ok(no_store(RawMessagesDto {
            messages: report.messages,
            debug,
        }));
    }

    let gallery = service.collect(&request).await?;
    let debug = query
        .debug()
        .then(|| gallery.report.debug_dto(&request.channel_id, gallery.items.len()));

    tracing::info!(
        "Found {} images in {} messages from channel {}",
        gallery.items.len(),
        gallery.report.messages.len(),
        request.channel_id
    );

    if query.one() {
        let first = gallery.items.into_iter().next();
        let next_before = first.as_ref().map(|item| item.id.clone());

        return Ok(no_store(SingleItemResponseDto {
            items: first.map(GalleryItem::into_dto).into_iter().collect(),
            next_before,
            debug,
        }));
    }

    let items: Vec<GalleryItemDto> = gallery
        .items
        .into_iter()
        .map(GalleryItem::into_dto)
        .collect();

    Ok(no_store(GalleryResponseDto { items, debug }))
}

/// Renders a 200 JSON response that clients must not cache.
fn no_store<T: Serialize>(body: T) -> Response {
    (
        StatusCode::OK,
        [(header::CACHE_CONTROL, "no-store")],
        Json(body),
    )
        .into_response()
}

fn flag(value: Option<&str>) -> bool {
    matches!(value.map(str::trim), Some("1") | Some("true"))
}

fn number(value: Option<&str>) -> Option<i64> {
    value.and_then(|value| value.trim().parse::<i64>().ok())
}
