//! Retrieves the candidate messages for a gallery request.
//!
//! Calls are strictly sequential. Forum and media channels are read thread-first: the
//! starter message of every active and archived thread is a post. When that yields
//! nothing (plain text channels answer the thread listings with errors or empty lists)
//! the flat channel history is paged instead, with a pause between pages to stay clear
//! of Discord's rate limits.
//!
//! A `before` cursor applies to both paths: thread posts and history messages at or
//! after the cursor are left out, so cursors handed out for thread posts keep paging
//! through the remaining posts.
//!
//! Every sub-fetch produces its own `Result`. Failures of thread listings, thread
//! starters and later history pages are recorded in the `FetchReport` and only abandon
//! that branch. A failure of the first history page fails the whole request.

use std::time::Duration;

use serde_json::Value;

use crate::server::{
    error::upstream::UpstreamError,
    model::{
        fetch::{FetchReport, FetchStage, MessageSource},
        gallery::GalleryRequest,
        message::ThreadList,
    },
    service::discord::DiscordApi,
    util::parse::{compare_snowflakes, is_older_than},
};

pub struct MessageFetcher<'a> {
    api: &'a dyn DiscordApi,
    bot_token: &'a str,
    page_delay: Duration,
    scan_threads: bool,
}

impl<'a> MessageFetcher<'a> {
    /// Creates a fetcher with thread scanning enabled and no delay between pages.
    ///
    /// # Arguments
    /// - `api` - Discord REST API access
    /// - `bot_token` - Bot credential for every upstream call
    ///
    /// # Returns
    /// - `MessageFetcher` - New fetcher instance
    pub fn new(api: &'a dyn DiscordApi, bot_token: &'a str) -> Self {
        Self {
            api,
            bot_token,
            page_delay: Duration::ZERO,
            scan_threads: true,
        }
    }

    /// Sets the pause between consecutive history pages.
    pub fn page_delay(mut self, page_delay: Duration) -> Self {
        self.page_delay = page_delay;
        self
    }

    /// Enables or disables the thread-first path.
    pub fn scan_threads(mut self, scan_threads: bool) -> Self {
        self.scan_threads = scan_threads;
        self
    }

    /// Retrieves the messages for a request.
    ///
    /// The thread path is skipped only when thread scanning is disabled.
    ///
    /// # Arguments
    /// - `request` - Validated gallery request
    ///
    /// # Returns
    /// - `Ok(FetchReport)` - Messages (possibly none) and the failures that were skipped
    /// - `Err(UpstreamError)` - The first page of channel history could not be read
    pub async fn fetch(&self, request: &GalleryRequest) -> Result<FetchReport, UpstreamError> {
        if !self.scan_threads {
            return self.fetch_channel_history(request).await;
        }

        let threads = self.fetch_thread_starters(request).await;
        if !threads.messages.is_empty() {
            return Ok(threads);
        }

        tracing::info!(
            "No thread posts found in channel {}, reading message history",
            request.channel_id
        );

        let mut history = self.fetch_channel_history(request).await?;
        let mut failures = threads.failures;
        failures.append(&mut history.failures);
        history.failures = failures;
        history.thread_count = threads.thread_count;

        Ok(history)
    }

    /// Collects the first message of every thread under the channel.
    ///
    /// Thread ids from the active and archived listings are merged without duplicates,
    /// restricted to threads older than the request's `before` cursor, ordered newest
    /// first and capped at the request's page size. A thread's id is the id of its
    /// starter message.
    async fn fetch_thread_starters(&self, request: &GalleryRequest) -> FetchReport {
        let mut report = FetchReport::new(MessageSource::Threads);
        let mut thread_ids: Vec<String> = Vec::new();

        let listings = [
            (
                FetchStage::ActiveThreads,
                format!("/channels/{}/threads/active", request.channel_id),
            ),
            (
                FetchStage::ArchivedThreads,
                format!("/channels/{}/threads/archived/public", request.channel_id),
            ),
        ];

        for (stage, path) in listings {
            match self.get_thread_list(&path).await {
                Ok(list) => {
                    for thread_id in list.thread_ids {
                        if !thread_ids.contains(&thread_id) {
                            thread_ids.push(thread_id);
                        }
                    }
                }
                Err(err) => report.record(stage, err),
            }
        }

        let before = request.before.as_deref();
        if let Some(before) = before {
            thread_ids.retain(|thread_id| is_older_than(thread_id, before));
        }
        thread_ids.sort_by(|a, b| compare_snowflakes(b, a));
        thread_ids.truncate(request.limit);
        report.thread_count = thread_ids.len();

        for thread_id in thread_ids {
            // after=0 makes Discord return the oldest message, i.e. the post itself
            let path = format!("/channels/{}/messages?limit=1&after=0", thread_id);

            match self.get_message_page(&path).await {
                Ok(page) => report.messages.extend(page.into_iter().take(1).filter(|message| {
                    before.map_or(true, |before| is_message_older(message, before))
                })),
                Err(err) => report.record(FetchStage::ThreadStarter { thread_id }, err),
            }
        }

        tracing::debug!(
            "Read {} thread posts from {} threads in channel {}",
            report.messages.len(),
            report.thread_count,
            request.channel_id
        );

        report
    }

    /// Pages through the channel history, newest first.
    ///
    /// Stops after `request.pages` pages, on a short page, or on a failed page after the
    /// first.
    async fn fetch_channel_history(
        &self,
        request: &GalleryRequest,
    ) -> Result<FetchReport, UpstreamError> {
        let mut report = FetchReport::new(MessageSource::Channel);
        let mut cursor = request.before.clone();

        for page in 1..=request.pages {
            if page > 1 && !self.page_delay.is_zero() {
                tokio::time::sleep(self.page_delay).await;
            }

            let path = history_path(&request.channel_id, request.limit, cursor.as_deref());

            let messages = match self.get_message_page(&path).await {
                Ok(messages) => messages,
                Err(err) if page == 1 => return Err(err),
                Err(err) => {
                    report.record(FetchStage::ChannelPage { page }, err);
                    break;
                }
            };

            report.pages_fetched += 1;

            let received = messages.len();
            cursor = messages
                .last()
                .and_then(|message| message.get("id"))
                .and_then(Value::as_str)
                .map(str::to_string);
            report.messages.extend(messages);

            if received < request.limit || cursor.is_none() {
                break;
            }
        }

        tracing::debug!(
            "Read {} messages over {} pages in channel {}",
            report.messages.len(),
            report.pages_fetched,
            request.channel_id
        );

        Ok(report)
    }

    async fn get_thread_list(&self, path: &str) -> Result<ThreadList, UpstreamError> {
        let body = self.api.get_json(self.bot_token, path).await?;

        serde_json::from_value(body).map_err(|e| UpstreamError::Decode {
            path: path.to_string(),
            message: e.to_string(),
        })
    }

    async fn get_message_page(&self, path: &str) -> Result<Vec<Value>, UpstreamError> {
        match self.api.get_json(self.bot_token, path).await? {
            Value::Array(messages) => Ok(messages),
            other => Err(UpstreamError::Decode {
                path: path.to_string(),
                message: format!("expected a list of messages, got {}", json_type(&other)),
            }),
        }
    }
}

/// Builds `/channels/{id}/messages?limit=N[&before=ID]`.
pub fn history_path(channel_id: &str, limit: usize, before: Option<&str>) -> String {
    match before {
        Some(before) => format!(
            "/channels/{}/messages?limit={}&before={}",
            channel_id, limit, before
        ),
        None => format!("/channels/{}/messages?limit={}", channel_id, limit),
    }
}

fn is_message_older(message: &Value, before: &str) -> bool {
    message
        .get("id")
        .and_then(Value::as_str)
        .is_some_and(|id| is_older_than(id, before))
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}
