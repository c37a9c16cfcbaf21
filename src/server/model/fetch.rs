//! Outcome of retrieving messages for one gallery request.

use std::fmt;

use chrono::Utc;

use crate::{
    model::gallery::{DebugDto, FetchFailureDto},
    server::error::upstream::{UpstreamError, UpstreamErrorKind},
};

/// Where the candidate posts came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageSource {
    /// First message of each forum/media thread under the channel
    Threads,
    /// Flat message history of the channel
    Channel,
}

impl fmt::Display for MessageSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Threads => write!(f, "threads"),
            Self::Channel => write!(f, "channel"),
        }
    }
}

/// Upstream call a recorded failure belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchStage {
    ActiveThreads,
    ArchivedThreads,
    ThreadStarter { thread_id: String },
    ChannelPage { page: usize },
}

impl fmt::Display for FetchStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ActiveThreads => write!(f, "threads/active"),
            Self::ArchivedThreads => write!(f, "threads/archived/public"),
            Self::ThreadStarter { thread_id } => write!(f, "thread:{thread_id}"),
            Self::ChannelPage { page } => write!(f, "page:{page}"),
        }
    }
}

/// A sub-fetch that failed and whose branch was abandoned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchFailure {
    pub stage: FetchStage,
    pub error: UpstreamError,
}

impl FetchFailure {
    pub fn new(stage: FetchStage, error: UpstreamError) -> Self {
        Self { stage, error }
    }

    pub fn kind(&self) -> UpstreamErrorKind {
        self.error.kind()
    }

    /// Converts the failure to its debug payload representation.
    pub fn to_dto(&self) -> FetchFailureDto {
        FetchFailureDto {
            stage: self.stage.to_string(),
            kind: self.error.kind().as_str().to_string(),
            status: self.error.upstream_status(),
            message: self.error.to_string(),
        }
    }
}

/// Messages retrieved for one request along with how they were obtained.
#[derive(Debug, Clone)]
pub struct FetchReport {
    /// Upstream message objects, verbatim
    pub messages: Vec<serde_json::Value>,
    pub source: MessageSource,
    /// Number of flat history pages read successfully
    pub pages_fetched: usize,
    /// Number of threads discovered under the channel
    pub thread_count: usize,
    pub failures: Vec<FetchFailure>,
}

impl FetchReport {
    pub fn new(source: MessageSource) -> Self {
        Self {
            messages: Vec::new(),
            source,
            pages_fetched: 0,
            thread_count: 0,
            failures: Vec::new(),
        }
    }

    /// Records a failed sub-fetch.
    pub fn record(&mut self, stage: FetchStage, error: UpstreamError) {
        tracing::warn!("Skipping {}: {}", stage, error);
        self.failures.push(FetchFailure::new(stage, error));
    }

    /// Builds the diagnostic payload returned with `debug=1`.
    ///
    /// # Arguments
    /// - `channel_id` - Channel the request was served from
    /// - `item_count` - Number of gallery items extracted, 0 for raw responses
    pub fn debug_dto(&self, channel_id: &str, item_count: usize) -> DebugDto {
        DebugDto {
            channel_id: channel_id.to_string(),
            source: self.source.to_string(),
            message_count: self.messages.len(),
            page_count: self.pages_fetched,
            thread_count: self.thread_count,
            item_count,
            failures: self.failures.iter().map(FetchFailure::to_dto).collect(),
            fetched_at: Utc::now(),
        }
    }
}
