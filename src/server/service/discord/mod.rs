//! Discord REST API access.
//!
//! `DiscordApi` is the seam between the gallery services and the network: the services
//! only ever ask for the JSON body behind a path, which keeps upstream calls scriptable
//! and countable in tests. `DiscordRestClient` is the production implementation over a
//! shared `reqwest::Client`.

pub mod fetcher;

#[cfg(test)]
pub(crate) mod mock;
#[cfg(test)]
mod test;

use async_trait::async_trait;
use reqwest::header;
use serde::Deserialize;

use crate::server::error::upstream::UpstreamError;

pub use fetcher::MessageFetcher;

/// Read-only access to the Discord REST API.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DiscordApi: Send + Sync {
    /// Performs an authenticated GET and returns the decoded JSON body.
    ///
    /// # Arguments
    /// - `bot_token` - Bot credential, sent as `Authorization: Bot <token>`
    /// - `path` - Path and query relative to the API base, e.g. `/channels/1/messages?limit=100`
    ///
    /// # Returns
    /// - `Ok(Value)` - Decoded body of a successful response
    /// - `Err(UpstreamError)` - Transport failure, non-success status or undecodable body
    async fn get_json(&self, bot_token: &str, path: &str)
        -> Result<serde_json::Value, UpstreamError>;
}

/// Error body returned by Discord alongside non-success statuses.
#[derive(Debug, Deserialize)]
struct DiscordErrorBody {
    message: String,
}

/// `DiscordApi` implementation backed by reqwest.
///
/// Cheap to clone: `reqwest::Client` shares its connection pool through an `Arc`.
#[derive(Clone)]
pub struct DiscordRestClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl DiscordRestClient {
    /// Creates a client for the given API base, e.g. `https://discord.com/api/v10`.
    ///
    /// # Arguments
    /// - `http_client` - Shared HTTP client configured at startup
    /// - `base_url` - API base URL; a trailing slash is ignored
    pub fn new(http_client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Self {
            http_client,
            base_url,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl DiscordApi for DiscordRestClient {
    async fn get_json(
        &self,
        bot_token: &str,
        path: &str,
    ) -> Result<serde_json::Value, UpstreamError> {
        tracing::debug!("GET {}", path);

        let response = self
            .http_client
            .get(self.url(path))
            .header(header::AUTHORIZATION, format!("Bot {}", bot_token))
            .send()
            .await
            .map_err(|e| UpstreamError::Network {
                path: path.to_string(),
                message: if e.is_timeout() {
                    "request timed out".to_string()
                } else {
                    e.to_string()
                },
            })?;

        let status = response.status();

        if !status.is_success() {
            let message = match response.json::<DiscordErrorBody>().await {
                Ok(body) => body.message,
                Err(_) => status
                    .canonical_reason()
                    .unwrap_or("unexpected status")
                    .to_string(),
            };

            return Err(UpstreamError::Status {
                status: status.as_u16(),
                path: path.to_string(),
                message,
            });
        }

        response
            .json::<serde_json::Value>()
            .await
            .map_err(|e| UpstreamError::Decode {
                path: path.to_string(),
                message: e.to_string(),
            })
    }
}
