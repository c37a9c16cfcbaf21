use axum::http::StatusCode;
use thiserror::Error;

/// Category of an upstream failure, exposed in the debug payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpstreamErrorKind {
    /// Discord answered with a non-success HTTP status.
    Status,
    /// The request never produced a response (connect, timeout, transport).
    Network,
    /// The response body was not the JSON shape the call expects.
    Decode,
}

impl UpstreamErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Status => "status",
            Self::Network => "network",
            Self::Decode => "decode",
        }
    }
}

/// Failure of a single call to the Discord REST API.
///
/// Each sub-fetch (one page, one thread listing, one thread starter) produces its own
/// `Result<T, UpstreamError>`. The fetcher decides whether a failure abandons only that
/// branch or the whole request.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UpstreamError {
    /// Non-success HTTP status returned by Discord.
    ///
    /// When surfaced at response level the status code is propagated to the client.
    #[error("Discord API {status} for {path}: {message}")]
    Status {
        /// HTTP status code returned by Discord
        status: u16,
        /// Request path relative to the API base
        path: String,
        /// Message from Discord's error body, or the status text
        message: String,
    },

    /// Transport level failure before a response was received.
    #[error("Discord API request to {path} failed: {message}")]
    Network {
        /// Request path relative to the API base
        path: String,
        /// Description of the transport failure
        message: String,
    },

    /// Response body could not be interpreted.
    #[error("Discord API returned an unexpected body for {path}: {message}")]
    Decode {
        /// Request path relative to the API base
        path: String,
        /// Description of the decoding failure
        message: String,
    },
}

impl UpstreamError {
    pub fn kind(&self) -> UpstreamErrorKind {
        match self {
            Self::Status { .. } => UpstreamErrorKind::Status,
            Self::Network { .. } => UpstreamErrorKind::Network,
            Self::Decode { .. } => UpstreamErrorKind::Decode,
        }
    }

    /// Upstream HTTP status, if Discord answered at all.
    pub fn upstream_status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Status code used when this failure becomes the response of the gallery endpoint.
    ///
    /// # Returns
    /// - The upstream status for `Status` failures that carry a valid error code
    /// - 500 Internal Server Error otherwise
    pub fn response_status(&self) -> StatusCode {
        self.upstream_status()
            .and_then(|status| StatusCode::from_u16(status).ok())
            .filter(|status| status.is_client_error() || status.is_server_error())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}
