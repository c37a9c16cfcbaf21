//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into appropriate HTTP responses. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors and implements
//! `IntoResponse` for automatic error handling in API endpoints. Every error response
//! carries an `ErrorDto` JSON body.

pub mod config;
pub mod upstream;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{config::ConfigError, upstream::UpstreamError},
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Most variants use `#[from]` for automatic
/// error conversion.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or while resolving per-request settings.
    ///
    /// Always results in 500 Internal Server Error. The message names the missing
    /// variable so the operator can fix the deployment.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Discord API failure that could not be degraded into a partial result.
    ///
    /// Propagates the upstream HTTP status when Discord answered with an error status,
    /// otherwise results in 500 Internal Server Error.
    #[error(transparent)]
    UpstreamErr(#[from] UpstreamError),

    /// HTTP client construction error from reqwest.
    ///
    /// Only occurs during startup.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// Listener or server I/O error.
    ///
    /// Only occurs during startup.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Invalid request error.
    ///
    /// Results in 400 Bad Request with the provided error message.
    ///
    /// # Fields
    /// - Message describing what was invalid about the request
    #[error("{0}")]
    BadRequest(String),
}

/// Converts application errors into HTTP responses.
///
/// Maps each error variant to an appropriate HTTP status code and response body.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest` variant
/// - Upstream status - For `UpstreamErr` carrying a Discord error status
/// - 500 Internal Server Error - For configuration errors, network failures and all other errors
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigErr(err) => {
                tracing::error!("Configuration error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto {
                        error: err.to_string(),
                    }),
                )
                    .into_response()
            }
            Self::UpstreamErr(err) => {
                tracing::warn!("Upstream error: {}", err);
                (
                    err.response_status(),
                    Json(ErrorDto {
                        error: err.to_string(),
                    }),
                )
                    .into_response()
            }
            Self::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto { error: msg })).into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// This struct logs the error message and returns a generic "Internal server error" message
/// to the client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
