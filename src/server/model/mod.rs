//! Server-side domain models and parameter types.
//!
//! This module contains the models used by the service layer: lenient views of the
//! Discord payloads, the fetch report produced by the message fetcher, and the gallery
//! items produced by the extractor. Domain models are transformed to DTOs at the
//! controller boundary.

pub mod fetch;
pub mod gallery;
pub mod message;
