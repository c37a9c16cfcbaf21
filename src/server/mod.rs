//! HTTP backend of the gallery.
//!
//! The backend answers one question: which images were posted in a Discord channel.
//! It has no storage of its own; every gallery request reads Discord afresh.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP handlers, query validation and DTO conversion
//! - **Service Layer** (`service/`) - Discord access, message fetching and image extraction
//! - **Model Layer** (`model/`) - Discord message views, fetch reports and gallery items
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Util** (`util/`) - Image classification and identifier parsing
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (configuration, Discord client)
//! - **Startup** (`startup`) - Tracing and HTTP client initialization
//! - **Router** (`router`) - Axum route configuration and API documentation
//!
//! # Request Flow
//!
//! 1. **Router** receives the request and routes it to the gallery controller
//! 2. **Controller** resolves credentials, validates the query and builds a `GalleryRequest`
//! 3. **Fetcher** reads thread posts or channel history from Discord, one call at a time
//! 4. **Extractor** turns messages into items and sorts them newest first
//! 5. **Controller** converts items to DTOs and returns the JSON response

pub mod config;
pub mod controller;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
