//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the Discord REST API. Services are responsible for:
//!
//! - **Fetching**: Reading channel history and forum threads from Discord
//! - **Extraction**: Turning raw messages into gallery items
//! - **Orchestration**: Combining both into the gallery served to clients

pub mod discord;
pub mod extract;
pub mod gallery;
