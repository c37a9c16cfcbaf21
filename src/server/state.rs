//! Application state shared across all request handlers.
//!
//! The state is built once in `main` and cloned into every handler through Axum's
//! state extraction. It holds only read-only resources: each gallery request builds its
//! own fetcher and item list, so nothing here is mutated after startup.

use std::sync::Arc;

use crate::server::{config::Config, service::discord::DiscordApi};

/// Application state containing shared resources and dependencies.
///
/// Both fields are reference-counted, so cloning per request is cheap.
#[derive(Clone)]
pub struct AppState {
    /// Configuration loaded at process start.
    pub config: Arc<Config>,

    /// Discord REST API access.
    ///
    /// `DiscordRestClient` in production; tests substitute a scripted mock.
    pub discord: Arc<dyn DiscordApi>,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `config` - Application configuration
    /// - `discord` - Discord REST API implementation
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(config: Config, discord: Arc<dyn DiscordApi>) -> Self {
        Self {
            config: Arc::new(config),
            discord,
        }
    }
}
