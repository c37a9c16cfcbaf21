use std::time::Duration;

use tracing_subscriber::EnvFilter;

use crate::server::{config::Config, error::AppError};

const DEFAULT_LOG_FILTER: &str = "info,discord_gallery=debug";

/// Installs the global tracing subscriber.
///
/// The filter is read from `RUST_LOG`, falling back to `info` for dependencies and
/// `debug` for this crate.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Builds the HTTP client used for all Discord API calls.
///
/// Redirects are disabled: Discord never redirects API calls, and the bot token must not
/// follow a redirect to another host. Every call is bounded by the configured timeout.
///
/// # Arguments
/// - `config` - Application configuration containing the upstream timeout
///
/// # Returns
/// - `Ok(reqwest::Client)` - Client ready to be shared across requests
/// - `Err(AppError::ReqwestErr)` - TLS backend or client initialization failed
pub fn setup_reqwest_client(config: &Config) -> Result<reqwest::Client, AppError> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .timeout(config.http_timeout)
        .connect_timeout(config.http_timeout.min(Duration::from_secs(5)))
        .user_agent(concat!(
            "DiscordBot (",
            env!("CARGO_PKG_NAME"),
            ", ",
            env!("CARGO_PKG_VERSION"),
            ")"
        ))
        .build()?;

    Ok(client)
}
