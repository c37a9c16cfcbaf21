use std::{net::SocketAddr, str::FromStr, time::Duration};

use crate::server::error::{config::ConfigError, AppError};

const DISCORD_API_BASE: &str = "https://discord.com/api/v10";
const DEFAULT_APP_ADDR: ([u8; 4], u16) = ([0, 0, 0, 0], 3000);
const DEFAULT_PAGE_DELAY_MS: u64 = 1000;
const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 15;

/// Process-wide settings, loaded once at startup and read-only afterwards.
///
/// The bot token and default channel are kept optional here: the server starts without
/// them and the gallery endpoint reports their absence per request.
#[derive(Debug, Clone)]
pub struct Config {
    pub app_addr: SocketAddr,

    pub discord_bot_token: Option<String>,
    pub discord_channel_id: Option<String>,
    pub discord_api_base: String,

    pub page_delay: Duration,
    pub http_timeout: Duration,
    pub scan_threads: bool,
}

/// Bot credential and channel resolved for one gallery request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscordCredentials {
    pub bot_token: String,
    pub channel_id: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            app_addr: parse_var("APP_ADDR", SocketAddr::from(DEFAULT_APP_ADDR))?,
            discord_bot_token: non_empty_var("DISCORD_BOT_TOKEN"),
            discord_channel_id: non_empty_var("DISCORD_CHANNEL_ID"),
            discord_api_base: non_empty_var("DISCORD_API_BASE")
                .unwrap_or_else(|| DISCORD_API_BASE.to_string()),
            page_delay: Duration::from_millis(parse_var(
                "GALLERY_PAGE_DELAY_MS",
                DEFAULT_PAGE_DELAY_MS,
            )?),
            http_timeout: Duration::from_secs(parse_var(
                "GALLERY_HTTP_TIMEOUT_SECS",
                DEFAULT_HTTP_TIMEOUT_SECS,
            )?),
            scan_threads: parse_var("GALLERY_SCAN_THREADS", true)?,
        })
    }

    /// Resolves the credential and channel for a request.
    ///
    /// A channel id given with the request takes precedence over `DISCORD_CHANNEL_ID`.
    ///
    /// # Arguments
    /// - `channel_override` - Channel id from the request query, if any
    ///
    /// # Returns
    /// - `Ok(DiscordCredentials)` - Token and channel to use
    /// - `Err(ConfigError::MissingEnvVar)` - Token missing, or no channel from either source
    pub fn credentials(
        &self,
        channel_override: Option<&str>,
    ) -> Result<DiscordCredentials, ConfigError> {
        let bot_token = self
            .discord_bot_token
            .clone()
            .ok_or_else(|| ConfigError::MissingEnvVar("DISCORD_BOT_TOKEN".to_string()))?;

        let channel_id = channel_override
            .map(str::to_string)
            .or_else(|| self.discord_channel_id.clone())
            .ok_or_else(|| ConfigError::MissingEnvVar("DISCORD_CHANNEL_ID".to_string()))?;

        Ok(DiscordCredentials {
            bot_token,
            channel_id,
        })
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Parses an optional variable, keeping `default` when it is unset.
fn parse_var<T: FromStr>(name: &str, default: T) -> Result<T, ConfigError> {
    match non_empty_var(name) {
        None => Ok(default),
        Some(value) => value
            .parse::<T>()
            .map_err(|_| ConfigError::InvalidEnvVar {
                name: name.to_string(),
                value,
            }),
    }
}
