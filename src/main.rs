mod model;
mod server;

use std::sync::Arc;

use tokio::net::TcpListener;

use crate::server::{
    config::Config, error::AppError, router, service::discord::DiscordRestClient, startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    if config.discord_bot_token.is_none() {
        tracing::warn!("DISCORD_BOT_TOKEN is not set, gallery requests will fail");
    }
    if config.discord_channel_id.is_none() {
        tracing::warn!("DISCORD_CHANNEL_ID is not set, gallery requests need a channelId");
    }

    let http_client = startup::setup_reqwest_client(&config)?;
    let discord = DiscordRestClient::new(http_client, config.discord_api_base.clone());

    let listener = TcpListener::bind(config.app_addr).await?;
    let app = router::router(AppState::new(config, Arc::new(discord)));

    tracing::info!("Starting server on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
