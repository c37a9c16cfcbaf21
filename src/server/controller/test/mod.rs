use std::{net::SocketAddr, sync::Arc, time::Duration};

use axum::{
    extract::{Query, State},
    http::{header, HeaderMap, StatusCode},
    response::IntoResponse,
};
use serde_json::{json, Value};
use test_utils::{fixture, snowflake::snowflake};

use crate::server::{
    config::Config,
    controller::gallery::{get_gallery, GalleryQuery},
    service::discord::{
        fetcher::history_path,
        mock::{self, TOKEN},
        MockDiscordApi,
    },
    state::AppState,
};

mod get_health;

const CHANNEL: &str = "900000000000000003";

fn config(token: Option<&str>, channel: Option<&str>) -> Config {
    Config {
        app_addr: SocketAddr::from(([127, 0, 0, 1], 0)),
        discord_bot_token: token.map(str::to_string),
        discord_channel_id: channel.map(str::to_string),
        discord_api_base: "http://127.0.0.1:9".to_string(),
        page_delay: Duration::ZERO,
        http_timeout: Duration::from_secs(1),
        scan_threads: false,
    }
}

/// State with both settings configured and Discord replaced by `api`.
fn configured(api: MockDiscordApi) -> AppState {
    AppState::new(config(Some(TOKEN), Some(CHANNEL)), Arc::new(api))
}

/// Mock answering the default history page of `CHANNEL` with `messages`.
fn history(messages: Vec<Value>) -> MockDiscordApi {
    let (api, _log) = mock::scripted(vec![(
        history_path(CHANNEL, 100, None),
        Ok(Value::Array(messages)),
    )]);
    api
}

fn flag() -> Option<String> {
    Some("1".to_string())
}

/// Calls the gallery handler and decodes the JSON response.
async fn call(state: AppState, query: GalleryQuery) -> (StatusCode, HeaderMap, Value) {
    let response = get_gallery(State(state), Query(query)).await.into_response();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    (status, headers, serde_json::from_slice(&bytes).unwrap())
}
