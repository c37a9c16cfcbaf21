use std::time::Duration;

use serde_json::json;
use test_utils::{fixture, snowflake::snowflake};

use crate::server::{
    error::upstream::{UpstreamError, UpstreamErrorKind},
    model::{
        fetch::{FetchStage, MessageSource},
        gallery::GalleryRequest,
    },
    service::discord::{
        fetcher::history_path,
        mock::{self, TOKEN},
        DiscordApi, DiscordRestClient, MessageFetcher,
    },
};


const CHANNEL: &str = "900000000000000001";

fn active(channel: &str) -> String {
    format!("/channels/{channel}/threads/active")
}

fn archived(channel: &str) -> String {
    format!("/channels/{channel}/threads/archived/public")
}

fn starter(thread: &str) -> String {
    format!("/channels/{thread}/messages?limit=1&after=0")
}
