use serde_json::json;
use test_utils::{
    fixture::{self, MessageBuilder},
    snowflake::snowflake,
};

use crate::server::{
    model::gallery::GalleryRequest,
    service::{
        discord::{
            fetcher::history_path,
            mock::{self, TOKEN},
            MessageFetcher, MockDiscordApi,
        },
        gallery::GalleryService,
    },
};

mod collect;

const CHANNEL: &str = "900000000000000002";

/// Mock answering a history-only request with the given messages.
fn history(messages: Vec<serde_json::Value>) -> MockDiscordApi {
    let (api, _log) = mock::scripted(vec![(
        history_path(CHANNEL, 100, None),
        Ok(serde_json::Value::Array(messages)),
    )]);
    api
}
