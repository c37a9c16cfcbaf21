//! Scripted `DiscordApi` mocks shared by service and controller tests.

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use serde_json::Value;

use crate::server::{error::upstream::UpstreamError, service::discord::MockDiscordApi};

pub const TOKEN: &str = "test-token";

/// Paths requested from a scripted mock, in call order.
pub type CallLog = Arc<Mutex<Vec<String>>>;

/// Creates a mock answering each path with a scripted response.
///
/// Calls to paths without a script fail the test, as do calls without `TOKEN`.
///
/// # Arguments
/// - `routes` - Path (with query) and the response returned for it
///
/// # Returns
/// - `(MockDiscordApi, CallLog)` - The mock and the log of requested paths
pub fn scripted(routes: Vec<(String, Result<Value, UpstreamError>)>) -> (MockDiscordApi, CallLog) {
    let routes: HashMap<String, Result<Value, UpstreamError>> = routes.into_iter().collect();
    let calls = CallLog::default();
    let log = calls.clone();

    let mut api = MockDiscordApi::new();
    api.expect_get_json().returning(move |token, path| {
        assert_eq!(token, TOKEN, "upstream call without the bot token");
        log.lock().unwrap().push(path.to_string());

        routes
            .get(path)
            .cloned()
            .unwrap_or_else(|| panic!("unexpected upstream call: {path}"))
    });

    (api, calls)
}

/// Creates a mock that fails the test if Discord is contacted at all.
pub fn unreachable() -> MockDiscordApi {
    let mut api = MockDiscordApi::new();
    api.expect_get_json().never();
    api
}

/// Non-success status response for `path`.
pub fn status(path: &str, status: u16, message: &str) -> Result<Value, UpstreamError> {
    Err(UpstreamError::Status {
        status,
        path: path.to_string(),
        message: message.to_string(),
    })
}

/// `404 Not Found` as Discord returns for thread listings of plain text channels.
pub fn not_found(path: &str) -> Result<Value, UpstreamError> {
    status(path, 404, "404: Not Found")
}

pub fn calls(log: &CallLog) -> Vec<String> {
    log.lock().unwrap().clone()
}
