use crate::server::controller::health::get_health;

use super::*;

/// Tests the liveness probe.
///
/// Expected: 200 with `{"status":"ok"}`
#[tokio::test]
async fn reports_ok() {
    let response = get_health().await.into_response();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        serde_json::from_slice::<Value>(&bytes).unwrap(),
        json!({ "status": "ok" })
    );
}
