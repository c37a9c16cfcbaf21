use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::model::api::HealthDto;

/// Tag for grouping service endpoints in OpenAPI documentation
pub static HEALTH_TAG: &str = "health";

/// Liveness probe.
///
/// Does not contact Discord and does not depend on configuration.
#[utoipa::path(
    get,
    path = "/api/health",
    tag = HEALTH_TAG,
    responses(
        (status = 200, description = "Service is running", body = HealthDto)
    ),
)]
pub async fn get_health() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthDto {
            status: "ok".to_string(),
        }),
    )
}
