use axum::{http::Method, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::gallery::{RawMessagesDto, SingleItemResponseDto},
    server::{
        controller::{
            gallery::{self, GALLERY_TAG},
            health::{self, HEALTH_TAG},
        },
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Discord Gallery",
        description = "Images posted in a Discord channel, as a gallery feed"
    ),
    tags(
        (name = GALLERY_TAG, description = "Gallery items extracted from Discord messages"),
        (name = HEALTH_TAG, description = "Service status")
    ),
    components(schemas(SingleItemResponseDto, RawMessagesDto))
)]
struct ApiDoc;

/// Builds the application router with API documentation, CORS and request tracing.
///
/// The gallery and slideshow pages may be served from another origin, so read-only
/// cross-origin requests are allowed from anywhere.
pub fn router(state: AppState) -> Router {
    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(gallery::get_gallery))
        .routes(routes!(health::get_health))
        .split_for_parts();

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers(Any);

    routes
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
