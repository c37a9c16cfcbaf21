use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// JSON body of every error response.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct HealthDto {
    pub status: String,
}
