//! Liveness endpoint.

use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::model::api::HealthDto;

/// OpenAPI tag of the liveness probe
pub static HEALTH_TAG: &str = "health";

/// Liveness probe
#[utoipa::path(
    get,
    path = "/health/",
    tag = HEALTH_TAG,
    responses(
        (status = 200, description = "API is running", body = HealthDto)
    ),
)]
pub async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthDto {
            status: "ok".to_string(),
            message: "Baseball API is running!".to_string(),
        }),
    )
}
