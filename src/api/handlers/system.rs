//! System health and status handlers.

use axum::Json;
use serde::Serialize;
use tracing::instrument;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
}

/// Health check endpoint
///
/// Returns the current health status of the API
#[instrument]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}
