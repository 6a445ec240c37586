use axum::{routing::get, Json, Router};
use bookshelf_core::types::Timestamp;
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Always `"healthy"` while the process is serving.
    pub status: &'static str,
    /// Current server time, RFC 3339.
    pub timestamp: Timestamp,
}

/// GET /health -- liveness only, never touches the book store.
async fn health_check() -> Json<HealthResponse> {
    tracing::debug!("Health check");

    Json(HealthResponse {
        status: "healthy",
        timestamp: chrono::Utc::now(),
    })
}

/// Mount the health check route.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
