//! Informational root listing and the JSON fallback for unknown routes.

use std::collections::BTreeMap;

use axum::http::{StatusCode, Uri};
use axum::response::IntoResponse;
use axum::{routing::get, Json, Router};
use serde::Serialize;
use serde_json::json;

use crate::state::AppState;

/// Endpoints advertised by `GET /`.
const ENDPOINTS: &[(&str, &str)] = &[
    ("GET /books", "List all books"),
    ("GET /books/<id>", "Get a specific book"),
    ("POST /books", "Add a new book"),
    ("PUT /books/<id>", "Update a book"),
    ("DELETE /books/<id>", "Delete a book"),
    ("GET /health", "Health check"),
];

/// Capability listing payload.
#[derive(Serialize)]
pub struct IndexResponse {
    pub message: &'static str,
    pub version: &'static str,
    pub endpoints: BTreeMap<&'static str, &'static str>,
}

/// GET / -- static description of the API.
async fn index() -> Json<IndexResponse> {
    tracing::debug!("Index accessed");

    Json(IndexResponse {
        message: "Welcome to the Books API",
        version: "1.0",
        endpoints: ENDPOINTS.iter().copied().collect(),
    })
}

/// Fallback for any route that matched nothing.
pub async fn not_found(uri: Uri) -> impl IntoResponse {
    tracing::debug!(%uri, "No route matched");
    (StatusCode::NOT_FOUND, Json(json!({ "error": "Not found" })))
}

/// Mount the root listing.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(index))
}
