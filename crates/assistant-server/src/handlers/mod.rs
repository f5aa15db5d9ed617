//! HTTP route handlers for the assistant server.

pub mod chat;
pub mod preferences;
pub mod status;

use axum::http::StatusCode;
use axum::Json;
use serde_json::json;

use crate::dto::Health;

/// Health check endpoint.
pub async fn health() -> Json<Health> {
    Json(Health {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// JSON 404 for paths that are neither routed nor backed by a static file.
pub async fn not_found() -> (StatusCode, Json<serde_json::Value>) {
    (StatusCode::NOT_FOUND, Json(json!({ "error": "Not found" })))
}
