//! HTTP error mapping.
//!
//! Every failure leaving a handler becomes a well-formed `{"error": ...}`
//! JSON body; nothing propagates as a raw fault.

use assistant_core::AssistantError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tracing::error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("No message provided")]
    EmptyMessage,

    #[error("Assistant encountered an error: {0}")]
    Upstream(String),

    #[error("Internal server error")]
    Internal,
}

impl From<AssistantError> for AppError {
    fn from(err: AssistantError) -> Self {
        match err {
            AssistantError::EmptyMessage => AppError::EmptyMessage,
            other => AppError::Upstream(other.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::EmptyMessage => StatusCode::BAD_REQUEST,
            AppError::Upstream(_) | AppError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            error!("Request failed: {}", self);
        }

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_message_is_a_bad_request() {
        let response = AppError::EmptyMessage.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn upstream_failures_are_server_errors() {
        let err: AppError = AssistantError::LlmError("boom".to_string()).into();
        assert!(err.to_string().starts_with("Assistant encountered an error:"));
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn timeouts_map_to_upstream_errors() {
        let err: AppError = AssistantError::Timeout(30).into();
        assert!(matches!(err, AppError::Upstream(_)));
    }
}
