//! Webhook error types.

use axum::{Json, http::StatusCode, response::IntoResponse};
use serde_json::json;

/// Errors that end a webhook request before any processing.
#[derive(Debug, thiserror::Error)]
pub enum WebhookError {
    #[error("Invalid request token")]
    InvalidToken,
}

impl IntoResponse for WebhookError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self {
            Self::InvalidToken => StatusCode::FORBIDDEN,
        };

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
