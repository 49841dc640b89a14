use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// Central error type for the HTTP layer
#[derive(Debug, Error)]
pub enum AppError {
    /// Unknown `numberid`; rendered as `{"error": "Invalid type"}`.
    #[error("Invalid type")]
    InvalidType,

    #[error("Not found: {0}")]
    NotFound(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::InvalidType => (
                StatusCode::BAD_REQUEST,
                json!({ "error": "Invalid type" }),
            ),
            AppError::NotFound(msg) => (
                StatusCode::NOT_FOUND,
                json!({
                    "error": "NOT_FOUND",
                    "message": msg
                }),
            ),
        };

        (status, Json(body)).into_response()
    }
}
