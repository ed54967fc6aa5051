#![allow(dead_code)]

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Error bodies are a flat `{"error": "<message>"}` object; the frontend
/// reads `error` directly off the response.
#[derive(Debug, Error)]
pub enum AppError {
    /// Rejected upload or request input. The message is user-facing verbatim.
    #[error("{0}")]
    Validation(String),

    /// The multipart body could not be read.
    #[error("Upload error: {0}")]
    Upload(String),

    #[error("LLM error: {0}")]
    Llm(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Upload(msg) => {
                tracing::warn!("Multipart read failed: {msg}");
                (
                    StatusCode::BAD_REQUEST,
                    "Could not read uploaded form data".to_string(),
                )
            }
            AppError::Llm(msg) => {
                tracing::error!("LLM error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "AI analysis failed".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(json!({ "error": message }));

        (status, body).into_response()
    }
}
