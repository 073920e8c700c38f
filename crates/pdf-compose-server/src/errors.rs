use axum::{
    Json,
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use pdf_compose::ComposeError;
use serde_json::json;
use thiserror::Error;

use crate::store::StoreError;

/// Application-level error type.
/// Implements `IntoResponse` so handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Upload error: {0}")]
    Multipart(#[from] MultipartError),

    #[error("Composition error: {0}")]
    Compose(#[from] ComposeError),

    #[error("Storage error: {0}")]
    Store(#[from] StoreError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Multipart(e) => (e.status(), "UPLOAD_ERROR", e.body_text()),
            AppError::Compose(e) => match e {
                ComposeError::EmptyInput
                | ComposeError::ImageDecode { .. }
                | ComposeError::DegenerateImage { .. }
                | ComposeError::Config(_) => (StatusCode::BAD_REQUEST, "INVALID_INPUT", e.to_string()),
                ComposeError::Pdf(_)
                | ComposeError::Io(_)
                | ComposeError::Internal(_)
                | ComposeError::TaskJoin(_) => {
                    tracing::error!("Composition failed: {e}");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "COMPOSE_ERROR",
                        "Error processing request".to_string(),
                    )
                }
            },
            AppError::Store(StoreError::InvalidName) => (
                StatusCode::BAD_REQUEST,
                "INVALID_FILE_NAME",
                "Invalid file name".to_string(),
            ),
            AppError::Store(e) => {
                tracing::error!("Storage error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "STORAGE_ERROR",
                    "A storage error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
