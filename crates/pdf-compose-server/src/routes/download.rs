use axum::{
    extract::{Query, State},
    http::header,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct DownloadQuery {
    pub file: Option<String>,
}

/// GET /download?file=<name>
///
/// Serves a stored PDF as an attachment and deletes it; a second request
/// for the same name gets 404.
pub async fn handle_download(
    State(state): State<AppState>,
    Query(query): Query<DownloadQuery>,
) -> Result<Response, AppError> {
    let name = query
        .file
        .filter(|file| !file.is_empty())
        .ok_or_else(|| AppError::BadRequest("File parameter is missing".to_string()))?;

    let bytes = state
        .store
        .take(&name)
        .await?
        .ok_or_else(|| AppError::NotFound("File not found".to_string()))?;

    info!("Serving {name} ({} bytes)", bytes.len());

    let headers = [
        (header::CONTENT_TYPE, "application/pdf".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{name}\""),
        ),
    ];
    Ok((headers, bytes).into_response())
}
