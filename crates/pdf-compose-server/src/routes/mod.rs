pub mod convert;
pub mod download;
pub mod health;
pub mod pages;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let max_upload_bytes = state.config.max_upload_bytes;

    Router::new()
        .route("/", get(pages::index_handler))
        .route("/result.html", get(pages::result_handler))
        .route("/health", get(health::health_handler))
        .route("/convert", post(convert::handle_convert))
        .route("/download", get(download::handle_download))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .with_state(state)
}
