//! Mock YouTube import routes.

use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};
use serde::Deserialize;
use tracing::info;

use crate::AppState;
use crate::error::ApiError;
use viewmint_core::import::import_from_url;
use viewmint_shared::AppError;

/// Creates the import routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/youtube-import", post(youtube_import))
}

/// Import request payload.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportRequest {
    /// Video or channel URL to import.
    pub channel_url: String,
}

/// POST `/youtube-import` - Derive mock stats from a video/channel URL.
async fn youtube_import(
    Json(payload): Json<ImportRequest>,
) -> Result<impl IntoResponse, ApiError> {
    if payload.channel_url.trim().is_empty() {
        return Err(AppError::Validation("channelUrl is required".to_string()).into());
    }

    let preview = import_from_url(&payload.channel_url);
    info!(url = %payload.channel_url, "Import preview built");
    Ok(Json(preview))
}
