//! Trending niche listing routes.

use axum::{Json, Router, response::IntoResponse, routing::get};
use serde_json::json;

use crate::AppState;
use viewmint_core::niche;

/// Creates the trending niche routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/trending-niches", get(list_niches))
}

/// GET `/trending-niches` - List the niche catalog.
async fn list_niches() -> impl IntoResponse {
    Json(json!({ "niches": niche::all() }))
}
