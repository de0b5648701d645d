//! Calculation save/list routes.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use tracing::info;

use crate::AppState;
use crate::error::ApiError;
use viewmint_core::validation::validate_new_calculation;
use viewmint_shared::AppError;
use viewmint_store::NewCalculation;

/// Creates the calculation routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/earnings-calculation", post(save_calculation))
        .route("/earnings-calculations", get(list_calculations))
}

/// POST `/earnings-calculation` - Validate and persist a calculation.
async fn save_calculation(
    State(state): State<AppState>,
    Json(payload): Json<NewCalculation>,
) -> Result<impl IntoResponse, ApiError> {
    validate_new_calculation(
        payload.daily_views,
        payload.rpm,
        &payload.currency,
        &payload.created_at,
    )
    .map_err(|e| AppError::Validation(e.to_string()))?;

    let record = state.store.save(payload).await?;

    info!(
        id = record.id,
        daily_views = record.daily_views,
        currency = %record.currency,
        "Calculation saved"
    );

    Ok((StatusCode::CREATED, Json(record)))
}

/// GET `/earnings-calculations` - List saved calculations in insertion
/// order.
async fn list_calculations(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let records = state.store.list().await?;
    Ok(Json(records))
}
