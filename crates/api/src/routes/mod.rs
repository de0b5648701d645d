//! API route definitions.

use axum::Router;

use crate::AppState;

pub mod calculations;
pub mod currencies;
pub mod estimate;
pub mod health;
pub mod import;
pub mod niches;

/// Creates the API router with all routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(currencies::routes())
        .merge(niches::routes())
        .merge(estimate::routes())
        .merge(calculations::routes())
        .merge(import::routes())
}
