//! HTTP API layer with Axum routes.
//!
//! This crate provides:
//! - REST API routes
//! - Application state
//! - Error-to-response mapping

pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use viewmint_store::CalculationStore;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Calculation store.
    pub store: Arc<dyn CalculationStore>,
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
