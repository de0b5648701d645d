//! Currency listing routes.

use axum::{Json, Router, response::IntoResponse, routing::get};
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::json;

use crate::AppState;
use viewmint_core::currency;

/// Creates the currency routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/currencies", get(list_currencies))
}

/// Response for a currency.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyResponse {
    /// Currency code (ISO 4217).
    pub code: &'static str,
    /// Currency name.
    pub name: &'static str,
    /// Currency symbol.
    pub symbol: &'static str,
    /// Units of this currency per 1 USD.
    pub rate: Decimal,
    /// Number of decimal places used when displaying amounts.
    pub decimal_places: u32,
}

/// GET `/currencies` - List the full catalog.
async fn list_currencies() -> impl IntoResponse {
    let response: Vec<CurrencyResponse> = currency::all()
        .iter()
        .map(|c| CurrencyResponse {
            code: c.code,
            name: c.name,
            symbol: c.symbol,
            rate: c.rate,
            decimal_places: if currency::is_zero_decimal(c.code) {
                0
            } else {
                2
            },
        })
        .collect();

    Json(json!({ "currencies": response }))
}
