//! Earnings estimate routes.

use axum::{Json, Router, response::IntoResponse, routing::post};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::AppState;
use crate::error::ApiError;
use viewmint_core::currency::{self, format_amount};
use viewmint_core::earnings::{EarningsEngine, EarningsEstimate, Period};
use viewmint_core::validation::validate_estimate_inputs;
use viewmint_shared::AppError;

/// Creates the estimate routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/estimate", post(estimate))
}

/// Estimate request payload.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateRequest {
    /// Daily view count, must be non-negative.
    pub daily_views: i64,
    /// RPM, must be positive. The UI constrains it to [0.25, 4.00] in
    /// 0.05 steps, but any positive value is accepted here.
    pub rpm: Decimal,
    /// Target currency code. Unknown codes fall back to USD semantics.
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_currency() -> String {
    currency::BASE_CURRENCY.to_string()
}

/// One period's earnings band, with the current figure pre-formatted for
/// display.
#[derive(Debug, Serialize)]
pub struct EstimateBand {
    /// Earnings at the lowest plausible RPM.
    pub min: Decimal,
    /// Earnings at the highest plausible RPM.
    pub max: Decimal,
    /// Earnings at the requested RPM.
    pub current: Decimal,
    /// `current` rendered per the currency's display rule.
    pub formatted: String,
}

impl EstimateBand {
    fn new(estimate: EarningsEstimate, code: &str) -> Self {
        Self {
            min: estimate.min,
            max: estimate.max,
            current: estimate.current,
            formatted: format_amount(estimate.current, code),
        }
    }
}

/// Estimate response: one band per period.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateResponse {
    /// Echoed currency code.
    pub currency: String,
    /// Display glyph for the currency.
    pub symbol: &'static str,
    /// Daily band.
    pub daily: EstimateBand,
    /// Monthly band.
    pub monthly: EstimateBand,
    /// Yearly band.
    pub yearly: EstimateBand,
}

/// POST `/estimate` - Compute the earnings band for all three periods.
async fn estimate(
    Json(payload): Json<EstimateRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_estimate_inputs(payload.daily_views, payload.rpm)
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let code = payload.currency.as_str();
    let band = |period: Period| {
        EstimateBand::new(
            EarningsEngine::estimate(payload.daily_views, payload.rpm, period, code),
            code,
        )
    };

    let daily = band(Period::Daily);
    let monthly = band(Period::Monthly);
    let yearly = band(Period::Yearly);
    let symbol = currency::symbol(code);

    info!(
        daily_views = payload.daily_views,
        rpm = %payload.rpm,
        currency = code,
        "Estimate computed"
    );

    Ok(Json(EstimateResponse {
        currency: payload.currency,
        symbol,
        daily,
        monthly,
        yearly,
    }))
}
