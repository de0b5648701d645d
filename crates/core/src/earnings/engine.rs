//! Earnings estimation engine.
//!
//! Pure and deterministic: no I/O, no shared mutable state. Out-of-band
//! inputs (negative view counts, non-positive RPM) are not validated here;
//! rejection belongs to the calling boundary (see `crate::validation`).

use rust_decimal::Decimal;

use crate::currency::{BASE_CURRENCY, convert};

use super::types::{EarningsEstimate, Period};

/// Lowest plausible real-world RPM, regardless of the caller-supplied value.
pub const MIN_RPM: Decimal = Decimal::from_parts(25, 0, 0, false, 2);

/// Highest plausible real-world RPM.
pub const MAX_RPM: Decimal = Decimal::from_parts(400, 0, 0, false, 2);

/// Engine turning daily views and an RPM into an earnings band.
pub struct EarningsEngine;

impl EarningsEngine {
    /// Estimates earnings in `currency` with USD as the base currency.
    #[must_use]
    pub fn estimate(
        daily_views: i64,
        rpm: Decimal,
        period: Period,
        currency: &str,
    ) -> EarningsEstimate {
        Self::estimate_with_base(daily_views, rpm, period, currency, BASE_CURRENCY)
    }

    /// Estimates earnings with an explicit base currency.
    ///
    /// The band is computed in the base currency as
    /// `(views / 1000) * rpm * multiplier`, with `min`/`max` taken at
    /// [`MIN_RPM`]/[`MAX_RPM`], then converted via the currency catalog.
    /// No rounding and no clamping: a supplied RPM outside the plausible
    /// band leaves `current` outside `[min, max]`.
    #[must_use]
    pub fn estimate_with_base(
        daily_views: i64,
        rpm: Decimal,
        period: Period,
        currency: &str,
        base: &str,
    ) -> EarningsEstimate {
        let per_mille = Decimal::from(daily_views) / Decimal::ONE_THOUSAND;
        let multiplier = period.multiplier();

        EarningsEstimate {
            min: convert(per_mille * MIN_RPM * multiplier, base, currency),
            max: convert(per_mille * MAX_RPM * multiplier, base, currency),
            current: convert(per_mille * rpm * multiplier, base, currency),
        }
    }
}
