//! Property-based tests for the earnings engine.

use proptest::prelude::*;
use rust_decimal::Decimal;

use crate::currency::table;

use super::engine::{EarningsEngine, MAX_RPM, MIN_RPM};
use super::types::Period;

/// Strategy for non-negative daily view counts.
fn daily_views() -> impl Strategy<Value = i64> {
    0i64..100_000_000
}

/// Strategy for RPM values inside the plausible band, at the 0.05 step
/// granularity the UI control uses.
fn rpm_in_band() -> impl Strategy<Value = Decimal> {
    (5i64..=80).prop_map(|steps| Decimal::new(steps * 5, 2))
}

/// Strategy for arbitrary positive RPM values, including out-of-band ones.
fn any_rpm() -> impl Strategy<Value = Decimal> {
    (1i64..10_000).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to pick a period.
fn period() -> impl Strategy<Value = Period> {
    proptest::sample::select(Period::ALL.to_vec())
}

/// Strategy to pick a code from the catalog.
fn known_code() -> impl Strategy<Value = &'static str> {
    let codes: Vec<&'static str> = table::all().iter().map(|c| c.code).collect();
    proptest::sample::select(codes)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// In USD, `current` equals the closed-form formula exactly.
    #[test]
    fn prop_usd_current_matches_formula(
        views in daily_views(),
        rpm in any_rpm(),
        period in period(),
    ) {
        let estimate = EarningsEngine::estimate(views, rpm, period, "USD");
        let expected = Decimal::from(views) / Decimal::ONE_THOUSAND
            * rpm
            * period.multiplier();
        prop_assert_eq!(estimate.current, expected);
    }

    /// For any RPM inside [MIN_RPM, MAX_RPM], the band ordering holds for
    /// every period and every catalog currency.
    #[test]
    fn prop_band_ordering_holds_in_band(
        views in daily_views(),
        rpm in rpm_in_band(),
        period in period(),
        code in known_code(),
    ) {
        prop_assume!(rpm >= MIN_RPM && rpm <= MAX_RPM);
        let estimate = EarningsEngine::estimate(views, rpm, period, code);
        prop_assert!(estimate.min <= estimate.current);
        prop_assert!(estimate.current <= estimate.max);
    }

    /// Zero views yields the zero triple for every period and currency.
    #[test]
    fn prop_zero_views_zero_triple(
        rpm in any_rpm(),
        period in period(),
        code in known_code(),
    ) {
        let estimate = EarningsEngine::estimate(0, rpm, period, code);
        prop_assert_eq!(estimate.min, Decimal::ZERO);
        prop_assert_eq!(estimate.max, Decimal::ZERO);
        prop_assert_eq!(estimate.current, Decimal::ZERO);
    }

    /// The engine is deterministic for identical inputs.
    #[test]
    fn prop_estimate_is_deterministic(
        views in daily_views(),
        rpm in any_rpm(),
        period in period(),
        code in known_code(),
    ) {
        let first = EarningsEngine::estimate(views, rpm, period, code);
        let second = EarningsEngine::estimate(views, rpm, period, code);
        prop_assert_eq!(first, second);
    }

    /// Period scaling: the monthly and yearly figures are exact multiples
    /// of the daily figure.
    #[test]
    fn prop_period_scaling(
        views in daily_views(),
        rpm in any_rpm(),
        code in known_code(),
    ) {
        let daily = EarningsEngine::estimate(views, rpm, Period::Daily, code);
        let monthly = EarningsEngine::estimate(views, rpm, Period::Monthly, code);
        let yearly = EarningsEngine::estimate(views, rpm, Period::Yearly, code);
        prop_assert_eq!(monthly.current, daily.current * Decimal::from(30));
        prop_assert_eq!(yearly.current, daily.current * Decimal::from(365));
    }
}
