//! Property-based tests for currency operations.

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::{convert, format::format_amount, table};

/// Strategy to generate positive decimal amounts (0.01 to 1,000,000.00).
fn positive_amount() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to pick a code from the catalog.
fn known_code() -> impl Strategy<Value = &'static str> {
    let codes: Vec<&'static str> = table::all().iter().map(|c| c.code).collect();
    proptest::sample::select(codes)
}

/// Tolerance for round-trip division error (Decimal keeps 28 significant
/// digits, so the residue is far below a millionth of a cent).
fn tolerance() -> Decimal {
    Decimal::new(1, 10)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Converting A -> B -> A recovers the original amount, since
    /// conversion is a pure rate ratio.
    #[test]
    fn prop_convert_round_trip(
        amount in positive_amount(),
        from in known_code(),
        to in known_code(),
    ) {
        let there = convert(amount, from, to);
        let back = convert(there, to, from);
        let diff = (back - amount).abs();
        prop_assert!(
            diff <= tolerance(),
            "round trip {from}->{to}->{from} drifted by {diff}"
        );
    }

    /// Conversion is deterministic for identical inputs.
    #[test]
    fn prop_convert_is_deterministic(
        amount in positive_amount(),
        from in known_code(),
        to in known_code(),
    ) {
        prop_assert_eq!(convert(amount, from, to), convert(amount, from, to));
    }

    /// Unknown target codes behave exactly like the base currency.
    #[test]
    fn prop_unknown_code_is_base_equivalent(amount in positive_amount()) {
        prop_assert_eq!(
            convert(amount, "USD", "ZZZ"),
            convert(amount, "USD", "USD")
        );
    }

    /// Conversion of a positive amount between catalog currencies stays
    /// positive (all rates are positive).
    #[test]
    fn prop_positive_amount_stays_positive(
        amount in positive_amount(),
        from in known_code(),
        to in known_code(),
    ) {
        prop_assert!(convert(amount, from, to) > Decimal::ZERO);
    }

    /// Formatting is deterministic.
    #[test]
    fn prop_format_is_deterministic(
        amount in positive_amount(),
        code in known_code(),
    ) {
        prop_assert_eq!(format_amount(amount, code), format_amount(amount, code));
    }

    /// Zero-decimal formatting never contains a decimal point.
    #[test]
    fn prop_zero_decimal_has_no_point(amount in positive_amount()) {
        let formatted = format_amount(amount, "JPY");
        prop_assert!(!formatted.contains('.'), "got {formatted}");
    }
}
