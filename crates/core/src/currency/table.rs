//! Static currency catalog.
//!
//! Rates are expressed relative to USD (1 USD = `rate` units of the
//! currency). The catalog is the single authoritative table; lookups never
//! fail - unknown codes fall back to the base currency's rate and a default
//! glyph.

use std::sync::LazyLock;

use rust_decimal::Decimal;
use serde::Serialize;

/// A single entry in the currency catalog.
#[derive(Debug, Clone, Serialize)]
pub struct CurrencyRecord {
    /// ISO 4217 code, uppercase, unique.
    pub code: &'static str,
    /// Human-readable name.
    pub name: &'static str,
    /// Display glyph, purely presentational.
    pub symbol: &'static str,
    /// Units of this currency per 1 USD.
    pub rate: Decimal,
}

static CATALOG: LazyLock<Vec<CurrencyRecord>> = LazyLock::new(|| {
    vec![
        CurrencyRecord {
            code: "USD",
            name: "US Dollar",
            symbol: "$",
            rate: Decimal::ONE,
        },
        CurrencyRecord {
            code: "EUR",
            name: "Euro",
            symbol: "\u{20ac}",
            rate: Decimal::new(85, 2),
        },
        CurrencyRecord {
            code: "GBP",
            name: "British Pound",
            symbol: "\u{a3}",
            rate: Decimal::new(75, 2),
        },
        CurrencyRecord {
            code: "CAD",
            name: "Canadian Dollar",
            symbol: "C$",
            rate: Decimal::new(125, 2),
        },
        CurrencyRecord {
            code: "AUD",
            name: "Australian Dollar",
            symbol: "A$",
            rate: Decimal::new(135, 2),
        },
        CurrencyRecord {
            code: "JPY",
            name: "Japanese Yen",
            symbol: "\u{a5}",
            rate: Decimal::new(110, 0),
        },
    ]
});

/// Currencies whose display convention omits fractional-unit digits.
///
/// A static configuration set, independent of the rate catalog.
const ZERO_DECIMAL: [&str; 4] = ["JPY", "KRW", "IDR", "VND"];

/// Returns the full catalog in declaration order.
#[must_use]
pub fn all() -> &'static [CurrencyRecord] {
    &CATALOG
}

/// Looks up a catalog entry by code, case-insensitively.
#[must_use]
pub fn get(code: &str) -> Option<&'static CurrencyRecord> {
    CATALOG.iter().find(|c| c.code.eq_ignore_ascii_case(code))
}

/// Returns the rate for `code`, or 1.0 for unknown codes.
///
/// Unknown currencies are treated as base-equivalent rather than failing.
#[must_use]
pub fn rate(code: &str) -> Decimal {
    get(code).map_or(Decimal::ONE, |c| c.rate)
}

/// Returns the display glyph for `code`, or `"$"` for unknown codes.
#[must_use]
pub fn symbol(code: &str) -> &'static str {
    get(code).map_or("$", |c| c.symbol)
}

/// Returns true if `code` is displayed without decimal places.
#[must_use]
pub fn is_zero_decimal(code: &str) -> bool {
    ZERO_DECIMAL.iter().any(|z| z.eq_ignore_ascii_case(code))
}
