//! Currency conversion.
//!
//! Conversion is a pure rate ratio through the base currency. No rounding
//! is applied here; rounding is solely a display concern (see `format`).

use rust_decimal::Decimal;

use super::table;

/// Converts `amount` from one currency to another.
///
/// Computed as `(amount / rate(from)) * rate(to)`. Unknown codes resolve
/// to rate 1.0, so conversion never fails.
#[must_use]
pub fn convert(amount: Decimal, from: &str, to: &str) -> Decimal {
    (amount / table::rate(from)) * table::rate(to)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_identity_conversion() {
        assert_eq!(convert(dec!(100), "USD", "USD"), dec!(100));
    }

    #[test]
    fn test_usd_to_eur() {
        // 100 USD * 0.85 = 85 EUR
        assert_eq!(convert(dec!(100), "USD", "EUR"), dec!(85));
    }

    #[test]
    fn test_eur_to_usd() {
        // 85 EUR / 0.85 = 100 USD
        assert_eq!(convert(dec!(85), "EUR", "USD"), dec!(100));
    }

    #[test]
    fn test_cross_rate() {
        // 100 EUR -> USD -> JPY: (100 / 0.85) * 110
        let expected = (dec!(100) / dec!(0.85)) * dec!(110);
        assert_eq!(convert(dec!(100), "EUR", "JPY"), expected);
    }

    #[test]
    fn test_unknown_code_is_identity() {
        assert_eq!(convert(dec!(42.5), "USD", "ZZZ"), dec!(42.5));
        assert_eq!(convert(dec!(42.5), "ZZZ", "USD"), dec!(42.5));
    }

    #[test]
    fn test_zero_amount() {
        assert_eq!(convert(Decimal::ZERO, "USD", "JPY"), Decimal::ZERO);
    }
}
