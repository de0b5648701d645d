//! Boundary validation for calculation payloads.
//!
//! The engine itself tolerates out-of-band numeric inputs; hard rejection
//! happens here, at the persistence/HTTP boundary, before anything is
//! computed or stored.

use chrono::DateTime;
use rust_decimal::Decimal;
use thiserror::Error;

/// Validation errors for calculation payloads.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// Daily view count is negative.
    #[error("dailyViews must be non-negative")]
    NegativeViews,

    /// RPM is zero or negative.
    #[error("rpm must be positive")]
    NonPositiveRpm,

    /// Currency code is empty.
    #[error("currency must not be empty")]
    EmptyCurrency,

    /// Creation timestamp is empty.
    #[error("createdAt must not be empty")]
    EmptyCreatedAt,

    /// Creation timestamp is not a valid RFC 3339 timestamp.
    #[error("createdAt must be an RFC 3339 timestamp")]
    InvalidCreatedAt,
}

/// Validates the numeric inputs of an estimate request.
///
/// # Errors
///
/// Returns an error for negative view counts or non-positive RPM.
pub fn validate_estimate_inputs(daily_views: i64, rpm: Decimal) -> Result<(), ValidationError> {
    if daily_views < 0 {
        return Err(ValidationError::NegativeViews);
    }
    if rpm <= Decimal::ZERO {
        return Err(ValidationError::NonPositiveRpm);
    }
    Ok(())
}

/// Validates a full calculation record before it is persisted.
///
/// # Errors
///
/// Returns the first violated rule.
pub fn validate_new_calculation(
    daily_views: i64,
    rpm: Decimal,
    currency: &str,
    created_at: &str,
) -> Result<(), ValidationError> {
    validate_estimate_inputs(daily_views, rpm)?;
    if currency.trim().is_empty() {
        return Err(ValidationError::EmptyCurrency);
    }
    if created_at.trim().is_empty() {
        return Err(ValidationError::EmptyCreatedAt);
    }
    if DateTime::parse_from_rfc3339(created_at).is_err() {
        return Err(ValidationError::InvalidCreatedAt);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_valid_inputs_pass() {
        assert!(
            validate_new_calculation(2000, dec!(1.5), "USD", "2024-01-15T10:30:00Z").is_ok()
        );
        assert!(
            validate_new_calculation(2000, dec!(1.5), "USD", "2024-01-15T10:30:00+09:00").is_ok()
        );
        assert!(validate_estimate_inputs(0, dec!(0.01)).is_ok());
    }

    #[test]
    fn test_negative_views_rejected() {
        assert_eq!(
            validate_estimate_inputs(-1, dec!(1.5)),
            Err(ValidationError::NegativeViews)
        );
    }

    #[test]
    fn test_non_positive_rpm_rejected() {
        assert_eq!(
            validate_estimate_inputs(100, Decimal::ZERO),
            Err(ValidationError::NonPositiveRpm)
        );
        assert_eq!(
            validate_estimate_inputs(100, dec!(-0.25)),
            Err(ValidationError::NonPositiveRpm)
        );
    }

    #[test]
    fn test_empty_fields_rejected() {
        assert_eq!(
            validate_new_calculation(100, dec!(1.5), "  ", "2024-01-15T10:30:00Z"),
            Err(ValidationError::EmptyCurrency)
        );
        assert_eq!(
            validate_new_calculation(100, dec!(1.5), "USD", ""),
            Err(ValidationError::EmptyCreatedAt)
        );
    }

    #[test]
    fn test_non_rfc3339_timestamp_rejected() {
        for bad in ["2024-01-15", "yesterday", "2024-01-15 10:30:00"] {
            assert_eq!(
                validate_new_calculation(100, dec!(1.5), "USD", bad),
                Err(ValidationError::InvalidCreatedAt),
                "{bad}"
            );
        }
    }

    #[test]
    fn test_out_of_band_rpm_is_still_valid() {
        // The plausible band is advisory; only sign is enforced here.
        assert!(validate_estimate_inputs(100, dec!(99.99)).is_ok());
    }
}
