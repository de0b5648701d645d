//! Earnings domain types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Projection period for an earnings estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    /// One day.
    Daily,
    /// Thirty days. Fixed simplified calendar, no actual-month-length
    /// adjustment.
    Monthly,
    /// 365 days, no leap-year adjustment.
    Yearly,
}

impl Period {
    /// All periods, in ascending multiplier order.
    pub const ALL: [Self; 3] = [Self::Daily, Self::Monthly, Self::Yearly];

    /// Scalar converting a daily figure to this period.
    #[must_use]
    pub fn multiplier(self) -> Decimal {
        match self {
            Self::Daily => Decimal::ONE,
            Self::Monthly => Decimal::from(30),
            Self::Yearly => Decimal::from(365),
        }
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Daily => write!(f, "daily"),
            Self::Monthly => write!(f, "monthly"),
            Self::Yearly => write!(f, "yearly"),
        }
    }
}

impl std::str::FromStr for Period {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "daily" => Ok(Self::Daily),
            "monthly" => Ok(Self::Monthly),
            "yearly" => Ok(Self::Yearly),
            _ => Err(format!("Unknown period: {s}")),
        }
    }
}

/// Earnings band for one period, in target-currency units, unrounded.
///
/// `min`/`max` are taken at the engine-wide plausible RPM bounds; `current`
/// uses the caller-supplied RPM. When the supplied RPM lies outside the
/// plausible band, `current` may fall outside `[min, max]` - callers must
/// not assume the ordering holds there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EarningsEstimate {
    /// Earnings at the lowest plausible RPM.
    pub min: Decimal,
    /// Earnings at the highest plausible RPM.
    pub max: Decimal,
    /// Earnings at the caller-supplied RPM.
    pub current: Decimal,
}

impl EarningsEstimate {
    /// An all-zero estimate.
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            min: Decimal::ZERO,
            max: Decimal::ZERO,
            current: Decimal::ZERO,
        }
    }
}
