//! Calculation persistence for ViewMint.
//!
//! The store is an injected abstraction: the earnings engine never calls
//! it. A caller runs the engine, then hands the inputs plus the computed
//! figures to [`CalculationStore::save`]. The single shipped implementation
//! is in-memory; a database-backed one can replace it without touching the
//! engine.

pub mod memory;

use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use viewmint_shared::AppResult;

pub use memory::MemStore;

/// A persisted earnings calculation. Immutable once saved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationRecord {
    /// Server-assigned identifier, strictly increasing.
    pub id: i64,
    /// Daily view count supplied by the user.
    pub daily_views: i64,
    /// RPM supplied by the user. Expected in [0.25, 4.00] but not enforced.
    pub rpm: Decimal,
    /// Target currency code.
    pub currency: String,
    /// Computed daily earnings in the target currency.
    pub daily_earnings: Decimal,
    /// Computed monthly earnings.
    pub monthly_earnings: Decimal,
    /// Computed yearly earnings.
    pub yearly_earnings: Decimal,
    /// Creation timestamp supplied by the caller.
    pub created_at: String,
}

/// A calculation as submitted, before an id is assigned.
///
/// Unknown fields are rejected so malformed records fail loudly at the
/// boundary instead of being silently coerced.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NewCalculation {
    /// Daily view count.
    pub daily_views: i64,
    /// RPM.
    pub rpm: Decimal,
    /// Target currency code.
    pub currency: String,
    /// Computed daily earnings.
    pub daily_earnings: Decimal,
    /// Computed monthly earnings.
    pub monthly_earnings: Decimal,
    /// Computed yearly earnings.
    pub yearly_earnings: Decimal,
    /// Creation timestamp.
    pub created_at: String,
}

impl NewCalculation {
    /// Attaches a server-assigned id, producing the persisted record.
    #[must_use]
    pub fn into_record(self, id: i64) -> CalculationRecord {
        CalculationRecord {
            id,
            daily_views: self.daily_views,
            rpm: self.rpm,
            currency: self.currency,
            daily_earnings: self.daily_earnings,
            monthly_earnings: self.monthly_earnings,
            yearly_earnings: self.yearly_earnings,
            created_at: self.created_at,
        }
    }
}

/// Persistence contract for earnings calculations.
///
/// Records are create-and-list only: no update, no delete.
#[async_trait]
pub trait CalculationStore: Send + Sync {
    /// Persists a calculation, assigning the next identifier.
    async fn save(&self, new: NewCalculation) -> AppResult<CalculationRecord>;

    /// Returns all calculations in insertion order.
    async fn list(&self) -> AppResult<Vec<CalculationRecord>>;
}
