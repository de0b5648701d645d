//! In-memory calculation store.

use std::sync::Mutex;

use async_trait::async_trait;
use viewmint_shared::{AppError, AppResult};

use crate::{CalculationRecord, CalculationStore, NewCalculation};

/// In-memory [`CalculationStore`] backed by a `Vec` plus a monotonic id
/// counter.
///
/// A single mutual-exclusion region covers the read-counter, increment,
/// append sequence, so concurrent saves each receive a unique, strictly
/// increasing id. The `Vec` preserves insertion order for `list`.
pub struct MemStore {
    inner: Mutex<Inner>,
}

struct Inner {
    next_id: i64,
    calculations: Vec<CalculationRecord>,
}

impl MemStore {
    /// Creates an empty store. Ids start at 1.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                next_id: 1,
                calculations: Vec::new(),
            }),
        }
    }
}

impl Default for MemStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CalculationStore for MemStore {
    async fn save(&self, new: NewCalculation) -> AppResult<CalculationRecord> {
        let mut inner = self
            .inner
            .lock()
            .map_err(|_| AppError::Internal("store lock poisoned".into()))?;

        let id = inner.next_id;
        inner.next_id += 1;

        let record = new.into_record(id);
        inner.calculations.push(record.clone());
        Ok(record)
    }

    async fn list(&self) -> AppResult<Vec<CalculationRecord>> {
        let inner = self
            .inner
            .lock()
            .map_err(|_| AppError::Internal("store lock poisoned".into()))?;
        Ok(inner.calculations.clone())
    }
}
