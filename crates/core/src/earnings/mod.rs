//! RPM-based earnings estimation.

pub mod engine;
pub mod types;

#[cfg(test)]
mod props;

pub use engine::{EarningsEngine, MAX_RPM, MIN_RPM};
pub use types::{EarningsEstimate, Period};
