//! Currency catalog, conversion, and display formatting.

pub mod convert;
pub mod format;
pub mod table;

#[cfg(test)]
mod props;

pub use convert::convert;
pub use format::format_amount;
pub use table::{CurrencyRecord, all, is_zero_decimal, rate, symbol};

/// The base currency in which all catalog rates are expressed.
pub const BASE_CURRENCY: &str = "USD";
