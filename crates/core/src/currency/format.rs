//! Display formatting for monetary amounts.
//!
//! Contract: `symbol` + (zero-decimal currency ? integer rounded half away
//! from zero, with thousands-comma grouping : amount fixed to two decimal
//! places, no grouping). No locale negotiation.

use rust_decimal::{Decimal, RoundingStrategy};

use super::table;

/// Formats `amount` for display in the given currency.
#[must_use]
pub fn format_amount(amount: Decimal, code: &str) -> String {
    let symbol = table::symbol(code);

    if table::is_zero_decimal(code) {
        let rounded = amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
        format!("{symbol}{}", group_thousands(&rounded.to_string()))
    } else {
        let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        format!("{symbol}{rounded:.2}")
    }
}

/// Inserts thousands-comma separators into an integer string.
fn group_thousands(digits: &str) -> String {
    let (sign, digits) = digits
        .strip_prefix('-')
        .map_or(("", digits), |rest| ("-", rest));

    let mut out = String::with_capacity(sign.len() + digits.len() + digits.len() / 3);
    out.push_str(sign);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
