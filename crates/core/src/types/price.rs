//! Decimal price helpers.
//!
//! Prices are carried as [`rust_decimal::Decimal`] everywhere internally so
//! that cart totals stay exact. The catalog wire format uses plain JSON
//! numbers; fields deserialized from it use
//! `#[serde(with = "rust_decimal::serde::float")]`.

use rust_decimal::{Decimal, RoundingStrategy};

/// Format a decimal amount for display with two fractional digits.
///
/// Display-only: the value handed in stays unrounded. Midpoints round away
/// from zero, the convention shoppers expect for money.
#[must_use]
pub fn format_amount(amount: Decimal) -> String {
    format!(
        "{:.2}",
        amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    )
}
