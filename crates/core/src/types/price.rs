//! Price formatting helpers.
//!
//! Prices are `rust_decimal::Decimal` throughout; these helpers only exist
//! where an amount crosses into a textual surface (the order's `total`
//! field, CLI display).

use rust_decimal::Decimal;

/// Format an amount with exactly two decimal places (e.g., `33.97`).
///
/// This is the encoding the order endpoint expects for the `total` field.
#[must_use]
pub fn format_amount(amount: Decimal) -> String {
    format!("{:.2}", amount.round_dp(2))
}

/// Format an amount for display, with a currency sign (e.g., `$33.97`).
#[must_use]
pub fn display_amount(amount: Decimal) -> String {
    format!("${}", format_amount(amount))
}
