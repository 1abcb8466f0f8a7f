//! Money rounding and display formatting.
//!
//! All currency math in this crate uses [`rust_decimal::Decimal`]; binary
//! floating point never touches an amount. Rounding is half-up to two
//! decimal places and happens per line item before summation - totals are
//! sums of already-rounded subtotals.

use rust_decimal::{Decimal, RoundingStrategy};

/// Round a currency amount half-up to two decimal places.
#[must_use]
pub fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Format a currency amount for display: exactly two fraction digits and
/// thousands separators.
///
/// Display only - formatted strings never feed back into computation.
///
/// ```rust
/// # use rust_decimal::Decimal;
/// # use timberhaus_core::types::money::format_money;
/// assert_eq!(format_money("1234.5".parse::<Decimal>().unwrap()), "1,234.50");
/// ```
#[must_use]
pub fn format_money(amount: Decimal) -> String {
    let mut rounded = round_money(amount);
    rounded.rescale(2);
    let text = rounded.to_string();

    let (sign, unsigned) = text
        .strip_prefix('-')
        .map_or(("", text.as_str()), |rest| ("-", rest));
    let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    let digits = int_part.len();
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (digits - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    format!("{sign}{grouped}.{frac_part}")
}
