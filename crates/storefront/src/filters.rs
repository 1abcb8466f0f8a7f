//! Custom Askama template filters.

#![allow(clippy::unnecessary_wraps)]

use std::fmt::Display;

use rust_decimal::Decimal;
use timberhaus_core::format_money;

/// Format a decimal amount as money: two fraction digits and thousands
/// separators. Non-numeric input is passed through unchanged.
///
/// Usage in templates: `{{ total|money }}`
#[askama::filter_fn]
pub fn money(value: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    let raw = value.to_string();
    let formatted = match raw.parse::<Decimal>() {
        Ok(amount) => format_money(amount),
        Err(_) => raw,
    };
    Ok(formatted)
}

/// Returns the current year.
///
/// Usage in templates: `{{ ""|current_year }}`
#[askama::filter_fn]
pub fn current_year(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<i32> {
    use chrono::Datelike;
    Ok(chrono::Utc::now().year())
}
