//! Display formatting for amounts and dates. Storage always keeps ISO dates
//! and two-digit decimals; these helpers only shape what the user sees.

use std::fmt::Write;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tally_domain::round_to_cents;

/// Formats `amount` as `$1,250.00`, or `-$1,050.00` when negative.
pub fn format_currency(amount: Decimal, symbol: &str) -> String {
    let rounded = round_to_cents(amount);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let text = rounded.abs().to_string();
    let (whole, fraction) = text.split_once('.').unwrap_or((text.as_str(), "00"));
    let grouped = group_thousands(whole);
    let sign = if negative { "-" } else { "" };
    format!("{sign}{symbol}{grouped}.{fraction}")
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Renders a stored date with the configured display format (`%d/%m/%Y` by default).
/// Falls back to ISO when the format cannot render a plain date.
pub fn format_date(date: NaiveDate, format: &str) -> String {
    let mut out = String::new();
    match write!(out, "{}", date.format(format)) {
        Ok(()) => out,
        Err(_) => date.format("%Y-%m-%d").to_string(),
    }
}

/// Share of `part` in `total` as a percentage with one decimal place.
pub fn percent_of(part: Decimal, total: Decimal) -> Decimal {
    if total.is_zero() {
        return Decimal::ZERO;
    }
    (part * Decimal::ONE_HUNDRED / total).round_dp(1)
}
