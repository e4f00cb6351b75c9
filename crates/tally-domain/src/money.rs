//! Decimal amount helpers. Amounts carry two fractional digits and are
//! persisted as integer minor units (cents).

use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::ValidationError;

/// Number of fractional digits kept for every amount.
pub const MINOR_UNIT_SCALE: u32 = 2;

/// Parses user input such as `1200`, `50.5` or `1,250.00` into a decimal.
pub fn parse_amount(raw: &str) -> Result<Decimal, ValidationError> {
    let cleaned: String = raw
        .trim()
        .trim_start_matches('$')
        .chars()
        .filter(|ch| *ch != ',' && *ch != '_')
        .collect();
    if cleaned.is_empty() {
        return Err(ValidationError::InvalidAmount(raw.to_string()));
    }
    Decimal::from_str(&cleaned).map_err(|_| ValidationError::InvalidAmount(raw.to_string()))
}

/// Rounds to cents, half away from zero.
pub fn round_to_cents(amount: Decimal) -> Decimal {
    let mut rounded =
        amount.round_dp_with_strategy(MINOR_UNIT_SCALE, RoundingStrategy::MidpointAwayFromZero);
    if rounded.is_zero() {
        rounded = Decimal::ZERO;
    }
    rounded.rescale(MINOR_UNIT_SCALE);
    rounded
}

/// Converts a decimal amount into integer cents.
pub fn to_minor_units(amount: Decimal) -> Result<i64, ValidationError> {
    round_to_cents(amount)
        .checked_mul(Decimal::ONE_HUNDRED)
        .and_then(|cents| cents.to_i64())
        .ok_or_else(|| ValidationError::AmountOutOfRange(amount.to_string()))
}

/// Converts integer cents back into a two-digit decimal.
pub fn from_minor_units(cents: i64) -> Decimal {
    Decimal::new(cents, MINOR_UNIT_SCALE)
}

/// Normalizes an expense amount; it must be strictly positive after rounding.
pub fn validate_expense_amount(amount: Decimal) -> Result<Decimal, ValidationError> {
    let rounded = round_to_cents(amount);
    if rounded <= Decimal::ZERO {
        return Err(ValidationError::NonPositiveAmount(amount.to_string()));
    }
    to_minor_units(rounded)?;
    Ok(rounded)
}

/// Normalizes a budget amount; zero is allowed, negatives are not.
pub fn validate_budget_amount(category: &str, amount: Decimal) -> Result<Decimal, ValidationError> {
    let rounded = round_to_cents(amount);
    if rounded < Decimal::ZERO {
        return Err(ValidationError::NegativeBudget {
            category: category.to_string(),
            amount: amount.to_string(),
        });
    }
    to_minor_units(rounded)?;
    Ok(rounded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_amount_accepts_symbols_and_separators() {
        assert_eq!(parse_amount("$1,250.00").unwrap(), Decimal::new(125000, 2));
        assert_eq!(parse_amount(" 42 ").unwrap(), Decimal::new(42, 0));
    }

    #[test]
    fn parse_amount_rejects_garbage() {
        assert!(matches!(
            parse_amount("twelve"),
            Err(ValidationError::InvalidAmount(_))
        ));
        assert!(parse_amount("   ").is_err());
    }

    #[test]
    fn rounding_is_half_away_from_zero() {
        assert_eq!(round_to_cents(Decimal::new(12345, 3)), Decimal::new(1235, 2));
        assert_eq!(round_to_cents(Decimal::new(-12345, 3)), Decimal::new(-1235, 2));
    }

    #[test]
    fn rounding_pads_to_two_digits() {
        assert_eq!(round_to_cents(Decimal::new(1200, 0)).to_string(), "1200.00");
        assert_eq!(round_to_cents(Decimal::new(-1, 3)).to_string(), "0.00");
    }

    #[test]
    fn minor_units_round_trip_keeps_value() {
        let cents = to_minor_units(Decimal::new(5005, 2)).unwrap();
        assert_eq!(cents, 5005);
        assert_eq!(from_minor_units(cents), Decimal::new(5005, 2));
    }

    #[test]
    fn expense_amount_must_stay_positive_after_rounding() {
        assert!(validate_expense_amount(Decimal::ZERO).is_err());
        assert!(validate_expense_amount(Decimal::new(-5, 0)).is_err());
        assert!(validate_expense_amount(Decimal::new(4, 3)).is_err());
        assert_eq!(
            validate_expense_amount(Decimal::new(5, 3)).unwrap(),
            Decimal::new(1, 2)
        );
    }

    #[test]
    fn budget_amount_allows_zero() {
        assert_eq!(
            validate_budget_amount("Food", Decimal::ZERO).unwrap(),
            Decimal::ZERO
        );
        let err = validate_budget_amount("Food", Decimal::new(-1, 0)).unwrap_err();
        assert!(err.to_string().contains("Food"));
    }
}
