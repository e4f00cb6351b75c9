//! Expense records and the validated input used to create or replace them.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{
    normalize_category_name, validate_expense_amount, ValidationError, MAX_YEAR, MIN_YEAR,
};

/// Storage format for expense dates.
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// A persisted expense row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    pub id: i64,
    pub amount: Decimal,
    pub category: String,
    pub date: NaiveDate,
    pub description: String,
}

/// Field values for an expense that passed validation but has no id yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseDraft {
    pub amount: Decimal,
    pub category: String,
    pub date: NaiveDate,
    pub description: String,
}

impl ExpenseDraft {
    /// Validates raw field values: amount > 0 after rounding to cents, an ISO
    /// date, and a non-blank category.
    pub fn new(
        amount: Decimal,
        category: &str,
        date: &str,
        description: &str,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            amount: validate_expense_amount(amount)?,
            category: normalize_category_name(category)?,
            date: parse_iso_date(date)?,
            description: description.trim().to_string(),
        })
    }

    pub fn into_expense(self, id: i64) -> Expense {
        Expense {
            id,
            amount: self.amount,
            category: self.category,
            date: self.date,
            description: self.description,
        }
    }
}

/// Parses a `YYYY-MM-DD` calendar date.
pub fn parse_iso_date(raw: &str) -> Result<NaiveDate, ValidationError> {
    let trimmed = raw.trim();
    let date = NaiveDate::parse_from_str(trimmed, ISO_DATE_FORMAT)
        .map_err(|_| ValidationError::InvalidDate(raw.to_string()))?;
    if !(MIN_YEAR..=MAX_YEAR).contains(&date.year()) {
        return Err(ValidationError::InvalidDate(raw.to_string()));
    }
    Ok(date)
}
