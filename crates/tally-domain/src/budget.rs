//! Monthly per-category budget targets.

use std::str::FromStr;

use chrono::Month;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{normalize_category_name, validate_budget_amount, ValidationError, MAX_YEAR, MIN_YEAR};

/// A persisted budget row, unique per (category, month, year).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Budget {
    pub id: i64,
    pub category: String,
    pub amount: Decimal,
    #[serde(with = "month_name")]
    pub month: Month,
    pub year: i32,
}

/// Validated budget values awaiting an upsert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BudgetDraft {
    pub category: String,
    pub amount: Decimal,
    pub month: Month,
    pub year: i32,
}

impl BudgetDraft {
    pub fn new(
        category: &str,
        amount: Decimal,
        month: Month,
        year: i32,
    ) -> Result<Self, ValidationError> {
        let category = normalize_category_name(category)?;
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(ValidationError::InvalidYear(year));
        }
        Ok(Self {
            amount: validate_budget_amount(&category, amount)?,
            category,
            month,
            year,
        })
    }
}

/// Accepts full or abbreviated month names (`March`, `mar`) or numbers `1..=12`.
pub fn parse_month(raw: &str) -> Result<Month, ValidationError> {
    let trimmed = raw.trim();
    if let Ok(number) = trimmed.parse::<u8>() {
        return Month::try_from(number).map_err(|_| ValidationError::InvalidMonth(raw.to_string()));
    }
    Month::from_str(trimmed).map_err(|_| ValidationError::InvalidMonth(raw.to_string()))
}

/// Serializes [`Month`] as its English name, the same text stored in the budgets table.
pub mod month_name {
    use chrono::Month;
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(month: &Month, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(month.name())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Month, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        super::parse_month(&raw).map_err(D::Error::custom)
    }
}
