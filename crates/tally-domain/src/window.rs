//! Calendar-month windows used by every range query.

use std::fmt;

use chrono::{Datelike, Local, Month, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// Earliest year accepted for dates and windows.
pub const MIN_YEAR: i32 = 1;
/// Latest year accepted; keeps ISO date text sortable.
pub const MAX_YEAR: i32 = 9998;

/// Half-open range `[start, end)` covering one calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthWindow {
    pub year: i32,
    #[serde(with = "crate::budget::month_name")]
    pub month: Month,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl MonthWindow {
    /// Builds the window for `month` of `year`; December rolls into January.
    pub fn new(year: i32, month: Month) -> Result<Self, ValidationError> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(ValidationError::InvalidYear(year));
        }
        let number = month.number_from_month();
        let start = NaiveDate::from_ymd_opt(year, number, 1)
            .ok_or(ValidationError::InvalidYear(year))?;
        let end = if month == Month::December {
            NaiveDate::from_ymd_opt(year + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(year, number + 1, 1)
        }
        .ok_or(ValidationError::InvalidYear(year))?;
        Ok(Self {
            year,
            month,
            start,
            end,
        })
    }

    /// Window for the month that contains `date`.
    pub fn containing(date: NaiveDate) -> Result<Self, ValidationError> {
        let month = Month::try_from(date.month() as u8)
            .map_err(|_| ValidationError::InvalidDate(date.to_string()))?;
        Self::new(date.year(), month)
    }

    /// Window for the current local month.
    pub fn current() -> Result<Self, ValidationError> {
        Self::containing(Local::now().date_naive())
    }

    pub fn next(&self) -> Result<Self, ValidationError> {
        Self::containing(self.end)
    }

    pub fn previous(&self) -> Result<Self, ValidationError> {
        let last_of_previous = self
            .start
            .pred_opt()
            .ok_or(ValidationError::InvalidYear(self.year))?;
        Self::containing(last_of_previous)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date < self.end
    }

    /// Label such as `March 2024`.
    pub fn label(&self) -> String {
        format!("{} {}", self.month.name(), self.year)
    }
}

impl fmt::Display for MonthWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}
