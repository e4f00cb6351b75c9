use chrono::Month;
use rust_decimal::Decimal;
use serde::Serialize;
use tally_domain::MonthWindow;
use tally_store::Store;
use tracing::debug;

use super::ServiceResult;

/// Spending against the monthly budget for one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlySummary {
    #[serde(with = "tally_domain::budget::month_name")]
    pub month: Month,
    pub year: i32,
    pub total_spent: Decimal,
    pub budget: Decimal,
    pub remaining: Decimal,
    pub over_budget: bool,
}

pub struct SummaryService;

impl SummaryService {
    pub fn monthly_summary(store: &Store, window: &MonthWindow) -> ServiceResult<MonthlySummary> {
        let total_spent = store.total_in_range(window.start, window.end)?;
        let budget = store.budget_for_month(window.month, window.year)?;
        let remaining = budget - total_spent;
        debug!(window = %window, %total_spent, %budget, "monthly summary computed");
        Ok(MonthlySummary {
            month: window.month,
            year: window.year,
            total_spent,
            budget,
            remaining,
            over_budget: remaining < Decimal::ZERO,
        })
    }
}
