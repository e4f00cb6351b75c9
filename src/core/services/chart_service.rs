//! Category shares backing the ring chart.

use std::cmp::Ordering;

use rust_decimal::Decimal;
use serde::Serialize;
use tally_domain::MonthWindow;
use tally_store::Store;

use super::ServiceResult;
use crate::currency::percent_of;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryShare {
    pub category: String,
    pub amount: Decimal,
    /// Percentage of the month's total, one decimal place.
    pub percent: Decimal,
}

pub struct ChartService;

impl ChartService {
    /// Per-category spending for the month, largest first. Empty when nothing was spent.
    pub fn category_shares(store: &Store, window: &MonthWindow) -> ServiceResult<Vec<CategoryShare>> {
        let totals = store.totals_by_category_in_range(window.start, window.end)?;
        let total: Decimal = totals.values().copied().sum();
        let mut shares: Vec<CategoryShare> = totals
            .into_iter()
            .map(|(category, amount)| CategoryShare {
                percent: percent_of(amount, total),
                category,
                amount,
            })
            .collect();
        shares.sort_by(|a, b| match b.amount.cmp(&a.amount) {
            Ordering::Equal => a.category.cmp(&b.category),
            other => other,
        });
        Ok(shares)
    }
}
