//! Monthly budget targets per category.

use rust_decimal::Decimal;
use tally_domain::{parse_amount, Budget, MonthWindow};
use tally_store::Store;
use tracing::debug;

use super::ServiceResult;

/// Validated budget helpers over the store.
pub struct BudgetService;

impl BudgetService {
    /// Sets one category's budget for the month shown by `window`.
    pub fn set(
        store: &Store,
        category: &str,
        amount: &str,
        window: &MonthWindow,
    ) -> ServiceResult<i64> {
        let amount = parse_amount(amount)?;
        Ok(store.upsert_budget(category, amount, window.month, window.year)?)
    }

    /// Saves a budget per `(category, amount)` entry. Every amount is parsed
    /// and validated before the first write; any failure leaves the month untouched.
    pub fn save_all(
        store: &mut Store,
        window: &MonthWindow,
        entries: &[(String, String)],
    ) -> ServiceResult<usize> {
        let parsed = entries
            .iter()
            .map(|(category, raw)| Ok((category.clone(), parse_amount(raw)?)))
            .collect::<ServiceResult<Vec<(String, Decimal)>>>()?;
        let written = store.save_budgets(window.month, window.year, &parsed)?;
        debug!(written, window = %window, "budget batch stored");
        Ok(written)
    }

    pub fn for_month(store: &Store, window: &MonthWindow) -> ServiceResult<Vec<Budget>> {
        Ok(store.budgets_for_month(window.month, window.year)?)
    }

    /// Every category paired with its current budget for the month, zero when unset.
    pub fn current_amounts(
        store: &Store,
        window: &MonthWindow,
    ) -> ServiceResult<Vec<(String, Decimal)>> {
        store
            .list_categories()?
            .into_iter()
            .map(|category| {
                let amount = store
                    .budget_amount(&category, window.month, window.year)?
                    .unwrap_or(Decimal::ZERO);
                Ok((category, amount))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Month;

    #[test]
    fn save_all_rejects_batch_with_bad_amount_text() {
        let mut store = Store::open_in_memory_with_categories(&["Food", "Housing"]).unwrap();
        let window = MonthWindow::new(2024, Month::March).unwrap();
        let entries = vec![
            ("Food".to_string(), "200".to_string()),
            ("Housing".to_string(), "abc".to_string()),
        ];
        assert!(BudgetService::save_all(&mut store, &window, &entries).is_err());
        assert!(BudgetService::for_month(&store, &window).unwrap().is_empty());
    }

    #[test]
    fn current_amounts_default_to_zero() {
        let store = Store::open_in_memory_with_categories(&["Food", "Housing"]).unwrap();
        let window = MonthWindow::new(2024, Month::March).unwrap();
        BudgetService::set(&store, "Housing", "900", &window).unwrap();
        let amounts = BudgetService::current_amounts(&store, &window).unwrap();
        assert_eq!(
            amounts,
            vec![
                ("Food".to_string(), Decimal::ZERO),
                ("Housing".to_string(), Decimal::new(90000, 2)),
            ]
        );
    }
}
