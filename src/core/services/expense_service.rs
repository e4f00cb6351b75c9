//! Business logic helpers for managing expenses.

use tally_domain::{parse_amount, Expense, MonthWindow};
use tally_store::Store;
use tracing::debug;

use super::{ServiceError, ServiceResult};

/// Parses user-supplied text and forwards validated expenses to the store.
pub struct ExpenseService;

impl ExpenseService {
    /// Adds a new expense and returns its identifier.
    pub fn add(
        store: &Store,
        amount: &str,
        category: &str,
        date: &str,
        description: &str,
    ) -> ServiceResult<i64> {
        let amount = parse_amount(amount)?;
        let id = store.add_expense(amount, category, date, description)?;
        debug!(id, "expense recorded via service");
        Ok(id)
    }

    /// Replaces every field of the expense identified by `id`.
    pub fn update(
        store: &Store,
        id: i64,
        amount: &str,
        category: &str,
        date: &str,
        description: &str,
    ) -> ServiceResult<()> {
        let amount = parse_amount(amount)?;
        store.update_expense(id, amount, category, date, description)?;
        Ok(())
    }

    /// Removes the expense identified by `id`; returns `false` if it was already gone.
    pub fn remove(store: &Store, id: i64) -> ServiceResult<bool> {
        Ok(store.delete_expense(id)?)
    }

    pub fn get(store: &Store, id: i64) -> ServiceResult<Expense> {
        store.expense(id)?.ok_or(ServiceError::NotFound {
            entity: "expense",
            id,
        })
    }

    /// Expenses in the month, newest first.
    pub fn list_month(store: &Store, window: &MonthWindow) -> ServiceResult<Vec<Expense>> {
        Ok(store.list_expenses_in_range(window.start, window.end)?)
    }
}
