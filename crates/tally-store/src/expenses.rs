use std::collections::BTreeMap;

use chrono::NaiveDate;
use rusqlite::{params, OptionalExtension, Row};
use rust_decimal::Decimal;
use tally_domain::{from_minor_units, to_minor_units, Expense, ExpenseDraft};
use tracing::{debug, info};

use crate::{Store, StoreError, StoreResult};

const EXPENSE_COLUMNS: &str = "id, amount_cents, category, date, description";

fn expense_from_row(row: &Row<'_>) -> rusqlite::Result<Expense> {
    Ok(Expense {
        id: row.get(0)?,
        amount: from_minor_units(row.get(1)?),
        category: row.get(2)?,
        date: row.get(3)?,
        description: row.get(4)?,
    })
}

impl Store {
    /// Validates and inserts an expense, returning its id.
    pub fn add_expense(
        &self,
        amount: Decimal,
        category: &str,
        date: &str,
        description: &str,
    ) -> StoreResult<i64> {
        let draft = self.validated_expense(amount, category, date, description)?;
        self.conn.execute(
            "INSERT INTO expenses (amount_cents, category, date, description)
             VALUES (?1, ?2, ?3, ?4)",
            params![
                to_minor_units(draft.amount)?,
                draft.category,
                draft.date,
                draft.description
            ],
        )?;
        let id = self.conn.last_insert_rowid();
        info!(id, category = %draft.category, amount = %draft.amount, "expense added");
        Ok(id)
    }

    /// Replaces every field of expense `id`. Fails with `NotFound` when the row is absent.
    pub fn update_expense(
        &self,
        id: i64,
        amount: Decimal,
        category: &str,
        date: &str,
        description: &str,
    ) -> StoreResult<()> {
        let draft = self.validated_expense(amount, category, date, description)?;
        let changed = self.conn.execute(
            "UPDATE expenses
             SET amount_cents = ?1, category = ?2, date = ?3, description = ?4
             WHERE id = ?5",
            params![
                to_minor_units(draft.amount)?,
                draft.category,
                draft.date,
                draft.description,
                id
            ],
        )?;
        if changed == 0 {
            return Err(StoreError::NotFound {
                entity: "expense",
                id,
            });
        }
        info!(id, "expense updated");
        Ok(())
    }

    /// Deletes expense `id`; absent ids are a no-op. Returns whether a row was removed.
    pub fn delete_expense(&self, id: i64) -> StoreResult<bool> {
        let removed = self
            .conn
            .execute("DELETE FROM expenses WHERE id = ?1", params![id])?;
        debug!(id, removed, "expense delete");
        Ok(removed > 0)
    }

    pub fn expense(&self, id: i64) -> StoreResult<Option<Expense>> {
        let sql = format!("SELECT {EXPENSE_COLUMNS} FROM expenses WHERE id = ?1");
        let expense = self
            .conn
            .query_row(&sql, params![id], expense_from_row)
            .optional()?;
        Ok(expense)
    }

    pub fn expense_count(&self) -> StoreResult<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM expenses", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// Expenses dated in `[start, end)`, newest date first.
    pub fn list_expenses_in_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> StoreResult<Vec<Expense>> {
        let sql = format!(
            "SELECT {EXPENSE_COLUMNS} FROM expenses
             WHERE date >= ?1 AND date < ?2
             ORDER BY date DESC, id DESC"
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt
            .query_map(params![start, end], expense_from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    /// Sum of expense amounts in `[start, end)`; zero when empty.
    pub fn total_in_range(&self, start: NaiveDate, end: NaiveDate) -> StoreResult<Decimal> {
        let cents: i64 = self.conn.query_row(
            "SELECT COALESCE(SUM(amount_cents), 0) FROM expenses
             WHERE date >= ?1 AND date < ?2",
            params![start, end],
            |row| row.get(0),
        )?;
        Ok(from_minor_units(cents))
    }

    /// Per-category sums in `[start, end)`; categories without expenses are absent.
    pub fn totals_by_category_in_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> StoreResult<BTreeMap<String, Decimal>> {
        let mut stmt = self.conn.prepare(
            "SELECT category, SUM(amount_cents) FROM expenses
             WHERE date >= ?1 AND date < ?2
             GROUP BY category",
        )?;
        let totals = stmt
            .query_map(params![start, end], |row| {
                Ok((row.get::<_, String>(0)?, from_minor_units(row.get(1)?)))
            })?
            .collect::<Result<BTreeMap<_, _>, _>>()?;
        Ok(totals)
    }

    fn validated_expense(
        &self,
        amount: Decimal,
        category: &str,
        date: &str,
        description: &str,
    ) -> StoreResult<ExpenseDraft> {
        let draft = ExpenseDraft::new(amount, category, date, description)?;
        self.ensure_category(&draft.category)?;
        Ok(draft)
    }
}
