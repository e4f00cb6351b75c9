use chrono::Month;
use rusqlite::{params, OptionalExtension};
use rust_decimal::Decimal;
use tally_domain::{from_minor_units, to_minor_units, Budget, BudgetDraft};
use tracing::info;

use crate::{Store, StoreResult};

const UPSERT_BUDGET: &str = "INSERT INTO budgets (category, amount_cents, month, year)
     VALUES (?1, ?2, ?3, ?4)
     ON CONFLICT (category, month, year) DO UPDATE SET amount_cents = excluded.amount_cents
     RETURNING id";

impl Store {
    /// Sets the budget for `(category, month, year)`, replacing any previous amount.
    pub fn upsert_budget(
        &self,
        category: &str,
        amount: Decimal,
        month: Month,
        year: i32,
    ) -> StoreResult<i64> {
        let draft = self.validated_budget(category, amount, month, year)?;
        let id: i64 = self.conn.query_row(
            UPSERT_BUDGET,
            params![
                draft.category,
                to_minor_units(draft.amount)?,
                draft.month.name(),
                draft.year
            ],
            |row| row.get(0),
        )?;
        info!(id, category = %draft.category, amount = %draft.amount, month = draft.month.name(), year, "budget set");
        Ok(id)
    }

    /// Saves one budget per entry for `month`/`year`.
    ///
    /// Every entry is validated first; a single invalid entry aborts the batch
    /// with nothing written. Returns the number of rows written.
    pub fn save_budgets<S: AsRef<str>>(
        &mut self,
        month: Month,
        year: i32,
        entries: &[(S, Decimal)],
    ) -> StoreResult<usize> {
        let drafts = entries
            .iter()
            .map(|(category, amount)| {
                self.validated_budget(category.as_ref(), *amount, month, year)
            })
            .collect::<StoreResult<Vec<_>>>()?;

        let tx = self.conn.transaction()?;
        for draft in &drafts {
            tx.query_row(
                UPSERT_BUDGET,
                params![
                    draft.category,
                    to_minor_units(draft.amount)?,
                    draft.month.name(),
                    draft.year
                ],
                |row| row.get::<_, i64>(0),
            )?;
        }
        tx.commit()?;
        info!(count = drafts.len(), month = month.name(), year, "budgets saved");
        Ok(drafts.len())
    }

    /// Sum of every category budget for the month; zero when none are set.
    pub fn budget_for_month(&self, month: Month, year: i32) -> StoreResult<Decimal> {
        let cents: i64 = self.conn.query_row(
            "SELECT COALESCE(SUM(amount_cents), 0) FROM budgets WHERE month = ?1 AND year = ?2",
            params![month.name(), year],
            |row| row.get(0),
        )?;
        Ok(from_minor_units(cents))
    }

    /// Current budget for one category, if one was ever set.
    pub fn budget_amount(
        &self,
        category: &str,
        month: Month,
        year: i32,
    ) -> StoreResult<Option<Decimal>> {
        let cents: Option<i64> = self
            .conn
            .query_row(
                "SELECT amount_cents FROM budgets
                 WHERE category = ?1 AND month = ?2 AND year = ?3",
                params![category.trim(), month.name(), year],
                |row| row.get(0),
            )
            .optional()?;
        Ok(cents.map(from_minor_units))
    }

    /// Budgets set for the month, sorted by category.
    pub fn budgets_for_month(&self, month: Month, year: i32) -> StoreResult<Vec<Budget>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, category, amount_cents FROM budgets
             WHERE month = ?1 AND year = ?2
             ORDER BY category ASC",
        )?;
        let budgets = stmt
            .query_map(params![month.name(), year], |row| {
                Ok(Budget {
                    id: row.get(0)?,
                    category: row.get(1)?,
                    amount: from_minor_units(row.get(2)?),
                    month,
                    year,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(budgets)
    }

    fn validated_budget(
        &self,
        category: &str,
        amount: Decimal,
        month: Month,
        year: i32,
    ) -> StoreResult<BudgetDraft> {
        let draft = BudgetDraft::new(category, amount, month, year)?;
        self.ensure_category(&draft.category)?;
        Ok(draft)
    }
}
