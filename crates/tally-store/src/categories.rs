use rusqlite::{params, OptionalExtension};
use tally_domain::{normalize_category_name, Category, ValidationError};

use crate::{Store, StoreResult};

impl Store {
    /// Category names sorted ascending.
    pub fn list_categories(&self) -> StoreResult<Vec<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT name FROM categories ORDER BY name ASC")?;
        let names = stmt
            .query_map([], |row| row.get(0))?
            .collect::<Result<Vec<String>, _>>()?;
        Ok(names)
    }

    /// Categories with their ids, sorted by name.
    pub fn categories(&self) -> StoreResult<Vec<Category>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name FROM categories ORDER BY name ASC")?;
        let rows = stmt
            .query_map([], |row| {
                Ok(Category {
                    id: row.get(0)?,
                    name: row.get(1)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    pub fn category_count(&self) -> StoreResult<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM categories", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    pub fn has_category(&self, name: &str) -> StoreResult<bool> {
        let found = self
            .conn
            .query_row(
                "SELECT 1 FROM categories WHERE name = ?1",
                params![name.trim()],
                |_| Ok(()),
            )
            .optional()?;
        Ok(found.is_some())
    }

    /// Fails with [`ValidationError::UnknownCategory`] when `name` is not seeded.
    pub(crate) fn ensure_category(&self, name: &str) -> StoreResult<String> {
        let name = normalize_category_name(name)?;
        if self.has_category(&name)? {
            Ok(name)
        } else {
            Err(ValidationError::UnknownCategory(name).into())
        }
    }
}
