use std::{
    fs,
    path::{Path, PathBuf},
};

use rusqlite::{params, Connection};
use tally_domain::{normalize_category_name, DEFAULT_CATEGORIES};
use tracing::{debug, info};

use crate::{
    schema::{PRAGMAS, SCHEMA},
    StoreResult,
};

/// Single-connection handle over the expense database.
///
/// Every operation is a blocking call that either completes or returns an
/// error before the next one starts. The connection closes on drop.
pub struct Store {
    pub(crate) conn: Connection,
    path: Option<PathBuf>,
}

impl Store {
    /// Opens (or creates) the database at `path`, seeding the default categories.
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        Self::open_with_categories(path, &DEFAULT_CATEGORIES)
    }

    /// Opens the database at `path`, seeding `categories` if the table is empty.
    pub fn open_with_categories<S: AsRef<str>>(
        path: impl AsRef<Path>,
        categories: &[S],
    ) -> StoreResult<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let conn = Connection::open(path)?;
        info!(path = %path.display(), "opened expense store");
        Self::initialize(conn, Some(path.to_path_buf()), categories)
    }

    /// Opens a private in-memory database seeded with the default categories.
    pub fn open_in_memory() -> StoreResult<Self> {
        Self::open_in_memory_with_categories(&DEFAULT_CATEGORIES)
    }

    pub fn open_in_memory_with_categories<S: AsRef<str>>(categories: &[S]) -> StoreResult<Self> {
        let conn = Connection::open_in_memory()?;
        Self::initialize(conn, None, categories)
    }

    /// Location of the backing file, `None` for in-memory stores.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    fn initialize<S: AsRef<str>>(
        conn: Connection,
        path: Option<PathBuf>,
        categories: &[S],
    ) -> StoreResult<Self> {
        conn.execute_batch(PRAGMAS)?;
        conn.execute_batch(SCHEMA)?;
        let mut store = Self { conn, path };
        store.seed_categories(categories)?;
        Ok(store)
    }

    fn seed_categories<S: AsRef<str>>(&mut self, categories: &[S]) -> StoreResult<()> {
        if self.category_count()? > 0 {
            return Ok(());
        }
        let names = categories
            .iter()
            .map(|name| normalize_category_name(name.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        let tx = self.conn.transaction()?;
        for name in &names {
            tx.execute(
                "INSERT OR IGNORE INTO categories (name) VALUES (?1)",
                params![name],
            )?;
        }
        tx.commit()?;
        debug!(count = names.len(), "seeded categories");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn open_creates_parent_directories_and_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data").join("expenses.db");
        let store = Store::open(&path).unwrap();
        assert!(path.exists());
        assert_eq!(store.path(), Some(path.as_path()));
    }

    #[test]
    fn seeding_only_happens_on_empty_table() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("expenses.db");
        {
            let store = Store::open_with_categories(&path, &["Food", "Housing"]).unwrap();
            assert_eq!(store.category_count().unwrap(), 2);
        }
        let reopened = Store::open(&path).unwrap();
        assert_eq!(
            reopened.list_categories().unwrap(),
            vec!["Food".to_string(), "Housing".to_string()]
        );
    }

    #[test]
    fn duplicate_seed_names_collapse() {
        let store = Store::open_in_memory_with_categories(&["Food", " Food", "Other"]).unwrap();
        assert_eq!(store.category_count().unwrap(), 2);
    }

    #[test]
    fn blank_seed_names_are_rejected() {
        let err = Store::open_in_memory_with_categories(&["Food", "  "])
            .err()
            .expect("blank name must fail");
        assert!(err.is_validation());
    }
}
