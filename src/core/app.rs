//! Process-wide state: configuration plus the open store.

use std::path::{Path, PathBuf};

use tally_config::{Config, ConfigManager};
use tally_store::Store;
use tracing::info;

use crate::core::errors::Result;

/// Owns the configuration and the single store connection for one process.
pub struct App {
    pub config: Config,
    config_manager: ConfigManager,
    store: Store,
    database_path: PathBuf,
}

impl App {
    /// Loads configuration from the default application directory and opens the store.
    pub fn open_default() -> Result<Self> {
        Self::open(ConfigManager::new()?)
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self> {
        Self::open(ConfigManager::with_base_dir(base)?)
    }

    pub fn open(config_manager: ConfigManager) -> Result<Self> {
        let config = config_manager.load()?;
        let database_path = config_manager.database_path(&config);
        let store = Store::open_with_categories(&database_path, &config.default_categories)?;
        info!(database = %database_path.display(), "application state ready");
        Ok(Self {
            config,
            config_manager,
            store,
            database_path,
        })
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut Store {
        &mut self.store
    }

    pub fn database_path(&self) -> &Path {
        &self.database_path
    }

    pub fn config_path(&self) -> &Path {
        self.config_manager.config_path()
    }

    /// Applies `key = value` to a copy of the config and adopts it once saved.
    pub fn update_config(&mut self, key: &str, value: &str) -> Result<()> {
        let mut updated = self.config.clone();
        updated.set_value(key, value)?;
        self.config_manager.save(&updated)?;
        self.config = updated;
        Ok(())
    }
}
