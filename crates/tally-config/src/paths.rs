use std::{
    env,
    path::{Path, PathBuf},
};

const DEFAULT_DIR_NAME: &str = ".tally";
const HOME_ENV: &str = "TALLY_HOME";
const CONFIG_DIR: &str = "config";
const CONFIG_FILE: &str = "config.json";
const DATA_DIR: &str = "data";
const DATABASE_FILE: &str = "expenses.db";

/// Returns the application data directory: `$TALLY_HOME`, else `~/.tally`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os(HOME_ENV) {
        return PathBuf::from(custom);
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

pub fn config_file_in(base: &Path) -> PathBuf {
    base.join(CONFIG_DIR).join(CONFIG_FILE)
}

/// Default database location, `<base>/data/expenses.db`.
pub fn database_file_in(base: &Path) -> PathBuf {
    base.join(DATA_DIR).join(DATABASE_FILE)
}
