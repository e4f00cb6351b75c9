use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use tracing::warn;

use crate::{paths, Config, ConfigError};

const TMP_SUFFIX: &str = "tmp";

/// Loads and saves [`Config`] as pretty-printed JSON.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    base_dir: PathBuf,
    config_path: PathBuf,
}

impl ConfigManager {
    /// Manager rooted at the default application directory.
    pub fn new() -> Result<Self, ConfigError> {
        Self::with_base_dir(paths::app_data_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self, ConfigError> {
        fs::create_dir_all(&base)?;
        let config_path = paths::config_file_in(&base);
        Ok(Self {
            base_dir: base,
            config_path,
        })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Reads the config file, falling back to defaults when it does not exist yet.
    pub fn load(&self) -> Result<Config, ConfigError> {
        if self.config_path.exists() {
            let data = fs::read_to_string(&self.config_path)?;
            let mut config: Config =
                serde_json::from_str(&data).map_err(|err| ConfigError::Serde(err.to_string()))?;
            let saved_format = config.display_date_format.clone();
            if config.repair_date_format() {
                warn!(
                    format = %saved_format,
                    "display_date_format cannot render dates; using the default"
                );
            }
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Writes to a sibling temp file, then renames it over the config file.
    pub fn save(&self, config: &Config) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(config)
            .map_err(|err| ConfigError::Serde(err.to_string()))?;
        let tmp = tmp_path(&self.config_path);
        write_file(&tmp, &json)?;
        fs::rename(&tmp, &self.config_path)?;
        Ok(())
    }

    /// Database path from the config, or the default under the base directory.
    pub fn database_path(&self, config: &Config) -> PathBuf {
        config
            .database_path
            .clone()
            .unwrap_or_else(|| paths::database_file_in(&self.base_dir))
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_file(path: &Path, data: &str) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
