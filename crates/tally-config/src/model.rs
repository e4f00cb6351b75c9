use std::fmt::Write;
use std::path::PathBuf;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use tally_domain::DEFAULT_CATEGORIES;

use crate::ConfigError;

/// Stores user-configurable display preferences and storage settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "Config::default_currency_symbol")]
    pub currency_symbol: String,
    /// chrono format used when rendering expense dates.
    #[serde(default = "Config::default_display_date_format")]
    pub display_date_format: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database_path: Option<PathBuf>,
    #[serde(default = "Config::default_categories")]
    pub default_categories: Vec<String>,
    #[serde(default = "Config::default_ui_color_enabled")]
    pub ui_color_enabled: bool,
    #[serde(default)]
    pub accessibility: AccessibilitySettings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency_symbol: Self::default_currency_symbol(),
            display_date_format: Self::default_display_date_format(),
            database_path: None,
            default_categories: Self::default_categories(),
            ui_color_enabled: Self::default_ui_color_enabled(),
            accessibility: AccessibilitySettings::default(),
        }
    }
}

impl Config {
    pub const KEYS: [&'static str; 7] = [
        "currency_symbol",
        "display_date_format",
        "database_path",
        "default_categories",
        "ui_color_enabled",
        "plain_output",
        "high_contrast",
    ];

    pub fn default_currency_symbol() -> String {
        "$".into()
    }

    pub fn default_display_date_format() -> String {
        "%d/%m/%Y".into()
    }

    pub fn default_categories() -> Vec<String> {
        DEFAULT_CATEGORIES.iter().map(|name| name.to_string()).collect()
    }

    pub fn default_ui_color_enabled() -> bool {
        true
    }

    /// Current values as `(key, value)` pairs in [`Config::KEYS`] order.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        vec![
            ("currency_symbol", self.currency_symbol.clone()),
            ("display_date_format", self.display_date_format.clone()),
            (
                "database_path",
                self.database_path
                    .as_ref()
                    .map(|path| path.display().to_string())
                    .unwrap_or_else(|| "(default)".into()),
            ),
            ("default_categories", self.default_categories.join(",")),
            ("ui_color_enabled", self.ui_color_enabled.to_string()),
            ("plain_output", self.accessibility.plain_output.to_string()),
            ("high_contrast", self.accessibility.high_contrast.to_string()),
        ]
    }

    /// Resets a display date format that cannot render a date back to the
    /// default. Returns `true` when the loaded value was replaced.
    pub fn repair_date_format(&mut self) -> bool {
        if validate_date_format(&self.display_date_format).is_ok() {
            return false;
        }
        self.display_date_format = Self::default_display_date_format();
        true
    }

    /// Updates one key from its textual form.
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let value = value.trim();
        match key.trim().to_ascii_lowercase().as_str() {
            "currency_symbol" => {
                self.currency_symbol = value.to_string();
            }
            "display_date_format" => {
                validate_date_format(value)?;
                self.display_date_format = value.to_string();
            }
            "database_path" => {
                self.database_path = match value {
                    "" | "default" => None,
                    path => Some(PathBuf::from(path)),
                };
            }
            "default_categories" => {
                let names: Vec<String> = value
                    .split(',')
                    .map(str::trim)
                    .filter(|name| !name.is_empty())
                    .map(str::to_string)
                    .collect();
                if names.is_empty() {
                    return Err(invalid("default_categories", "at least one name is required"));
                }
                self.default_categories = names;
            }
            "ui_color_enabled" => self.ui_color_enabled = parse_bool(key, value)?,
            "plain_output" => self.accessibility.plain_output = parse_bool(key, value)?,
            "high_contrast" => self.accessibility.high_contrast = parse_bool(key, value)?,
            other => return Err(ConfigError::UnknownKey(other.to_string())),
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessibilitySettings {
    #[serde(default)]
    pub plain_output: bool,
    #[serde(default)]
    pub high_contrast: bool,
}

fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "on" | "yes" | "1" => Ok(true),
        "false" | "off" | "no" | "0" => Ok(false),
        _ => Err(invalid(key, "expected true or false")),
    }
}

/// Checks a display format by rendering a sample date with it. Formats that
/// need time or offset fields (`%H`, `%z`, ...) fail here instead of at display.
fn validate_date_format(format: &str) -> Result<(), ConfigError> {
    if format.is_empty() {
        return Err(invalid("display_date_format", "format cannot be empty"));
    }
    let sample = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap_or_default();
    let mut rendered = String::new();
    if write!(rendered, "{}", sample.format(format)).is_err() {
        return Err(invalid(
            "display_date_format",
            &format!("`{format}` is not a valid date format"),
        ));
    }
    Ok(())
}

fn invalid(key: &str, reason: &str) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        reason: reason.to_string(),
    }
}
