use colored::Colorize;
use std::fmt;
use std::sync::{OnceLock, RwLock};

use tally_config::Config;

/// Message categories used by the CLI output helpers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Success,
    Warning,
    Error,
    Hint,
    Section,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OutputPreferences {
    pub color_enabled: bool,
    pub plain_mode: bool,
    pub high_contrast: bool,
}

impl Default for OutputPreferences {
    fn default() -> Self {
        Self {
            color_enabled: true,
            plain_mode: false,
            high_contrast: false,
        }
    }
}

impl OutputPreferences {
    pub fn from_config(config: &Config) -> Self {
        Self {
            color_enabled: config.ui_color_enabled && !config.accessibility.plain_output,
            plain_mode: config.accessibility.plain_output,
            high_contrast: config.accessibility.high_contrast,
        }
    }
}

static PREFERENCES: OnceLock<RwLock<OutputPreferences>> = OnceLock::new();

pub fn set_preferences(prefs: OutputPreferences) {
    let lock = PREFERENCES.get_or_init(|| RwLock::new(OutputPreferences::default()));
    if let Ok(mut guard) = lock.write() {
        *guard = prefs;
    }
    colored::control::set_override(prefs.color_enabled);
}

pub fn current_preferences() -> OutputPreferences {
    PREFERENCES
        .get_or_init(|| RwLock::new(OutputPreferences::default()))
        .read()
        .map(|guard| *guard)
        .unwrap_or_default()
}

fn label(kind: MessageKind, prefs: &OutputPreferences) -> &'static str {
    match (kind, prefs.plain_mode) {
        (MessageKind::Success, false) => "✓ ",
        (MessageKind::Success, true) => "OK: ",
        (MessageKind::Warning, _) => "WARNING: ",
        (MessageKind::Error, _) => "ERROR: ",
        (MessageKind::Hint, _) => "hint: ",
        (MessageKind::Info | MessageKind::Section, _) => "",
    }
}

fn apply_style(kind: MessageKind, message: impl fmt::Display, prefs: &OutputPreferences) -> String {
    let text = message.to_string();
    let formatted = match kind {
        MessageKind::Section => format!("=== {} ===", text.trim()),
        _ => format!("{}{}", label(kind, prefs), text),
    };

    if !prefs.color_enabled {
        return formatted;
    }

    if prefs.high_contrast {
        return match kind {
            MessageKind::Info | MessageKind::Hint => formatted,
            _ => formatted.bold().to_string(),
        };
    }

    match kind {
        MessageKind::Success => formatted.bright_green().to_string(),
        MessageKind::Warning => formatted.bright_yellow().to_string(),
        MessageKind::Error => formatted.bright_red().to_string(),
        MessageKind::Hint => formatted.dimmed().to_string(),
        MessageKind::Section => formatted.bold().to_string(),
        MessageKind::Info => formatted,
    }
}

pub fn print(kind: MessageKind, message: impl fmt::Display) {
    let prefs = current_preferences();
    let formatted = apply_style(kind, message, &prefs);
    match kind {
        MessageKind::Section => println!("\n{}", formatted),
        _ => println!("{}", formatted),
    }
}

pub fn info(message: impl fmt::Display) {
    print(MessageKind::Info, message);
}

pub fn success(message: impl fmt::Display) {
    print(MessageKind::Success, message);
}

pub fn warning(message: impl fmt::Display) {
    print(MessageKind::Warning, message);
}

pub fn error(message: impl fmt::Display) {
    print(MessageKind::Error, message);
}

pub fn hint(message: impl fmt::Display) {
    print(MessageKind::Hint, message);
}

pub fn section(title: impl fmt::Display) {
    print(MessageKind::Section, title);
}

/// Colours a balance red when it is negative and green otherwise.
pub fn balance(text: &str, negative: bool) -> String {
    let prefs = current_preferences();
    if !prefs.color_enabled {
        return text.to_string();
    }
    if negative {
        text.red().bold().to_string()
    } else {
        text.green().to_string()
    }
}
