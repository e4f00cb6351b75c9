//! tally-config
//!
//! Persistent user preferences and the application directory layout.
//! Owns the Config data structure plus disk persistence helpers.

pub mod error;
pub mod manager;
pub mod model;
pub mod paths;

pub use error::ConfigError;
pub use manager::ConfigManager;
pub use model::{AccessibilitySettings, Config};
