//! Domain types representing expense categories.

use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// Categories seeded into an empty store.
pub const DEFAULT_CATEGORIES: [&str; 8] = [
    "Food",
    "Housing",
    "Transportation",
    "Entertainment",
    "Utilities",
    "Shopping",
    "Healthcare",
    "Other",
];

/// Named expense bucket. Categories are created once and never renamed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

/// Trims a category name and rejects blank input.
pub fn normalize_category_name(raw: &str) -> Result<String, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        Err(ValidationError::EmptyCategory)
    } else {
        Ok(trimmed.to_string())
    }
}
