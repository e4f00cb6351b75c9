use thiserror::Error;

/// Rejections raised before any row is written.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Amount must be positive (got {0})")]
    NonPositiveAmount(String),
    #[error("Budget for {category} cannot be negative (got {amount})")]
    NegativeBudget { category: String, amount: String },
    #[error("Invalid amount `{0}`")]
    InvalidAmount(String),
    #[error("Amount {0} is out of range")]
    AmountOutOfRange(String),
    #[error("Invalid date `{0}`, expected YYYY-MM-DD")]
    InvalidDate(String),
    #[error("Unknown month `{0}`")]
    InvalidMonth(String),
    #[error("Year {0} is outside the supported range")]
    InvalidYear(i32),
    #[error("Category name cannot be empty")]
    EmptyCategory,
    #[error("Unknown category `{0}`")]
    UnknownCategory(String),
}
