//! tally-domain
//!
//! Pure domain models (Category, Expense, Budget, MonthWindow) and the
//! validation rules applied before anything is written.
//! No I/O, no CLI, no storage.

pub mod budget;
pub mod category;
pub mod error;
pub mod expense;
pub mod money;
pub mod window;

pub use budget::*;
pub use category::*;
pub use error::ValidationError;
pub use expense::*;
pub use money::*;
pub use window::*;

// Re-export common dependencies so consumers can rely on this crate as a façade.
pub use chrono;
pub use rust_decimal;
