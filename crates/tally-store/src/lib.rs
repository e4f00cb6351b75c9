//! tally-store
//!
//! SQLite persistence for categories, expenses and monthly budgets.
//! Owns the schema, validates input through `tally-domain` before writing,
//! and answers the range and aggregation queries the services build on.

mod budgets;
mod categories;
pub mod error;
mod expenses;
pub mod schema;
mod store;

pub use error::{StoreError, StoreResult};
pub use store::Store;
