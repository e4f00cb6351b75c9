pub mod budget_service;
pub mod chart_service;
pub mod expense_service;
pub mod summary_service;

pub use budget_service::BudgetService;
pub use chart_service::{CategoryShare, ChartService};
pub use expense_service::ExpenseService;
pub use summary_service::{MonthlySummary, SummaryService};

pub use crate::core::errors::{Result as ServiceResult, TallyError as ServiceError};
