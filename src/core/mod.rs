pub mod app;
pub mod errors;
pub mod services;

pub use app::App;
pub use errors::{CliError, TallyError};
