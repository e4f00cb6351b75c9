//! Terminal shell presenting the expense store.

pub mod commands;
pub mod core;
pub mod forms;
pub mod help;
pub mod io;
pub mod output;
pub mod registry;
mod shell;
pub mod ui;

pub use self::core::{CliMode, CommandError, ShellContext};
pub use shell::{run_cli, SCRIPT_MODE_ENV};
