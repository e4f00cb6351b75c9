//! Core CLI dispatch, shell context and error reporting.

use std::io;

use chrono::NaiveDate;
use dialoguer::theme::ColorfulTheme;
use rust_decimal::Decimal;
use rustyline::error::ReadlineError;
use strsim::levenshtein;
use tally_config::ConfigError;
use tally_domain::{MonthWindow, ValidationError};
use tally_store::{Store, StoreError};
use thiserror::Error;
use tracing::{debug, warn};

pub use crate::core::errors::CliError;
use crate::core::{App, TallyError};
use crate::currency::{format_currency, format_date};

use super::commands;
use super::io as cli_io;
use super::output::{self, OutputPreferences};
use super::registry::{CommandEntry, CommandRegistry};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

pub type CommandResult = Result<(), CommandError>;

/// Mutable state shared by every command handler for one shell session.
pub struct ShellContext {
    pub(crate) mode: CliMode,
    pub(crate) registry: CommandRegistry,
    pub(crate) app: App,
    pub(crate) window: MonthWindow,
    pub(crate) theme: ColorfulTheme,
    pub(crate) last_command: Option<String>,
    pub(crate) running: bool,
}

impl ShellContext {
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        let app = App::open_default()?;
        Self::with_app(mode, app)
    }

    /// Builds a shell over an already opened application; the viewed month starts at today.
    pub fn with_app(mode: CliMode, app: App) -> Result<Self, CliError> {
        let mut registry = CommandRegistry::new();
        commands::register_all(&mut registry);
        let window = MonthWindow::current().map_err(TallyError::from)?;

        let context = ShellContext {
            mode,
            registry,
            app,
            window,
            theme: ColorfulTheme::default(),
            last_command: None,
            running: true,
        };
        context.apply_output_preferences();
        Ok(context)
    }

    /// Pushes the configured display preferences to the output helpers.
    /// Script mode never emits colour codes.
    pub(crate) fn apply_output_preferences(&self) {
        let mut prefs = OutputPreferences::from_config(&self.app.config);
        if self.mode == CliMode::Script {
            prefs.color_enabled = false;
        }
        output::set_preferences(prefs);
    }

    pub(crate) fn theme(&self) -> &ColorfulTheme {
        &self.theme
    }

    pub(crate) fn can_prompt(&self) -> bool {
        self.mode == CliMode::Interactive
    }

    pub(crate) fn store(&self) -> &Store {
        self.app.store()
    }

    pub(crate) fn store_mut(&mut self) -> &mut Store {
        self.app.store_mut()
    }

    pub fn window(&self) -> MonthWindow {
        self.window
    }

    pub(crate) fn set_window(&mut self, window: MonthWindow) {
        debug!(window = %window, "viewed month changed");
        self.window = window;
    }

    pub(crate) fn prompt(&self) -> String {
        format!("tally [{}]> ", self.window.label())
    }

    pub(crate) fn print_banner(&self) {
        output::section("Tally expense tracker");
        output::info(format!(
            "Viewing {}. Type `help` for commands.",
            self.window.label()
        ));
        output::hint(format!("database: {}", self.app.database_path().display()));
    }

    pub(crate) fn format_amount(&self, amount: Decimal) -> String {
        format_currency(amount, &self.app.config.currency_symbol)
    }

    pub(crate) fn format_date(&self, date: NaiveDate) -> String {
        format_date(date, &self.app.config.display_date_format)
    }

    /// Maps a user-typed category onto its stored spelling, ignoring case.
    /// Unknown names are returned unchanged so the store can reject them.
    pub(crate) fn resolve_category(&self, raw: &str) -> Result<String, CommandError> {
        let raw = raw.trim();
        let categories = self.store().list_categories()?;
        Ok(categories
            .into_iter()
            .find(|name| name.eq_ignore_ascii_case(raw))
            .unwrap_or_else(|| raw.to_string()))
    }

    pub(crate) fn command_names(&self) -> Vec<&'static str> {
        self.registry.names().collect()
    }

    pub(crate) fn command(&self, name: &str) -> Option<&CommandEntry> {
        self.registry.get(name)
    }

    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        raw: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        if let Some(handler) = self.registry.handler(command) {
            match handler(self, args) {
                Ok(()) => Ok(LoopControl::Continue),
                Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
                Err(err) => Err(err),
            }
        } else {
            self.suggest_command(raw);
            Ok(LoopControl::Continue)
        }
    }

    #[cfg(test)]
    pub(crate) fn process_line(&mut self, line: &str) -> Result<LoopControl, CommandError> {
        crate::cli::shell::handle_line(self, line)
    }

    /// Closest registered command by edit distance, if any is within reach.
    pub(crate) fn closest_command(&self, input: &str) -> Option<&'static str> {
        let needle = input.to_lowercase();
        self.registry
            .names()
            .map(|name| (levenshtein(name, &needle), name))
            .filter(|(distance, _)| *distance <= 3)
            .min_by_key(|(distance, _)| *distance)
            .map(|(_, name)| name)
    }

    pub(crate) fn suggest_command(&self, input: &str) {
        output::warning(format!(
            "Unknown command `{}`. Type `help` to see available commands.",
            input
        ));
        if let Some(best) = self.closest_command(input) {
            output::info(format!("Did you mean `{}`?", best));
        }
    }

    pub(crate) fn confirm_exit(&self) -> Result<bool, CliError> {
        if self.mode == CliMode::Script {
            return Ok(true);
        }
        cli_io::confirm_action(&self.theme, "Exit shell?", true).map_err(CliError::from)
    }

    /// Prints a failed command's error; the shell keeps running afterwards.
    pub(crate) fn report_error(&self, err: CommandError) -> Result<(), CliError> {
        match err {
            CommandError::ExitRequested => Ok(()),
            CommandError::InvalidArguments(message) => {
                self.print_error(&message);
                self.print_hint("Use `help <command>` for usage details.");
                Ok(())
            }
            CommandError::Core(TallyError::Validation(inner)) => {
                self.print_error(&format!("Invalid input: {inner}"));
                Ok(())
            }
            other => {
                warn!(error = %other, command = ?self.last_command, "command failed");
                self.print_error(&other.to_string());
                Ok(())
            }
        }
    }

    pub(crate) fn print_error(&self, message: &str) {
        output::error(message);
    }

    pub(crate) fn print_warning(&self, message: &str) {
        output::warning(message);
    }

    pub(crate) fn print_hint(&self, message: &str) {
        output::hint(message);
    }
}

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("{0}")]
    InvalidArguments(String),
    #[error("{0}")]
    Message(String),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serde(#[from] serde_json::Error),
    #[error(transparent)]
    Core(#[from] TallyError),
    #[error(transparent)]
    Dialoguer(#[from] dialoguer::Error),
    #[error("exit requested")]
    ExitRequested,
}

impl CommandError {
    pub(crate) fn usage(usage: &str) -> Self {
        CommandError::InvalidArguments(format!("usage: {usage}"))
    }
}

impl From<StoreError> for CommandError {
    fn from(err: StoreError) -> Self {
        CommandError::Core(err.into())
    }
}

impl From<ValidationError> for CommandError {
    fn from(err: ValidationError) -> Self {
        CommandError::Core(err.into())
    }
}

impl From<ConfigError> for CommandError {
    fn from(err: ConfigError) -> Self {
        CommandError::Core(err.into())
    }
}

impl From<CliError> for CommandError {
    fn from(err: CliError) -> Self {
        match err {
            CliError::Core(inner) => CommandError::Core(inner),
            CliError::Input(message) | CliError::Command(message) => {
                CommandError::InvalidArguments(message)
            }
        }
    }
}

impl From<CommandError> for CliError {
    fn from(err: CommandError) -> Self {
        match err {
            CommandError::Core(inner) => CliError::Core(inner),
            CommandError::InvalidArguments(message) => CliError::Input(message),
            other => CliError::Command(other.to_string()),
        }
    }
}

impl From<io::Error> for CliError {
    fn from(err: io::Error) -> Self {
        CliError::Command(err.to_string())
    }
}

impl From<ReadlineError> for CliError {
    fn from(err: ReadlineError) -> Self {
        CliError::Command(err.to_string())
    }
}

#[cfg(test)]
pub(crate) fn script_context(base: &std::path::Path) -> ShellContext {
    let app = App::with_base_dir(base.to_path_buf()).expect("app opens");
    ShellContext::with_app(CliMode::Script, app).expect("shell context")
}

#[cfg(test)]
pub(crate) fn process_script(context: &mut ShellContext, lines: &[&str]) -> Result<(), CliError> {
    for line in lines {
        match context.process_line(line) {
            Ok(LoopControl::Continue) => {}
            Ok(LoopControl::Exit) => break,
            Err(err) => context.report_error(err)?,
        }
    }
    Ok(())
}
