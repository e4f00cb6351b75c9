use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::output::{self, section as output_section};
use crate::cli::registry::CommandEntry;

/// Keys that only take effect when the store is next opened.
const RESTART_KEYS: [&str; 2] = ["database_path", "default_categories"];

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "config",
        "Show or change preferences",
        "config <show | set <key> <value>>",
        cmd_config,
    )]
}

fn cmd_config(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args {
        [] => show_config(context),
        [action] if action.eq_ignore_ascii_case("show") => show_config(context),
        [action, key, value @ ..] if action.eq_ignore_ascii_case("set") && !value.is_empty() => {
            set_config(context, key, &value.join(" "))
        }
        _ => Err(CommandError::usage("config <show | set <key> <value>>")),
    }
}

fn show_config(context: &mut ShellContext) -> CommandResult {
    output_section("Configuration");
    for (key, value) in context.app.config.entries() {
        output::info(format!("  {:<20} {}", key, value));
    }
    output::info(format!("  {:<20} {}", "config file", context.app.config_path().display()));
    Ok(())
}

fn set_config(context: &mut ShellContext, key: &str, value: &str) -> CommandResult {
    context.app.update_config(key, value)?;
    context.apply_output_preferences();
    output::success(format!("Updated `{}`.", key.to_ascii_lowercase()));
    if RESTART_KEYS.contains(&key.to_ascii_lowercase().as_str()) {
        context.print_hint("This setting applies the next time tally starts.");
    }
    Ok(())
}
