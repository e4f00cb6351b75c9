use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::output::{self, section as output_section};
use crate::cli::registry::CommandEntry;
use crate::cli::ui::table::{Table, TableColumn};

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "category",
        "List expense categories",
        "category list",
        cmd_category,
    )]
}

fn cmd_category(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args.first().map(|arg| arg.to_ascii_lowercase()).as_deref() {
        None | Some("list") => list_categories(context),
        Some(other) => Err(CommandError::InvalidArguments(format!(
            "unknown category subcommand `{}`",
            other
        ))),
    }
}

fn list_categories(context: &mut ShellContext) -> CommandResult {
    let categories = context.store().categories()?;
    if categories.is_empty() {
        output::warning("No categories defined.");
        return Ok(());
    }
    let mut table = Table::new(vec![TableColumn::right("ID"), TableColumn::left("Name")]);
    for category in categories {
        table.push_row(vec![category.id.to_string(), category.name]);
    }
    output_section("Categories");
    output::info(table.render());
    Ok(())
}
