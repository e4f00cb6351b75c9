use chrono::Local;
use tally_domain::Expense;

use crate::cli::commands::parse_id;
use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::forms::{ExpenseFormData, ExpenseWizard, FormResult, WizardInteraction};
use crate::cli::io;
use crate::cli::output::{self, section as output_section};
use crate::cli::registry::CommandEntry;
use crate::core::services::ExpenseService;

const ADD_USAGE: &str = "expense add <amount> <category> <YYYY-MM-DD> [description..]";
const EDIT_USAGE: &str = "expense edit <id> <amount> <category> <YYYY-MM-DD> [description..]";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "expense",
        "Add, edit, delete or show expenses",
        "expense <add|edit|delete|show> ...",
        cmd_expense,
    )]
}

fn cmd_expense(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let Some((subcommand, rest)) = args.split_first() else {
        return Err(CommandError::usage("expense <add|edit|delete|show> ..."));
    };
    match subcommand.to_ascii_lowercase().as_str() {
        "add" => handle_add(context, rest),
        "edit" => handle_edit(context, rest),
        "delete" | "remove" | "rm" => handle_delete(context, rest),
        "show" => handle_show(context, rest),
        other => Err(CommandError::InvalidArguments(format!(
            "unknown expense subcommand `{}`",
            other
        ))),
    }
}

/// Splits `<amount> <category> <date> [description..]` into form fields.
fn form_from_args(
    context: &ShellContext,
    args: &[&str],
    usage: &str,
) -> Result<ExpenseFormData, CommandError> {
    match args {
        [amount, category, date, description @ ..] => Ok(ExpenseFormData {
            amount: amount.to_string(),
            category: context.resolve_category(category)?,
            date: date.to_string(),
            description: description.join(" "),
        }),
        _ => Err(CommandError::usage(usage)),
    }
}

fn handle_add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let data = if args.is_empty() && context.can_prompt() {
        let wizard = ExpenseWizard::new_create(
            context.store().list_categories()?,
            Local::now().date_naive(),
        );
        match wizard.run(&mut WizardInteraction::new(context.theme()))? {
            FormResult::Completed(data) => data,
            FormResult::Cancelled => {
                output::warning("Expense not saved.");
                return Ok(());
            }
        }
    } else {
        form_from_args(context, args, ADD_USAGE)?
    };

    let id = ExpenseService::add(
        context.store(),
        &data.amount,
        &data.category,
        &data.date,
        &data.description,
    )?;
    output::success(format!("Expense #{id} recorded."));
    let expense = ExpenseService::get(context.store(), id)?;
    if !context.window().contains(expense.date) {
        context.print_hint(&format!(
            "Dated {}, outside the viewed month ({}).",
            context.format_date(expense.date),
            context.window().label()
        ));
    }
    Ok(())
}

fn handle_edit(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let Some((raw_id, fields)) = args.split_first() else {
        return Err(CommandError::usage(EDIT_USAGE));
    };
    let id = parse_id(raw_id)?;

    let data = if fields.is_empty() && context.can_prompt() {
        let existing = ExpenseService::get(context.store(), id)?;
        let wizard = ExpenseWizard::new_edit(
            context.store().list_categories()?,
            existing,
            Local::now().date_naive(),
        );
        match wizard.run(&mut WizardInteraction::new(context.theme()))? {
            FormResult::Completed(data) => data,
            FormResult::Cancelled => {
                output::warning("Changes discarded.");
                return Ok(());
            }
        }
    } else {
        form_from_args(context, fields, EDIT_USAGE)?
    };

    ExpenseService::update(
        context.store(),
        id,
        &data.amount,
        &data.category,
        &data.date,
        &data.description,
    )?;
    output::success(format!("Expense #{id} updated."));
    Ok(())
}

fn handle_delete(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [raw_id] = args else {
        return Err(CommandError::usage("expense delete <id>"));
    };
    let id = parse_id(raw_id)?;

    if context.can_prompt() {
        let Some(expense) = context.store().expense(id)? else {
            output::info(format!("Expense #{id} does not exist."));
            return Ok(());
        };
        let prompt = format!(
            "Delete {} {} on {}?",
            context.format_amount(expense.amount),
            expense.category,
            context.format_date(expense.date)
        );
        if !io::confirm_action(context.theme(), &prompt, false)? {
            output::info("Nothing deleted.");
            return Ok(());
        }
    }

    if ExpenseService::remove(context.store(), id)? {
        output::success(format!("Expense #{id} deleted."));
    } else {
        output::info(format!("Expense #{id} does not exist."));
    }
    Ok(())
}

fn handle_show(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [raw_id] = args else {
        return Err(CommandError::usage("expense show <id>"));
    };
    let expense = ExpenseService::get(context.store(), parse_id(raw_id)?)?;
    print_expense(context, &expense);
    Ok(())
}

fn print_expense(context: &ShellContext, expense: &Expense) {
    output_section(format!("Expense #{}", expense.id));
    output::info(format!("  Amount      : {}", context.format_amount(expense.amount)));
    output::info(format!("  Category    : {}", expense.category));
    output::info(format!("  Date        : {}", context.format_date(expense.date)));
    let description = if expense.description.is_empty() {
        "-"
    } else {
        expense.description.as_str()
    };
    output::info(format!("  Description : {}", description));
}
