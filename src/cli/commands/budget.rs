use rust_decimal::Decimal;

use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::forms::{BudgetWizard, FormResult, WizardInteraction};
use crate::cli::output::{self, section as output_section};
use crate::cli::registry::CommandEntry;
use crate::cli::ui::table::{Table, TableColumn};
use crate::core::services::BudgetService;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "budget",
        "Set or show monthly budgets for the viewed month",
        "budget <set <category> <amount> | show | all [<amount>..]>",
        cmd_budget,
    )]
}

fn cmd_budget(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let Some((subcommand, rest)) = args.split_first() else {
        return show_budgets(context);
    };
    match subcommand.to_ascii_lowercase().as_str() {
        "set" => set_budget(context, rest),
        "show" => show_budgets(context),
        "all" => set_all_budgets(context, rest),
        other => Err(CommandError::InvalidArguments(format!(
            "unknown budget subcommand `{}`",
            other
        ))),
    }
}

fn set_budget(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [category, amount] = args else {
        return Err(CommandError::usage("budget set <category> <amount>"));
    };
    let category = context.resolve_category(category)?;
    let window = context.window();
    BudgetService::set(context.store(), &category, amount, &window)?;
    let stored = context
        .store()
        .budget_amount(&category, window.month, window.year)?
        .unwrap_or(Decimal::ZERO);
    output::success(format!(
        "Budget for {} in {} set to {}.",
        category,
        window.label(),
        context.format_amount(stored)
    ));
    Ok(())
}

/// Saves one amount per category, categories taken in sorted order.
fn set_all_budgets(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let window = context.window();
    let entries = if args.is_empty() && context.can_prompt() {
        let current = BudgetService::current_amounts(context.store(), &window)?;
        let wizard = BudgetWizard::new(window.label(), current);
        match wizard.run(&mut WizardInteraction::new(context.theme()))? {
            FormResult::Completed(entries) => entries,
            FormResult::Cancelled => {
                output::warning("Budgets not saved.");
                return Ok(());
            }
        }
    } else {
        let categories = context.store().list_categories()?;
        if args.len() != categories.len() {
            return Err(CommandError::InvalidArguments(format!(
                "expected {} amounts, one per category ({})",
                categories.len(),
                categories.join(", ")
            )));
        }
        categories
            .into_iter()
            .zip(args.iter().map(|amount| amount.to_string()))
            .collect()
    };

    let written = BudgetService::save_all(context.store_mut(), &window, &entries)?;
    output::success(format!(
        "Saved {written} budgets for {}.",
        window.label()
    ));
    Ok(())
}

fn show_budgets(context: &mut ShellContext) -> CommandResult {
    let window = context.window();
    let budgets = BudgetService::for_month(context.store(), &window)?;
    if budgets.is_empty() {
        output::warning(format!("No budgets set for {}.", window.label()));
        return Ok(());
    }

    let mut table = Table::new(vec![TableColumn::left("Category"), TableColumn::right("Budget")]);
    for budget in &budgets {
        table.push_row(vec![budget.category.clone(), context.format_amount(budget.amount)]);
    }
    let total = context.store().budget_for_month(window.month, window.year)?;
    table.set_footer(vec!["Total".into(), context.format_amount(total)]);

    output_section(format!("Budgets ({})", window.label()));
    output::info(table.render());
    Ok(())
}
