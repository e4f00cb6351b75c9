//! Read-only views over the viewed month.

use tally_domain::{parse_month, MonthWindow};

use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::output::{self, current_preferences, section as output_section};
use crate::cli::registry::CommandEntry;
use crate::cli::ui::chart::{glyph, render_ring};
use crate::cli::ui::table::{Table, TableColumn};
use crate::core::services::{ChartService, ExpenseService, SummaryService};

const RING_RADIUS: usize = 6;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "period",
            "Show or change the viewed month",
            "period [<month> <year> | next | prev | current]",
            cmd_period,
        ),
        CommandEntry::new("list", "List expenses in the viewed month", "list", cmd_list),
        CommandEntry::new(
            "summary",
            "Total spent, monthly budget and what remains",
            "summary [--json]",
            cmd_summary,
        ),
        CommandEntry::new(
            "chart",
            "Ring chart of spending by category",
            "chart [--json]",
            cmd_chart,
        ),
    ]
}

fn cmd_period(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let window = match args {
        [] => {
            output::info(format!("Viewing {}.", context.window().label()));
            return Ok(());
        }
        [step] => match step.to_ascii_lowercase().as_str() {
            "next" => context.window().next()?,
            "prev" | "previous" => context.window().previous()?,
            "current" | "now" => MonthWindow::current()?,
            _ => return Err(CommandError::usage("period <month> <year>")),
        },
        [month, year] => {
            let month = parse_month(month)?;
            let year = year.parse::<i32>().map_err(|_| {
                CommandError::InvalidArguments(format!("`{year}` is not a valid year"))
            })?;
            MonthWindow::new(year, month)?
        }
        _ => return Err(CommandError::usage("period [<month> <year>]")),
    };
    context.set_window(window);
    output::success(format!("Viewing {}.", window.label()));
    Ok(())
}

fn cmd_list(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let window = context.window();
    let expenses = ExpenseService::list_month(context.store(), &window)?;
    if expenses.is_empty() {
        output::warning(format!("No expenses recorded for {}.", window.label()));
        return Ok(());
    }

    let mut table = Table::new(vec![
        TableColumn::right("ID"),
        TableColumn::left("Date"),
        TableColumn::left("Category"),
        TableColumn::right("Amount"),
        TableColumn::left("Description").max_width(40),
    ]);
    for expense in &expenses {
        table.push_row(vec![
            expense.id.to_string(),
            context.format_date(expense.date),
            expense.category.clone(),
            context.format_amount(expense.amount),
            expense.description.clone(),
        ]);
    }
    let total = context.store().total_in_range(window.start, window.end)?;
    table.set_footer(vec![
        String::new(),
        "Total".into(),
        format!("{} items", expenses.len()),
        context.format_amount(total),
    ]);

    output_section(format!("Expenses ({})", window.label()));
    output::info(table.render());
    Ok(())
}

fn cmd_summary(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let window = context.window();
    let summary = SummaryService::monthly_summary(context.store(), &window)?;
    if wants_json(args)? {
        output::info(serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }
    let remaining = context.format_amount(summary.remaining);

    output_section(format!("Monthly Summary ({})", window.label()));
    output::info(format!(
        "Total Spent: {}",
        context.format_amount(summary.total_spent)
    ));
    output::info(format!(
        "Monthly Budget: {}",
        context.format_amount(summary.budget)
    ));
    output::info(format!(
        "Remaining: {}",
        output::balance(&remaining, summary.over_budget)
    ));
    if summary.over_budget {
        output::warning(format!(
            "Over budget by {}.",
            context.format_amount(-summary.remaining)
        ));
    }
    Ok(())
}

fn cmd_chart(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let window = context.window();
    let shares = ChartService::category_shares(context.store(), &window)?;
    if wants_json(args)? {
        output::info(serde_json::to_string_pretty(&shares)?);
        return Ok(());
    }
    output_section(format!("Spending by Category ({})", window.label()));
    if shares.is_empty() {
        output::info("No data for selected period");
        return Ok(());
    }

    let colored = current_preferences().color_enabled;
    for line in render_ring(&shares, RING_RADIUS, colored) {
        output::info(line);
    }
    output::info("");
    for (index, share) in shares.iter().enumerate() {
        output::info(format!(
            "  {} {:<16} {:>12} {:>6}%",
            glyph(index),
            share.category,
            context.format_amount(share.amount),
            share.percent.to_string()
        ));
    }
    Ok(())
}

fn wants_json(args: &[&str]) -> Result<bool, CommandError> {
    match args {
        [] => Ok(false),
        [flag] if flag.eq_ignore_ascii_case("--json") => Ok(true),
        _ => Err(CommandError::InvalidArguments(
            "the only accepted option is `--json`".into(),
        )),
    }
}
