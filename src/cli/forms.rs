//! Wizard-style data entry for interactive commands.
//!
//! Wizards talk to the terminal through [`FormInteraction`] so they can be
//! driven by a scripted implementation in tests.

use chrono::NaiveDate;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};
use rust_decimal::Decimal;
use tally_domain::{
    parse_amount, parse_iso_date, validate_budget_amount, validate_expense_amount, Expense,
    ISO_DATE_FORMAT,
};

use crate::cli::core::CommandError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormResult<T> {
    Completed(T),
    Cancelled,
}

pub type FieldValidator<'v> = &'v dyn Fn(&str) -> Result<(), String>;

/// Terminal operations a wizard needs.
pub trait FormInteraction {
    fn text(
        &mut self,
        prompt: &str,
        initial: Option<&str>,
        allow_empty: bool,
        validator: FieldValidator<'_>,
    ) -> Result<String, CommandError>;

    /// Returns `None` when the user backs out.
    fn choose(
        &mut self,
        prompt: &str,
        options: &[String],
        default: usize,
    ) -> Result<Option<usize>, CommandError>;

    fn confirm(&mut self, prompt: &str) -> Result<bool, CommandError>;
}

/// [`FormInteraction`] backed by dialoguer prompts.
pub struct WizardInteraction<'t> {
    theme: &'t ColorfulTheme,
}

impl<'t> WizardInteraction<'t> {
    pub fn new(theme: &'t ColorfulTheme) -> Self {
        Self { theme }
    }
}

impl FormInteraction for WizardInteraction<'_> {
    fn text(
        &mut self,
        prompt: &str,
        initial: Option<&str>,
        allow_empty: bool,
        validator: FieldValidator<'_>,
    ) -> Result<String, CommandError> {
        let mut input = Input::<String>::with_theme(self.theme)
            .with_prompt(prompt)
            .allow_empty(allow_empty)
            .validate_with(move |value: &String| validator(value));
        if let Some(initial) = initial {
            input = input.with_initial_text(initial);
        }
        Ok(input.interact_text()?.trim().to_string())
    }

    fn choose(
        &mut self,
        prompt: &str,
        options: &[String],
        default: usize,
    ) -> Result<Option<usize>, CommandError> {
        Ok(Select::with_theme(self.theme)
            .with_prompt(prompt)
            .items(options)
            .default(default.min(options.len().saturating_sub(1)))
            .interact_opt()?)
    }

    fn confirm(&mut self, prompt: &str) -> Result<bool, CommandError> {
        Ok(Confirm::with_theme(self.theme)
            .with_prompt(prompt)
            .default(true)
            .interact()?)
    }
}

/// Raw expense fields collected by [`ExpenseWizard`], ready for the expense service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseFormData {
    pub amount: String,
    pub category: String,
    pub date: String,
    pub description: String,
}

pub struct ExpenseWizard {
    categories: Vec<String>,
    initial: Option<Expense>,
    today: NaiveDate,
}

impl ExpenseWizard {
    pub fn new_create(categories: Vec<String>, today: NaiveDate) -> Self {
        Self {
            categories,
            initial: None,
            today,
        }
    }

    /// Edit flow; every field is pre-filled from `expense`.
    pub fn new_edit(categories: Vec<String>, expense: Expense, today: NaiveDate) -> Self {
        Self {
            categories,
            initial: Some(expense),
            today,
        }
    }

    pub fn run(
        &self,
        ui: &mut dyn FormInteraction,
    ) -> Result<FormResult<ExpenseFormData>, CommandError> {
        let initial_amount = self.initial.as_ref().map(|e| e.amount.to_string());
        let amount = ui.text(
            "Amount",
            initial_amount.as_deref(),
            false,
            &|raw: &str| {
                parse_amount(raw)
                    .and_then(validate_expense_amount)
                    .map(|_| ())
                    .map_err(|err| err.to_string())
            },
        )?;

        let default_category = self
            .initial
            .as_ref()
            .and_then(|e| self.categories.iter().position(|c| *c == e.category))
            .unwrap_or(0);
        let Some(index) = ui.choose("Category", &self.categories, default_category)? else {
            return Ok(FormResult::Cancelled);
        };
        let Some(category) = self.categories.get(index).cloned() else {
            return Ok(FormResult::Cancelled);
        };

        let initial_date = self
            .initial
            .as_ref()
            .map_or(self.today, |e| e.date)
            .format(ISO_DATE_FORMAT)
            .to_string();
        let date = ui.text("Date (YYYY-MM-DD)", Some(&initial_date), false, &|raw: &str| {
            parse_iso_date(raw).map(|_| ()).map_err(|err| err.to_string())
        })?;

        let initial_description = self.initial.as_ref().map(|e| e.description.as_str());
        let accept_any = |_: &str| -> Result<(), String> { Ok(()) };
        let description = ui.text("Description", initial_description, true, &accept_any)?;

        if !ui.confirm("Save expense?")? {
            return Ok(FormResult::Cancelled);
        }
        Ok(FormResult::Completed(ExpenseFormData {
            amount,
            category,
            date,
            description,
        }))
    }
}

/// Collects one budget amount per category, pre-filled with the current values.
pub struct BudgetWizard {
    label: String,
    current: Vec<(String, Decimal)>,
}

impl BudgetWizard {
    pub fn new(label: impl Into<String>, current: Vec<(String, Decimal)>) -> Self {
        Self {
            label: label.into(),
            current,
        }
    }

    pub fn run(
        &self,
        ui: &mut dyn FormInteraction,
    ) -> Result<FormResult<Vec<(String, String)>>, CommandError> {
        let mut entries = Vec::with_capacity(self.current.len());
        for (category, amount) in &self.current {
            let initial = amount.to_string();
            let value = ui.text(category, Some(&initial), false, &|raw: &str| {
                parse_amount(raw)
                    .and_then(|amount| validate_budget_amount(category, amount))
                    .map(|_| ())
                    .map_err(|err| err.to_string())
            })?;
            entries.push((category.clone(), value));
        }

        if !ui.confirm(&format!("Save all budgets for {}?", self.label))? {
            return Ok(FormResult::Cancelled);
        }
        Ok(FormResult::Completed(entries))
    }
}
