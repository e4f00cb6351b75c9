use chrono::{Month, NaiveDate};
use rust_decimal::Decimal;
use tally_domain::ValidationError;
use tally_store::{Store, StoreError};
use tempfile::tempdir;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn amount(raw: &str) -> Decimal {
    raw.parse().unwrap()
}

fn food_and_housing() -> Store {
    Store::open_in_memory_with_categories(&["Food", "Housing"]).expect("open store")
}

#[test]
fn added_expense_is_returned_unchanged_by_range_query() {
    let store = food_and_housing();
    let id = store
        .add_expense(amount("50.00"), "Food", "2024-03-05", "lunch")
        .unwrap();

    let listed = store
        .list_expenses_in_range(date(2024, 3, 1), date(2024, 4, 1))
        .unwrap();
    assert_eq!(listed.len(), 1);
    let expense = &listed[0];
    assert_eq!(expense.id, id);
    assert_eq!(expense.amount, amount("50.00"));
    assert_eq!(expense.category, "Food");
    assert_eq!(expense.date, date(2024, 3, 5));
    assert_eq!(expense.description, "lunch");
    assert_eq!(store.expense(id).unwrap().as_ref(), Some(expense));
}

#[test]
fn range_queries_exclude_the_end_boundary() {
    let store = food_and_housing();
    store
        .add_expense(amount("10"), "Food", "2024-03-01", "first day")
        .unwrap();
    store
        .add_expense(amount("20"), "Food", "2024-03-31", "last day")
        .unwrap();
    store
        .add_expense(amount("40"), "Food", "2024-04-01", "next month")
        .unwrap();
    store
        .add_expense(amount("80"), "Food", "2024-02-29", "previous month")
        .unwrap();

    let start = date(2024, 3, 1);
    let end = date(2024, 4, 1);
    assert_eq!(store.total_in_range(start, end).unwrap(), amount("30"));
    let listed = store.list_expenses_in_range(start, end).unwrap();
    let descriptions: Vec<_> = listed.iter().map(|e| e.description.as_str()).collect();
    assert_eq!(descriptions, vec!["last day", "first day"]);
}

#[test]
fn empty_ranges_report_zero_and_no_categories() {
    let store = food_and_housing();
    let start = date(2024, 3, 1);
    let end = date(2024, 4, 1);
    assert!(store.total_in_range(start, end).unwrap().is_zero());
    assert!(store.totals_by_category_in_range(start, end).unwrap().is_empty());
    assert!(store.list_expenses_in_range(start, end).unwrap().is_empty());
}

#[test]
fn category_totals_partition_in_range_expenses() {
    let store = food_and_housing();
    for (value, category, day) in [
        ("12.50", "Food", "2024-03-02"),
        ("7.25", "Food", "2024-03-09"),
        ("900", "Housing", "2024-03-01"),
        ("5", "Food", "2024-04-01"),
    ] {
        store.add_expense(amount(value), category, day, "").unwrap();
    }
    let start = date(2024, 3, 1);
    let end = date(2024, 4, 1);

    let totals = store.totals_by_category_in_range(start, end).unwrap();
    assert_eq!(totals.len(), 2);
    assert_eq!(totals["Food"], amount("19.75"));
    assert_eq!(totals["Housing"], amount("900"));
    let summed: Decimal = totals.values().copied().sum();
    assert_eq!(summed, store.total_in_range(start, end).unwrap());
}

#[test]
fn listing_orders_by_date_descending() {
    let store = food_and_housing();
    for day in ["2024-03-10", "2024-03-02", "2024-03-21"] {
        store.add_expense(amount("1"), "Food", day, day).unwrap();
    }
    let listed = store
        .list_expenses_in_range(date(2024, 3, 1), date(2024, 4, 1))
        .unwrap();
    let dates: Vec<_> = listed.iter().map(|e| e.date).collect();
    assert_eq!(
        dates,
        vec![date(2024, 3, 21), date(2024, 3, 10), date(2024, 3, 2)]
    );
}

#[test]
fn invalid_expenses_are_rejected_before_writing() {
    let store = food_and_housing();
    for bad in ["0", "-5"] {
        let err = store
            .add_expense(amount(bad), "Food", "2024-03-05", "")
            .unwrap_err();
        assert!(
            matches!(err, StoreError::Validation(ValidationError::NonPositiveAmount(_))),
            "unexpected error: {err:?}"
        );
    }
    let err = store
        .add_expense(amount("5"), "Food", "not-a-date", "")
        .unwrap_err();
    assert!(matches!(
        err,
        StoreError::Validation(ValidationError::InvalidDate(_))
    ));
    let err = store
        .add_expense(amount("5"), "Travel", "2024-03-05", "")
        .unwrap_err();
    assert!(matches!(
        err,
        StoreError::Validation(ValidationError::UnknownCategory(ref name)) if name == "Travel"
    ));
    assert_eq!(store.expense_count().unwrap(), 0);
}

#[test]
fn update_replaces_all_fields() {
    let store = food_and_housing();
    let id = store
        .add_expense(amount("50"), "Food", "2024-03-05", "lunch")
        .unwrap();
    store
        .update_expense(id, amount("1200"), "Housing", "2024-03-01", "rent")
        .unwrap();

    let updated = store.expense(id).unwrap().expect("row exists");
    assert_eq!(updated.amount, amount("1200.00"));
    assert_eq!(updated.category, "Housing");
    assert_eq!(updated.date, date(2024, 3, 1));
    assert_eq!(updated.description, "rent");
}

#[test]
fn update_validates_and_reports_missing_rows() {
    let store = food_and_housing();
    let id = store
        .add_expense(amount("50"), "Food", "2024-03-05", "lunch")
        .unwrap();
    let err = store
        .update_expense(id, amount("0"), "Food", "2024-03-05", "")
        .unwrap_err();
    assert!(err.is_validation());

    let err = store
        .update_expense(id + 100, amount("5"), "Food", "2024-03-05", "")
        .unwrap_err();
    assert!(err.is_not_found(), "unexpected error: {err:?}");
    assert_eq!(err.to_string(), format!("expense {} not found", id + 100));
}

#[test]
fn delete_is_idempotent() {
    let store = food_and_housing();
    let id = store
        .add_expense(amount("50"), "Food", "2024-03-05", "lunch")
        .unwrap();
    assert!(store.delete_expense(id).unwrap());
    assert!(!store.delete_expense(id).unwrap());
    assert!(store.expense(id).unwrap().is_none());
}

#[test]
fn upsert_budget_keeps_one_row_with_latest_amount() {
    let store = food_and_housing();
    let first = store
        .upsert_budget("Food", amount("150"), Month::March, 2024)
        .unwrap();
    let second = store
        .upsert_budget("Food", amount("200"), Month::March, 2024)
        .unwrap();
    assert_eq!(first, second);

    let budgets = store.budgets_for_month(Month::March, 2024).unwrap();
    assert_eq!(budgets.len(), 1);
    assert_eq!(budgets[0].amount, amount("200"));
    assert_eq!(
        store.budget_amount("Food", Month::March, 2024).unwrap(),
        Some(amount("200"))
    );
}

#[test]
fn budgets_are_scoped_to_month_and_year() {
    let store = food_and_housing();
    store
        .upsert_budget("Food", amount("200"), Month::March, 2024)
        .unwrap();
    store
        .upsert_budget("Housing", amount("1000"), Month::March, 2024)
        .unwrap();
    store
        .upsert_budget("Food", amount("999"), Month::March, 2025)
        .unwrap();
    store
        .upsert_budget("Food", amount("999"), Month::April, 2024)
        .unwrap();

    assert_eq!(
        store.budget_for_month(Month::March, 2024).unwrap(),
        amount("1200")
    );
    assert!(store
        .budget_for_month(Month::May, 2024)
        .unwrap()
        .is_zero());
    assert_eq!(store.budget_amount("Housing", Month::April, 2024).unwrap(), None);
}

#[test]
fn negative_budgets_are_rejected() {
    let store = food_and_housing();
    let err = store
        .upsert_budget("Food", amount("-1"), Month::March, 2024)
        .unwrap_err();
    assert!(matches!(
        err,
        StoreError::Validation(ValidationError::NegativeBudget { .. })
    ));
    store
        .upsert_budget("Food", Decimal::ZERO, Month::March, 2024)
        .expect("zero budget is allowed");
}

#[test]
fn batch_budget_save_is_all_or_nothing() {
    let mut store = food_and_housing();
    store
        .upsert_budget("Food", amount("100"), Month::March, 2024)
        .unwrap();

    let err = store
        .save_budgets(
            Month::March,
            2024,
            &[("Food", amount("250")), ("Housing", amount("-10"))],
        )
        .unwrap_err();
    assert!(err.is_validation());
    assert_eq!(
        store.budget_amount("Food", Month::March, 2024).unwrap(),
        Some(amount("100"))
    );
    assert_eq!(store.budget_amount("Housing", Month::March, 2024).unwrap(), None);

    let written = store
        .save_budgets(
            Month::March,
            2024,
            &[("Food", amount("250")), ("Housing", amount("1000"))],
        )
        .unwrap();
    assert_eq!(written, 2);
    assert_eq!(
        store.budget_for_month(Month::March, 2024).unwrap(),
        amount("1250")
    );
}

#[test]
fn monthly_scenario_reports_over_budget() {
    let store = food_and_housing();
    store
        .add_expense(amount("50.00"), "Food", "2024-03-05", "lunch")
        .unwrap();
    store
        .add_expense(amount("1200.00"), "Housing", "2024-03-01", "rent")
        .unwrap();
    let start = date(2024, 3, 1);
    let end = date(2024, 4, 1);

    let total = store.total_in_range(start, end).unwrap();
    assert_eq!(total, amount("1250.00"));
    let totals = store.totals_by_category_in_range(start, end).unwrap();
    assert_eq!(totals["Food"], amount("50.00"));
    assert_eq!(totals["Housing"], amount("1200.00"));

    store
        .upsert_budget("Food", amount("200"), Month::March, 2024)
        .unwrap();
    let budget = store.budget_for_month(Month::March, 2024).unwrap();
    assert_eq!(budget, amount("200"));
    assert_eq!(budget - total, amount("-1050"));
}

#[test]
fn data_survives_reopening_the_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("data").join("expenses.db");
    {
        let store = Store::open(&path).unwrap();
        store
            .add_expense(amount("19.99"), "Shopping", "2024-05-20", "socks")
            .unwrap();
        store
            .upsert_budget("Shopping", amount("50"), Month::May, 2024)
            .unwrap();
    }
    let store = Store::open(&path).unwrap();
    assert_eq!(
        store
            .total_in_range(date(2024, 5, 1), date(2024, 6, 1))
            .unwrap(),
        amount("19.99")
    );
    assert_eq!(
        store.budget_for_month(Month::May, 2024).unwrap(),
        amount("50")
    );
    assert_eq!(store.category_count().unwrap(), 8);
}
