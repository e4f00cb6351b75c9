use assert_cmd::Command;
use assert_fs::prelude::*;
use assert_fs::TempDir;
use predicates::prelude::*;
use predicates::str::contains;
use regex::Regex;

fn tally(home: &TempDir, script: &str) -> assert_cmd::assert::Assert {
    Command::cargo_bin("tally_cli")
        .expect("binary builds")
        .env("TALLY_CLI_SCRIPT", "1")
        .env("TALLY_HOME", home.path())
        .env("RUST_LOG", "off")
        .write_stdin(script.to_string())
        .assert()
}

const MARCH_SCENARIO: &str = "\
period march 2024
expense add 50 Food 2024-03-05 lunch
expense add 1200 housing 2024-03-01 \"monthly rent\"
budget set food 200
";

#[test]
fn summary_reports_overspend() {
    let home = TempDir::new().unwrap();
    let script = format!("{MARCH_SCENARIO}summary\nexit\n");
    tally(&home, &script)
        .success()
        .stdout(contains("Viewing March 2024."))
        .stdout(contains("Total Spent: $1,250.00"))
        .stdout(contains("Monthly Budget: $200.00"))
        .stdout(contains("Remaining: -$1,050.00"))
        .stdout(contains("Over budget by $1,050.00."));

    home.child("data/expenses.db").assert(predicate::path::exists());
}

#[test]
fn list_renders_day_first_dates_newest_first() {
    let home = TempDir::new().unwrap();
    let script = format!("{MARCH_SCENARIO}list\n");
    let output = tally(&home, &script).success().get_output().stdout.clone();
    let stdout = String::from_utf8(output).unwrap();

    let dates: Vec<&str> = Regex::new(r"\b\d{2}/\d{2}/\d{4}\b")
        .unwrap()
        .find_iter(&stdout)
        .map(|m| m.as_str())
        .collect();
    assert_eq!(dates, ["05/03/2024", "01/03/2024"]);
    assert!(stdout.contains("monthly rent"));
    assert!(stdout.contains("$1,250.00"));
}

#[test]
fn chart_lists_categories_by_share() {
    let home = TempDir::new().unwrap();
    let script = format!("{MARCH_SCENARIO}chart\nperiod april 2024\nchart\n");
    let output = tally(&home, &script).success().get_output().stdout.clone();
    let stdout = String::from_utf8(output).unwrap();

    assert!(stdout.contains("Spending by Category (March 2024)"));
    let housing = stdout.find("# Housing").expect("housing legend");
    let food = stdout.find("* Food").expect("food legend");
    assert!(housing < food);
    assert!(stdout.contains("No data for selected period"));
}

#[test]
fn invalid_input_is_reported_and_the_shell_continues() {
    let home = TempDir::new().unwrap();
    let script = "\
period march 2024
expense add 0 Food 2024-03-05 free
expense add -5 Food 2024-03-05 refund
expense add 12 Food not-a-date
expense add 12 Snacks 2024-03-05
budget set Food -10
expense add 12 Food 2024-03-05 ok
summary
";
    tally(&home, script)
        .success()
        .stdout(contains("Amount must be positive"))
        .stdout(contains("Invalid date `not-a-date`"))
        .stdout(contains("Unknown category `Snacks`"))
        .stdout(contains("Budget for Food cannot be negative"))
        .stdout(contains("Total Spent: $12.00"));
}

#[test]
fn budget_all_saves_one_amount_per_category() {
    let home = TempDir::new().unwrap();
    let script = "\
period march 2024
budget all 100 100 100 100 100 100 100 -1
budget show
budget all 10 20 30 40 50 60 70 80
budget show
";
    tally(&home, script)
        .success()
        .stdout(contains("No budgets set for March 2024."))
        .stdout(contains("Saved 8 budgets for March 2024."))
        .stdout(contains("$360.00"));
}

#[test]
fn edit_and_delete_by_id() {
    let home = TempDir::new().unwrap();
    let script = "\
expense add 20 Food 2024-03-05 lunch
expense edit 1 25 Entertainment 2024-03-06 cinema
expense show 1
expense delete 1
expense delete 1
expense edit 1 25 Food 2024-03-06 gone
";
    tally(&home, script)
        .success()
        .stdout(contains("Expense #1 updated."))
        .stdout(contains("Entertainment"))
        .stdout(contains("06/03/2024"))
        .stdout(contains("Expense #1 deleted."))
        .stdout(contains("Expense #1 does not exist."))
        .stdout(contains("expense 1 not found"));
}

#[test]
fn unknown_commands_get_suggestions() {
    let home = TempDir::new().unwrap();
    tally(&home, "sumary\n")
        .success()
        .stdout(contains("Unknown command `sumary`"))
        .stdout(contains("Did you mean `summary`?"));
}

#[test]
fn config_changes_persist_between_runs() {
    let home = TempDir::new().unwrap();
    tally(&home, "config set currency_symbol €\n")
        .success()
        .stdout(contains("Updated `currency_symbol`."));
    home.child("config/config.json")
        .assert(predicate::str::contains("\"currency_symbol\": \"€\""));

    let script = format!("{MARCH_SCENARIO}summary\n");
    tally(&home, &script)
        .success()
        .stdout(contains("Total Spent: €1,250.00"));
}

#[test]
fn time_only_date_format_is_rejected_and_list_still_renders() {
    let home = TempDir::new().unwrap();
    let script = format!("config set display_date_format %H:%M\n{MARCH_SCENARIO}list\n");
    tally(&home, &script)
        .success()
        .stdout(contains("is not a valid date format"))
        .stdout(contains("05/03/2024"))
        .stdout(contains("Updated `display_date_format`.").not());
    home.child("config/config.json").assert(predicate::path::missing());
}

#[test]
fn saved_time_only_date_format_does_not_break_list() {
    let home = TempDir::new().unwrap();
    home.child("config/config.json")
        .write_str(r#"{ "display_date_format": "%H:%M" }"#)
        .unwrap();
    let script = format!("{MARCH_SCENARIO}list\n");
    tally(&home, &script)
        .success()
        .stdout(contains("05/03/2024"))
        .stderr(contains("panicked").not());
}

#[test]
fn expenses_persist_between_runs() {
    let home = TempDir::new().unwrap();
    tally(&home, MARCH_SCENARIO).success();
    tally(&home, "period march 2024\nsummary\n")
        .success()
        .stdout(contains("Total Spent: $1,250.00"));
}

#[test]
fn summary_can_be_emitted_as_json() {
    let home = TempDir::new().unwrap();
    let script = format!("{MARCH_SCENARIO}summary --json\n");
    tally(&home, &script)
        .success()
        .stdout(contains("\"month\": \"March\""))
        .stdout(contains("\"year\": 2024"))
        .stdout(contains("\"over_budget\": true"));
}

#[test]
fn version_prints_build_rows() {
    let home = TempDir::new().unwrap();
    tally(&home, "version\n")
        .success()
        .stdout(contains(format!("Tally {}", env!("CARGO_PKG_VERSION"))))
        .stdout(predicate::str::is_match(r"Build\s+: \S+ \((clean|dirty|unknown)\)").unwrap())
        .stdout(contains("Records      : 8 categories, 0 expenses"));
}
