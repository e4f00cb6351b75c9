#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Mutex;

use once_cell::sync::Lazy;
use tally_core::core::App;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Creates a fresh application directory that outlives the calling test.
pub fn temp_home() -> PathBuf {
    let temp = TempDir::new().expect("create temp dir");
    let base = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    base
}

/// Opens an application rooted in its own temporary directory.
pub fn setup_app() -> App {
    App::with_base_dir(temp_home()).expect("open app in temp dir")
}

/// Seeds the scenario shared by several suites:
/// lunch and rent in March 2024 plus a food budget.
pub fn seed_march_2024(app: &App) {
    let store = app.store();
    store
        .add_expense("50.00".parse().unwrap(), "Food", "2024-03-05", "lunch")
        .expect("add lunch");
    store
        .add_expense("1200.00".parse().unwrap(), "Housing", "2024-03-01", "rent")
        .expect("add rent");
    store
        .upsert_budget("Food", "200".parse().unwrap(), chrono::Month::March, 2024)
        .expect("food budget");
}
