//! Table definitions applied on every open.

/// Amounts are stored as integer cents; dates as `YYYY-MM-DD` text.
pub const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS categories (
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL UNIQUE
);

CREATE TABLE IF NOT EXISTS expenses (
    id INTEGER PRIMARY KEY,
    amount_cents INTEGER NOT NULL CHECK (amount_cents > 0),
    category TEXT NOT NULL REFERENCES categories(name),
    date TEXT NOT NULL,
    description TEXT NOT NULL DEFAULT ''
);

CREATE INDEX IF NOT EXISTS idx_expenses_date ON expenses(date);

CREATE TABLE IF NOT EXISTS budgets (
    id INTEGER PRIMARY KEY,
    category TEXT NOT NULL REFERENCES categories(name),
    amount_cents INTEGER NOT NULL CHECK (amount_cents >= 0),
    month TEXT NOT NULL,
    year INTEGER NOT NULL,
    UNIQUE (category, month, year)
);
"#;

/// Connection-level settings applied before the schema.
pub const PRAGMAS: &str = "PRAGMA foreign_keys = ON;";
