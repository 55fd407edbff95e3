//! Settings for a single run of the spending summary.

use std::path::PathBuf;

/// Where the store lives if no path is given.
pub const DEFAULT_DB_PATH: &str = "db/finance.db";

/// The settings for [crate::run].
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// File path to the SQLite database that holds the `transactions` table.
    ///
    /// The `category_summary` table is written to the same database.
    pub db_path: PathBuf,
    /// If set, the report ends with how far the total spent is over or under
    /// this amount.
    pub budget: Option<f64>,
}

impl Config {
    /// Create a config for the database at `db_path` with no budget.
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
            budget: None,
        }
    }

    /// Set the budget to compare the total spent against.
    pub fn budget(mut self, budget: Option<f64>) -> Self {
        self.budget = budget;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_DB_PATH)
    }
}
