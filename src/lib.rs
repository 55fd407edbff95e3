//! Spending summary is a small tool for reporting on personal finances.
//!
//! It reads the transactions recorded in a SQLite database, totals the amount
//! spent in each category, prints a report and saves the per-category totals
//! back to the database in the `category_summary` table.
//!
//! The steps are exposed individually ([load_transactions], [summarize],
//! [write_report], [write_category_summary]) and together as [run].

#![warn(missing_docs)]

use std::path::PathBuf;

mod budget;
mod config;
mod pipeline;
mod report;
mod store;
mod summary;
mod summary_table;
mod transaction;

pub use budget::BudgetStatus;
pub use config::{Config, DEFAULT_DB_PATH};
pub use pipeline::run;
pub use report::{format_currency, write_report};
pub use store::{open_read_only, open_read_write};
pub use summary::{CategorySummary, Summary, summarize};
pub use summary_table::{
    CATEGORY_SUMMARY_TABLE, get_category_summary, replace_category_summary,
    write_category_summary,
};
pub use transaction::{Transaction, get_all_transactions, load_transactions};

/// The errors that may occur while producing a spending summary.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The database could not be opened.
    ///
    /// This covers a missing file, a file that cannot be read or written, and
    /// a file that is not a SQLite database.
    #[error("could not open the database at {path:?}: {reason}")]
    Connection {
        /// The path that was given for the database.
        path: PathBuf,
        /// Why the database could not be opened.
        reason: String,
    },

    /// The transactions could not be queried, most likely because the
    /// `transactions` table or one of its columns does not exist.
    #[error("could not query transactions: {0}")]
    Query(rusqlite::Error),

    /// A transaction row held a value that cannot be summarised, e.g. a null
    /// or non-numeric amount.
    ///
    /// `row` counts from 1 in the order the rows were returned.
    #[error("invalid {column} in transaction row {row}: {reason}")]
    Data {
        /// The 1-based position of the row in the query results.
        row: usize,
        /// The name of the offending column.
        column: &'static str,
        /// A description of what was wrong with the value.
        reason: String,
    },

    /// The `category_summary` table could not be replaced.
    ///
    /// The replacement happens in a single SQL transaction, so the table is
    /// left as it was before the write was attempted.
    #[error("could not write the category summary: {0}")]
    Write(rusqlite::Error),

    /// The report could not be written to the output stream.
    #[error("could not write the report: {0}")]
    Output(String),
}

impl From<std::io::Error> for Error {
    fn from(value: std::io::Error) -> Self {
        Error::Output(value.to_string())
    }
}
