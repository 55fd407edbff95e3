//! Saving the per-category totals to the `category_summary` table.
//!
//! The table is derived data: every write discards the previous contents and
//! stores the latest totals. There is no merging with earlier runs.

use std::path::Path;

use rusqlite::{Connection, Row, Transaction as SqlTransaction};

use crate::{Error, store::open_read_write, summary::CategorySummary};

/// The name of the table that holds the per-category totals.
pub const CATEGORY_SUMMARY_TABLE: &str = "category_summary";

/// Replace the contents of the `category_summary` table in the database at
/// `db_path` with `categories`.
///
/// # Errors
/// - [Error::Connection] if the database cannot be opened for writing.
/// - [Error::Write] if the table could not be replaced, in which case the
///   previous table is left untouched.
pub fn write_category_summary(
    db_path: &Path,
    categories: &[CategorySummary],
) -> Result<(), Error> {
    let mut connection = open_read_write(db_path)?;
    replace_category_summary(&mut connection, categories)?;

    tracing::debug!(
        "Wrote {} rows to {CATEGORY_SUMMARY_TABLE} in {db_path:?}",
        categories.len()
    );

    Ok(())
}

/// Drop and recreate the `category_summary` table, then insert `categories`.
///
/// All statements run in one SQL transaction. If any of them fail the
/// transaction is rolled back and readers never see a partially written
/// table.
///
/// # Errors
/// Returns [Error::Write] if any statement fails.
pub fn replace_category_summary(
    connection: &mut Connection,
    categories: &[CategorySummary],
) -> Result<(), Error> {
    let transaction = connection.transaction().map_err(write_error)?;

    // Dropping `transaction` without committing rolls it back.
    replace_rows(&transaction, categories).map_err(write_error)?;

    transaction.commit().map_err(write_error)
}

fn replace_rows(
    transaction: &SqlTransaction,
    categories: &[CategorySummary],
) -> Result<(), rusqlite::Error> {
    transaction.execute_batch(&format!(
        "DROP TABLE IF EXISTS {CATEGORY_SUMMARY_TABLE};

        CREATE TABLE {CATEGORY_SUMMARY_TABLE} (
            category TEXT NOT NULL,
            amount REAL NOT NULL
        );"
    ))?;

    let mut statement = transaction.prepare(&format!(
        "INSERT INTO {CATEGORY_SUMMARY_TABLE} (category, amount) VALUES (?1, ?2);"
    ))?;

    for summary in categories {
        statement.execute((&summary.category, summary.amount))?;
    }

    Ok(())
}

/// Retrieve the rows of the `category_summary` table ordered by category.
///
/// # Errors
/// Returns [Error::Query] if the table does not exist or cannot be read.
pub fn get_category_summary(connection: &Connection) -> Result<Vec<CategorySummary>, Error> {
    connection
        .prepare(&format!(
            "SELECT category, amount FROM {CATEGORY_SUMMARY_TABLE} ORDER BY category ASC;"
        ))
        .map_err(Error::Query)?
        .query_map([], map_row)
        .map_err(Error::Query)?
        .map(|maybe_summary| maybe_summary.map_err(Error::Query))
        .collect()
}

fn map_row(row: &Row) -> Result<CategorySummary, rusqlite::Error> {
    let category = row.get(0)?;
    let amount = row.get(1)?;

    Ok(CategorySummary { category, amount })
}

fn write_error(error: rusqlite::Error) -> Error {
    tracing::error!("Could not replace {CATEGORY_SUMMARY_TABLE}: {error}");
    Error::Write(error)
}
