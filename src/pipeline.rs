//! Running every step of the spending summary in order.

use std::io::Write;

use crate::{
    Error,
    budget::BudgetStatus,
    config::Config,
    report::write_report,
    summary::{Summary, summarize},
    summary_table::write_category_summary,
    transaction::load_transactions,
};

/// Load the transactions, summarise them, write the report to `writer` and
/// save the per-category totals to the `category_summary` table.
///
/// The first failing step ends the run. The database is only written to once
/// the report has been written in full.
///
/// # Errors
/// Returns the error from the step that failed, see [Error].
pub fn run(config: &Config, mut writer: impl Write) -> Result<Summary, Error> {
    tracing::info!("Loading transactions from {:?}", config.db_path);
    let transactions = load_transactions(&config.db_path)?;

    let summary = summarize(&transactions);
    tracing::info!(
        "Summarised {} transactions into {} categories",
        transactions.len(),
        summary.categories.len()
    );

    write_report(&summary, &mut writer)?;

    if let Some(budget) = config.budget {
        writeln!(writer, "{}", BudgetStatus::check(summary.total, budget))?;
    }

    writer.flush()?;

    tracing::info!("Saving category summary to {:?}", config.db_path);
    write_category_summary(&config.db_path, &summary.categories)?;

    Ok(summary)
}
