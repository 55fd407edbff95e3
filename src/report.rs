//! Rendering a spending summary as plain text.

use std::io::{self, Write};

use crate::summary::Summary;

const CATEGORY_HEADER: &str = "Category";
const AMOUNT_HEADER: &str = "Amount";

/// Write `summary` to `writer` as a table of categories and amounts, followed
/// by a blank line and the total spent.
///
/// ```text
/// Spending by Category:
/// Category  Amount
/// food       19.75
/// rent      900.00
///
/// Total Spent: $919.75
/// ```
pub fn write_report(summary: &Summary, mut writer: impl Write) -> io::Result<()> {
    writeln!(writer, "Spending by Category:")?;

    if summary.categories.is_empty() {
        writeln!(writer, "(no transactions)")?;
    } else {
        let amounts: Vec<String> = summary
            .categories
            .iter()
            .map(|summary| format_amount(summary.amount))
            .collect();

        let category_width = summary
            .categories
            .iter()
            .map(|summary| summary.category.chars().count())
            .fold(CATEGORY_HEADER.len(), usize::max);
        let amount_width = amounts
            .iter()
            .map(|amount| amount.len())
            .fold(AMOUNT_HEADER.len(), usize::max);

        writeln!(
            writer,
            "{CATEGORY_HEADER:<category_width$}  {AMOUNT_HEADER:>amount_width$}"
        )?;

        for (category_summary, amount) in summary.categories.iter().zip(&amounts) {
            writeln!(
                writer,
                "{:<category_width$}  {amount:>amount_width$}",
                category_summary.category
            )?;
        }
    }

    writeln!(writer)?;
    writeln!(writer, "Total Spent: {}", format_currency(summary.total))?;

    Ok(())
}

/// Format `amount` as dollars with exactly two decimal places, e.g. "$919.75"
/// or "-$12.00".
///
/// Amounts that round to zero are always shown as "$0.00".
// Same sign and zero rules as the web app's currency filter, but without
// numfmt since it inserts thousands separators.
pub fn format_currency(amount: f64) -> String {
    let formatted = format_amount(amount);

    match formatted.strip_prefix('-') {
        Some(digits) => format!("-${digits}"),
        None => format!("${formatted}"),
    }
}

fn format_amount(amount: f64) -> String {
    let digits = format!("{:.2}", amount.abs());

    if amount < 0.0 && !rounds_to_zero(&digits) {
        format!("-{digits}")
    } else {
        digits
    }
}

fn rounds_to_zero(digits: &str) -> bool {
    digits.chars().all(|c| c == '0' || c == '.')
}
