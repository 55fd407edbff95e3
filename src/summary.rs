//! Aggregating transactions into per-category totals.

use std::collections::BTreeMap;

use crate::transaction::Transaction;

/// The total amount for one category of spending.
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySummary {
    /// The category label, exactly as it appears on the transactions.
    pub category: String,
    /// The sum of the amounts of all transactions with this category.
    pub amount: f64,
}

impl CategorySummary {
    /// Create a new category summary.
    pub fn new(category: &str, amount: f64) -> Self {
        Self {
            category: category.to_owned(),
            amount,
        }
    }
}

/// Spending totals for a set of transactions.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Summary {
    /// One entry per distinct category, sorted by category name.
    pub categories: Vec<CategorySummary>,
    /// The sum over every transaction.
    pub total: f64,
}

/// Group `transactions` by category and sum the amounts in each group.
///
/// Categories are compared with exact string equality, so "Food" and "food"
/// are summarised separately. The returned categories are sorted in
/// ascending order of their names.
///
/// The total is the sum of the per-category amounts, so it always agrees
/// with the categories it is reported alongside. An empty slice produces no
/// categories and a total of zero.
pub fn summarize(transactions: &[Transaction]) -> Summary {
    let mut totals: BTreeMap<&str, f64> = BTreeMap::new();

    for transaction in transactions {
        *totals.entry(transaction.category.as_str()).or_insert(0.0) += transaction.amount;
    }

    let categories: Vec<CategorySummary> = totals
        .into_iter()
        .map(|(category, amount)| CategorySummary::new(category, amount))
        .collect();

    let total = categories.iter().map(|summary| summary.amount).sum();

    Summary { categories, total }
}
