//! Comparing the total spent against a budget.

use std::fmt::Display;

use crate::report::format_currency;

/// Whether spending went over a budget, and by how much.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BudgetStatus {
    /// The total spent was greater than the budget by the given amount.
    Exceeded(f64),
    /// The total spent was no more than the budget, leaving the given amount.
    Within(f64),
}

impl BudgetStatus {
    /// Compare `total_spent` against `budget`.
    ///
    /// Spending exactly the budget counts as within budget.
    pub fn check(total_spent: f64, budget: f64) -> Self {
        if total_spent > budget {
            BudgetStatus::Exceeded(total_spent - budget)
        } else {
            BudgetStatus::Within(budget - total_spent)
        }
    }
}

impl Display for BudgetStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BudgetStatus::Exceeded(amount) => {
                write!(f, "Budget exceeded by {}", format_currency(*amount))
            }
            BudgetStatus::Within(amount) => {
                write!(f, "Within budget by {}", format_currency(*amount))
            }
        }
    }
}
