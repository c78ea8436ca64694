//! Monthly budget state and progress math.
//!
//! DESIGN
//! ======
//! A budget caps one category for one `YYYY-MM` month. Progress is computed
//! client-side from the already-loaded expense list so the budgets page
//! needs no extra endpoint.

#[cfg(test)]
#[path = "budgets_test.rs"]
mod budgets_test;

use crate::net::types::{Budget, Transaction};

/// Spend measured against one budget's limit, in cents.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BudgetProgress {
    pub spent: i64,
    pub limit: i64,
}

impl BudgetProgress {
    /// Spent as a percentage of the limit, clamped to 0..=100 for rendering.
    /// A zero or negative limit reads as fully consumed.
    #[must_use]
    pub fn percent(&self) -> u32 {
        if self.limit <= 0 {
            return 100;
        }
        let pct = self.spent.saturating_mul(100) / self.limit;
        u32::try_from(pct.clamp(0, 100)).unwrap_or(100)
    }

    /// Whether spending has exceeded the limit.
    #[must_use]
    pub fn over(&self) -> bool {
        self.spent > self.limit
    }

    /// Cents left before the limit, never negative.
    #[must_use]
    pub fn remaining(&self) -> i64 {
        (self.limit - self.spent).max(0)
    }
}

/// Sum the expenses that count against `budget`: same category, same month.
#[must_use]
pub fn spent_against(budget: &Budget, expenses: &[Transaction]) -> i64 {
    expenses
        .iter()
        .filter(|t| t.category_id == budget.category_id && t.date.starts_with(&budget.month))
        .map(|t| t.amount)
        .sum()
}

/// Budgets for the currently viewed month.
#[derive(Clone, Debug, Default)]
pub struct BudgetsState {
    pub items: Vec<Budget>,
    /// Month being viewed, as `YYYY-MM`.
    pub month: String,
    pub loaded: bool,
}

impl BudgetsState {
    /// Replace the list after fetching a month.
    pub fn set(&mut self, month: String, items: Vec<Budget>) {
        self.month = month;
        self.items = items;
        self.loaded = true;
    }

    /// Insert or replace the budget for a category (one budget per
    /// category per month).
    pub fn upsert(&mut self, budget: Budget) {
        if let Some(existing) = self
            .items
            .iter_mut()
            .find(|b| b.category_id == budget.category_id)
        {
            *existing = budget;
        } else {
            self.items.push(budget);
        }
    }

    /// Remove a deleted budget by id.
    pub fn remove(&mut self, id: &str) {
        self.items.retain(|b| b.id != id);
    }
}
