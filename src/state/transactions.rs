//! Income and expense entries for the logged-in user.
//!
//! DESIGN
//! ======
//! Both flows share one state struct so the dashboard can compute balances
//! and recent activity without re-fetching. All selectors are pure over
//! integer cents; rendering applies formatting separately.

#[cfg(test)]
#[path = "transactions_test.rs"]
mod transactions_test;

use crate::net::types::{FlowKind, Transaction};
use crate::state::categories::CategoriesState;

/// Aggregate expense total per category, feeding the dashboard chart.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategorySpend {
    pub name: String,
    pub total: i64,
}

/// The current user's transaction lists.
#[derive(Clone, Debug, Default)]
pub struct TransactionsState {
    pub incomes: Vec<Transaction>,
    pub expenses: Vec<Transaction>,
    pub loaded: bool,
}

impl TransactionsState {
    fn list_mut(&mut self, kind: FlowKind) -> &mut Vec<Transaction> {
        match kind {
            FlowKind::Income => &mut self.incomes,
            FlowKind::Expense => &mut self.expenses,
        }
    }

    /// Entries for one flow direction.
    #[must_use]
    pub fn list(&self, kind: FlowKind) -> &[Transaction] {
        match kind {
            FlowKind::Income => &self.incomes,
            FlowKind::Expense => &self.expenses,
        }
    }

    /// Replace one flow's entries after a fetch.
    pub fn set(&mut self, kind: FlowKind, items: Vec<Transaction>) {
        *self.list_mut(kind) = items;
        self.loaded = true;
    }

    /// Append a newly created entry.
    pub fn push(&mut self, kind: FlowKind, tx: Transaction) {
        self.list_mut(kind).push(tx);
    }

    /// Remove a deleted entry by id.
    pub fn remove(&mut self, kind: FlowKind, id: &str) {
        self.list_mut(kind).retain(|t| t.id != id);
    }

    /// Sum of one flow in cents.
    #[must_use]
    pub fn total(&self, kind: FlowKind) -> i64 {
        self.list(kind).iter().map(|t| t.amount).sum()
    }

    /// Income minus expenses, in cents. Negative means overspent.
    #[must_use]
    pub fn balance(&self) -> i64 {
        self.total(FlowKind::Income) - self.total(FlowKind::Expense)
    }

    /// The `limit` most recent entries across both flows, newest first.
    /// Ties on date keep incomes ahead of expenses.
    #[must_use]
    pub fn recent(&self, limit: usize) -> Vec<(FlowKind, Transaction)> {
        let mut merged: Vec<(FlowKind, Transaction)> = self
            .incomes
            .iter()
            .map(|t| (FlowKind::Income, t.clone()))
            .chain(self.expenses.iter().map(|t| (FlowKind::Expense, t.clone())))
            .collect();
        // ISO dates sort lexicographically.
        merged.sort_by(|a, b| b.1.date.cmp(&a.1.date));
        merged.truncate(limit);
        merged
    }

    /// Expense totals grouped by category name, descending, for the chart.
    /// Entries referencing unknown categories are grouped under "Other".
    #[must_use]
    pub fn expense_totals_by_category(&self, categories: &CategoriesState) -> Vec<CategorySpend> {
        let mut totals: Vec<CategorySpend> = Vec::new();
        for tx in &self.expenses {
            let name = categories.name_of(&tx.category_id).unwrap_or("Other");
            if let Some(entry) = totals.iter_mut().find(|e| e.name == name) {
                entry.total += tx.amount;
            } else {
                totals.push(CategorySpend {
                    name: name.to_owned(),
                    total: tx.amount,
                });
            }
        }
        totals.sort_by(|a, b| b.total.cmp(&a.total));
        totals
    }

    /// Expenses for one category within a `YYYY-MM` month, in cents.
    #[must_use]
    pub fn monthly_expense_for_category(&self, category_id: &str, month: &str) -> i64 {
        self.expenses
            .iter()
            .filter(|t| t.category_id == category_id && t.date.starts_with(month))
            .map(|t| t.amount)
            .sum()
    }
}
