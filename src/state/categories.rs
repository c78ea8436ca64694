//! Category list state shared by forms, tables, and charts.
//!
//! DESIGN
//! ======
//! Categories are referenced by id from transactions and budgets, so this
//! module owns the id-to-name lookups the rest of the UI needs.

#[cfg(test)]
#[path = "categories_test.rs"]
mod categories_test;

use crate::net::types::{Category, FlowKind};

/// Shared category list, loaded once after login.
#[derive(Clone, Debug, Default)]
pub struct CategoriesState {
    pub items: Vec<Category>,
    pub loaded: bool,
}

impl CategoriesState {
    /// Replace the full list after a fetch.
    pub fn set(&mut self, items: Vec<Category>) {
        self.items = items;
        self.loaded = true;
    }

    /// Display name for a category id, if known.
    #[must_use]
    pub fn name_of(&self, id: &str) -> Option<&str> {
        self.items
            .iter()
            .find(|c| c.id == id)
            .map(|c| c.name.as_str())
    }

    /// Categories applicable to one flow direction.
    #[must_use]
    pub fn of_kind(&self, kind: FlowKind) -> Vec<&Category> {
        self.items.iter().filter(|c| c.kind == kind).collect()
    }

    /// Insert a newly created category, replacing any stale copy.
    pub fn upsert(&mut self, category: Category) {
        if let Some(existing) = self.items.iter_mut().find(|c| c.id == category.id) {
            *existing = category;
        } else {
            self.items.push(category);
        }
    }

    /// Remove a deleted category by id.
    pub fn remove(&mut self, id: &str) {
        self.items.retain(|c| c.id != id);
    }
}
