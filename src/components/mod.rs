//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render application chrome and data entry surfaces while
//! reading/writing shared state from Leptos context providers.

pub mod bar_chart;
pub mod nav_bar;
pub mod pagination;
pub mod summary_card;
pub mod toast_stack;
pub mod transaction_form;
pub mod transaction_table;
