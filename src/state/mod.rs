//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `categories`, `transactions`,
//! `budgets`, `notifications`) so individual components can depend on
//! small focused models. Each is provided as an `RwSignal` context from
//! the root `App`.

pub mod budgets;
pub mod categories;
pub mod notifications;
pub mod session;
pub mod transactions;
