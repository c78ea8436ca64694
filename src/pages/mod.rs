//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (guards, data loading) and
//! delegates rendering details to `components`. Protected pages share one
//! lazy loader so navigating between them never re-fetches data that is
//! already in context.

pub mod admin_categories;
pub mod admin_reports;
pub mod admin_users;
pub mod budgets;
pub mod categories;
pub mod dashboard;
pub mod expenses;
pub mod incomes;
pub mod login;
pub mod profile;
pub mod register;

use leptos::prelude::*;

use crate::state::categories::CategoriesState;
use crate::state::notifications::NotificationsState;
use crate::state::transactions::TransactionsState;

/// Fetch categories and both transaction flows into context state unless
/// they are already loaded. Failures surface as toasts.
pub(crate) fn ensure_finance_data(
    categories: RwSignal<CategoriesState>,
    transactions: RwSignal<TransactionsState>,
    notifications: RwSignal<NotificationsState>,
) {
    #[cfg(feature = "hydrate")]
    {
        use crate::net::types::FlowKind;

        if !categories.get_untracked().loaded {
            leptos::task::spawn_local(async move {
                match crate::net::api::fetch_categories().await {
                    Ok(items) => categories.update(|c| c.set(items)),
                    Err(e) => notifications.update(|n| {
                        n.error(e);
                    }),
                }
            });
        }
        if !transactions.get_untracked().loaded {
            leptos::task::spawn_local(async move {
                for kind in [FlowKind::Income, FlowKind::Expense] {
                    match crate::net::api::fetch_transactions(kind).await {
                        Ok(items) => transactions.update(|t| t.set(kind, items)),
                        Err(e) => notifications.update(|n| {
                            n.error(e);
                        }),
                    }
                }
            });
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (categories, transactions, notifications);
    }
}
