//! Expense entry page: add form plus history table.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::transaction_form::TransactionForm;
use crate::components::transaction_table::TransactionTable;
use crate::net::types::FlowKind;
use crate::state::categories::CategoriesState;
use crate::state::notifications::NotificationsState;
use crate::state::session::Session;
use crate::state::transactions::TransactionsState;
use crate::util::auth::{RouteOutcome, install_unauth_redirect, protected_outcome};
use crate::util::money::format_cents;

#[component]
pub fn ExpensesPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let categories = expect_context::<RwSignal<CategoriesState>>();
    let transactions = expect_context::<RwSignal<TransactionsState>>();
    let notifications = expect_context::<RwSignal<NotificationsState>>();

    install_unauth_redirect(session, use_navigate());

    Effect::new(move || {
        if protected_outcome(&session.get()) == RouteOutcome::Allow {
            super::ensure_finance_data(categories, transactions, notifications);
        }
    });

    view! {
        <Show
            when=move || !session.get().loading
            fallback=|| view! { <p class="page-loading">"Loading..."</p> }
        >
            <Show when=move || session.get().is_authenticated()>
                <div class="flow-page">
                    <header class="flow-page__header">
                        <h1>"Expenses"</h1>
                        <span class="flow-page__total">
                            {move || format_cents(transactions.get().total(FlowKind::Expense))}
                        </span>
                    </header>
                    <TransactionForm kind=FlowKind::Expense/>
                    <TransactionTable kind=FlowKind::Expense/>
                </div>
            </Show>
        </Show>
    }
}
