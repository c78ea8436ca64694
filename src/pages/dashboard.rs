//! Dashboard page: headline totals, spending chart, recent activity.
//!
//! Protected route: unauthenticated visitors are redirected to `/login`
//! once hydration completes; until then a neutral loading line renders.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::bar_chart::BarChart;
use crate::components::summary_card::SummaryCard;
use crate::net::types::FlowKind;
use crate::state::categories::CategoriesState;
use crate::state::notifications::NotificationsState;
use crate::state::session::Session;
use crate::state::transactions::TransactionsState;
use crate::util::auth::{RouteOutcome, install_unauth_redirect, protected_outcome};
use crate::util::money::format_cents;

/// Accent class for the balance card: red below zero.
fn balance_accent(balance: i64) -> &'static str {
    if balance < 0 {
        "summary-card--negative"
    } else {
        "summary-card--positive"
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
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

    let income_total =
        Signal::derive(move || format_cents(transactions.get().total(FlowKind::Income)));
    let expense_total =
        Signal::derive(move || format_cents(transactions.get().total(FlowKind::Expense)));
    let balance = Signal::derive(move || format_cents(transactions.get().balance()));
    let balance_class = Signal::derive(move || balance_accent(transactions.get().balance()));
    let spending =
        Signal::derive(move || transactions.get().expense_totals_by_category(&categories.get()));

    view! {
        <Show
            when=move || !session.get().loading
            fallback=|| view! { <p class="page-loading">"Loading..."</p> }
        >
            <Show when=move || session.get().is_authenticated()>
                <div class="dashboard-page">
                    <h1>"Overview"</h1>
                    <div class="dashboard-page__cards">
                        <SummaryCard label="Income" value=income_total/>
                        <SummaryCard label="Expenses" value=expense_total/>
                        <SummaryCard label="Balance" value=balance accent=balance_class/>
                    </div>

                    <section class="dashboard-page__section">
                        <h2>"Spending by category"</h2>
                        <BarChart data=spending/>
                    </section>

                    <section class="dashboard-page__section">
                        <h2>"Recent activity"</h2>
                        <ul class="recent-list">
                            {move || {
                                transactions
                                    .get()
                                    .recent(6)
                                    .into_iter()
                                    .map(|(kind, tx)| {
                                        let sign_class = match kind {
                                            FlowKind::Income => "recent-list__amount--income",
                                            FlowKind::Expense => "recent-list__amount--expense",
                                        };
                                        view! {
                                            <li class="recent-list__row">
                                                <span class="recent-list__date">{tx.date.clone()}</span>
                                                <span class="recent-list__title">{tx.title.clone()}</span>
                                                <span class=format!(
                                                    "recent-list__amount {sign_class}",
                                                )>{format_cents(tx.amount)}</span>
                                            </li>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </ul>
                    </section>
                </div>
            </Show>
        </Show>
    }
}
