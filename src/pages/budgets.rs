//! Monthly budgets page: set per-category limits, track spend against them.

#[cfg(test)]
#[path = "budgets_test.rs"]
mod budgets_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::types::FlowKind;
use crate::state::budgets::{BudgetProgress, BudgetsState, spent_against};
use crate::state::categories::CategoriesState;
use crate::state::notifications::NotificationsState;
use crate::state::session::Session;
use crate::state::transactions::TransactionsState;
use crate::util::auth::{RouteOutcome, install_unauth_redirect, protected_outcome};
use crate::util::money::{format_cents, parse_amount};

/// Shape check for an `<input type="month">` value (`YYYY-MM`).
pub(crate) fn is_valid_month(raw: &str) -> bool {
    raw.len() == 7
        && raw
            .chars()
            .enumerate()
            .all(|(i, c)| if i == 4 { c == '-' } else { c.is_ascii_digit() })
}

/// Validate the budget form into `(category_id, amount_cents)`.
pub(crate) fn validate_budget(
    category_id: &str,
    amount_raw: &str,
) -> Result<(String, i64), &'static str> {
    if category_id.is_empty() {
        return Err("Pick a category.");
    }
    let Some(amount) = parse_amount(amount_raw) else {
        return Err("Enter a valid amount, e.g. 300.");
    };
    if amount == 0 {
        return Err("Budget must be more than zero.");
    }
    Ok((category_id.to_owned(), amount))
}

#[component]
pub fn BudgetsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let categories = expect_context::<RwSignal<CategoriesState>>();
    let transactions = expect_context::<RwSignal<TransactionsState>>();
    let budgets = expect_context::<RwSignal<BudgetsState>>();
    let notifications = expect_context::<RwSignal<NotificationsState>>();

    install_unauth_redirect(session, use_navigate());

    let month = RwSignal::new(crate::util::dates::current_month());
    let category_id = RwSignal::new(String::new());
    let amount = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());

    Effect::new(move || {
        if protected_outcome(&session.get()) == RouteOutcome::Allow {
            super::ensure_finance_data(categories, transactions, notifications);
        }
    });

    // Re-fetch whenever the viewed month changes (and once on entry).
    Effect::new(move || {
        let month_value = month.get();
        if protected_outcome(&session.get()) != RouteOutcome::Allow
            || !is_valid_month(&month_value)
        {
            return;
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_budgets(&month_value).await {
                Ok(items) => budgets.update(|b| b.set(month_value, items)),
                Err(e) => notifications.update(|n| {
                    n.error(e);
                }),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (month_value, &budgets);
        }
    });

    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let (category_value, amount_value) =
            match validate_budget(&category_id.get(), &amount.get()) {
                Ok(fields) => fields,
                Err(message) => {
                    error.set(message.to_owned());
                    return;
                }
            };
        error.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let month_value = month.get();
            leptos::task::spawn_local(async move {
                match crate::net::api::upsert_budget(&category_value, amount_value, &month_value)
                    .await
                {
                    Ok(budget) => {
                        budgets.update(|b| b.upsert(budget));
                        notifications.update(|n| {
                            n.success("Budget saved.");
                        });
                        amount.set(String::new());
                    }
                    Err(e) => notifications.update(|n| {
                        n.error(e);
                    }),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (category_value, amount_value, &budgets);
        }
    };

    let on_delete = move |id: String| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::delete_budget(&id).await {
                Ok(()) => budgets.update(|b| b.remove(&id)),
                Err(e) => notifications.update(|n| {
                    n.error(e);
                }),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, &budgets);
        }
    };

    view! {
        <Show
            when=move || !session.get().loading
            fallback=|| view! { <p class="page-loading">"Loading..."</p> }
        >
            <Show when=move || session.get().is_authenticated()>
                <div class="budgets-page">
                    <header class="budgets-page__header">
                        <h1>"Budgets"</h1>
                        <input
                            class="budgets-page__month"
                            type="month"
                            prop:value=move || month.get()
                            on:input=move |ev| month.set(event_target_value(&ev))
                        />
                    </header>

                    <form class="budget-form" on:submit=on_save>
                        <select
                            class="budget-form__select"
                            prop:value=move || category_id.get()
                            on:change=move |ev| category_id.set(event_target_value(&ev))
                        >
                            <option value="">"Category..."</option>
                            {move || {
                                categories
                                    .get()
                                    .of_kind(FlowKind::Expense)
                                    .into_iter()
                                    .map(|c| {
                                        view! {
                                            <option value=c.id.clone()>{c.name.clone()}</option>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </select>
                        <input
                            class="budget-form__input"
                            type="text"
                            placeholder="Monthly limit"
                            prop:value=move || amount.get()
                            on:input=move |ev| amount.set(event_target_value(&ev))
                        />
                        <button class="btn btn--primary" type="submit">
                            "Save"
                        </button>
                        <Show when=move || !error.get().is_empty()>
                            <p class="budget-form__error">{move || error.get()}</p>
                        </Show>
                    </form>

                    <div class="budget-cards">
                        {move || {
                            let tx = transactions.get();
                            budgets
                                .get()
                                .items
                                .iter()
                                .map(|budget| {
                                    let progress = BudgetProgress {
                                        spent: spent_against(budget, &tx.expenses),
                                        limit: budget.amount,
                                    };
                                    let name = categories
                                        .get()
                                        .name_of(&budget.category_id)
                                        .unwrap_or("—")
                                        .to_owned();
                                    let bar_class = if progress.over() {
                                        "budget-card__bar budget-card__bar--over"
                                    } else {
                                        "budget-card__bar"
                                    };
                                    let id = budget.id.clone();
                                    view! {
                                        <div class="budget-card">
                                            <div class="budget-card__head">
                                                <span class="budget-card__name">{name}</span>
                                                <button
                                                    class="budget-card__delete"
                                                    title="Delete budget"
                                                    on:click=move |_| on_delete(id.clone())
                                                >
                                                    "✕"
                                                </button>
                                            </div>
                                            <div class="budget-card__track">
                                                <div
                                                    class=bar_class
                                                    style:width=format!("{}%", progress.percent())
                                                ></div>
                                            </div>
                                            <span class="budget-card__figures">
                                                {format_cents(progress.spent)} " of "
                                                {format_cents(progress.limit)} " — "
                                                {format_cents(progress.remaining())} " left"
                                            </span>
                                        </div>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </div>
                </div>
            </Show>
        </Show>
    }
}
