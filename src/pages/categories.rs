//! Category management page for the logged-in user.

#[cfg(test)]
#[path = "categories_test.rs"]
mod categories_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::types::FlowKind;
use crate::state::categories::CategoriesState;
use crate::state::notifications::NotificationsState;
use crate::state::session::Session;
use crate::state::transactions::TransactionsState;
use crate::util::auth::{RouteOutcome, install_unauth_redirect, protected_outcome};

/// Map the kind `<select>` value to a flow direction.
pub(crate) fn kind_from_value(raw: &str) -> Option<FlowKind> {
    match raw {
        "income" => Some(FlowKind::Income),
        "expense" => Some(FlowKind::Expense),
        _ => None,
    }
}

/// Trim and require a category name.
pub(crate) fn validate_category_name(name: &str) -> Result<String, &'static str> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Enter a category name.");
    }
    Ok(name.to_owned())
}

#[component]
pub fn CategoriesPage() -> impl IntoView {
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

    let name = RwSignal::new(String::new());
    let kind_value = RwSignal::new("expense".to_owned());
    let error = RwSignal::new(String::new());

    let on_create = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let name_value = match validate_category_name(&name.get()) {
            Ok(value) => value,
            Err(message) => {
                error.set(message.to_owned());
                return;
            }
        };
        let Some(kind) = kind_from_value(&kind_value.get()) else {
            error.set("Pick a type.".to_owned());
            return;
        };
        error.set(String::new());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::create_category(&name_value, kind).await {
                Ok(category) => {
                    categories.update(|c| c.upsert(category));
                    name.set(String::new());
                }
                Err(e) => notifications.update(|n| {
                    n.error(e);
                }),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (name_value, kind, &categories);
        }
    };

    let on_delete = move |id: String| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::delete_category(&id).await {
                Ok(()) => categories.update(|c| c.remove(&id)),
                Err(e) => notifications.update(|n| {
                    n.error(e);
                }),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, &categories);
        }
    };

    let section = move |kind: FlowKind, heading: &'static str| {
        view! {
            <section class="categories-page__section">
                <h2>{heading}</h2>
                <ul class="category-list">
                    {move || {
                        categories
                            .get()
                            .of_kind(kind)
                            .into_iter()
                            .map(|c| {
                                let id = c.id.clone();
                                view! {
                                    <li class="category-list__row">
                                        <span class="category-list__name">{c.name.clone()}</span>
                                        <button
                                            class="category-list__delete"
                                            title="Delete category"
                                            on:click=move |_| on_delete(id.clone())
                                        >
                                            "✕"
                                        </button>
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </ul>
            </section>
        }
    };

    view! {
        <Show
            when=move || !session.get().loading
            fallback=|| view! { <p class="page-loading">"Loading..."</p> }
        >
            <Show when=move || session.get().is_authenticated()>
                <div class="categories-page">
                    <h1>"Categories"</h1>
                    <form class="category-form" on:submit=on_create>
                        <input
                            class="category-form__input"
                            type="text"
                            placeholder="Category name"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                        <select
                            class="category-form__select"
                            prop:value=move || kind_value.get()
                            on:change=move |ev| kind_value.set(event_target_value(&ev))
                        >
                            <option value="expense">"Expense"</option>
                            <option value="income">"Income"</option>
                        </select>
                        <button class="btn btn--primary" type="submit">
                            "Add"
                        </button>
                        <Show when=move || !error.get().is_empty()>
                            <p class="category-form__error">{move || error.get()}</p>
                        </Show>
                    </form>
                    {section(FlowKind::Expense, "Expense categories")}
                    {section(FlowKind::Income, "Income categories")}
                </div>
            </Show>
        </Show>
    }
}
