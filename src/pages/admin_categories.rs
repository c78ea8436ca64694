//! Admin view over the global category table.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use super::categories::{kind_from_value, validate_category_name};
use crate::net::types::{Category, FlowKind};
use crate::state::notifications::NotificationsState;
use crate::state::session::Session;
use crate::util::auth::{RouteOutcome, admin_outcome, install_admin_redirect};

#[component]
pub fn AdminCategoriesPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let notifications = expect_context::<RwSignal<NotificationsState>>();

    install_admin_redirect(session, use_navigate());

    let listing = RwSignal::new(Vec::<Category>::new());
    let name = RwSignal::new(String::new());
    let kind_value = RwSignal::new("expense".to_owned());
    let error = RwSignal::new(String::new());

    Effect::new(move || {
        if admin_outcome(&session.get()) != RouteOutcome::Allow {
            return;
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_categories().await {
                Ok(items) => listing.set(items),
                Err(e) => notifications.update(|n| {
                    n.error(e);
                }),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&listing, &notifications);
        }
    });

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
            error.set("Pick a kind.".to_owned());
            return;
        };
        error.set(String::new());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::create_category(&name_value, kind).await {
                Ok(category) => {
                    listing.update(|items| items.push(category));
                    name.set(String::new());
                    notifications.update(|n| {
                        n.success("Category created.");
                    });
                }
                Err(e) => notifications.update(|n| {
                    n.error(e);
                }),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (name_value, kind, &listing);
        }
    };

    let on_delete = move |id: String| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::delete_category(&id).await {
                Ok(()) => listing.update(|items| items.retain(|c| c.id != id)),
                Err(e) => notifications.update(|n| {
                    n.error(e);
                }),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, &listing);
        }
    };

    view! {
        <Show
            when=move || !session.get().loading
            fallback=|| view! { <p class="page-loading">"Loading..."</p> }
        >
            <Show when=move || session.get().is_admin()>
                <div class="admin-categories-page">
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

                    <table class="admin-categories-page__table">
                        <thead>
                            <tr>
                                <th>"Name"</th>
                                <th>"Kind"</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                listing
                                    .get()
                                    .iter()
                                    .map(|category| {
                                        let id = category.id.clone();
                                        let kind = match category.kind {
                                            FlowKind::Income => "Income",
                                            FlowKind::Expense => "Expense",
                                        };
                                        view! {
                                            <tr>
                                                <td>{category.name.clone()}</td>
                                                <td>{kind}</td>
                                                <td>
                                                    <button
                                                        class="btn btn--danger"
                                                        on:click=move |_| on_delete(id.clone())
                                                    >
                                                        "Delete"
                                                    </button>
                                                </td>
                                            </tr>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </tbody>
                    </table>
                </div>
            </Show>
        </Show>
    }
}
