//! Admin user management: search, page through, and remove accounts.

#[cfg(test)]
#[path = "admin_users_test.rs"]
mod admin_users_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::pagination::Pagination;
use crate::net::types::{Paginated, Role, User};
use crate::state::notifications::NotificationsState;
use crate::state::session::Session;
use crate::util::auth::{RouteOutcome, admin_outcome, install_admin_redirect};

/// Drop a removed user from the current page without re-fetching.
pub(crate) fn remove_from_page(page: &mut Paginated<User>, id: &str) {
    let before = page.items.len();
    page.items.retain(|u| u.id != id);
    if page.items.len() < before {
        page.total = (page.total - 1).max(0);
    }
}

/// Whether the admin may delete this row. Admins never delete themselves.
pub(crate) fn can_delete(viewer_id: &str, row: &User) -> bool {
    row.id != viewer_id
}

#[component]
pub fn AdminUsersPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let notifications = expect_context::<RwSignal<NotificationsState>>();

    install_admin_redirect(session, use_navigate());

    let search = RwSignal::new(String::new());
    let page = RwSignal::new(1u32);
    let listing = RwSignal::new(None::<Paginated<User>>);

    // Re-fetch whenever the search text or page changes (and once on entry).
    Effect::new(move || {
        let search_value = search.get();
        let page_value = page.get();
        if admin_outcome(&session.get()) != RouteOutcome::Allow {
            return;
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_admin_users(&search_value, page_value).await {
                Ok(result) => listing.set(Some(result)),
                Err(e) => notifications.update(|n| {
                    n.error(e);
                }),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (search_value, page_value, &listing, &notifications);
        }
    });

    let on_search = move |ev: leptos::ev::Event| {
        search.set(event_target_value(&ev));
        page.set(1);
    };

    let on_delete = move |id: String| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::delete_user(&id).await {
                Ok(()) => {
                    listing.update(|l| {
                        if let Some(current) = l.as_mut() {
                            remove_from_page(current, &id);
                        }
                    });
                    notifications.update(|n| {
                        n.success("User removed.");
                    });
                }
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

    let viewer_id = move || {
        session
            .get()
            .user
            .as_ref()
            .map_or_else(String::new, |u| u.id.clone())
    };

    view! {
        <Show
            when=move || !session.get().loading
            fallback=|| view! { <p class="page-loading">"Loading..."</p> }
        >
            <Show when=move || session.get().is_admin()>
                <div class="admin-users-page">
                    <header class="admin-users-page__header">
                        <h1>"Users"</h1>
                        <input
                            class="admin-users-page__search"
                            type="search"
                            placeholder="Search by name or email"
                            prop:value=move || search.get()
                            on:input=on_search
                        />
                    </header>

                    {move || {
                        listing
                            .get()
                            .map(|current| {
                                let me = viewer_id();
                                let rows = current
                                    .items
                                    .iter()
                                    .map(|user| {
                                        let id = user.id.clone();
                                        let deletable = can_delete(&me, user);
                                        let role = match user.role {
                                            Role::Admin => "Admin",
                                            Role::User => "User",
                                        };
                                        view! {
                                            <tr>
                                                <td>{user.name.clone()}</td>
                                                <td>{user.email.clone()}</td>
                                                <td>{role}</td>
                                                <td>
                                                    <Show when=move || deletable>
                                                        {
                                                            let id = id.clone();
                                                            view! {
                                                                <button
                                                                    class="btn btn--danger"
                                                                    on:click=move |_| on_delete(id.clone())
                                                                >
                                                                    "Delete"
                                                                </button>
                                                            }
                                                        }
                                                    </Show>
                                                </td>
                                            </tr>
                                        }
                                    })
                                    .collect::<Vec<_>>();
                                let pages = current.pages;
                                view! {
                                    <table class="admin-users-page__table">
                                        <thead>
                                            <tr>
                                                <th>"Name"</th>
                                                <th>"Email"</th>
                                                <th>"Role"</th>
                                                <th></th>
                                            </tr>
                                        </thead>
                                        <tbody>{rows}</tbody>
                                    </table>
                                    <p class="admin-users-page__count">
                                        {current.total.to_string()} " users"
                                    </p>
                                    <Pagination
                                        page=Signal::derive(move || page.get())
                                        pages=Signal::derive(move || pages)
                                        on_select=Callback::new(move |n| page.set(n))
                                    />
                                }
                            })
                    }}
                </div>
            </Show>
        </Show>
    }
}
