//! Top navigation bar with role-aware links and the logout action.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::Session;
use crate::util::persist::BrowserStore;

/// Navigation bar shown on every authenticated view. Admin links appear
/// only for admin sessions; logout clears the session and returns to the
/// login view.
#[component]
pub fn NavBar() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let navigate = use_navigate();

    let dark = RwSignal::new(crate::util::dark_mode::read_preference());
    crate::util::dark_mode::apply(dark.get_untracked());
    let on_toggle_dark = move |_| {
        dark.set(crate::util::dark_mode::toggle(dark.get_untracked()));
    };

    let on_logout = move |_| {
        session.update(|s| s.logout(&BrowserStore));
        navigate("/login", NavigateOptions::default());
    };

    let user_name = move || {
        session
            .get()
            .user
            .as_ref()
            .map_or_else(String::new, |u| u.name.clone())
    };
    let is_admin = move || session.get().is_admin();

    view! {
        <nav class="nav-bar">
            <a class="nav-bar__brand" href="/">
                "Finboard"
            </a>
            <div class="nav-bar__links">
                <a class="nav-bar__link" href="/">"Dashboard"</a>
                <a class="nav-bar__link" href="/incomes">"Incomes"</a>
                <a class="nav-bar__link" href="/expenses">"Expenses"</a>
                <a class="nav-bar__link" href="/budgets">"Budgets"</a>
                <a class="nav-bar__link" href="/categories">"Categories"</a>
                <Show when=is_admin>
                    <a class="nav-bar__link nav-bar__link--admin" href="/admin">"Admin"</a>
                </Show>
            </div>
            <div class="nav-bar__side">
                <button class="nav-bar__icon-button" title="Toggle dark mode" on:click=on_toggle_dark>
                    {move || if dark.get() { "☀" } else { "☾" }}
                </button>
                <a class="nav-bar__user" href="/profile">
                    {user_name}
                </a>
                <button class="nav-bar__logout" on:click=on_logout>
                    "Log out"
                </button>
            </div>
        </nav>
    }
}
