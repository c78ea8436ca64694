//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::nav_bar::NavBar;
use crate::components::toast_stack::ToastStack;
use crate::pages::{
    admin_categories::AdminCategoriesPage, admin_reports::AdminReportsPage,
    admin_users::AdminUsersPage, budgets::BudgetsPage, categories::CategoriesPage,
    dashboard::DashboardPage, expenses::ExpensesPage, incomes::IncomesPage, login::LoginPage,
    profile::ProfilePage, register::RegisterPage,
};
use crate::state::budgets::BudgetsState;
use crate::state::categories::CategoriesState;
use crate::state::notifications::NotificationsState;
use crate::state::session::Session;
use crate::state::transactions::TransactionsState;
use crate::util::persist::BrowserStore;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides all shared state contexts, restores the persisted session once
/// on the client, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Provide reactive state contexts for all child components.
    let session = RwSignal::new(Session::default());
    let categories = RwSignal::new(CategoriesState::default());
    let transactions = RwSignal::new(TransactionsState::default());
    let budgets = RwSignal::new(BudgetsState::default());
    let notifications = RwSignal::new(NotificationsState::default());

    provide_context(session);
    provide_context(categories);
    provide_context(transactions);
    provide_context(budgets);
    provide_context(notifications);

    // Restore any persisted credentials. Runs client-side only; on the
    // server the store is a no-op and the session stays empty.
    Effect::new(move || {
        session.update(|s| {
            if s.loading {
                s.hydrate(&BrowserStore);
            }
        });
    });

    // Apply the stored dark-mode preference on startup.
    Effect::new(move |_| {
        crate::util::dark_mode::apply(crate::util::dark_mode::read_preference());
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/finboard.css"/>
        <Title text="Finboard"/>

        <Router>
            <Show when=move || session.get().is_authenticated()>
                <NavBar/>
            </Show>
            <main class="app-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route path=StaticSegment("") view=DashboardPage/>
                    <Route path=StaticSegment("incomes") view=IncomesPage/>
                    <Route path=StaticSegment("expenses") view=ExpensesPage/>
                    <Route path=StaticSegment("budgets") view=BudgetsPage/>
                    <Route path=StaticSegment("categories") view=CategoriesPage/>
                    <Route path=StaticSegment("profile") view=ProfilePage/>
                    <Route path=StaticSegment("admin") view=AdminReportsPage/>
                    <Route
                        path=(StaticSegment("admin"), StaticSegment("users"))
                        view=AdminUsersPage
                    />
                    <Route
                        path=(StaticSegment("admin"), StaticSegment("categories"))
                        view=AdminCategoriesPage
                    />
                </Routes>
            </main>
            <ToastStack/>
        </Router>
    }
}
