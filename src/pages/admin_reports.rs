//! Admin overview report: headline totals, monthly trend, top categories.

#[cfg(test)]
#[path = "admin_reports_test.rs"]
mod admin_reports_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::bar_chart::BarChart;
use crate::components::summary_card::SummaryCard;
use crate::net::types::{CategoryTotal, OverviewReport};
use crate::state::notifications::NotificationsState;
use crate::state::session::Session;
use crate::state::transactions::CategorySpend;
use crate::util::auth::{RouteOutcome, admin_outcome, install_admin_redirect};
use crate::util::money::format_cents;

/// Chart rows for the largest expense categories, widest first.
pub(crate) fn top_category_rows(totals: &[CategoryTotal]) -> Vec<CategorySpend> {
    let mut rows: Vec<CategorySpend> = totals
        .iter()
        .map(|t| CategorySpend {
            name: t.category.clone(),
            total: t.total,
        })
        .collect();
    rows.sort_by(|a, b| b.total.cmp(&a.total));
    rows
}

#[component]
pub fn AdminReportsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let notifications = expect_context::<RwSignal<NotificationsState>>();

    install_admin_redirect(session, use_navigate());

    let report = RwSignal::new(None::<OverviewReport>);

    Effect::new(move || {
        if admin_outcome(&session.get()) != RouteOutcome::Allow {
            return;
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_overview_report().await {
                Ok(result) => report.set(Some(result)),
                Err(e) => notifications.update(|n| {
                    n.error(e);
                }),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&report, &notifications);
        }
    });

    let user_count = Signal::derive(move || {
        report
            .get()
            .map_or_else(String::new, |r| r.user_count.to_string())
    });
    let income_total = Signal::derive(move || {
        report
            .get()
            .map_or_else(String::new, |r| format_cents(r.income_total))
    });
    let expense_total = Signal::derive(move || {
        report
            .get()
            .map_or_else(String::new, |r| format_cents(r.expense_total))
    });
    let top_categories = Signal::derive(move || {
        report
            .get()
            .map_or_else(Vec::new, |r| top_category_rows(&r.top_categories))
    });

    view! {
        <Show
            when=move || !session.get().loading
            fallback=|| view! { <p class="page-loading">"Loading..."</p> }
        >
            <Show when=move || session.get().is_admin()>
                <div class="admin-reports-page">
                    <h1>"Overview"</h1>

                    <div class="admin-reports-page__cards">
                        <SummaryCard label="Users" value=user_count />
                        <SummaryCard label="Total income" value=income_total />
                        <SummaryCard label="Total expenses" value=expense_total />
                    </div>

                    <section class="admin-reports-page__section">
                        <h2>"By month"</h2>
                        <table class="admin-reports-page__table">
                            <thead>
                                <tr>
                                    <th>"Month"</th>
                                    <th>"Income"</th>
                                    <th>"Expenses"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {move || {
                                    report
                                        .get()
                                        .map(|r| r.monthly)
                                        .unwrap_or_default()
                                        .into_iter()
                                        .map(|row| {
                                            view! {
                                                <tr>
                                                    <td>{row.month.clone()}</td>
                                                    <td>{format_cents(row.income)}</td>
                                                    <td>{format_cents(row.expense)}</td>
                                                </tr>
                                            }
                                        })
                                        .collect::<Vec<_>>()
                                }}
                            </tbody>
                        </table>
                    </section>

                    <section class="admin-reports-page__section">
                        <h2>"Top expense categories"</h2>
                        <BarChart data=top_categories />
                    </section>
                </div>
            </Show>
        </Show>
    }
}
