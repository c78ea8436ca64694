//! Table of income or expense entries with per-row delete.

use leptos::prelude::*;

use crate::net::types::FlowKind;
use crate::state::categories::CategoriesState;
use crate::state::notifications::NotificationsState;
use crate::state::transactions::TransactionsState;
use crate::util::money::format_cents;

/// Entries for one flow, newest first, with category names resolved and a
/// delete action per row.
#[component]
pub fn TransactionTable(kind: FlowKind) -> impl IntoView {
    let categories = expect_context::<RwSignal<CategoriesState>>();
    let transactions = expect_context::<RwSignal<TransactionsState>>();
    let notifications = expect_context::<RwSignal<NotificationsState>>();

    let on_delete = move |id: String| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::delete_transaction(kind, &id).await {
                Ok(()) => transactions.update(|t| t.remove(kind, &id)),
                Err(e) => notifications.update(|n| {
                    n.error(e);
                }),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, &transactions, &notifications);
        }
    };

    view! {
        <table class="entry-table">
            <thead>
                <tr>
                    <th>"Date"</th>
                    <th>"Title"</th>
                    <th>"Category"</th>
                    <th class="entry-table__amount">"Amount"</th>
                    <th></th>
                </tr>
            </thead>
            <tbody>
                {move || {
                    let mut rows = transactions.get().list(kind).to_vec();
                    rows.sort_by(|a, b| b.date.cmp(&a.date));
                    if rows.is_empty() {
                        return view! {
                            <tr>
                                <td class="entry-table__empty" colspan="5">
                                    "Nothing recorded yet."
                                </td>
                            </tr>
                        }
                            .into_any();
                    }
                    rows.into_iter()
                        .map(|tx| {
                            let category = categories
                                .get()
                                .name_of(&tx.category_id)
                                .unwrap_or("—")
                                .to_owned();
                            let id = tx.id.clone();
                            view! {
                                <tr>
                                    <td>{tx.date.clone()}</td>
                                    <td>
                                        {tx.title.clone()}
                                        {tx
                                            .note
                                            .clone()
                                            .map(|n| {
                                                view! { <span class="entry-table__note">{n}</span> }
                                            })}
                                    </td>
                                    <td>{category}</td>
                                    <td class="entry-table__amount">{format_cents(tx.amount)}</td>
                                    <td>
                                        <button
                                            class="entry-table__delete"
                                            title="Delete entry"
                                            on:click=move |_| on_delete(id.clone())
                                        >
                                            "✕"
                                        </button>
                                    </td>
                                </tr>
                            }
                        })
                        .collect::<Vec<_>>()
                        .into_any()
                }}
            </tbody>
        </table>
    }
}
