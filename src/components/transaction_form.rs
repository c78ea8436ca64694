//! Entry form shared by the incomes and expenses pages.

#[cfg(test)]
#[path = "transaction_form_test.rs"]
mod transaction_form_test;

use leptos::prelude::*;

use crate::net::types::FlowKind;
use crate::state::categories::CategoriesState;
use crate::state::notifications::NotificationsState;
use crate::state::transactions::TransactionsState;
use crate::util::money::parse_amount;

/// Validated form input ready to submit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct EntryInput {
    pub title: String,
    pub amount: i64,
    pub category_id: String,
    pub date: String,
    pub note: Option<String>,
}

/// Minimal shape check for an `<input type="date">` value.
fn is_valid_date(raw: &str) -> bool {
    raw.len() == 10
        && raw
            .chars()
            .enumerate()
            .all(|(i, c)| if i == 4 || i == 7 { c == '-' } else { c.is_ascii_digit() })
}

/// Validate raw form fields into an [`EntryInput`], or a message for the
/// inline error line.
pub(crate) fn validate_entry(
    title: &str,
    amount_raw: &str,
    category_id: &str,
    date: &str,
    note: &str,
) -> Result<EntryInput, &'static str> {
    let title = title.trim();
    if title.is_empty() {
        return Err("Enter a title.");
    }
    let Some(amount) = parse_amount(amount_raw) else {
        return Err("Enter a valid amount, e.g. 42.50.");
    };
    if amount == 0 {
        return Err("Amount must be more than zero.");
    }
    if category_id.is_empty() {
        return Err("Pick a category.");
    }
    if !is_valid_date(date) {
        return Err("Pick a date.");
    }
    let note = note.trim();
    Ok(EntryInput {
        title: title.to_owned(),
        amount,
        category_id: category_id.to_owned(),
        date: date.to_owned(),
        note: if note.is_empty() { None } else { Some(note.to_owned()) },
    })
}

/// Form for adding one income or expense entry. Successful submissions are
/// appended to the shared transaction state.
#[component]
pub fn TransactionForm(kind: FlowKind) -> impl IntoView {
    let categories = expect_context::<RwSignal<CategoriesState>>();
    let transactions = expect_context::<RwSignal<TransactionsState>>();
    let notifications = expect_context::<RwSignal<NotificationsState>>();

    let title = RwSignal::new(String::new());
    let amount = RwSignal::new(String::new());
    let category_id = RwSignal::new(String::new());
    let date = RwSignal::new(crate::util::dates::today());
    let note = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let input = match validate_entry(
            &title.get(),
            &amount.get(),
            &category_id.get(),
            &date.get(),
            &note.get(),
        ) {
            Ok(input) => input,
            Err(message) => {
                error.set(message.to_owned());
                return;
            }
        };
        error.set(String::new());
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::create_transaction(
                kind,
                &input.title,
                input.amount,
                &input.category_id,
                input.note.as_deref(),
                &input.date,
            )
            .await
            {
                Ok(tx) => {
                    transactions.update(|t| t.push(kind, tx));
                    notifications.update(|n| {
                        n.success("Entry added.");
                    });
                    title.set(String::new());
                    amount.set(String::new());
                    note.set(String::new());
                }
                Err(e) => {
                    notifications.update(|n| {
                        n.error(e);
                    });
                }
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&transactions, &notifications, input);
            busy.set(false);
        }
    };

    view! {
        <form class="entry-form" on:submit=on_submit>
            <input
                class="entry-form__input"
                type="text"
                placeholder="Title"
                prop:value=move || title.get()
                on:input=move |ev| title.set(event_target_value(&ev))
            />
            <input
                class="entry-form__input entry-form__input--amount"
                type="text"
                placeholder="0.00"
                prop:value=move || amount.get()
                on:input=move |ev| amount.set(event_target_value(&ev))
            />
            <select
                class="entry-form__select"
                prop:value=move || category_id.get()
                on:change=move |ev| category_id.set(event_target_value(&ev))
            >
                <option value="">"Category..."</option>
                {move || {
                    categories
                        .get()
                        .of_kind(kind)
                        .into_iter()
                        .map(|c| {
                            view! { <option value=c.id.clone()>{c.name.clone()}</option> }
                        })
                        .collect::<Vec<_>>()
                }}
            </select>
            <input
                class="entry-form__input"
                type="date"
                prop:value=move || date.get()
                on:input=move |ev| date.set(event_target_value(&ev))
            />
            <input
                class="entry-form__input entry-form__input--note"
                type="text"
                placeholder="Note (optional)"
                prop:value=move || note.get()
                on:input=move |ev| note.set(event_target_value(&ev))
            />
            <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                "Add"
            </button>
            <Show when=move || !error.get().is_empty()>
                <p class="entry-form__error">{move || error.get()}</p>
            </Show>
        </form>
    }
}
