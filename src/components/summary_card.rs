//! Dashboard summary card for a single headline figure.

use leptos::prelude::*;

/// Card showing one labeled amount, e.g. total income or balance.
#[component]
pub fn SummaryCard(
    /// Card heading.
    label: &'static str,
    /// Pre-formatted amount string.
    #[prop(into)]
    value: Signal<String>,
    /// Optional accent class (`"summary-card--negative"` etc.).
    #[prop(optional, into)]
    accent: Option<Signal<&'static str>>,
) -> impl IntoView {
    let class = move || {
        accent.map_or_else(
            || "summary-card".to_owned(),
            |a| format!("summary-card {}", a.get()),
        )
    };
    view! {
        <div class=class>
            <span class="summary-card__label">{label}</span>
            <span class="summary-card__value">{move || value.get()}</span>
        </div>
    }
}
