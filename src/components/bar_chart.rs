//! Horizontal bar chart for per-category spending.

#[cfg(test)]
#[path = "bar_chart_test.rs"]
mod bar_chart_test;

use leptos::prelude::*;

use crate::state::transactions::CategorySpend;
use crate::util::money::format_cents;

/// Width of one bar as a CSS percentage of the largest total.
fn bar_width_pct(total: i64, max: i64) -> String {
    if max <= 0 || total <= 0 {
        return "0%".to_owned();
    }
    #[allow(clippy::cast_precision_loss)]
    let fraction = (total as f64 / max as f64).clamp(0.0, 1.0);
    format!("{:.1}%", fraction * 100.0)
}

/// Bar chart of category totals, widest bar first. Renders a placeholder
/// note when there is nothing to chart.
#[component]
pub fn BarChart(#[prop(into)] data: Signal<Vec<CategorySpend>>) -> impl IntoView {
    view! {
        <div class="bar-chart">
            {move || {
                let rows = data.get();
                let max = rows.iter().map(|r| r.total).max().unwrap_or(0);
                if rows.is_empty() {
                    view! { <p class="bar-chart__empty">"No spending recorded yet."</p> }
                        .into_any()
                } else {
                    view! {
                        <div class="bar-chart__rows">
                            {rows
                                .into_iter()
                                .map(|row| {
                                    let width = bar_width_pct(row.total, max);
                                    view! {
                                        <div class="bar-chart__row">
                                            <span class="bar-chart__label">{row.name.clone()}</span>
                                            <div class="bar-chart__track">
                                                <div class="bar-chart__bar" style:width=width></div>
                                            </div>
                                            <span class="bar-chart__amount">
                                                {format_cents(row.total)}
                                            </span>
                                        </div>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </div>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
