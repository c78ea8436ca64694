//! Pager for server-paginated admin tables.

#[cfg(test)]
#[path = "pagination_test.rs"]
mod pagination_test;

use leptos::prelude::*;

/// The page numbers to offer around `current`, clamped to `1..=pages` and
/// at most `width` entries. Returns an empty window when there is nothing
/// to page through.
fn page_window(current: u32, pages: u32, width: u32) -> Vec<u32> {
    if pages <= 1 || width == 0 {
        return Vec::new();
    }
    let half = width / 2;
    let mut start = current.saturating_sub(half).max(1);
    let end = (start + width - 1).min(pages);
    start = end.saturating_sub(width - 1).max(1);
    (start..=end).collect()
}

/// Previous/next buttons plus a numeric page window.
#[component]
pub fn Pagination(
    #[prop(into)] page: Signal<u32>,
    #[prop(into)] pages: Signal<u32>,
    on_select: Callback<u32>,
) -> impl IntoView {
    view! {
        <div class="pagination">
            <button
                class="pagination__button"
                disabled=move || page.get() <= 1
                on:click=move |_| on_select.run(page.get().saturating_sub(1).max(1))
            >
                "‹"
            </button>
            {move || {
                page_window(page.get(), pages.get(), 5)
                    .into_iter()
                    .map(|n| {
                        let class = if n == page.get() {
                            "pagination__button pagination__button--current"
                        } else {
                            "pagination__button"
                        };
                        view! {
                            <button class=class on:click=move |_| on_select.run(n)>
                                {n.to_string()}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
            <button
                class="pagination__button"
                disabled=move || page.get() >= pages.get()
                on:click=move |_| on_select.run((page.get() + 1).min(pages.get()))
            >
                "›"
            </button>
        </div>
    }
}
