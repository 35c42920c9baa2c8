//! Pagination Component
//!
//! Prev/next arrows around a window of page buttons.

use leptos::prelude::*;

use crate::pagination::{page_count, page_window};

/// Page buttons shown at once
const WINDOW: u32 = 5;

#[component]
pub fn Pagination(
    #[prop(into)] count: Signal<u32>,
    limit: u32,
    #[prop(into)] page: Signal<u32>,
    on_page_change: Callback<u32>,
) -> impl IntoView {
    let total = move || page_count(count.get(), limit);

    view! {
        <Show when=move || { total() > 1 }>
            <nav class="pagination">
                <button
                    class="pagination__arrow"
                    disabled=move || page.get() <= 1
                    on:click=move |_| on_page_change.run(page.get_untracked().saturating_sub(1).max(1))
                >
                    "‹"
                </button>
                <For
                    each=move || page_window(page.get(), total(), WINDOW)
                    key=|n| *n
                    children=move |n| {
                        let class = move || {
                            if page.get() == n { "pagination__item pagination__item_active" } else { "pagination__item" }
                        };
                        view! {
                            <button class=class on:click=move |_| on_page_change.run(n)>
                                {n}
                            </button>
                        }
                    }
                />
                <button
                    class="pagination__arrow"
                    disabled=move || page.get() >= total()
                    on:click=move |_| on_page_change.run((page.get_untracked() + 1).min(total()))
                >
                    "›"
                </button>
            </nav>
        </Show>
    }
}
