use leptos::prelude::*;

use crate::shared::icons::icon;

/// Prev/next pager over a fixed page size. Pages are 1-based; the
/// buttons disable at the bounds instead of clamping the index.
#[component]
pub fn PaginationControls(
    #[prop(into)] current_page: Signal<usize>,
    #[prop(into)] total_pages: Signal<usize>,
    #[prop(into)] total_count: Signal<usize>,
    on_page_change: Callback<usize>,
) -> impl IntoView {
    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                title="Previous page"
                on:click=move |_| {
                    let page = current_page.get();
                    if page > 1 {
                        on_page_change.run(page - 1);
                    }
                }
                disabled=move || current_page.get() <= 1
            >
                {icon("chevron-left")}
                "Prev"
            </button>
            <span class="pagination-info">
                {move || {
                    format!(
                        "Page {} of {} ({})",
                        current_page.get(),
                        total_pages.get().max(1),
                        total_count.get()
                    )
                }}
            </span>
            <button
                class="pagination-btn"
                title="Next page"
                on:click=move |_| {
                    let page = current_page.get();
                    if page < total_pages.get() {
                        on_page_change.run(page + 1);
                    }
                }
                disabled=move || current_page.get() >= total_pages.get()
            >
                "Next"
                {icon("chevron-right")}
            </button>
        </div>
    }
}
