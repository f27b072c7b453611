use crate::shared::icons::icon;
use leptos::prelude::*;

/// First/previous/next/last buttons with a "page / pages (total)" label
///
/// Pages are 1-based, like the backend's `page` query parameter.
#[component]
pub fn PaginationControls(
    #[prop(into)] current_page: Signal<u32>,
    #[prop(into)] total_pages: Signal<u32>,
    #[prop(into)] total_count: Signal<u64>,
    on_page_change: Callback<u32>,
) -> impl IntoView {
    let is_first = move || current_page.get() <= 1;
    let is_last = move || current_page.get() >= total_pages.get();

    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(1)
                disabled=is_first
                title="First page"
            >
                {icon("chevrons-left")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(current_page.get().saturating_sub(1).max(1))
                disabled=is_first
                title="Previous page"
            >
                {icon("chevron-left")}
            </button>
            <span class="pagination-info">
                {move || format!(
                    "{} / {} ({})",
                    current_page.get(),
                    total_pages.get().max(1),
                    total_count.get()
                )}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(current_page.get() + 1)
                disabled=is_last
                title="Next page"
            >
                {icon("chevron-right")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(total_pages.get().max(1))
                disabled=is_last
                title="Last page"
            >
                {icon("chevrons-right")}
            </button>
        </div>
    }
}
