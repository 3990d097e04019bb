//! ページ送り

use leptos::prelude::*;
use movie_search_common::Pagination;

#[component]
pub fn PaginationControls<F>(
    pagination: Signal<Pagination>,
    on_page: F,
) -> impl IntoView
where
    F: Fn(i64) + 'static + Clone + Send,
{
    view! {
        <div class="pagination">
            <button
                class="btn btn-secondary"
                disabled=move || !pagination.get().can_prev()
                on:click={
                    let on_page = on_page.clone();
                    move |_| on_page(-1)
                }
            >
                "Prev"
            </button>
            <span>{move || pagination.get().label()}</span>
            <button
                class="btn btn-secondary"
                disabled=move || !pagination.get().can_next()
                on:click={
                    let on_page = on_page.clone();
                    move |_| on_page(1)
                }
            >
                "Next"
            </button>
        </div>
    }
}
