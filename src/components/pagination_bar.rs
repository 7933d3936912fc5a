//! Pagination Bar Component

use leptos::prelude::*;

use crate::context::AppContext;

/// Prev/next controls with the current page number
#[component]
pub fn PaginationBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <div class="pagination">
            <button
                class="prev-btn"
                prop:disabled=move || !ctx.query.get().can_prev()
                on:click=move |_| ctx.prev_page()
            >
                "Назад"
            </button>

            <span class="page-info">
                {move || format!("Страница {}", ctx.query.get().page)}
            </span>

            <button
                class="next-btn"
                prop:disabled=move || !ctx.query.get().can_next()
                on:click=move |_| ctx.next_page()
            >
                "Вперед"
            </button>
        </div>
    }
}
