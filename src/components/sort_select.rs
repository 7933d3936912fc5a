//! Sort Select Component

use leptos::prelude::*;

use crate::context::AppContext;
use crate::models::SortOrder;

/// Listing order selector; disabled while searching, where the backend ranks
#[component]
pub fn SortSelect() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <select
            class="sort-select"
            prop:value=move || ctx.query.get().sort.as_str()
            prop:disabled=move || ctx.query.get().is_search()
            on:change=move |ev| ctx.set_sort(SortOrder::parse(&event_target_value(&ev)))
        >
            <option value="asc">"Сначала старые"</option>
            <option value="desc">"Сначала новые"</option>
        </select>
    }
}
