//! Search Bar Component
//!
//! Full-text search over comments; Enter in the input triggers the search.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::dialog;

#[component]
pub fn SearchBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (input, set_input) = signal(String::new());

    let search = move || {
        let query = input.get().trim().to_string();
        if query.is_empty() {
            dialog::alert("Введите запрос для поиска");
            return;
        }
        ctx.enter_search(query);
    };

    let clear = move |_| {
        set_input.set(String::new());
        ctx.clear_search();
    };

    view! {
        <div class="search-bar">
            <input
                type="text"
                class="search-input"
                placeholder="Поиск по комментариям..."
                prop:value=move || input.get()
                on:input=move |ev| set_input.set(event_target_value(&ev))
                on:keydown=move |ev: web_sys::KeyboardEvent| {
                    if ev.key() == "Enter" {
                        search();
                    }
                }
            />
            <button class="search-btn" on:click=move |_| search()>"Поиск"</button>
            <button class="clear-btn" on:click=clear>"Сбросить"</button>
        </div>
    }
}
