//! Comment Tree View Component
//!
//! Renders the flattened comment tree with loading and empty states.

use leptos::prelude::*;

use crate::components::CommentNode;
use crate::context::AppContext;
use crate::models::Comment;
use crate::tree::flatten_tree;

#[component]
pub fn CommentTreeView(
    comments: ReadSignal<Vec<Comment>>,
    loading: ReadSignal<bool>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let rows = move || flatten_tree(&comments.get(), &ctx.collapsed.get());

    view! {
        <div class="comments-container">
            <Show when=move || loading.get()>
                <div class="loading">"Загрузка..."</div>
            </Show>

            <Show when=move || !loading.get() && comments.get().is_empty()>
                <div class="no-comments">"Комментариев пока нет"</div>
            </Show>

            <For
                each=rows
                key=|row| {
                    // Key on every field that affects the rendered row so
                    // updates from a reload or collapse toggle re-render it
                    (row.id, row.depth, row.collapsed, row.deleted, row.descendants, row.content.clone())
                }
                children=move |row| view! { <CommentNode row=row /> }
            />
        </div>
    }
}
