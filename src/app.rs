//! Comment Tree Frontend App
//!
//! Root component: owns the page state and the load effect.

use std::collections::HashSet;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{
    CommentTreeView, NewCommentForm, PaginationBar, ReplyModal, SearchBar, SortSelect,
};
use crate::context::{AppContext, ReplyTarget};
use crate::dialog;
use crate::models::Comment;
use crate::state::QueryState;

#[component]
pub fn App() -> impl IntoView {
    // State
    let (comments, set_comments) = signal(Vec::<Comment>::new());
    let (loading, set_loading) = signal(true);
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let query = RwSignal::new(QueryState::default());
    let collapsed = RwSignal::new(HashSet::<i64>::new());
    let reply_to = RwSignal::new(None::<ReplyTarget>);

    // Provide context to all children
    let ctx = AppContext::new((reload_trigger, set_reload_trigger), query, collapsed, reply_to);
    provide_context(ctx);

    // Load the current page whenever the trigger bumps. The query state is
    // read untracked: mutations go through AppContext methods, which reload
    // explicitly, so recording `has_more` below cannot re-run the effect.
    Effect::new(move |_| {
        let trigger = reload_trigger.get();
        let q = query.get_untracked();
        web_sys::console::log_1(
            &format!(
                "[APP] Loading page {} (sort={}, query={:?}, trigger={})",
                q.page,
                q.sort.as_str(),
                q.query,
                trigger
            )
            .into(),
        );

        set_loading.set(true);
        spawn_local(async move {
            let result = match &q.query {
                Some(text) => api::search_comments(text, q.limit, q.offset()).await,
                None => api::list_comments(q.limit, q.offset(), q.sort).await,
            };

            match result {
                Ok(page) => {
                    web_sys::console::log_1(
                        &format!("[APP] Loaded {} comments", page.len()).into(),
                    );
                    query.update(|s| s.record_results(page.len()));
                    set_comments.set(page);
                }
                Err(err) => {
                    dialog::alert(&err);
                    query.update(|s| s.has_more = false);
                    set_comments.set(Vec::new());
                }
            }
            set_loading.set(false);
        });
    });

    view! {
        <div class="container">
            <h1>"Комментарии"</h1>

            <SearchBar />
            <NewCommentForm />

            <div class="toolbar">
                <SortSelect />
            </div>

            <CommentTreeView comments=comments loading=loading />
            <PaginationBar />
            <ReplyModal />
        </div>
    }
}
