//! Comment Node Component
//!
//! One visible row of the comment tree.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::{AppContext, ReplyTarget};
use crate::dialog;
use crate::format::{excerpt, format_timestamp};
use crate::tree::{reply_count_label, CommentRow};

const INDENT_PX: usize = 24;

/// A single comment row with collapse, reply, and delete actions
#[component]
pub fn CommentNode(row: CommentRow) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let id = row.id;
    let deleted = row.deleted;
    let collapsed = row.collapsed;
    let descendants = row.descendants;
    let indent = row.depth * INDENT_PX;
    let author = row.author.clone();
    let reply_author = row.author.clone();
    let reply_excerpt = excerpt(&row.content, 100);
    let actions_enabled = row.actions_enabled();
    let content = row.display_content().to_string();

    let on_delete = move |_| {
        if !dialog::confirm("Удалить комментарий?") {
            return;
        }
        spawn_local(async move {
            match api::delete_comment(id).await {
                Ok(()) => ctx.reload(),
                Err(err) => dialog::alert(&err),
            }
        });
    };

    let on_reply = move |_| {
        ctx.open_reply(ReplyTarget {
            id,
            author: reply_author.clone(),
            excerpt: reply_excerpt.clone(),
        });
    };

    view! {
        <div
            class=if deleted { "comment deleted-comment" } else { "comment" }
            style=format!("margin-left: {}px;", indent)
        >
            <div class="comment-header">
                <div class="comment-meta">
                    {if descendants > 0 {
                        view! {
                            <button
                                class=if collapsed { "collapse-btn collapsed" } else { "collapse-btn" }
                                on:click=move |_| ctx.toggle_collapsed(id)
                            >
                                {if collapsed { "▶" } else { "▼" }}
                            </button>
                        }.into_any()
                    } else {
                        view! { <span class="collapse-spacer">"•"</span> }.into_any()
                    }}

                    <span class="comment-author">{author}</span>
                    <span class="comment-date">{format_timestamp(&row.created_at)}</span>

                    {(descendants > 0).then(move || view! {
                        <span class="children-count">
                            {format!("{} {}", descendants, reply_count_label(descendants))}
                        </span>
                    })}
                </div>

                {actions_enabled.then(move || view! {
                    <div class="comment-actions">
                        <button class="reply-btn" on:click=on_reply>"Ответить"</button>
                        <button class="delete-btn" on:click=on_delete>"Удалить"</button>
                    </div>
                })}
            </div>

            <div class="comment-content">{content}</div>
        </div>
    }
}
