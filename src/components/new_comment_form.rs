//! New Comment Form Component
//!
//! Form for posting top-level comments.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::AppContext;
use crate::dialog;
use crate::models::CreateCommentRequest;

/// Form for creating top-level comments; Ctrl+Enter in the textarea submits
#[component]
pub fn NewCommentForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (author, set_author) = signal(String::new());
    let (content, set_content) = signal(String::new());

    let submit = move || {
        let author_value = author.get().trim().to_string();
        let content_value = content.get().trim().to_string();
        if author_value.is_empty() || content_value.is_empty() {
            dialog::alert("Заполните все поля");
            return;
        }

        spawn_local(async move {
            let request = CreateCommentRequest {
                author: &author_value,
                content: &content_value,
                parent_id: None,
            };
            match api::create_comment(&request).await {
                Ok(_) => {
                    set_author.set(String::new());
                    set_content.set(String::new());
                    ctx.reload();
                }
                Err(err) => dialog::alert(&err),
            }
        });
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        submit();
    };

    view! {
        <form class="new-comment-form" on:submit=on_submit>
            <input
                type="text"
                class="author-input"
                placeholder="Ваше имя"
                prop:value=move || author.get()
                on:input=move |ev| set_author.set(event_target_value(&ev))
            />
            <textarea
                class="content-input"
                placeholder="Написать комментарий..."
                prop:value=move || content.get()
                on:input=move |ev| set_content.set(event_target_value(&ev))
                on:keydown=move |ev: web_sys::KeyboardEvent| {
                    if ev.key() == "Enter" && ev.ctrl_key() {
                        submit();
                    }
                }
            ></textarea>
            <button type="submit" class="add-comment-btn">"Отправить"</button>
        </form>
    }
}
