//! Reply Modal Component
//!
//! Modal form for replying to a specific comment. Closes on submit success,
//! cancel, the × button, a backdrop click, or Escape.

use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::AppContext;
use crate::dialog;
use crate::models::CreateCommentRequest;

#[component]
pub fn ReplyModal() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (author, set_author) = signal(String::new());
    let (content, set_content) = signal(String::new());
    let author_input = NodeRef::<leptos::html::Input>::new();

    // Blank the inputs and focus the author field every time the modal opens
    Effect::new(move |_| {
        if ctx.reply_to.get().is_some() {
            set_author.set(String::new());
            set_content.set(String::new());
            if let Some(input) = author_input.get() {
                let _ = input.focus();
            }
        }
    });

    let escape_handle = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" && ctx.reply_to.get_untracked().is_some() {
            ctx.close_reply();
        }
    });
    on_cleanup(move || escape_handle.remove());

    let submit = move || {
        let Some(target) = ctx.reply_to.get_untracked() else {
            return;
        };
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
                parent_id: Some(target.id),
            };
            match api::create_comment(&request).await {
                Ok(_) => {
                    ctx.close_reply();
                    ctx.reload();
                }
                Err(err) => dialog::alert(&err),
            }
        });
    };

    let header = move || {
        ctx.reply_to
            .get()
            .map(|target| format!("Ответ на {}: \"{}\"", target.author, target.excerpt))
            .unwrap_or_default()
    };

    view! {
        <Show when=move || ctx.reply_to.get().is_some()>
            <div class="modal-backdrop" on:click=move |_| ctx.close_reply()>
                <div class="modal" on:click=|ev| ev.stop_propagation()>
                    <div class="modal-header">
                        <span class="reply-to">{header}</span>
                        <button class="close-btn" on:click=move |_| ctx.close_reply()>"×"</button>
                    </div>

                    <input
                        type="text"
                        class="author-input"
                        node_ref=author_input
                        placeholder="Ваше имя"
                        prop:value=move || author.get()
                        on:input=move |ev| set_author.set(event_target_value(&ev))
                    />
                    <textarea
                        class="content-input"
                        placeholder="Ваш ответ..."
                        prop:value=move || content.get()
                        on:input=move |ev| set_content.set(event_target_value(&ev))
                        on:keydown=move |ev: web_sys::KeyboardEvent| {
                            if ev.key() == "Enter" && ev.ctrl_key() {
                                submit();
                            }
                        }
                    ></textarea>

                    <div class="modal-actions">
                        <button class="submit-reply-btn" on:click=move |_| submit()>"Отправить"</button>
                        <button class="cancel-btn" on:click=move |_| ctx.close_reply()>"Отмена"</button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
