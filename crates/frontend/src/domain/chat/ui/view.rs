//! Chat pane: message history, loading indicator and the question input.

use super::model;
use super::typewriter::start_reveal;
use super::view_model::{
    can_send, ChatMessage, ChatRole, ChatVm, NO_ANSWER_FALLBACK, QUERY_ERROR_MESSAGE,
    REVEAL_INTERVAL_MS,
};
use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::KeyboardEvent;

fn send_query(vm: ChatVm) {
    let question = vm.input.get_untracked();
    if !can_send(&question, vm.is_querying.get_untracked()) {
        return;
    }

    vm.push_user(&question);
    vm.input.set(String::new());
    vm.is_querying.set(true);

    spawn_local(async move {
        match model::post_query(&question).await {
            Ok(resp) => {
                let content = match resp.answer {
                    Some(answer) if !answer.is_empty() => answer,
                    _ => NO_ANSWER_FALLBACK.to_string(),
                };
                let sources = resp.sources.unwrap_or_default();
                let id = vm.push_assistant(&content, sources);
                vm.is_querying.set(false);
                start_reveal(vm, id, content, REVEAL_INTERVAL_MS);
            }
            Err(e) => {
                log::error!("Query error: {}", e);
                let id = vm.push_assistant(QUERY_ERROR_MESSAGE, Vec::new());
                vm.is_querying.set(false);
                start_reveal(vm, id, QUERY_ERROR_MESSAGE.to_string(), REVEAL_INTERVAL_MS);
            }
        }
    });
}

#[component]
fn MessageBubble(vm: ChatVm, message: ChatMessage) -> impl IntoView {
    let is_user = message.role == ChatRole::User;
    let id = message.id.clone();
    let toggle_id = message.id.clone();
    let expanded_id = message.id.clone();
    let content = message.content.clone();
    let source_count = message.sources.len();
    // StoredValue is Copy, which lets the nested closures below share the
    // source list without fighting over ownership of `message`.
    let sources = StoredValue::new(message.sources.clone());

    let typing = move || vm.typing.with(|t| t.get(&id).cloned());
    let shown_text = {
        let typing = typing.clone();
        move || match typing() {
            Some(state) => state.text,
            None => content.clone(),
        }
    };
    let is_typing = {
        let typing = typing.clone();
        move || typing().map(|s| s.is_typing).unwrap_or(false)
    };

    view! {
        <div class="chat-message" class:chat-message--user=is_user>
            <div class="chat-avatar" class:chat-avatar--user=is_user>
                {if is_user { "You" } else { "AI" }}
            </div>
            <div class="chat-bubble" class:chat-bubble--user=is_user>
                <p class="chat-bubble__text">
                    {if is_user {
                        view! { {message.content.clone()} }.into_any()
                    } else {
                        view! {
                            {shown_text}
                            <Show when=is_typing.clone()>
                                <span class="chat-cursor"></span>
                            </Show>
                        }
                        .into_any()
                    }}
                </p>
                <Show when={
                    let is_typing = is_typing.clone();
                    move || source_count > 0 && !is_typing()
                }>
                    <div class="chat-sources">
                        <button
                            class="chat-sources__label"
                            on:click={
                                let toggle_id = toggle_id.clone();
                                move |_| vm.toggle_sources(&toggle_id)
                            }
                        >
                            "Sources (" {source_count} ")"
                        </button>
                        <Show when={
                            let expanded_id = expanded_id.clone();
                            move || vm.sources_expanded(&expanded_id)
                        }>
                            {move || {
                                sources.with_value(|sources| {
                                    sources
                                        .iter()
                                        .map(|s| {
                                            view! {
                                                <p class="chat-sources__entry">
                                                    {s.file_name.clone()} " (chunk "
                                                    {s.chunk_index + 1} ")"
                                                </p>
                                            }
                                        })
                                        .collect_view()
                                })
                            }}
                        </Show>
                    </div>
                </Show>
            </div>
        </div>
    }
}

#[component]
pub fn ChatPane(vm: ChatVm) -> impl IntoView {
    on_cleanup(move || vm.cancel_reveals());

    let on_key = move |ev: KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            send_query(vm);
        }
    };

    view! {
        <div class="chat-pane">
            <div class="chat-pane__head">
                <h2>"AI Assistant"</h2>
                <p>"Ask questions about your uploaded documents"</p>
            </div>

            <div class="chat-pane__messages">
                <Show when=move || vm.messages.get().is_empty()>
                    <div class="chat-message">
                        <div class="chat-avatar">"AI"</div>
                        <div class="chat-bubble">
                            <p class="chat-bubble__text">
                                "Hello! I'm here to help you with your documents. Upload \
                                 some files on the left and then ask me questions about them."
                            </p>
                        </div>
                    </div>
                </Show>

                <For
                    each=move || vm.messages.get()
                    key=|message| message.id.clone()
                    children=move |message| view! { <MessageBubble vm=vm message=message /> }
                />

                <Show when=move || vm.is_querying.get()>
                    <div class="chat-message">
                        <div class="chat-avatar">"AI"</div>
                        <div class="chat-bubble">
                            <div class="chat-loading">
                                <span class="chat-loading__dot"></span>
                                <span class="chat-loading__dot"></span>
                                <span class="chat-loading__dot"></span>
                            </div>
                        </div>
                    </div>
                </Show>
            </div>

            <div class="chat-pane__input">
                <input
                    type="text"
                    placeholder="Ask a question about your documents..."
                    prop:value=move || vm.input.get()
                    disabled=move || vm.is_querying.get()
                    on:input=move |ev| vm.input.set(event_target_value(&ev))
                    on:keydown=on_key
                />
                <button
                    class="button button--primary"
                    disabled=move || {
                        !can_send(&vm.input.get(), vm.is_querying.get())
                    }
                    on:click=move |_| send_query(vm)
                >
                    {move || if vm.is_querying.get() { "Sending..." } else { "Send" }}
                    {icon("send")}
                </button>
            </div>
        </div>
    }
}
