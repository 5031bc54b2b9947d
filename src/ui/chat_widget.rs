//! Floating chatbot widget
//!
//! A launcher button in the page corner toggles a small panel holding the
//! conversation transcript and a composer. Replies are scheduled with a
//! randomized composing delay; several can be pending at once and each lands
//! in the order its timer fires.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use chrono::Utc;
use leptos::prelude::*;

use crate::core::chatbot::{
    ConversationLog, ConversationTurn, GREETING_REPLIES, Speaker, TYPING_NOTICE, normalize_input,
};
use crate::ui::markdown::ChatMarkdown;

#[cfg(not(feature = "ssr"))]
use leptos::wasm_bindgen::JsCast;

/// Chat launcher and panel, fixed to the bottom-right page corner
#[component]
pub fn ChatbotWidget() -> impl IntoView {
    let is_open = RwSignal::new(false);
    let log = RwSignal::new(ConversationLog::new());
    let input_value = RwSignal::new(String::new());
    // Replies still being composed; the typing notice shows while nonzero
    let pending = RwSignal::new(0u32);
    let transcript_ref = NodeRef::<leptos::html::Div>::new();
    // Flipped on teardown so scheduled replies stop touching state
    let disposed = Arc::new(AtomicBool::new(false));
    {
        let disposed = disposed.clone();
        on_cleanup(move || disposed.store(true, Ordering::Relaxed));
    }

    // The first open seeds the transcript with the bot's greeting
    let open_panel = move || {
        if log.with_untracked(|l| l.is_empty()) {
            log.update(|l| l.push(ConversationTurn::bot(GREETING_REPLIES[0], Utc::now())));
        }
        is_open.set(true);
    };

    #[cfg(not(feature = "ssr"))]
    {
        use leptos::ev::{click, keydown};

        // Escape closes the panel
        let handle_keydown = window_event_listener(keydown, move |ev| {
            if ev.key() == "Escape" && is_open.get_untracked() {
                is_open.set(false);
            }
        });
        on_cleanup(move || drop(handle_keydown));

        // As does a click landing outside the panel and its launcher
        let handle_click = window_event_listener(click, move |ev| {
            if !is_open.get_untracked() {
                return;
            }
            let inside = ev
                .target()
                .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
                .map(|el| {
                    matches!(el.closest("#chat-panel"), Ok(Some(_)))
                        || matches!(el.closest("#chat-launcher"), Ok(Some(_)))
                })
                .unwrap_or(false);
            if !inside {
                is_open.set(false);
            }
        });
        on_cleanup(move || drop(handle_click));

        // Keep the newest transcript entry in view
        Effect::new(move |_| {
            log.track();
            pending.track();
            if let Some(el) = transcript_ref.get() {
                el.set_scroll_top(el.scroll_height());
            }
        });
    }

    let send_message = {
        let disposed = disposed.clone();
        move || {
            let Some(text) = normalize_input(&input_value.get_untracked()) else {
                return;
            };
            input_value.set(String::new());
            log.update(|l| l.push(ConversationTurn::user(text.clone(), Utc::now())));

            #[cfg(not(feature = "ssr"))]
            {
                use gloo_timers::future::TimeoutFuture;
                use leptos::task::spawn_local;

                use crate::core::chatbot::{respond, thinking_delay_ms};
                use crate::core::random::BrowserRandom;

                pending.update(|n| *n += 1);
                let disposed = disposed.clone();
                spawn_local(async move {
                    let mut rng = BrowserRandom;
                    TimeoutFuture::new(thinking_delay_ms(&mut rng)).await;
                    if disposed.load(Ordering::Relaxed) {
                        return;
                    }
                    let reply = respond(&text, &mut rng);
                    pending.update(|n| *n = n.saturating_sub(1));
                    log.update(|l| l.push(ConversationTurn::bot(reply, Utc::now())));
                });
            }
            #[cfg(feature = "ssr")]
            {
                let _ = (&disposed, text);
            }
        }
    };
    let send_from_key = send_message.clone();
    let send_from_click = send_message;

    view! {
        // Launcher
        <button
            id="chat-launcher"
            class="fixed bottom-5 right-5 z-40 w-14 h-14 rounded-full bg-accent-primary text-white text-2xl
                   shadow-lg hover:bg-accent-primary-hover hover:scale-105 transition-all duration-200"
            on:click=move |_| {
                if is_open.get_untracked() {
                    is_open.set(false);
                } else {
                    open_panel();
                }
            }
            aria-label="AI asszisztens megnyitása"
            aria-expanded=move || is_open.get()
        >
            "🤖"
        </button>

        // Panel
        <div
            id="chat-panel"
            class=move || {
                if is_open.get() {
                    "fixed bottom-24 right-5 z-40 w-[22rem] max-w-[calc(100vw-2.5rem)] h-[28rem]
                     bg-theme-primary border border-theme rounded-2xl shadow-2xl flex flex-col overflow-hidden
                     transition-all duration-300"
                } else {
                    "fixed bottom-24 right-5 z-40 w-[22rem] max-w-[calc(100vw-2.5rem)] h-[28rem]
                     bg-theme-primary border border-theme rounded-2xl shadow-2xl flex flex-col overflow-hidden
                     transition-all duration-300 opacity-0 translate-y-4 pointer-events-none"
                }
            }
        >
            // Header
            <div class="flex items-center justify-between px-4 py-3 border-b border-theme bg-theme-secondary/30">
                <div class="flex items-center gap-3">
                    <div class="w-9 h-9 rounded-lg bg-gradient-to-br from-accent-primary to-blue-600
                                flex items-center justify-center text-lg">
                        <span aria-hidden="true">"🤖"</span>
                    </div>
                    <div>
                        <h2 class="text-sm font-semibold text-theme-primary">"DebreTech AI asszisztens"</h2>
                        <p class="text-xs text-theme-tertiary">"Általában pár másodpercen belül válaszol"</p>
                    </div>
                </div>
                <button
                    class="p-1.5 rounded-lg text-theme-tertiary hover:text-theme-primary hover:bg-theme-secondary/50 transition-colors"
                    on:click=move |_| is_open.set(false)
                    aria-label="Chat bezárása"
                >
                    "✕"
                </button>
            </div>

            // Transcript
            <div class="flex-1 overflow-y-auto p-4 space-y-3" node_ref=transcript_ref>
                <For
                    each=move || log.with(|l| l.turns().to_vec()).into_iter().enumerate()
                    key=|(i, _)| *i
                    children=move |(_, turn)| {
                        let is_user = turn.speaker == Speaker::User;
                        let text = turn.text.clone();

                        view! {
                            <div class=if is_user { "flex justify-end" } else { "flex justify-start" }>
                                {if is_user {
                                    view! {
                                        <div class="max-w-[85%] px-3.5 py-2 rounded-2xl rounded-br-md bg-accent-primary text-white">
                                            <p class="text-sm whitespace-pre-wrap break-words">{text}</p>
                                        </div>
                                    }
                                        .into_any()
                                } else {
                                    view! {
                                        <div class="max-w-[85%] px-3.5 py-2 rounded-2xl rounded-bl-md bg-theme-secondary/40 text-theme-primary">
                                            <ChatMarkdown content=text />
                                        </div>
                                    }
                                        .into_any()
                                }}
                            </div>
                        }
                    }
                />

                // Composing indicator
                {move || {
                    (pending.get() > 0)
                        .then(|| {
                            view! {
                                <div class="flex justify-start">
                                    <div class="max-w-[85%] px-3.5 py-2 rounded-2xl rounded-bl-md bg-theme-secondary/40">
                                        <div class="flex items-center gap-2">
                                            <div class="flex gap-1" aria-hidden="true">
                                                <span
                                                    class="w-1.5 h-1.5 bg-theme-tertiary rounded-full animate-bounce"
                                                    style="animation-delay: 0ms"
                                                ></span>
                                                <span
                                                    class="w-1.5 h-1.5 bg-theme-tertiary rounded-full animate-bounce"
                                                    style="animation-delay: 150ms"
                                                ></span>
                                                <span
                                                    class="w-1.5 h-1.5 bg-theme-tertiary rounded-full animate-bounce"
                                                    style="animation-delay: 300ms"
                                                ></span>
                                            </div>
                                            <span class="text-sm italic opacity-70 text-theme-secondary">
                                                {TYPING_NOTICE}
                                            </span>
                                        </div>
                                    </div>
                                </div>
                            }
                        })
                }}
            </div>

            // Composer
            <div class="px-3 py-3 border-t border-theme bg-theme-secondary/20">
                <div class="flex items-end gap-2">
                    <textarea
                        class="flex-1 input-base resize-none text-sm"
                        placeholder="Írja be kérdését..."
                        rows=1
                        prop:value=move || input_value.get()
                        on:input=move |ev| input_value.set(event_target_value(&ev))
                        on:keydown=move |ev| {
                            if ev.key() == "Enter" && !ev.shift_key() {
                                ev.prevent_default();
                                send_from_key();
                            }
                        }
                    />
                    <button
                        class="px-4 py-2 rounded-xl bg-accent-primary text-white text-sm font-medium
                               hover:bg-accent-primary-hover transition-colors
                               disabled:opacity-50 disabled:cursor-not-allowed"
                        on:click=move |_| send_from_click()
                        disabled=move || input_value.get().trim().is_empty()
                    >
                        "Küldés"
                    </button>
                </div>
                <p class="mt-1.5 text-xs text-theme-tertiary text-center">
                    "Enter a küldéshez, Shift+Enter új sorhoz"
                </p>
            </div>
        </div>
    }
}
