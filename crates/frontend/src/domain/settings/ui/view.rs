//! Settings page: load on mount, edit in place, save or reset explicitly.

use super::model::{self, SaveError};
use super::view_model::{
    is_error_message, save_error_message, SettingsVm, RESET_ERROR, RESET_SUCCESS, SAVE_SUCCESS,
};
use contracts::settings::{
    CHUNK_OVERLAP_MIN, CHUNK_SIZE_MAX, CHUNK_SIZE_MIN, TEMPERATURE_MAX, TEMPERATURE_MIN,
    TOP_K_MAX, TOP_K_MIN, TYPEWRITER_SPEED_MAX, TYPEWRITER_SPEED_MIN,
};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn SettingsPage() -> impl IntoView {
    let vm = SettingsVm::new();

    // Load once on mount. A failed load silently keeps the defaults.
    spawn_local(async move {
        match model::fetch_settings().await {
            Ok(settings) => vm.apply(settings),
            Err(e) => log::error!("Error loading settings: {}", e),
        }
        vm.is_loading.set(false);
    });

    let save = move |_| {
        vm.is_saving.set(true);
        vm.message.set(String::new());
        spawn_local(async move {
            match model::save_settings(&vm.snapshot()).await {
                Ok(()) => vm.message.set(SAVE_SUCCESS.to_string()),
                Err(SaveError::Rejected(detail)) => {
                    vm.message.set(save_error_message(detail));
                }
                Err(SaveError::Transport(e)) => {
                    log::error!("Error saving settings: {}", e);
                    vm.message.set(save_error_message(None));
                }
            }
            vm.is_saving.set(false);
        });
    };

    let reset = move |_| {
        spawn_local(async move {
            match model::reset_settings().await {
                Ok(settings) => {
                    vm.apply(settings);
                    vm.message.set(RESET_SUCCESS.to_string());
                }
                Err(e) => {
                    log::error!("Error resetting settings: {}", e);
                    vm.message.set(RESET_ERROR.to_string());
                }
            }
        });
    };

    let int_input = move |apply: fn(&mut contracts::settings::AppSettings, i64)| {
        move |ev: leptos::ev::Event| {
            if let Ok(value) = event_target_value(&ev).parse::<i64>() {
                vm.settings.update(|s| apply(s, value));
            }
        }
    };

    view! {
        <Show
            when=move || !vm.is_loading.get()
            fallback=|| view! { <div class="settings-loading"><div class="spinner"></div></div> }
        >
            <div class="settings-page">
                <div class="settings-card">
                    <div class="settings-card__head">
                        <h1>"Application Settings"</h1>
                        <p>"Configure your RAG Assistant preferences"</p>
                    </div>

                    <Show when=move || !vm.message.get().is_empty()>
                        <div
                            class="settings-banner"
                            class:settings-banner--error=move || {
                                is_error_message(&vm.message.get())
                            }
                        >
                            {move || vm.message.get()}
                        </div>
                    </Show>

                    <form class="settings-form" on:submit=|ev| ev.prevent_default()>
                        <section>
                            <h2>"Document Processing"</h2>
                            <div class="settings-form__grid">
                                <div class="settings-field">
                                    <label for="chunk-size">"Chunk Size"</label>
                                    <input
                                        id="chunk-size"
                                        type="number"
                                        min=CHUNK_SIZE_MIN.to_string()
                                        max=CHUNK_SIZE_MAX.to_string()
                                        prop:value=move || {
                                            vm.settings.with(|s| s.chunk_size).to_string()
                                        }
                                        on:input=int_input(|s, v| s.chunk_size = v)
                                    />
                                    <p class="settings-field__hint">
                                        "Characters per chunk (100-5000)"
                                    </p>
                                </div>
                                <div class="settings-field">
                                    <label for="chunk-overlap">"Chunk Overlap"</label>
                                    <input
                                        id="chunk-overlap"
                                        type="number"
                                        min=CHUNK_OVERLAP_MIN.to_string()
                                        max=move || {
                                            vm.settings.with(|s| s.chunk_overlap_max()).to_string()
                                        }
                                        prop:value=move || {
                                            vm.settings.with(|s| s.chunk_overlap).to_string()
                                        }
                                        on:input=int_input(|s, v| s.chunk_overlap = v)
                                    />
                                    <p class="settings-field__hint">"Overlap between chunks"</p>
                                </div>
                            </div>
                        </section>

                        <section>
                            <h2>"AI & Query"</h2>
                            <div class="settings-form__grid">
                                <div class="settings-field">
                                    <label for="top-k">"Top-K Retrieval"</label>
                                    <input
                                        id="top-k"
                                        type="number"
                                        min=TOP_K_MIN.to_string()
                                        max=TOP_K_MAX.to_string()
                                        prop:value=move || {
                                            vm.settings.with(|s| s.top_k_retrieval).to_string()
                                        }
                                        on:input=int_input(|s, v| s.top_k_retrieval = v)
                                    />
                                    <p class="settings-field__hint">
                                        "Number of chunks to retrieve"
                                    </p>
                                </div>
                                <div class="settings-field">
                                    <label for="temperature">"Temperature"</label>
                                    <input
                                        id="temperature"
                                        type="number"
                                        min=TEMPERATURE_MIN.to_string()
                                        max=TEMPERATURE_MAX.to_string()
                                        step="0.1"
                                        prop:value=move || {
                                            vm.settings.with(|s| s.temperature).to_string()
                                        }
                                        on:input=move |ev| {
                                            if let Ok(value) =
                                                event_target_value(&ev).parse::<f64>()
                                            {
                                                vm.settings.update(|s| s.temperature = value);
                                            }
                                        }
                                    />
                                    <p class="settings-field__hint">
                                        "AI response creativity (0-2)"
                                    </p>
                                </div>
                            </div>
                        </section>

                        <section>
                            <h2>"User Experience"</h2>
                            <div class="settings-form__grid">
                                <div class="settings-field">
                                    <label for="typewriter-speed">"Typewriter Speed"</label>
                                    <input
                                        id="typewriter-speed"
                                        type="number"
                                        min=TYPEWRITER_SPEED_MIN.to_string()
                                        max=TYPEWRITER_SPEED_MAX.to_string()
                                        prop:value=move || {
                                            vm.settings.with(|s| s.typewriter_speed).to_string()
                                        }
                                        on:input=int_input(|s, v| s.typewriter_speed = v)
                                    />
                                    <p class="settings-field__hint">
                                        "Characters per second (10-200)"
                                    </p>
                                </div>
                                <div class="settings-field">
                                    <label for="theme">"Theme"</label>
                                    <select
                                        id="theme"
                                        prop:value=move || vm.settings.with(|s| s.theme.clone())
                                        on:change=move |ev| {
                                            vm.settings
                                                .update(|s| s.theme = event_target_value(&ev));
                                        }
                                    >
                                        <option value="light">"Light"</option>
                                        <option value="dark">"Dark"</option>
                                        <option value="auto">"Auto"</option>
                                    </select>
                                </div>
                            </div>
                            <label class="settings-checkbox">
                                <input
                                    type="checkbox"
                                    prop:checked=move || {
                                        vm.settings.with(|s| s.batch_processing)
                                    }
                                    on:change=move |ev| {
                                        vm.settings.update(|s| {
                                            s.batch_processing = event_target_checked(&ev);
                                        });
                                    }
                                />
                                <span>"Enable batch processing for multiple files"</span>
                            </label>
                        </section>

                        <div class="settings-form__actions">
                            <button type="button" class="button button--ghost" on:click=reset>
                                "Reset to Defaults"
                            </button>
                            <button
                                type="button"
                                class="button button--primary"
                                disabled=move || vm.is_saving.get()
                                on:click=save
                            >
                                {move || {
                                    if vm.is_saving.get() { "Saving..." } else { "Save Settings" }
                                }}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}
