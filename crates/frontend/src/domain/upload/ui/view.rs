//! Upload pane: drop zone, file list, chunk previews and processing status.

use super::model;
use super::view_model::{
    dispatch_for, is_supported, Dispatch, UploadVm, UploadedFile, PROGRESS_DONE, PROGRESS_FAILED,
};
use crate::shared::format::{format_file_size, step_label};
use crate::shared::icons::icon;
use contracts::upload::{StepStatus, MIME_PDF};
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::{DragEvent, HtmlInputElement};

fn progress_status(progress: Option<i32>) -> (&'static str, String) {
    match progress {
        Some(PROGRESS_DONE) => ("ok", "✓ Upload successful".to_string()),
        Some(PROGRESS_FAILED) => ("err", "✗ Upload failed".to_string()),
        Some(p) if p > 0 => ("busy", format!("Uploading... {}%", p)),
        _ => ("idle", "Pending upload".to_string()),
    }
}

fn step_marker(status: StepStatus) -> &'static str {
    match status {
        StepStatus::Completed => "✓",
        StepStatus::Error => "✗",
        StepStatus::Pending => "...",
    }
}

fn file_list_from(list: Option<web_sys::FileList>) -> Vec<web_sys::File> {
    let Some(list) = list else {
        return Vec::new();
    };
    (0..list.length()).filter_map(|i| list.item(i)).collect()
}

/// Validate, register and dispatch a set of picked or dropped files.
/// Invalid MIME types are silently skipped and leave no state behind.
fn submit_files(vm: UploadVm, picked: Vec<web_sys::File>) {
    let valid: Vec<web_sys::File> = picked
        .into_iter()
        .filter(|f| is_supported(&f.type_()))
        .collect();
    let Some(dispatch) = dispatch_for(valid.len()) else {
        return;
    };

    vm.accept(
        valid
            .iter()
            .map(|f| UploadedFile {
                name: f.name(),
                size: f.size(),
                mime_type: f.type_(),
            })
            .collect(),
    );
    let names: Vec<String> = valid.iter().map(|f| f.name()).collect();
    for name in &names {
        vm.begin_upload(name);
    }

    spawn_local(async move {
        match dispatch {
            Dispatch::Single => {
                let file = &valid[0];
                match model::upload_file(file).await {
                    Ok(resp) => vm.record_success(
                        &file.name(),
                        resp.chunk_count(),
                        resp.chunk_previews,
                        resp.processing_steps,
                    ),
                    Err(e) => {
                        log::error!("Failed to upload {}: {}", file.name(), e);
                        vm.record_failure(&file.name());
                    }
                }
            }
            Dispatch::Batch => match model::upload_batch(&valid).await {
                Ok(resp) => {
                    for item in resp.batch_results {
                        match item.error {
                            Some(err) => {
                                log::error!("Failed to upload {}: {}", item.filename, err);
                                vm.record_failure(&item.filename);
                            }
                            None => {
                                let count = item.chunk_count();
                                vm.record_success(
                                    &item.filename,
                                    count,
                                    item.chunk_previews,
                                    item.processing_steps,
                                );
                            }
                        }
                    }
                }
                Err(e) => {
                    log::error!("Batch upload failed: {}", e);
                    vm.fail_all(&names);
                }
            },
        }
        vm.finish();
    });
}

#[component]
pub fn UploadPane(vm: UploadVm, on_cleared: Callback<()>) -> impl IntoView {
    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        vm.is_drag_over.set(false);
        let files = file_list_from(ev.data_transfer().and_then(|dt| dt.files()));
        submit_files(vm, files);
    };

    let on_select = move |ev: leptos::ev::Event| {
        let input: HtmlInputElement = event_target(&ev);
        let files = file_list_from(input.files());
        input.set_value("");
        submit_files(vm, files);
    };

    let clear_all = move |_| {
        spawn_local(async move {
            // Optimistic clear: local state is wiped even if the backend
            // call fails, so the two can diverge silently.
            if let Err(e) = model::clear_uploads().await {
                log::error!("Error clearing data: {}", e);
            }
            vm.reset();
            on_cleared.run(());
        });
    };

    view! {
        <div class="upload-pane">
            <div class="upload-pane__head">
                <h2>"Upload Documents"</h2>
                <button
                    class="icon-button icon-button--danger"
                    disabled=move || !vm.has_data()
                    title=move || {
                        if vm.has_data() { "Clear all data" } else { "No data to clear" }
                    }
                    on:click=clear_all
                >
                    {icon("trash")}
                </button>
            </div>

            <div
                class="drop-zone"
                class:drop-zone--active=move || vm.is_drag_over.get()
                class:drop-zone--busy=move || vm.is_uploading.get()
                on:dragover=move |ev: DragEvent| {
                    ev.prevent_default();
                    vm.is_drag_over.set(true);
                }
                on:dragleave=move |ev: DragEvent| {
                    ev.prevent_default();
                    vm.is_drag_over.set(false);
                }
                on:drop=on_drop
            >
                <span class="drop-zone__icon">{icon("upload-cloud")}</span>
                <p class="drop-zone__title">
                    {move || {
                        if vm.is_uploading.get() {
                            "Uploading files..."
                        } else {
                            "Drop files here or"
                        }
                    }}
                </p>
                <label for="file-upload" class="drop-zone__browse">
                    "browse files"
                </label>
                <input
                    id="file-upload"
                    type="file"
                    multiple
                    accept=".pdf,.docx"
                    class="drop-zone__input"
                    disabled=move || vm.is_uploading.get()
                    on:change=on_select
                />
                <p class="drop-zone__hint">
                    "Supports " <span class="badge">"PDF"</span> " and "
                    <span class="badge">"DOCX"</span> " files only"
                </p>
            </div>

            <div class="upload-section">
                <h3>"Uploaded Files"</h3>
                <Show
                    when=move || !vm.files.get().is_empty()
                    fallback=|| {
                        view! {
                            <div class="upload-section__empty">
                                <p>"No files uploaded yet"</p>
                                <p class="upload-section__empty-hint">
                                    "Upload files to see them here"
                                </p>
                            </div>
                        }
                    }
                >
                    <div class="file-list">
                        {move || {
                            vm.files
                                .get()
                                .into_iter()
                                .enumerate()
                                .map(|(index, file)| {
                                    let name = file.name.clone();
                                    let status = move || {
                                        progress_status(
                                            vm.progress.with(|p| p.get(&name).copied()),
                                        )
                                    };
                                    let status_class = {
                                        let status = status.clone();
                                        move || {
                                            format!("file-row__status--{}", status().0)
                                        }
                                    };
                                    let stamp_name = file.name.clone();
                                    let stamp = move || {
                                        vm.timestamps.with(|t| t.get(&stamp_name).cloned())
                                    };
                                    view! {
                                        <div class="file-row">
                                            <span class="file-row__icon">
                                                {if file.mime_type == MIME_PDF {
                                                    icon("document-text")
                                                } else {
                                                    icon("document")
                                                }}
                                            </span>
                                            <div class="file-row__meta">
                                                <p class="file-row__name">
                                                    {file.name.clone()}
                                                    {move || {
                                                        stamp()
                                                            .map(|s| {
                                                                view! {
                                                                    <span class="file-row__stamp">
                                                                        " • " {s}
                                                                    </span>
                                                                }
                                                            })
                                                    }}
                                                </p>
                                                <p class="file-row__detail">
                                                    {format_file_size(file.size)} " • "
                                                    <span class=status_class>
                                                        {move || status().1}
                                                    </span>
                                                </p>
                                            </div>
                                            <button
                                                class="icon-button"
                                                aria-label="Remove file"
                                                on:click=move |_| vm.remove_file(index)
                                            >
                                                {icon("x")}
                                            </button>
                                        </div>
                                    }
                                })
                                .collect_view()
                        }}
                    </div>
                </Show>
            </div>

            <div class="upload-section">
                <h3>"Chunk Previews"</h3>
                <Show
                    when=move || !vm.chunk_previews.get().is_empty()
                    fallback=|| {
                        view! {
                            <div class="upload-section__empty">
                                <p>"No chunk previews available"</p>
                                <p class="upload-section__empty-hint">
                                    "Upload and process files to see chunk previews"
                                </p>
                            </div>
                        }
                    }
                >
                    <div class="preview-panel">
                        {move || {
                            let mut entries: Vec<_> =
                                vm.chunk_previews.get().into_iter().collect();
                            entries.sort_by(|a, b| a.0.cmp(&b.0));
                            entries
                                .into_iter()
                                .map(|(filename, previews)| {
                                    view! {
                                        <div class="preview-group">
                                            <h4>
                                                {filename} " ("
                                                {previews.len()} " previews)"
                                            </h4>
                                            {previews
                                                .into_iter()
                                                .map(|p| {
                                                    view! {
                                                        <div class="preview-card">
                                                            <div class="preview-card__head">
                                                                <span>"Chunk " {p.index + 1}</span>
                                                                <span>{p.full_length} " chars"</span>
                                                            </div>
                                                            <p>{p.preview}</p>
                                                        </div>
                                                    }
                                                })
                                                .collect_view()}
                                        </div>
                                    }
                                })
                                .collect_view()
                        }}
                    </div>
                </Show>
            </div>

            <div class="upload-section">
                <div class="processing-panel">
                    <div class="processing-panel__head">
                        <div class="processing-panel__title">
                            <span
                                class="status-dot"
                                class:status-dot--active=move || {
                                    !vm.files.get().is_empty()
                                }
                            ></span>
                            <div>
                                <span class="processing-panel__label">
                                    {move || {
                                        if vm.files.get().is_empty() {
                                            "Document Processing"
                                        } else {
                                            "Processing Documents"
                                        }
                                    }}
                                </span>
                                <p class="processing-panel__sub">
                                    {move || {
                                        if vm.files.get().is_empty() {
                                            "Upload documents to begin processing"
                                        } else {
                                            "Creating searchable chunks"
                                        }
                                    }}
                                </p>
                            </div>
                        </div>
                        <div class="processing-panel__counter">
                            <p class="processing-panel__count">
                                {move || vm.chunks_created.get()}
                            </p>
                            <p class="processing-panel__sub">"chunks created"</p>
                            <p class="processing-panel__hint">
                                {move || {
                                    let has_files = !vm.files.get().is_empty();
                                    if has_files && vm.chunks_created.get() > 0 {
                                        "Ready for AI queries"
                                    } else if has_files {
                                        "Processing..."
                                    } else {
                                        "Waiting for upload"
                                    }
                                }}
                            </p>
                        </div>
                    </div>

                    <div class="processing-panel__progress">
                        <div class="processing-panel__progress-head">
                            <span>"Processing Progress"</span>
                            <span>
                                {move || {
                                    let (done, total) = vm.step_totals();
                                    format!("{}/{} steps", done, total)
                                }}
                            </span>
                        </div>
                        <div class="progress-bar">
                            <div
                                class="progress-bar__fill"
                                style:width=move || {
                                    let (done, total) = vm.step_totals();
                                    if total == 0 {
                                        "0%".to_string()
                                    } else {
                                        format!("{}%", done * 100 / total)
                                    }
                                }
                            ></div>
                        </div>
                    </div>

                    <Show
                        when=move || !vm.processing_steps.get().is_empty()
                        fallback=|| {
                            view! {
                                <div class="upload-section__empty">
                                    <p>"No processing steps available"</p>
                                    <p class="upload-section__empty-hint">
                                        "Upload files to see processing steps"
                                    </p>
                                </div>
                            }
                        }
                    >
                        <div class="step-list">
                            {move || {
                                let mut entries: Vec<_> =
                                    vm.processing_steps.get().into_iter().collect();
                                entries.sort_by(|a, b| a.0.cmp(&b.0));
                                entries
                                    .into_iter()
                                    .map(|(filename, steps)| {
                                        view! {
                                            <div class="step-group">
                                                <h4>{filename}</h4>
                                                {steps
                                                    .into_iter()
                                                    .map(|s| {
                                                        let state = s.status.as_str();
                                                        view! {
                                                            <div class="step-row">
                                                                <span class=format!(
                                                                    "step-row__dot step-row__dot--{}",
                                                                    state,
                                                                )></span>
                                                                <span class=format!(
                                                                    "step-row__label step-row__label--{}",
                                                                    state,
                                                                )>{step_label(&s.step)}</span>
                                                                <span class="step-row__mark">
                                                                    {step_marker(s.status)}
                                                                </span>
                                                            </div>
                                                        }
                                                    })
                                                    .collect_view()}
                                            </div>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </div>
                    </Show>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_status_covers_all_sentinels() {
        assert_eq!(progress_status(Some(100)).1, "✓ Upload successful");
        assert_eq!(progress_status(Some(-1)).1, "✗ Upload failed");
        assert_eq!(progress_status(Some(40)).1, "Uploading... 40%");
        assert_eq!(progress_status(Some(0)).1, "Pending upload");
        assert_eq!(progress_status(None).1, "Pending upload");
    }

    #[test]
    fn step_marker_matches_status() {
        assert_eq!(step_marker(StepStatus::Completed), "✓");
        assert_eq!(step_marker(StepStatus::Error), "✗");
        assert_eq!(step_marker(StepStatus::Pending), "...");
    }
}
