//! Upload orchestration state.
//!
//! All per-file bookkeeping is keyed by filename, mirroring the backend's
//! responses. Progress uses sentinel values: 0 queued, 100 done, -1 failed.

use contracts::upload::{ChunkPreview, ProcessingStep, StepStatus, MIME_DOCX, MIME_PDF};
use leptos::prelude::*;
use std::collections::HashMap;

/// Progress sentinel for a failed upload.
pub const PROGRESS_FAILED: i32 = -1;
/// Progress sentinel for a completed upload.
pub const PROGRESS_DONE: i32 = 100;

/// Only these two document types are accepted; the check is an exact MIME
/// string match with no extension fallback.
pub fn is_supported(mime_type: &str) -> bool {
    mime_type == MIME_PDF || mime_type == MIME_DOCX
}

/// Which endpoint a set of accepted files goes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    Single,
    Batch,
}

/// One file goes to `POST /upload`; two or more go to `POST /upload/batch`
/// in a single call, never as N single requests.
pub fn dispatch_for(count: usize) -> Option<Dispatch> {
    match count {
        0 => None,
        1 => Some(Dispatch::Single),
        _ => Some(Dispatch::Batch),
    }
}

/// Steps seeded optimistically when an upload is dispatched. The transfer
/// itself is assumed done; the backend response later replaces the whole
/// list with authoritative statuses.
pub fn initial_steps() -> Vec<ProcessingStep> {
    vec![
        ProcessingStep::new("uploading_file", StepStatus::Completed),
        ProcessingStep::new("parsing_text", StepStatus::Pending),
        ProcessingStep::new("creating_chunks", StepStatus::Pending),
        ProcessingStep::new("generating_embeddings", StepStatus::Pending),
        ProcessingStep::new("storing_in_vector_db", StepStatus::Pending),
    ]
}

/// File metadata captured at accept time. The `web_sys::File` handle itself
/// is only needed for the request body and is not stored here.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadedFile {
    pub name: String,
    pub size: f64,
    pub mime_type: String,
}

#[derive(Clone, Copy)]
pub struct UploadVm {
    pub files: RwSignal<Vec<UploadedFile>>,
    pub progress: RwSignal<HashMap<String, i32>>,
    pub timestamps: RwSignal<HashMap<String, String>>,
    pub chunks_created: RwSignal<usize>,
    pub chunk_previews: RwSignal<HashMap<String, Vec<ChunkPreview>>>,
    pub processing_steps: RwSignal<HashMap<String, Vec<ProcessingStep>>>,
    pub is_uploading: RwSignal<bool>,
    pub is_drag_over: RwSignal<bool>,
}

impl UploadVm {
    pub fn new() -> Self {
        Self {
            files: RwSignal::new(Vec::new()),
            progress: RwSignal::new(HashMap::new()),
            timestamps: RwSignal::new(HashMap::new()),
            chunks_created: RwSignal::new(0),
            chunk_previews: RwSignal::new(HashMap::new()),
            processing_steps: RwSignal::new(HashMap::new()),
            is_uploading: RwSignal::new(false),
            is_drag_over: RwSignal::new(false),
        }
    }

    /// Accept a batch of already-validated files. The file list is additive
    /// across sessions but the derived metadata of the previous session is
    /// discarded.
    pub fn accept(&self, accepted: Vec<UploadedFile>) {
        if accepted.is_empty() {
            return;
        }
        self.chunks_created.set(0);
        self.chunk_previews.set(HashMap::new());
        self.timestamps.set(HashMap::new());
        self.processing_steps.set(HashMap::new());
        self.files.update(|files| files.extend(accepted));
        self.is_uploading.set(true);
    }

    /// Seed queued progress and the optimistic step list for one file.
    pub fn begin_upload(&self, name: &str) {
        self.progress.update(|p| {
            p.insert(name.to_string(), 0);
        });
        self.processing_steps.update(|s| {
            s.insert(name.to_string(), initial_steps());
        });
    }

    /// Apply a successful per-file result.
    pub fn record_success(
        &self,
        name: &str,
        chunk_count: usize,
        previews: Option<Vec<ChunkPreview>>,
        steps: Option<Vec<ProcessingStep>>,
    ) {
        self.progress.update(|p| {
            p.insert(name.to_string(), PROGRESS_DONE);
        });
        self.timestamps.update(|t| {
            t.insert(name.to_string(), now_stamp());
        });
        if chunk_count > 0 {
            self.chunks_created.update(|c| *c += chunk_count);
        }
        if let Some(previews) = previews {
            self.chunk_previews.update(|cp| {
                cp.insert(name.to_string(), previews);
            });
        }
        if let Some(steps) = steps {
            self.processing_steps.update(|s| {
                s.insert(name.to_string(), steps);
            });
        }
    }

    pub fn record_failure(&self, name: &str) {
        self.progress.update(|p| {
            p.insert(name.to_string(), PROGRESS_FAILED);
        });
    }

    /// A transport-level batch failure yields no per-file results, so every
    /// file of the dispatch is marked failed rather than left dangling.
    pub fn fail_all(&self, names: &[String]) {
        for name in names {
            self.record_failure(name);
        }
    }

    pub fn finish(&self) {
        self.is_uploading.set(false);
    }

    /// Remove the file at `index` from the list. Progress, preview and step
    /// entries of other files are untouched.
    pub fn remove_file(&self, index: usize) {
        self.files.update(|files| {
            if index < files.len() {
                files.remove(index);
            }
        });
    }

    /// Wipe the whole upload session.
    pub fn reset(&self) {
        self.files.set(Vec::new());
        self.progress.set(HashMap::new());
        self.timestamps.set(HashMap::new());
        self.chunks_created.set(0);
        self.chunk_previews.set(HashMap::new());
        self.processing_steps.set(HashMap::new());
    }

    /// Whether the trash button has anything to clear.
    pub fn has_data(&self) -> bool {
        !self.files.get().is_empty()
            || !self.chunk_previews.get().is_empty()
            || !self.processing_steps.get().is_empty()
    }

    /// (completed, total) across every file's step list.
    pub fn step_totals(&self) -> (usize, usize) {
        self.processing_steps.with(|all| {
            let total = all.values().map(|s| s.len()).sum();
            let completed = all
                .values()
                .flatten()
                .filter(|s| s.status == StepStatus::Completed)
                .count();
            (completed, total)
        })
    }
}

impl Default for UploadVm {
    fn default() -> Self {
        Self::new()
    }
}

fn now_stamp() -> String {
    chrono::Local::now().format("%d.%m.%Y %H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str, mime: &str) -> UploadedFile {
        UploadedFile {
            name: name.to_string(),
            size: 1024.0,
            mime_type: mime.to_string(),
        }
    }

    #[test]
    fn only_pdf_and_docx_are_supported() {
        assert!(is_supported(MIME_PDF));
        assert!(is_supported(MIME_DOCX));
        assert!(!is_supported("image/png"));
        assert!(!is_supported("application/PDF"));
        assert!(!is_supported(""));
    }

    #[test]
    fn dispatch_is_single_for_one_batch_for_more() {
        assert_eq!(dispatch_for(0), None);
        assert_eq!(dispatch_for(1), Some(Dispatch::Single));
        assert_eq!(dispatch_for(2), Some(Dispatch::Batch));
        assert_eq!(dispatch_for(10), Some(Dispatch::Batch));
    }

    #[test]
    fn initial_steps_mark_only_the_transfer_done() {
        let steps = initial_steps();
        assert_eq!(steps.len(), 5);
        assert_eq!(steps[0].step, "uploading_file");
        assert_eq!(steps[0].status, StepStatus::Completed);
        assert!(steps[1..].iter().all(|s| s.status == StepStatus::Pending));
    }

    #[test]
    fn accept_keeps_files_but_discards_prior_session_metadata() {
        let vm = UploadVm::new();
        vm.accept(vec![file("a.pdf", MIME_PDF)]);
        vm.begin_upload("a.pdf");
        vm.record_success("a.pdf", 4, None, None);
        assert_eq!(vm.chunks_created.get_untracked(), 4);

        vm.accept(vec![file("b.docx", MIME_DOCX)]);
        assert_eq!(vm.files.get_untracked().len(), 2);
        assert_eq!(vm.chunks_created.get_untracked(), 0);
        assert!(vm.timestamps.get_untracked().is_empty());
        assert!(vm.processing_steps.get_untracked().is_empty());
        assert!(vm.is_uploading.get_untracked());
    }

    #[test]
    fn success_sets_done_progress_and_accumulates_chunks() {
        let vm = UploadVm::new();
        vm.accept(vec![file("a.pdf", MIME_PDF), file("b.pdf", MIME_PDF)]);
        vm.begin_upload("a.pdf");
        vm.begin_upload("b.pdf");
        assert_eq!(vm.progress.get_untracked()["a.pdf"], 0);

        vm.record_success("a.pdf", 3, None, None);
        vm.record_success("b.pdf", 5, None, None);
        assert_eq!(vm.progress.get_untracked()["a.pdf"], PROGRESS_DONE);
        assert_eq!(vm.chunks_created.get_untracked(), 8);
        assert!(vm.timestamps.get_untracked().contains_key("a.pdf"));
    }

    #[test]
    fn uploading_flag_spans_accept_to_finish() {
        let vm = UploadVm::new();
        assert!(!vm.is_uploading.get_untracked());

        vm.accept(vec![file("a.pdf", MIME_PDF)]);
        assert!(vm.is_uploading.get_untracked());

        vm.begin_upload("a.pdf");
        vm.record_success("a.pdf", 2, None, None);
        vm.finish();
        assert!(!vm.is_uploading.get_untracked());
    }

    #[test]
    fn failure_sets_sentinel_and_no_preview_entry() {
        let vm = UploadVm::new();
        vm.accept(vec![file("a.pdf", MIME_PDF)]);
        vm.begin_upload("a.pdf");
        vm.record_failure("a.pdf");
        assert_eq!(vm.progress.get_untracked()["a.pdf"], PROGRESS_FAILED);
        assert!(!vm.chunk_previews.get_untracked().contains_key("a.pdf"));
    }

    #[test]
    fn batch_transport_failure_marks_every_file() {
        let vm = UploadVm::new();
        let names = vec!["a.pdf".to_string(), "b.docx".to_string()];
        vm.accept(vec![file("a.pdf", MIME_PDF), file("b.docx", MIME_DOCX)]);
        for name in &names {
            vm.begin_upload(name);
        }
        vm.fail_all(&names);
        let progress = vm.progress.get_untracked();
        assert_eq!(progress["a.pdf"], PROGRESS_FAILED);
        assert_eq!(progress["b.docx"], PROGRESS_FAILED);
    }

    #[test]
    fn remove_file_leaves_other_entries_alone() {
        let vm = UploadVm::new();
        vm.accept(vec![file("a.pdf", MIME_PDF), file("b.pdf", MIME_PDF)]);
        vm.begin_upload("a.pdf");
        vm.begin_upload("b.pdf");
        vm.record_success("b.pdf", 2, None, None);

        vm.remove_file(0);
        let files = vm.files.get_untracked();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].name, "b.pdf");
        assert_eq!(vm.progress.get_untracked()["b.pdf"], PROGRESS_DONE);

        // out of range is a no-op
        vm.remove_file(5);
        assert_eq!(vm.files.get_untracked().len(), 1);
    }

    #[test]
    fn reset_empties_everything() {
        let vm = UploadVm::new();
        vm.accept(vec![file("a.pdf", MIME_PDF)]);
        vm.begin_upload("a.pdf");
        vm.record_success("a.pdf", 3, None, None);
        vm.reset();
        assert!(vm.files.get_untracked().is_empty());
        assert!(vm.progress.get_untracked().is_empty());
        assert!(vm.timestamps.get_untracked().is_empty());
        assert_eq!(vm.chunks_created.get_untracked(), 0);
        assert!(vm.chunk_previews.get_untracked().is_empty());
        assert!(vm.processing_steps.get_untracked().is_empty());
        assert!(!vm.has_data());
    }

    #[test]
    fn step_totals_count_across_files() {
        let vm = UploadVm::new();
        vm.begin_upload("a.pdf");
        vm.begin_upload("b.pdf");
        assert_eq!(vm.step_totals(), (2, 10));

        vm.record_success(
            "a.pdf",
            1,
            None,
            Some(
                initial_steps()
                    .into_iter()
                    .map(|s| ProcessingStep::new(s.step, StepStatus::Completed))
                    .collect(),
            ),
        );
        assert_eq!(vm.step_totals(), (6, 10));
    }
}
