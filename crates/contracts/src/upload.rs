//! Upload endpoint contracts: `POST /upload`, `POST /upload/batch`,
//! `DELETE /upload/clear`.

use serde::{Deserialize, Serialize};

/// MIME types the client accepts for upload. Exact string match, no
/// extension-based fallback.
pub const MIME_PDF: &str = "application/pdf";
pub const MIME_DOCX: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Status of a single backend processing step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepStatus {
    Pending,
    Completed,
    Error,
}

impl StepStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            StepStatus::Pending => "pending",
            StepStatus::Completed => "completed",
            StepStatus::Error => "error",
        }
    }
}

/// One step of the document-processing pipeline as reported by the backend
/// (or seeded optimistically by the client before the response arrives).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessingStep {
    pub step: String,
    pub status: StepStatus,
}

impl ProcessingStep {
    pub fn new(step: impl Into<String>, status: StepStatus) -> Self {
        Self {
            step: step.into(),
            status,
        }
    }
}

/// Truncated preview of one stored chunk, a display artifact only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChunkPreview {
    pub index: usize,
    pub preview: String,
    pub full_length: usize,
}

/// Response of `POST /upload`. Every field is optional; the client applies
/// explicit defaults instead of trusting the shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UploadResponse {
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(default)]
    pub num_chunks: Option<usize>,
    #[serde(default)]
    pub chunk_previews: Option<Vec<ChunkPreview>>,
    #[serde(default)]
    pub processing_steps: Option<Vec<ProcessingStep>>,
}

impl UploadResponse {
    /// Chunks contributed by this upload: `num_chunks` when present,
    /// otherwise inferred from the preview count.
    pub fn chunk_count(&self) -> usize {
        self.num_chunks
            .or_else(|| self.chunk_previews.as_ref().map(|p| p.len()))
            .unwrap_or(0)
    }
}

/// One entry of a batch response. A populated `error` means the backend
/// rejected this file while the batch call itself succeeded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchItem {
    pub filename: String,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub num_chunks: Option<usize>,
    #[serde(default)]
    pub chunk_previews: Option<Vec<ChunkPreview>>,
    #[serde(default)]
    pub processing_steps: Option<Vec<ProcessingStep>>,
}

impl BatchItem {
    pub fn chunk_count(&self) -> usize {
        self.num_chunks
            .or_else(|| self.chunk_previews.as_ref().map(|p| p.len()))
            .unwrap_or(0)
    }
}

/// Response of `POST /upload/batch`: one aggregated result per file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchUploadResponse {
    #[serde(default)]
    pub batch_results: Vec<BatchItem>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upload_response_tolerates_missing_fields() {
        let r: UploadResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(r.chunk_count(), 0);
        assert!(r.processing_steps.is_none());
    }

    #[test]
    fn chunk_count_falls_back_to_preview_length() {
        let r: UploadResponse = serde_json::from_str(
            r#"{"chunk_previews":[
                {"index":0,"preview":"a","full_length":1},
                {"index":1,"preview":"b","full_length":1}
            ]}"#,
        )
        .unwrap();
        assert_eq!(r.chunk_count(), 2);

        let r: UploadResponse =
            serde_json::from_str(r#"{"num_chunks":7,"chunk_previews":[]}"#).unwrap();
        assert_eq!(r.chunk_count(), 7);
    }

    #[test]
    fn step_status_wire_format_is_lowercase() {
        let s: ProcessingStep =
            serde_json::from_str(r#"{"step":"parsing_text","status":"completed"}"#).unwrap();
        assert_eq!(s.status, StepStatus::Completed);
        assert_eq!(
            serde_json::to_string(&s.status).unwrap(),
            "\"completed\""
        );
    }

    #[test]
    fn batch_item_error_is_optional() {
        let b: BatchUploadResponse = serde_json::from_str(
            r#"{"batch_results":[
                {"filename":"a.pdf","num_chunks":3},
                {"filename":"b.docx","error":"parse failed"}
            ]}"#,
        )
        .unwrap();
        assert_eq!(b.batch_results.len(), 2);
        assert!(b.batch_results[0].error.is_none());
        assert_eq!(b.batch_results[1].error.as_deref(), Some("parse failed"));
    }
}
