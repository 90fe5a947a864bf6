//! Query endpoint contract: `POST /query`.

use serde::{Deserialize, Serialize};

/// Request body of `POST /query`. `top_k` is reserved for future tunability
/// and is always serialized, as `null` until wired to settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryRequest {
    pub question: String,
    pub top_k: Option<u32>,
}

impl QueryRequest {
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            top_k: None,
        }
    }
}

/// Reference to a stored chunk that backed an answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceRef {
    pub file_name: String,
    pub chunk_index: usize,
}

/// Response of `POST /query`. Both fields are optional; the client supplies
/// fixed fallbacks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryResponse {
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default)]
    pub sources: Option<Vec<SourceRef>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_k_serializes_as_null() {
        let body = serde_json::to_value(QueryRequest::new("what is a chunk?")).unwrap();
        assert_eq!(body["question"], "what is a chunk?");
        assert!(body["top_k"].is_null());
    }

    #[test]
    fn response_tolerates_empty_object() {
        let r: QueryResponse = serde_json::from_str("{}").unwrap();
        assert!(r.answer.is_none());
        assert!(r.sources.is_none());
    }
}
