//! RAG status and the shared error classifier.
//!
//! Every retrieval-side failure is funneled through this module so that
//! logging and status mapping stay in one place. Retrieval failures are
//! recovered here — they become a status on the analysis result, never
//! an error on the caller's channel.

#![allow(dead_code)]

use serde::Serialize;
use tracing::error;

use crate::retrieval::RetrievalError;

/// Outcome of the retrieval stage for one analysis run. Computed once,
/// read-only afterward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RagStatus {
    /// Retrieval ran and returned at least one chunk.
    Enabled,
    /// Retrieval was not requested or no corpus is configured.
    Disabled,
    /// Retrieval was attempted and failed (initialization or query).
    Error,
    /// Retrieval ran but the corpus/query yielded zero chunks. Not a failure.
    Empty,
}

impl RagStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RagStatus::Enabled => "enabled",
            RagStatus::Disabled => "disabled",
            RagStatus::Error => "error",
            RagStatus::Empty => "empty",
        }
    }
}

/// Closed failure taxonomy for the analysis pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    InputTooLarge,
    InputEmpty,
    RetrievalInitFailed,
    RetrievalQueryFailed,
    CorpusEmpty,
    ExtractionFailed,
    QuoteUnverifiable,
}

/// Classifies a retrieval failure, logs it, and returns the status pair
/// the pipeline records on the result. The analysis run continues
/// resume-only after this.
pub fn classify_retrieval_failure(err: &RetrievalError) -> (RagStatus, ErrorKind) {
    let kind = match err {
        RetrievalError::Init(_) => ErrorKind::RetrievalInitFailed,
        RetrievalError::Query(_) => ErrorKind::RetrievalQueryFailed,
    };
    error!("retrieval failed ({kind:?}), continuing resume-only: {err}");
    (RagStatus::Error, kind)
}

/// User-facing status line for a completed retrieval stage.
pub fn status_message(status: RagStatus, chunk_count: usize) -> String {
    match status {
        RagStatus::Enabled => {
            format!("Achievement retrieval active ({chunk_count} supporting chunks found).")
        }
        RagStatus::Disabled => "Achievement retrieval was not requested.".to_string(),
        RagStatus::Error => {
            "Achievement retrieval failed; evidence was extracted from the resume only."
                .to_string()
        }
        RagStatus::Empty => {
            "Achievement retrieval ran but found no relevant chunks.".to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_failure_classifies_to_error_status() {
        let err = RetrievalError::Init("backend cannot start".to_string());
        let (status, kind) = classify_retrieval_failure(&err);
        assert_eq!(status, RagStatus::Error);
        assert_eq!(kind, ErrorKind::RetrievalInitFailed);
    }

    #[test]
    fn test_query_failure_classifies_to_error_status() {
        let err = RetrievalError::Query("ranker timed out".to_string());
        let (status, kind) = classify_retrieval_failure(&err);
        assert_eq!(status, RagStatus::Error);
        assert_eq!(kind, ErrorKind::RetrievalQueryFailed);
    }

    #[test]
    fn test_status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_value(RagStatus::Enabled).unwrap(),
            serde_json::json!("enabled")
        );
        assert_eq!(
            serde_json::to_value(RagStatus::Empty).unwrap(),
            serde_json::json!("empty")
        );
    }

    #[test]
    fn test_error_kind_serializes_snake_case() {
        assert_eq!(
            serde_json::to_value(ErrorKind::RetrievalInitFailed).unwrap(),
            serde_json::json!("retrieval_init_failed")
        );
    }

    #[test]
    fn test_status_messages_distinguish_error_from_empty() {
        let error_msg = status_message(RagStatus::Error, 0);
        let empty_msg = status_message(RagStatus::Empty, 0);
        assert_ne!(error_msg, empty_msg);
        assert!(error_msg.contains("resume only"));
    }

    #[test]
    fn test_enabled_message_reports_chunk_count() {
        assert!(status_message(RagStatus::Enabled, 4).contains('4'));
    }
}
