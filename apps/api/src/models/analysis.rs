//! Wire types for one analysis run.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::llm_client;
use crate::models::evidence::Evidence;
use crate::status::{ErrorKind, RagStatus};

/// Request body for an analysis run.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisRequest {
    pub job_text: String,
    pub resume_text: String,
    /// Caller's intent to use achievement retrieval. The pipeline still
    /// computes `disabled` when no corpus is configured.
    #[serde(default)]
    pub rag_enabled: bool,
}

/// Execution metadata attached to every successful run.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisMeta {
    pub run_id: Uuid,
    pub model: String,
    pub timestamp: DateTime<Utc>,
    pub retrieved_chunks: usize,
}

impl AnalysisMeta {
    pub fn new(retrieved_chunks: usize) -> Self {
        AnalysisMeta {
            run_id: Uuid::new_v4(),
            model: llm_client::MODEL.to_string(),
            timestamp: Utc::now(),
            retrieved_chunks,
        }
    }
}

/// Final result of one analysis run.
///
/// `rag_status` and `error` are a discriminated pair: `error` is set
/// only when a retrieval failure was recovered (`rag_status == error`)
/// and names its kind. Fatal failures never reach this type — they
/// travel the `Err` channel as `AppError`.
#[derive(Debug, Serialize)]
pub struct AnalysisResult {
    pub evidences: Vec<Evidence>,
    pub rag_status: RagStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorKind>,
    pub warnings: Vec<String>,
    pub meta: AnalysisMeta,
}
