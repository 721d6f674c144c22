use std::sync::Arc;

use crate::analysis::pipeline::PipelineConfig;
use crate::llm_client::LlmClient;
use crate::retrieval::Retriever;

/// Shared application state injected into route handlers via Axum
/// extractors. The retriever is built once at startup and only read
/// afterward; concurrent runs share it without locking.
#[derive(Clone)]
pub struct AppState {
    pub llm: LlmClient,
    pub retriever: Arc<Retriever>,
    pub pipeline: PipelineConfig,
}
