//! Analysis pipeline — validate → retrieve (optional) → extract →
//! resolve. One short synchronous pass per run; stages never overlap
//! because each consumes the previous stage's complete output.
//!
//! The retrieval stage is where graceful degradation lives: any
//! retriever failure is classified and recorded on the result, and
//! extraction continues resume-only. Extraction failure is the single
//! fatal class and travels the `Err` channel.

use tracing::{debug, info};

use crate::analysis::extractor::extract_evidence;
use crate::analysis::resolver::{adjust_confidence, resolve_quotes};
use crate::analysis::validator::validate;
use crate::errors::AppError;
use crate::llm_client::LlmClient;
use crate::models::analysis::{AnalysisMeta, AnalysisRequest, AnalysisResult};
use crate::models::evidence::Evidence;
use crate::retrieval::{RetrievalResult, Retriever};
use crate::status::{classify_retrieval_failure, status_message, ErrorKind, RagStatus};

/// Pipeline tuning, fixed per deployment.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub max_resume_chars: usize,
    pub retrieval_k: usize,
}

/// Runs the retrieval stage and computes the RAG status for this run.
///
/// Exactly one status per run: `Disabled` when retrieval was not
/// requested or not configured; otherwise `Enabled`, `Empty`, or
/// `Error` from the retriever outcome. Failures are classified here
/// and never propagate — the returned result is empty in that case.
pub async fn retrieval_stage(
    rag_enabled: bool,
    retriever: &Retriever,
    query: &str,
    k: usize,
) -> (RetrievalResult, RagStatus, Option<ErrorKind>) {
    if !rag_enabled {
        return (RetrievalResult::empty(), RagStatus::Disabled, None);
    }

    match retriever {
        Retriever::Disabled => (RetrievalResult::empty(), RagStatus::Disabled, None),
        Retriever::Failed(message) => {
            let err = crate::retrieval::RetrievalError::Init(message.clone());
            let (status, kind) = classify_retrieval_failure(&err);
            (RetrievalResult::empty(), status, Some(kind))
        }
        Retriever::Ready(index) => match index.query(query, k).await {
            Ok(result) if result.is_empty() => (result, RagStatus::Empty, None),
            Ok(result) => (result, RagStatus::Enabled, None),
            Err(err) => {
                let (status, kind) = classify_retrieval_failure(&err);
                (RetrievalResult::empty(), status, Some(kind))
            }
        },
    }
}

/// Runs one full analysis: the core operation exposed to the HTTP layer.
pub async fn run_analysis(
    llm: &LlmClient,
    retriever: &Retriever,
    config: &PipelineConfig,
    request: AnalysisRequest,
) -> Result<AnalysisResult, AppError> {
    // Validation aborts before any network call.
    let validated = validate(&request.job_text, &request.resume_text, config.max_resume_chars)?;

    let (retrieved, rag_status, rag_error) = retrieval_stage(
        request.rag_enabled,
        retriever,
        &validated.job_text,
        config.retrieval_k,
    )
    .await;
    info!(
        status = rag_status.as_str(),
        "{}",
        status_message(rag_status, retrieved.len())
    );

    // Single generation attempt; failure here is fatal to the run.
    let raw_evidence = extract_evidence(
        llm,
        &validated.job_text,
        &validated.resume_text,
        &retrieved,
    )
    .await?;

    let mut evidences = Vec::with_capacity(raw_evidence.len());
    for raw in raw_evidence {
        let resolved = resolve_quotes(&raw.quotes, &validated.resume_text, &retrieved);
        if resolved.dropped > 0 {
            debug!(
                requirement = raw.requirement.as_str(),
                dropped = resolved.dropped,
                "dropped unverifiable quotes"
            );
        }
        let confidence =
            adjust_confidence(raw.confidence, resolved.quotes.len(), resolved.dropped);
        evidences.push(Evidence::new(
            raw.requirement,
            resolved.quotes,
            confidence,
            raw.reason,
        ));
    }

    let retrieved_chunks = retrieved.len();
    info!(
        "analysis complete: {} evidences, rag_status={}",
        evidences.len(),
        rag_status.as_str()
    );

    Ok(AnalysisResult {
        evidences,
        rag_status,
        error: rag_error,
        warnings: validated.warnings,
        meta: AnalysisMeta::new(retrieved_chunks),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use async_trait::async_trait;

    use crate::retrieval::ranker::{ChunkRanker, LexicalRanker};
    use crate::retrieval::{AchievementIndex, Chunk, RetrievalError, ScoredChunk};

    /// Ranker that fails every query, for query-failure paths.
    struct FailingRanker;

    #[async_trait]
    impl ChunkRanker for FailingRanker {
        async fn rank(
            &self,
            _query: &str,
            _chunks: &[Chunk],
            _k: usize,
        ) -> Result<Vec<ScoredChunk>, RetrievalError> {
            Err(RetrievalError::Query("backend connection reset".to_string()))
        }
    }

    fn records(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|t| t.to_string()).collect()
    }

    #[tokio::test]
    async fn test_stage_disabled_when_not_requested() {
        let index = AchievementIndex::build(&records(&["a chunk"]), Arc::new(LexicalRanker))
            .await
            .unwrap();
        let retriever = Retriever::Ready(index);

        let (result, status, kind) = retrieval_stage(false, &retriever, "a chunk", 4).await;
        assert!(result.is_empty());
        assert_eq!(status, RagStatus::Disabled);
        assert_eq!(kind, None);
    }

    #[tokio::test]
    async fn test_stage_disabled_when_no_corpus_configured() {
        let (result, status, kind) = retrieval_stage(true, &Retriever::Disabled, "q", 4).await;
        assert!(result.is_empty());
        assert_eq!(status, RagStatus::Disabled);
        assert_eq!(kind, None);
    }

    #[tokio::test]
    async fn test_stage_enabled_with_hits() {
        let index = AchievementIndex::build(
            &records(&["improved api latency", "ran the book club"]),
            Arc::new(LexicalRanker),
        )
        .await
        .unwrap();
        let retriever = Retriever::Ready(index);

        let (result, status, kind) = retrieval_stage(true, &retriever, "api latency", 4).await;
        assert_eq!(result.len(), 1);
        assert_eq!(status, RagStatus::Enabled);
        assert_eq!(kind, None);
    }

    #[tokio::test]
    async fn test_stage_empty_corpus_is_empty_not_error() {
        let index = AchievementIndex::build(&[], Arc::new(LexicalRanker))
            .await
            .unwrap();
        let retriever = Retriever::Ready(index);

        let (result, status, kind) = retrieval_stage(true, &retriever, "anything", 4).await;
        assert!(result.is_empty());
        assert_eq!(status, RagStatus::Empty);
        assert_eq!(kind, None);
    }

    #[tokio::test]
    async fn test_stage_empty_when_query_matches_nothing() {
        let index = AchievementIndex::build(&records(&["kubernetes work"]), Arc::new(LexicalRanker))
            .await
            .unwrap();
        let retriever = Retriever::Ready(index);

        let (_, status, _) = retrieval_stage(true, &retriever, "watercolor painting", 4).await;
        assert_eq!(status, RagStatus::Empty);
    }

    #[tokio::test]
    async fn test_stage_query_failure_recovered_as_error_status() {
        let index = AchievementIndex::build(&records(&["a chunk"]), Arc::new(FailingRanker))
            .await
            .unwrap();
        let retriever = Retriever::Ready(index);

        let (result, status, kind) = retrieval_stage(true, &retriever, "a chunk", 4).await;
        assert!(result.is_empty());
        assert_eq!(status, RagStatus::Error);
        assert_eq!(kind, Some(ErrorKind::RetrievalQueryFailed));
    }

    #[tokio::test]
    async fn test_stage_startup_init_failure_reported_every_run() {
        let retriever = Retriever::Failed("embedding backend unavailable".to_string());

        let (result, status, kind) = retrieval_stage(true, &retriever, "q", 4).await;
        assert!(result.is_empty());
        assert_eq!(status, RagStatus::Error);
        assert_eq!(kind, Some(ErrorKind::RetrievalInitFailed));
    }

    #[tokio::test]
    async fn test_validation_rejects_before_any_network_call() {
        // An invalid key would fail loudly if a network call were made;
        // validation must reject first. The LLM client is constructed
        // but never invoked for oversized input.
        let llm = LlmClient::new("test-key-never-used".to_string()).unwrap();
        let config = PipelineConfig {
            max_resume_chars: 10,
            retrieval_k: 4,
        };
        let request = AnalysisRequest {
            job_text: "a job posting".to_string(),
            resume_text: "a resume that is clearly longer than ten characters".to_string(),
            rag_enabled: false,
        };

        let err = run_analysis(&llm, &Retriever::Disabled, &config, request)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::InputTooLarge { .. }));
    }

    #[tokio::test]
    async fn test_empty_input_rejected_before_any_network_call() {
        let llm = LlmClient::new("test-key-never-used".to_string()).unwrap();
        let config = PipelineConfig {
            max_resume_chars: 15_000,
            retrieval_k: 4,
        };
        let request = AnalysisRequest {
            job_text: "".to_string(),
            resume_text: "a resume".to_string(),
            rag_enabled: true,
        };

        let err = run_analysis(&llm, &Retriever::Disabled, &config, request)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::InputEmpty { field: "job_text" }));
    }
}
