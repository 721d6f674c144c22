//! Achievement Retriever — chunked index over the achievements corpus.
//!
//! Building the index is an explicit step, separate from querying.
//! Build failures never propagate as unhandled faults: `main` records
//! them as `Retriever::Failed` and the pipeline classifies that to a
//! `RagStatus::Error` with an empty retrieval result.
//!
//! The index is built once at startup and only read afterward, so it
//! can be shared across concurrent analysis runs without locking.

#![allow(dead_code)]

pub mod chunker;
pub mod ranker;

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info};

use self::ranker::ChunkRanker;

/// One indexed unit of the achievements corpus. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    /// Stable integer index, assigned in corpus insertion order.
    pub id: u32,
    pub text: String,
}

/// A retrieved chunk with its relevance score.
#[derive(Debug, Clone)]
pub struct ScoredChunk {
    pub chunk: Chunk,
    pub score: f64,
}

/// Ordered retrieval output: at most K chunks, relevance-descending.
/// May be empty — an empty result is a legitimate outcome, not an error.
#[derive(Debug, Clone, Default)]
pub struct RetrievalResult {
    hits: Vec<ScoredChunk>,
}

impl RetrievalResult {
    pub fn empty() -> Self {
        RetrievalResult { hits: Vec::new() }
    }

    pub fn from_hits(hits: Vec<ScoredChunk>) -> Self {
        RetrievalResult { hits }
    }

    pub fn hits(&self) -> &[ScoredChunk] {
        &self.hits
    }

    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    pub fn len(&self) -> usize {
        self.hits.len()
    }
}

#[derive(Debug, Error)]
pub enum RetrievalError {
    #[error("retrieval index initialization failed: {0}")]
    Init(String),

    #[error("retrieval query failed: {0}")]
    Query(String),
}

/// Chunked, ranked index over the achievements corpus.
pub struct AchievementIndex {
    chunks: Vec<Chunk>,
    ranker: Arc<dyn ChunkRanker>,
}

impl std::fmt::Debug for AchievementIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AchievementIndex")
            .field("chunks", &self.chunks)
            .finish_non_exhaustive()
    }
}

impl AchievementIndex {
    /// Builds the index from raw corpus records. Runs the ranker's
    /// warm-up so fallible backends fail here, at startup, instead of
    /// on the first query.
    pub async fn build(
        records: &[String],
        ranker: Arc<dyn ChunkRanker>,
    ) -> Result<Self, RetrievalError> {
        let chunks = chunker::chunk_records(records);
        ranker.prepare(&chunks).await?;
        info!("achievement index built: {} chunks", chunks.len());
        Ok(AchievementIndex { chunks, ranker })
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    /// Returns the top-`k` chunks for `query`, relevance-descending.
    ///
    /// A zero-chunk corpus yields an empty result without consulting
    /// the ranker. No automatic retry: one failure here is `error` for
    /// the whole run, and retrying is the caller's decision.
    pub async fn query(&self, query: &str, k: usize) -> Result<RetrievalResult, RetrievalError> {
        if self.chunks.is_empty() {
            debug!("achievement corpus is empty, skipping ranking");
            return Ok(RetrievalResult::empty());
        }

        let hits = self.ranker.rank(query, &self.chunks, k).await?;
        debug!("retrieval returned {} of {} chunks", hits.len(), self.chunks.len());
        Ok(RetrievalResult { hits })
    }
}

/// Startup-time retriever state, carried in `AppState`. A failed build
/// is remembered so every run reports `RagStatus::Error` instead of
/// silently looking unconfigured.
pub enum Retriever {
    /// No achievements corpus configured.
    Disabled,
    Ready(AchievementIndex),
    /// Index build failed at startup; the message is the build error.
    Failed(String),
}
