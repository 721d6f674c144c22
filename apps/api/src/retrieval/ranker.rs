//! Pluggable chunk ranking behind the `ChunkRanker` trait.
//!
//! Default: `LexicalRanker` (pure-Rust, deterministic, fully testable).
//! Embedding-backed rankers can be swapped in without touching the
//! index or pipeline code; network-backed implementations must bound
//! their own calls with a timeout.
//!
//! The index holds an `Arc<dyn ChunkRanker>`, chosen at startup.

use async_trait::async_trait;

use super::{Chunk, RetrievalError, ScoredChunk};

/// Ranks corpus chunks against a query, best first, at most `k` results.
///
/// Contract: scores are relevance-descending; ties keep corpus insertion
/// order; zero-relevance chunks are omitted. One call per analysis run —
/// implementations must not retry internally.
#[async_trait]
pub trait ChunkRanker: Send + Sync {
    /// One-time warm-up at index build. Fallible backends (model load,
    /// remote handshake) surface initialization errors here.
    async fn prepare(&self, _chunks: &[Chunk]) -> Result<(), RetrievalError> {
        Ok(())
    }

    async fn rank(
        &self,
        query: &str,
        chunks: &[Chunk],
        k: usize,
    ) -> Result<Vec<ScoredChunk>, RetrievalError>;
}

/// Token-overlap lexical ranker.
///
/// Score = matched query tokens / total query tokens, where a token
/// matches if the chunk text contains it (case-insensitive). Tokens are
/// alphanumeric runs of length ≥ 2, which keeps CJK phrases intact.
pub struct LexicalRanker;

#[async_trait]
impl ChunkRanker for LexicalRanker {
    async fn rank(
        &self,
        query: &str,
        chunks: &[Chunk],
        k: usize,
    ) -> Result<Vec<ScoredChunk>, RetrievalError> {
        Ok(rank_by_token_overlap(query, chunks, k))
    }
}

fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| t.chars().count() >= 2)
        .map(str::to_string)
        .collect()
}

fn rank_by_token_overlap(query: &str, chunks: &[Chunk], k: usize) -> Vec<ScoredChunk> {
    let tokens = tokenize(query);
    if tokens.is_empty() {
        return Vec::new();
    }

    let mut scored: Vec<ScoredChunk> = chunks
        .iter()
        .filter_map(|chunk| {
            let haystack = chunk.text.to_lowercase();
            let matched = tokens.iter().filter(|t| haystack.contains(t.as_str())).count();
            if matched == 0 {
                return None;
            }
            Some(ScoredChunk {
                chunk: chunk.clone(),
                score: matched as f64 / tokens.len() as f64,
            })
        })
        .collect();

    // Stable sort: equal scores keep corpus insertion order.
    scored.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    scored.truncate(k);
    scored
}
