//! Quote Source Resolver — decides, for every quote the model
//! returned, whether it came from the resume or from a specific
//! retrieved chunk, and drops quotes that match neither.
//!
//! Resolution is exact, case-sensitive substring containment — no
//! fuzzy matching — so identical inputs always resolve identically.
//! Resume text is checked first and wins over any chunk containing the
//! same text; remaining quotes are checked against chunks in relevance
//! order and take the first containing chunk's id.

use tracing::debug;

use crate::models::evidence::Quote;
use crate::retrieval::RetrievalResult;

/// Outcome of resolving one evidence entry's raw quotes.
#[derive(Debug)]
pub struct ResolvedQuotes {
    pub quotes: Vec<Quote>,
    /// Quotes dropped because they matched neither source.
    pub dropped: usize,
}

/// Resolves provenance for each raw quote string, in order.
pub fn resolve_quotes(
    raw_quotes: &[String],
    resume_text: &str,
    retrieved: &RetrievalResult,
) -> ResolvedQuotes {
    let mut quotes = Vec::new();
    let mut dropped = 0;

    for raw in raw_quotes {
        let text = strip_reference_token(raw);
        if text.is_empty() {
            continue;
        }

        if resume_text.contains(text) {
            quotes.push(Quote::resume(text));
            continue;
        }

        if let Some(hit) = retrieved.hits().iter().find(|h| h.chunk.text.contains(text)) {
            quotes.push(Quote::achievement(text, hit.chunk.id));
            continue;
        }

        debug!("dropping unverifiable quote: {text:?}");
        dropped += 1;
    }

    ResolvedQuotes { quotes, dropped }
}

/// Confidence adjustment when some quotes were dropped as
/// unverifiable: zero when nothing survived, otherwise scaled by the
/// surviving ratio with a flat penalty.
pub fn adjust_confidence(confidence: f32, kept: usize, dropped: usize) -> f32 {
    if dropped == 0 {
        return confidence.clamp(0.0, 1.0);
    }
    if kept == 0 {
        return 0.0;
    }
    let valid_ratio = kept as f32 / (kept + dropped) as f32;
    (confidence * valid_ratio - 0.2).clamp(0.0, 1.0)
}

/// Strips a leading `[A<digits>]` reference token, echoed by the model
/// for chunk-sourced quotes, before containment matching.
fn strip_reference_token(quote: &str) -> &str {
    let trimmed = quote.trim();
    if let Some(rest) = trimmed.strip_prefix("[A") {
        if let Some(end) = rest.find(']') {
            if end > 0 && rest[..end].chars().all(|c| c.is_ascii_digit()) {
                return rest[end + 1..].trim_start();
            }
        }
    }
    trimmed
}
