//! Evidence data model — the structured justification for one matched
//! job requirement, composed of provenance-tagged quotes.
//!
//! Provenance is encoded in the type: `QuoteSource::AchievementRecord`
//! carries its chunk id inside the variant, so an achievement quote
//! without an id (or a resume quote with one) cannot be constructed.
//!
//! `Evidence` keeps the canonical quote list private and exposes the
//! legacy flat views (`quote_texts`, `quote_source_labels`) as fields
//! filled once in `Evidence::new`. Callers cannot update one shape
//! without the other.

#![allow(dead_code)]

use serde::Serialize;

/// Where a quote came from. Resume text takes priority during resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum QuoteSource {
    Resume,
    AchievementRecord { chunk_id: u32 },
}

impl QuoteSource {
    /// Legacy string label, matching the flat `quote_source_labels` view.
    pub fn label(&self) -> &'static str {
        match self {
            QuoteSource::Resume => "resume",
            QuoteSource::AchievementRecord { .. } => "achievement_record",
        }
    }

    pub fn chunk_id(&self) -> Option<u32> {
        match self {
            QuoteSource::Resume => None,
            QuoteSource::AchievementRecord { chunk_id } => Some(*chunk_id),
        }
    }
}

/// A literal quote from the resume or a retrieved achievement chunk.
/// Created only by the quote source resolver; immutable afterward.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Quote {
    pub text: String,
    #[serde(flatten)]
    pub source: QuoteSource,
}

impl Quote {
    pub fn resume(text: impl Into<String>) -> Self {
        Quote {
            text: text.into(),
            source: QuoteSource::Resume,
        }
    }

    pub fn achievement(text: impl Into<String>, chunk_id: u32) -> Self {
        Quote {
            text: text.into(),
            source: QuoteSource::AchievementRecord { chunk_id },
        }
    }
}

/// Confidence band derived from the numeric confidence score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ConfidenceLevel {
    High,
    Medium,
    Low,
    None,
}

impl ConfidenceLevel {
    /// High ≥ 0.7, Medium ≥ 0.4, Low > 0.0, None = 0.0.
    pub fn from_confidence(confidence: f32) -> Self {
        if confidence >= 0.7 {
            ConfidenceLevel::High
        } else if confidence >= 0.4 {
            ConfidenceLevel::Medium
        } else if confidence > 0.0 {
            ConfidenceLevel::Low
        } else {
            ConfidenceLevel::None
        }
    }
}

/// Evidence for one matched job requirement.
///
/// Fields are private: the only way to build one is `Evidence::new`,
/// which derives the legacy views and the confidence level from the
/// canonical inputs. Quote order is preserved as produced upstream.
#[derive(Debug, Clone, Serialize)]
pub struct Evidence {
    requirement: String,
    quotes: Vec<Quote>,
    confidence: f32,
    confidence_level: ConfidenceLevel,
    reason: String,
    // Legacy flat views for callers that have not migrated to `quotes`.
    quote_texts: Vec<String>,
    quote_source_labels: Vec<String>,
}

impl Evidence {
    pub fn new(
        requirement: impl Into<String>,
        quotes: Vec<Quote>,
        confidence: f32,
        reason: impl Into<String>,
    ) -> Self {
        let confidence = confidence.clamp(0.0, 1.0);
        let quote_texts = quotes.iter().map(|q| q.text.clone()).collect();
        let quote_source_labels = quotes
            .iter()
            .map(|q| q.source.label().to_string())
            .collect();

        Evidence {
            requirement: requirement.into(),
            quotes,
            confidence,
            confidence_level: ConfidenceLevel::from_confidence(confidence),
            reason: reason.into(),
            quote_texts,
            quote_source_labels,
        }
    }

    pub fn requirement(&self) -> &str {
        &self.requirement
    }

    pub fn quotes(&self) -> &[Quote] {
        &self.quotes
    }

    pub fn confidence(&self) -> f32 {
        self.confidence
    }

    pub fn confidence_level(&self) -> ConfidenceLevel {
        self.confidence_level
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }

    /// Legacy view: quote texts without provenance.
    pub fn quote_texts(&self) -> &[String] {
        &self.quote_texts
    }

    /// Legacy view: one source label per quote, same order as `quotes`.
    pub fn quote_source_labels(&self) -> &[String] {
        &self.quote_source_labels
    }
}
