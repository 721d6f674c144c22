//! Evidence Extractor — assembles the single generation request from
//! job posting, resume, and any retrieved chunks, and parses the
//! structured response.
//!
//! One attempt per analysis run. A failed call (transport, timeout,
//! malformed JSON, rate limit, empty content) is fatal to the run: the
//! error carries its cause up to the caller and no partial evidence is
//! produced. Quote verification happens downstream in the resolver.

use serde::Deserialize;
use tracing::info;

use crate::analysis::prompts::{
    ACHIEVEMENTS_HEADER, EXTRACTION_PROMPT_TEMPLATE, EXTRACTION_SYSTEM,
};
use crate::llm_client::prompts::VERBATIM_QUOTE_INSTRUCTION;
use crate::llm_client::{LlmClient, LlmError};
use crate::retrieval::RetrievalResult;

/// One evidence entry as returned by the model, before quote
/// verification. Quotes here are raw strings with unproven provenance.
#[derive(Debug, Clone, Deserialize)]
pub struct RawEvidence {
    pub requirement: String,
    #[serde(default)]
    pub quotes: Vec<String>,
    #[serde(default)]
    pub confidence: f32,
    #[serde(default)]
    pub reason: String,
}

/// Wire shape of the extraction response.
#[derive(Debug, Deserialize)]
pub struct RawExtraction {
    pub evidence_list: Vec<RawEvidence>,
}

/// Formats one retrieved chunk with its stable reference token. The
/// model echoes the token back when quoting from the chunk.
pub fn reference_token(chunk_id: u32) -> String {
    format!("[A{chunk_id}]")
}

/// Builds the full extraction prompt. Retrieved chunks are appended
/// under their reference tokens; with no retrieval, only resume text is
/// offered.
pub fn build_extraction_prompt(
    job_text: &str,
    resume_text: &str,
    retrieved: &RetrievalResult,
) -> String {
    let achievements_block = if retrieved.is_empty() {
        String::new()
    } else {
        let mut block = format!("\n{ACHIEVEMENTS_HEADER}\n");
        for hit in retrieved.hits() {
            block.push_str(&format!(
                "{} {}\n",
                reference_token(hit.chunk.id),
                hit.chunk.text
            ));
        }
        block
    };

    EXTRACTION_PROMPT_TEMPLATE
        .replace("{verbatim_instruction}", VERBATIM_QUOTE_INSTRUCTION)
        .replace("{job_text}", job_text)
        .replace("{resume_text}", resume_text)
        .replace("{achievements_block}", &achievements_block)
}

/// Runs the single generation call and parses the structured response.
pub async fn extract_evidence(
    llm: &LlmClient,
    job_text: &str,
    resume_text: &str,
    retrieved: &RetrievalResult,
) -> Result<Vec<RawEvidence>, LlmError> {
    let prompt = build_extraction_prompt(job_text, resume_text, retrieved);
    let extraction: RawExtraction = llm.call_json(&prompt, EXTRACTION_SYSTEM).await?;
    info!(
        "extraction returned {} evidence entries",
        extraction.evidence_list.len()
    );
    Ok(extraction.evidence_list)
}
