#![allow(dead_code)]

// Cross-cutting prompt fragments shared by LLM-calling modules.
// Module-specific prompts live in a prompts.rs next to their caller.

/// System prompt fragment that enforces JSON-only output.
pub const JSON_ONLY_SYSTEM: &str = "You are a precise, structured assistant. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Anti-hallucination fragment appended to every extraction prompt.
/// Quotes that fail verbatim verification are dropped downstream, so
/// the model is told up front that paraphrases are wasted output.
pub const VERBATIM_QUOTE_INSTRUCTION: &str = "\
    CRITICAL: Every quote must be copied VERBATIM from the materials provided. \
    Do NOT paraphrase, summarize, translate, or merge sentences. \
    A quote that is not an exact substring of the provided text will be discarded. \
    If no supporting text exists for a requirement, return an empty quote list for it.";
