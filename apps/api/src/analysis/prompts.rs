// All LLM prompt constants for the analysis module.
// Reuses cross-cutting fragments from llm_client::prompts.

/// System prompt for evidence extraction — enforces JSON-only output.
pub const EXTRACTION_SYSTEM: &str =
    "You are an expert resume analyst. Given a job posting and a candidate's \
    career history, you match the posting's requirements against the history \
    and justify each match with literal quotes. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Evidence extraction prompt template.
/// Replace: {verbatim_instruction}, {job_text}, {resume_text},
///          {achievements_block}
pub const EXTRACTION_PROMPT_TEMPLATE: &str = r#"{verbatim_instruction}

Analyze the job posting below against the candidate's materials and return one
evidence entry per matched requirement.

Return a JSON object with this EXACT schema (no extra fields):
{
  "evidence_list": [
    {
      "requirement": "3+ years of Python experience",
      "quotes": ["Pythonを使用したWebアプリケーション開発に5年間従事"],
      "confidence": 0.9,
      "reason": "Resume shows five years of Python web development"
    }
  ]
}

Rules:
1. Extract every requirement stated in the job posting (required and preferred),
   and produce one evidence entry for each — including requirements with no
   match (empty "quotes", confidence 0.0).
2. Quotes must be exact substrings of the RESUME or of one ACHIEVEMENT chunk.
3. When quoting from an achievement chunk, start the quote with that chunk's
   reference token exactly as given (for example "[A3] "), then the verbatim text.
   Never invent reference tokens and never use them for resume quotes.
4. confidence is 0.0-1.0: 1.0 = exact fit, 0.7+ = strong, 0.4-0.7 = partial,
   below 0.4 = weak, 0.0 = no match.
5. reason is one short sentence on why the materials do or do not match.

JOB POSTING:
{job_text}

RESUME:
{resume_text}
{achievements_block}"#;

/// Header inserted above the retrieved chunks, when any were retrieved.
pub const ACHIEVEMENTS_HEADER: &str =
    "ACHIEVEMENT RECORDS (each line starts with its reference token):";
