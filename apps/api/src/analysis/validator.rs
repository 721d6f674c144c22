//! Input validation — size/shape constraints enforced before any
//! network call. Pure and total over string inputs: control characters
//! and unusual encodings are ordinary characters here, not rejections.

use crate::errors::AppError;

/// Inputs below this length still validate but produce an advisory
/// warning; analysis continues at possibly reduced accuracy.
const MIN_INFORMATIVE_CHARS: usize = 100;

/// Trimmed, bounds-checked input plus any non-fatal warnings.
#[derive(Debug, Clone)]
pub struct ValidatedInput {
    pub job_text: String,
    pub resume_text: String,
    pub warnings: Vec<String>,
}

/// Validates and normalizes the raw input pair.
///
/// Fails with `InputEmpty` when either field is blank after trimming,
/// or `InputTooLarge` when the resume exceeds `max_resume_chars`.
/// No retrieval or network side effects.
pub fn validate(
    job_text: &str,
    resume_text: &str,
    max_resume_chars: usize,
) -> Result<ValidatedInput, AppError> {
    let job_text = job_text.trim();
    if job_text.is_empty() {
        return Err(AppError::InputEmpty { field: "job_text" });
    }

    let resume_text = resume_text.trim();
    if resume_text.is_empty() {
        return Err(AppError::InputEmpty {
            field: "resume_text",
        });
    }

    let resume_chars = resume_text.chars().count();
    if resume_chars > max_resume_chars {
        return Err(AppError::InputTooLarge {
            chars: resume_chars,
            max: max_resume_chars,
        });
    }

    let mut warnings = Vec::new();
    if job_text.chars().count() < MIN_INFORMATIVE_CHARS {
        warnings.push(
            "Job posting is short (under 100 characters); paste the requirements and \
             responsibilities sections for a more accurate analysis."
                .to_string(),
        );
    }
    if resume_chars < MIN_INFORMATIVE_CHARS {
        warnings.push(
            "Resume text is short (under 100 characters); include duties, skills, and \
             achievements for a more accurate analysis."
                .to_string(),
        );
    }

    Ok(ValidatedInput {
        job_text: job_text.to_string(),
        resume_text: resume_text.to_string(),
        warnings,
    })
}
