#![allow(dead_code)]

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;
use crate::status::ErrorKind;

/// Application-level error type for the fatal channel.
///
/// Only validation and extraction failures live here. Retrieval
/// failures are recovered inside the pipeline and never become an
/// `AppError` — they surface as `RagStatus::Error` on the result.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{field} is empty")]
    InputEmpty { field: &'static str },

    #[error("resume text is too large: {chars} characters (max {max})")]
    InputTooLarge { chars: usize, max: usize },

    #[error("evidence extraction failed: {0}")]
    Extraction(#[from] LlmError),

    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Taxonomy kind for this error, when it has one.
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            AppError::InputEmpty { .. } => Some(ErrorKind::InputEmpty),
            AppError::InputTooLarge { .. } => Some(ErrorKind::InputTooLarge),
            AppError::Extraction(_) => Some(ErrorKind::ExtractionFailed),
            AppError::Internal(_) => None,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::InputEmpty { .. } => {
                (StatusCode::BAD_REQUEST, "INPUT_EMPTY", self.to_string())
            }
            AppError::InputTooLarge { .. } => {
                (StatusCode::BAD_REQUEST, "INPUT_TOO_LARGE", self.to_string())
            }
            AppError::Extraction(cause) => {
                tracing::error!("extraction failed: {cause}");
                (
                    StatusCode::BAD_GATEWAY,
                    "EXTRACTION_FAILED",
                    "Evidence extraction failed; no analysis was produced. Please try again."
                        .to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
