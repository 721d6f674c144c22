//! Axum route handlers for the Analysis API.

use axum::{extract::State, Json};

use crate::analysis::pipeline::run_analysis;
use crate::errors::AppError;
use crate::models::analysis::{AnalysisRequest, AnalysisResult};
use crate::state::AppState;

/// POST /api/v1/analysis
///
/// Runs the full pipeline: validate → retrieve (optional) → extract →
/// resolve. Degraded retrieval still returns full resume-sourced
/// evidence with a visible status; only validation and extraction
/// failures produce an error response.
pub async fn handle_analysis(
    State(state): State<AppState>,
    Json(request): Json<AnalysisRequest>,
) -> Result<Json<AnalysisResult>, AppError> {
    let result = run_analysis(&state.llm, &state.retriever, &state.pipeline, request).await?;
    Ok(Json(result))
}
