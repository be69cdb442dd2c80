//! Axum route handlers for the analysis API.

use axum::{extract::rejection::JsonRejection, extract::State, Json};

use crate::analysis::models::{AnalyzeRequest, AnalyzeResponse};
use crate::analysis::policy::{check_confidentiality, validate_request};
use crate::errors::AppError;
use crate::state::AppState;

/// POST /analyze
///
/// Scores a résumé against a job description.
/// Validation and the confidentiality policy run before the scorer is called.
pub async fn handle_analyze(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let Json(request) = payload.map_err(|e| AppError::Validation(e.body_text()))?;

    validate_request(&request, state.config.min_text_length)?;
    check_confidentiality(&request.job_description, &state.config.confidential_markers)?;

    let result = state
        .scorer
        .score(&request.resume_text, &request.job_description);

    tracing::info!(
        target_role = %request.target_role,
        score = result.score,
        missing = result.missing_terms.len(),
        "Analysis complete"
    );

    Ok(Json(AnalyzeResponse::from(result)))
}
