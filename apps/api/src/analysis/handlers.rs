//! Axum route handlers for the analysis API.

use axum::{extract::State, Json};

use crate::analysis::service::{
    analyze, compare, load_pair, AnalysisRequest, AnalysisResponse, ComparisonResponse,
};
use crate::errors::AppError;
use crate::state::AppState;

/// POST /api/comparison
///
/// Token-overlap fit score only, as a fraction in `[0, 1]`.
pub async fn handle_comparison(
    State(state): State<AppState>,
    Json(request): Json<AnalysisRequest>,
) -> Result<Json<ComparisonResponse>, AppError> {
    let pair = load_pair(state.store.as_ref(), &request).await?;
    Ok(Json(compare(&pair)?))
}

/// POST /api/analyze
///
/// Fit score as a whole percentage plus matching keywords and categorized
/// feedback from the generative-language service.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalysisRequest>,
) -> Result<Json<AnalysisResponse>, AppError> {
    let pair = load_pair(state.store.as_ref(), &request).await?;
    let response = analyze(&pair, state.feedback.as_ref()).await?;
    Ok(Json(response))
}
