//! Loads the résumé / description pair, enforces input limits, and runs the
//! scoring core and feedback client over it.

use anyhow::anyhow;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::extract::extract_text;
use crate::llm_client::{FeedbackClient, FeedbackItem};
use crate::scoring::{as_percent, fit_score};
use crate::store::DocumentStore;

/// Longest résumé or description text accepted for analysis, in characters.
/// Longer input is rejected, never truncated.
pub const MAX_ANALYSIS_CHARS: usize = 10_000;

#[derive(Debug, Deserialize)]
pub struct AnalysisRequest {
    #[serde(default)]
    pub resume_id: Option<String>,
    #[serde(default)]
    pub description_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ComparisonResponse {
    /// Raw overlap fraction in `[0, 1]`.
    pub fit_score: f64,
}

#[derive(Debug, Serialize)]
pub struct AnalysisResponse {
    /// Overlap as a whole percentage, rounded down.
    pub fit_score: u32,
    pub feedback: Vec<FeedbackItem>,
    pub matching_keywords: Vec<String>,
}

/// Texts ready for scoring.
#[derive(Debug, Clone)]
pub struct AnalysisPair {
    pub resume_text: String,
    pub description_text: String,
}

fn parse_id(raw: Option<&str>, missing: &str, label: &str) -> Result<Uuid, AppError> {
    let raw = raw
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| AppError::Validation(missing.to_string()))?;
    Uuid::parse_str(raw).map_err(|_| AppError::Validation(format!("Invalid {label} id.")))
}

fn check_text(text: &str, label: &str) -> Result<(), AppError> {
    if text.trim().is_empty() {
        return Err(AppError::Validation(format!("{label} text is empty.")));
    }
    if text.chars().count() > MAX_ANALYSIS_CHARS {
        return Err(AppError::Validation(format!(
            "{label} text exceeds the maximum of {MAX_ANALYSIS_CHARS} characters."
        )));
    }
    Ok(())
}

/// Resolves both ids, extracts the résumé text and validates both texts.
pub async fn load_pair(
    store: &dyn DocumentStore,
    request: &AnalysisRequest,
) -> Result<AnalysisPair, AppError> {
    let resume_id = parse_id(request.resume_id.as_deref(), "Resume Id not given.", "resume")?;
    let description_id = parse_id(
        request.description_id.as_deref(),
        "Job Description Id not given.",
        "description",
    )?;

    let resume = store
        .get_resume(resume_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Resume not found.".to_string()))?;

    let resume_text =
        tokio::task::spawn_blocking(move || extract_text(&resume.data, &resume.content_type))
            .await
            .map_err(|e| AppError::Internal(anyhow!("resume extraction task failed: {e}")))??;
    check_text(&resume_text, "Resume")?;

    let description = store
        .get_description(description_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Description not found.".to_string()))?;
    check_text(&description.job_description, "Job Description")?;

    Ok(AnalysisPair {
        resume_text,
        description_text: description.job_description,
    })
}

/// Overlap score only.
pub fn compare(pair: &AnalysisPair) -> Result<ComparisonResponse, AppError> {
    let score = fit_score(&pair.resume_text, &pair.description_text)?;
    info!("Computed overlap fit score {score:.4}");
    Ok(ComparisonResponse { fit_score: score })
}

/// Overlap score plus keyword and improvement feedback.
pub async fn analyze(
    pair: &AnalysisPair,
    feedback: &dyn FeedbackClient,
) -> Result<AnalysisResponse, AppError> {
    let score = fit_score(&pair.resume_text, &pair.description_text)?;
    let result = feedback
        .feedback(&pair.resume_text, &pair.description_text)
        .await?;

    info!(
        "Analysis complete: fit_score={:.4}, keywords={}, feedback_items={}",
        score,
        result.matching_keywords.len(),
        result.feedback.len()
    );

    Ok(AnalysisResponse {
        fit_score: as_percent(score),
        feedback: result.feedback,
        matching_keywords: result.matching_keywords,
    })
}
