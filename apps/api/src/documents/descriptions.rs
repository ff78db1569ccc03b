//! Job description handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::documents::{DeleteRequest, RenameRequest, StatusResponse};
use crate::errors::AppError;
use crate::models::description::{DescriptionRow, NewDescription};
use crate::state::AppState;

/// Upper bound on stored job description text, in characters.
pub const MAX_DESCRIPTION_CHARS: usize = 5000;

#[derive(Debug, Deserialize)]
pub struct CreateDescriptionRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub job_description: String,
}

#[derive(Debug, Serialize)]
pub struct DescriptionListResponse {
    pub descriptions: Vec<DescriptionRow>,
}

fn validate_new_description(req: &CreateDescriptionRequest) -> Result<NewDescription, AppError> {
    let email = req.email.trim();
    if email.is_empty() {
        return Err(AppError::Validation("Invalid email.".to_string()));
    }
    let name = req.name.trim();
    if name.is_empty() {
        return Err(AppError::Validation("Invalid name.".to_string()));
    }
    let text = req.job_description.trim();
    if text.is_empty() {
        return Err(AppError::Validation("Invalid job description.".to_string()));
    }
    if text.chars().count() > MAX_DESCRIPTION_CHARS {
        return Err(AppError::Validation(format!(
            "Job description exceeds character limit of {MAX_DESCRIPTION_CHARS}."
        )));
    }
    Ok(NewDescription {
        email: email.to_string(),
        name: name.to_string(),
        job_description: text.to_string(),
    })
}

/// POST /api/job-description
pub async fn handle_create_description(
    State(state): State<AppState>,
    Json(req): Json<CreateDescriptionRequest>,
) -> Result<(StatusCode, Json<StatusResponse>), AppError> {
    let new_description = validate_new_description(&req)?;
    let row = state.store.insert_description(new_description).await?;
    info!("Stored job description {}", row.id);

    Ok((
        StatusCode::CREATED,
        Json(StatusResponse::success("Job description submitted successfully.").with_id(row.id)),
    ))
}

/// GET /api/job-descriptions/:email
pub async fn handle_list_descriptions(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<DescriptionListResponse>, AppError> {
    let descriptions = state.store.list_descriptions(&email).await?;
    Ok(Json(DescriptionListResponse { descriptions }))
}

/// PUT /api/job-description
pub async fn handle_rename_description(
    State(state): State<AppState>,
    Json(req): Json<RenameRequest>,
) -> Result<Json<StatusResponse>, AppError> {
    let name = req.name.trim();
    if name.is_empty() {
        return Err(AppError::Validation("Invalid name.".to_string()));
    }
    if !state.store.rename_description(req.id, name).await? {
        return Err(AppError::NotFound("Job description not found.".to_string()));
    }
    Ok(Json(StatusResponse::success(
        "Job description's name updated successfully.",
    )))
}

/// DELETE /api/job-description
pub async fn handle_delete_description(
    State(state): State<AppState>,
    Json(req): Json<DeleteRequest>,
) -> Result<Json<StatusResponse>, AppError> {
    if !state.store.delete_description(req.id).await? {
        return Err(AppError::NotFound("Job description not found.".to_string()));
    }
    Ok(Json(StatusResponse::success(
        "Job description deleted successfully.",
    )))
}
