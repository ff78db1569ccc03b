//! Résumé upload and management handlers.

use axum::{
    extract::{multipart::MultipartError, Multipart, Path, State},
    http::StatusCode,
    Json,
};
use bytes::Bytes;
use serde::Serialize;
use tracing::info;

use crate::documents::{DeleteRequest, RenameRequest, StatusResponse};
use crate::errors::AppError;
use crate::extract::is_supported;
use crate::models::resume::{NewResume, ResumeSummary};
use crate::state::AppState;

/// Largest accepted résumé file.
pub const MAX_RESUME_BYTES: usize = 2 * 1024 * 1024;
/// Request body ceiling for the upload route: the file plus multipart framing.
pub const UPLOAD_BODY_LIMIT: usize = MAX_RESUME_BYTES + 64 * 1024;

const FILE_TOO_LARGE: &str = "File size exceeds the 2MB limit.";

#[derive(Debug, Serialize)]
pub struct ResumeListResponse {
    pub resumes: Vec<ResumeSummary>,
}

struct UploadedFile {
    file_name: String,
    content_type: String,
    data: Bytes,
}

fn multipart_error(e: MultipartError) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::Validation(FILE_TOO_LARGE.to_string())
    } else {
        AppError::Validation(format!("Invalid multipart body: {}", e.body_text()))
    }
}

/// POST /api/resume (also /api/resume-upload)
///
/// Multipart fields: `resume_file` (PDF or DOCX), `email`, optional `name`.
pub async fn handle_upload_resume(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<StatusResponse>), AppError> {
    let mut file: Option<UploadedFile> = None;
    let mut email: Option<String> = None;
    let mut name: Option<String> = None;

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        let field_name = field.name().map(str::to_string);
        match field_name.as_deref() {
            Some("resume_file") => {
                let file_name = field.file_name().unwrap_or("resume").to_string();
                let content_type = field.content_type().unwrap_or_default().to_string();
                let data = field.bytes().await.map_err(multipart_error)?;
                file = Some(UploadedFile {
                    file_name,
                    content_type,
                    data,
                });
            }
            Some("email") => email = Some(field.text().await.map_err(multipart_error)?),
            Some("name") => name = Some(field.text().await.map_err(multipart_error)?),
            _ => {}
        }
    }

    let file = file.ok_or_else(|| AppError::Validation("No file uploaded.".to_string()))?;
    if file.data.len() > MAX_RESUME_BYTES {
        return Err(AppError::Validation(FILE_TOO_LARGE.to_string()));
    }
    if !is_supported(&file.content_type) {
        return Err(AppError::Validation(
            "Invalid file type. Only PDF or DOCX files are allowed.".to_string(),
        ));
    }

    let email = email
        .map(|e| e.trim().to_string())
        .filter(|e| !e.is_empty())
        .ok_or_else(|| AppError::Validation("Invalid email.".to_string()))?;
    let name = name
        .map(|n| n.trim().to_string())
        .filter(|n| !n.is_empty())
        .unwrap_or(file.file_name);

    let row = state
        .store
        .insert_resume(NewResume {
            email,
            name,
            content_type: file.content_type,
            data: file.data.to_vec(),
        })
        .await?;

    info!("Stored resume {} ({} bytes)", row.id, row.data.len());

    Ok((
        StatusCode::CREATED,
        Json(StatusResponse::success("Resume uploaded successfully.").with_id(row.id)),
    ))
}

/// GET /api/resumes/:email
pub async fn handle_list_resumes(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<ResumeListResponse>, AppError> {
    let resumes = state.store.list_resumes(&email).await?;
    Ok(Json(ResumeListResponse { resumes }))
}

/// PUT /api/resume
pub async fn handle_rename_resume(
    State(state): State<AppState>,
    Json(req): Json<RenameRequest>,
) -> Result<Json<StatusResponse>, AppError> {
    let name = req.name.trim();
    if name.is_empty() {
        return Err(AppError::Validation("Invalid name.".to_string()));
    }
    if !state.store.rename_resume(req.id, name).await? {
        return Err(AppError::NotFound("Resume not found.".to_string()));
    }
    Ok(Json(StatusResponse::success("Resume renamed successfully.")))
}

/// DELETE /api/resume
pub async fn handle_delete_resume(
    State(state): State<AppState>,
    Json(req): Json<DeleteRequest>,
) -> Result<Json<StatusResponse>, AppError> {
    if !state.store.delete_resume(req.id).await? {
        return Err(AppError::NotFound("Resume not found.".to_string()));
    }
    Ok(Json(StatusResponse::success("Resume deleted successfully.")))
}
