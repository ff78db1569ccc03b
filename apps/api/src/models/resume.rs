use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

pub const PDF_CONTENT_TYPE: &str = "application/pdf";
pub const DOCX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Full résumé row including the uploaded file bytes.
#[derive(Debug, Clone, FromRow)]
pub struct ResumeRow {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub content_type: String,
    pub data: Vec<u8>,
    pub date_added: DateTime<Utc>,
}

/// Listing view, without the file payload.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ResumeSummary {
    pub id: Uuid,
    pub name: String,
    pub content_type: String,
    pub date_added: DateTime<Utc>,
}

impl From<&ResumeRow> for ResumeSummary {
    fn from(row: &ResumeRow) -> Self {
        Self {
            id: row.id,
            name: row.name.clone(),
            content_type: row.content_type.clone(),
            date_added: row.date_added,
        }
    }
}

#[derive(Debug, Clone)]
pub struct NewResume {
    pub email: String,
    pub name: String,
    pub content_type: String,
    pub data: Vec<u8>,
}
