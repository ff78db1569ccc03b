use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct DescriptionRow {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub job_description: String,
    pub date_added: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewDescription {
    pub email: String,
    pub name: String,
    pub job_description: String,
}
