// Résumé and job-description CRUD, keyed by owner email.

pub mod descriptions;
pub mod resumes;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Body of rename requests.
#[derive(Debug, Deserialize)]
pub struct RenameRequest {
    pub id: Uuid,
    #[serde(default)]
    pub name: String,
}

/// Body of delete requests.
#[derive(Debug, Deserialize)]
pub struct DeleteRequest {
    pub id: Uuid,
}

/// `{status, message}` acknowledgement shared by the write endpoints.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
}

impl StatusResponse {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: "success",
            message: message.into(),
            id: None,
        }
    }

    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = Some(id);
        self
    }
}
