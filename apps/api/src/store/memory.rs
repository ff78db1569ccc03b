use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::description::{DescriptionRow, NewDescription};
use crate::models::resume::{NewResume, ResumeRow, ResumeSummary};
use crate::models::user::{NewUser, UserRow};
use crate::store::DocumentStore;

/// Process-local store. Rows are kept in insertion order so "newest first"
/// holds even when two inserts share a timestamp.
#[derive(Default)]
pub struct MemoryStore {
    users: RwLock<Vec<UserRow>>,
    resumes: RwLock<Vec<ResumeRow>>,
    descriptions: RwLock<Vec<DescriptionRow>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn create_user(&self, user: NewUser) -> Result<UserRow, AppError> {
        let mut users = self.users.write();
        if users.iter().any(|u| u.email == user.email) {
            return Err(AppError::Conflict("Email already in use".to_string()));
        }
        if users.iter().any(|u| u.username == user.username) {
            return Err(AppError::Conflict("Username already in use".to_string()));
        }
        let row = UserRow {
            id: Uuid::new_v4(),
            email: user.email,
            username: user.username,
            password_hash: user.password_hash,
            created_at: Utc::now(),
        };
        users.push(row.clone());
        Ok(row)
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<UserRow>, AppError> {
        Ok(self.users.read().iter().find(|u| u.email == email).cloned())
    }

    async fn insert_resume(&self, resume: NewResume) -> Result<ResumeRow, AppError> {
        let row = ResumeRow {
            id: Uuid::new_v4(),
            email: resume.email,
            name: resume.name,
            content_type: resume.content_type,
            data: resume.data,
            date_added: Utc::now(),
        };
        self.resumes.write().push(row.clone());
        Ok(row)
    }

    async fn list_resumes(&self, email: &str) -> Result<Vec<ResumeSummary>, AppError> {
        Ok(self
            .resumes
            .read()
            .iter()
            .rev()
            .filter(|r| r.email == email)
            .map(ResumeSummary::from)
            .collect())
    }

    async fn get_resume(&self, id: Uuid) -> Result<Option<ResumeRow>, AppError> {
        Ok(self.resumes.read().iter().find(|r| r.id == id).cloned())
    }

    async fn rename_resume(&self, id: Uuid, name: &str) -> Result<bool, AppError> {
        let mut resumes = self.resumes.write();
        match resumes.iter_mut().find(|r| r.id == id) {
            Some(row) => {
                row.name = name.to_string();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_resume(&self, id: Uuid) -> Result<bool, AppError> {
        let mut resumes = self.resumes.write();
        let before = resumes.len();
        resumes.retain(|r| r.id != id);
        Ok(resumes.len() != before)
    }

    async fn insert_description(
        &self,
        description: NewDescription,
    ) -> Result<DescriptionRow, AppError> {
        let row = DescriptionRow {
            id: Uuid::new_v4(),
            email: description.email,
            name: description.name,
            job_description: description.job_description,
            date_added: Utc::now(),
        };
        self.descriptions.write().push(row.clone());
        Ok(row)
    }

    async fn list_descriptions(&self, email: &str) -> Result<Vec<DescriptionRow>, AppError> {
        Ok(self
            .descriptions
            .read()
            .iter()
            .rev()
            .filter(|d| d.email == email)
            .cloned()
            .collect())
    }

    async fn get_description(&self, id: Uuid) -> Result<Option<DescriptionRow>, AppError> {
        Ok(self.descriptions.read().iter().find(|d| d.id == id).cloned())
    }

    async fn rename_description(&self, id: Uuid, name: &str) -> Result<bool, AppError> {
        let mut descriptions = self.descriptions.write();
        match descriptions.iter_mut().find(|d| d.id == id) {
            Some(row) => {
                row.name = name.to_string();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_description(&self, id: Uuid) -> Result<bool, AppError> {
        let mut descriptions = self.descriptions.write();
        let before = descriptions.len();
        descriptions.retain(|d| d.id != id);
        Ok(descriptions.len() != before)
    }
}
