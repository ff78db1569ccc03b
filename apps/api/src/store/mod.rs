//! Document store: persistence for users, résumés and job descriptions.
//!
//! `AppState` holds an `Arc<dyn DocumentStore>`; production uses [`PgStore`],
//! tests and database-less runs use [`MemoryStore`].

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::description::{DescriptionRow, NewDescription};
use crate::models::resume::{NewResume, ResumeRow, ResumeSummary};
use crate::models::user::{NewUser, UserRow};

pub use memory::MemoryStore;
pub use postgres::PgStore;

#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Inserts a user. Fails with `AppError::Conflict` when the email or
    /// username is taken.
    async fn create_user(&self, user: NewUser) -> Result<UserRow, AppError>;
    async fn find_user_by_email(&self, email: &str) -> Result<Option<UserRow>, AppError>;

    async fn insert_resume(&self, resume: NewResume) -> Result<ResumeRow, AppError>;
    /// Résumés owned by `email`, newest first.
    async fn list_resumes(&self, email: &str) -> Result<Vec<ResumeSummary>, AppError>;
    async fn get_resume(&self, id: Uuid) -> Result<Option<ResumeRow>, AppError>;
    /// Returns `false` when no résumé has this id.
    async fn rename_resume(&self, id: Uuid, name: &str) -> Result<bool, AppError>;
    async fn delete_resume(&self, id: Uuid) -> Result<bool, AppError>;

    async fn insert_description(
        &self,
        description: NewDescription,
    ) -> Result<DescriptionRow, AppError>;
    /// Descriptions owned by `email`, newest first.
    async fn list_descriptions(&self, email: &str) -> Result<Vec<DescriptionRow>, AppError>;
    async fn get_description(&self, id: Uuid) -> Result<Option<DescriptionRow>, AppError>;
    async fn rename_description(&self, id: Uuid, name: &str) -> Result<bool, AppError>;
    async fn delete_description(&self, id: Uuid) -> Result<bool, AppError>;
}
