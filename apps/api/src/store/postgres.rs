use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::description::{DescriptionRow, NewDescription};
use crate::models::resume::{NewResume, ResumeRow, ResumeSummary};
use crate::models::user::{NewUser, UserRow};
use crate::store::DocumentStore;

/// PostgreSQL-backed store. Schema lives in `migrations/`.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Translates unique-constraint violations on `users` into a conflict.
fn map_user_insert_error(e: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(db) = &e {
        if db.is_unique_violation() {
            return match db.constraint() {
                Some("users_username_key") => {
                    AppError::Conflict("Username already in use".to_string())
                }
                _ => AppError::Conflict("Email already in use".to_string()),
            };
        }
    }
    AppError::Database(e)
}

#[async_trait]
impl DocumentStore for PgStore {
    async fn create_user(&self, user: NewUser) -> Result<UserRow, AppError> {
        sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO users (id, email, username, password_hash)
            VALUES ($1, $2, $3, $4)
            RETURNING id, email, username, password_hash, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&user.email)
        .bind(&user.username)
        .bind(&user.password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(map_user_insert_error)
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<UserRow>, AppError> {
        let user = sqlx::query_as::<_, UserRow>("SELECT * FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    async fn insert_resume(&self, resume: NewResume) -> Result<ResumeRow, AppError> {
        let row = sqlx::query_as::<_, ResumeRow>(
            r#"
            INSERT INTO resumes (id, email, name, content_type, data)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, email, name, content_type, data, date_added
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&resume.email)
        .bind(&resume.name)
        .bind(&resume.content_type)
        .bind(&resume.data)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn list_resumes(&self, email: &str) -> Result<Vec<ResumeSummary>, AppError> {
        let rows = sqlx::query_as::<_, ResumeSummary>(
            "SELECT id, name, content_type, date_added FROM resumes WHERE email = $1 ORDER BY date_added DESC",
        )
        .bind(email)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn get_resume(&self, id: Uuid) -> Result<Option<ResumeRow>, AppError> {
        let row = sqlx::query_as::<_, ResumeRow>("SELECT * FROM resumes WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn rename_resume(&self, id: Uuid, name: &str) -> Result<bool, AppError> {
        let result = sqlx::query("UPDATE resumes SET name = $1 WHERE id = $2")
            .bind(name)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete_resume(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM resumes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn insert_description(
        &self,
        description: NewDescription,
    ) -> Result<DescriptionRow, AppError> {
        let row = sqlx::query_as::<_, DescriptionRow>(
            r#"
            INSERT INTO descriptions (id, email, name, job_description)
            VALUES ($1, $2, $3, $4)
            RETURNING id, email, name, job_description, date_added
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&description.email)
        .bind(&description.name)
        .bind(&description.job_description)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn list_descriptions(&self, email: &str) -> Result<Vec<DescriptionRow>, AppError> {
        let rows = sqlx::query_as::<_, DescriptionRow>(
            "SELECT * FROM descriptions WHERE email = $1 ORDER BY date_added DESC",
        )
        .bind(email)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn get_description(&self, id: Uuid) -> Result<Option<DescriptionRow>, AppError> {
        let row = sqlx::query_as::<_, DescriptionRow>("SELECT * FROM descriptions WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn rename_description(&self, id: Uuid, name: &str) -> Result<bool, AppError> {
        let result = sqlx::query("UPDATE descriptions SET name = $1 WHERE id = $2")
            .bind(name)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete_description(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM descriptions WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
