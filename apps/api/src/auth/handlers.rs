//! Axum route handlers for accounts.

use std::sync::OnceLock;

use axum::{extract::State, http::StatusCode, Json};
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::auth::password::{hash_password, verify_password};
use crate::auth::AuthUser;
use crate::errors::AppError;
use crate::models::user::NewUser;
use crate::state::AppState;

pub const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub username: String,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
}

#[derive(Debug, Serialize)]
pub struct VerifyTokenResponse {
    pub email: String,
}

fn email_pattern() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| {
        Regex::new(r"^[A-Za-z0-9_.%+-]+@[A-Za-z0-9_.-]+\.[A-Za-z]{2,}$").expect("email pattern is valid")
    })
}

fn validate_registration(req: &RegisterRequest) -> Result<(), AppError> {
    if req.email.trim().is_empty() || req.password.is_empty() || req.username.trim().is_empty() {
        return Err(AppError::Validation("Missing required fields.".to_string()));
    }
    if !email_pattern().is_match(req.email.trim()) {
        return Err(AppError::Validation(
            "Please enter a valid email address".to_string(),
        ));
    }
    if req.password.chars().count() < MIN_PASSWORD_LEN {
        return Err(AppError::Validation(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters long"
        )));
    }
    Ok(())
}

/// POST /api/register
pub async fn handle_register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    validate_registration(&req)?;

    let email = req.email.trim().to_string();
    if state.store.find_user_by_email(&email).await?.is_some() {
        return Err(AppError::Conflict("Email already in use".to_string()));
    }

    let password_hash = hash_password(req.password).await?;
    let user = state
        .store
        .create_user(NewUser {
            email,
            username: req.username.trim().to_string(),
            password_hash,
        })
        .await?;

    info!("Registered user {}", user.id);

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "User registered successfully".to_string(),
        }),
    ))
}

/// POST /api/login
pub async fn handle_login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    if req.email.trim().is_empty() || req.password.is_empty() {
        return Err(AppError::Validation("Missing required fields.".to_string()));
    }

    let invalid = || AppError::Unauthorized("Invalid email or password".to_string());

    let user = state
        .store
        .find_user_by_email(req.email.trim())
        .await?
        .ok_or_else(invalid)?;

    if !verify_password(req.password, user.password_hash.clone()).await? {
        return Err(invalid());
    }

    let token = state.jwt.issue(&user)?;
    Ok(Json(LoginResponse { token }))
}

/// GET /api/verify-token
pub async fn handle_verify_token(AuthUser(claims): AuthUser) -> Json<VerifyTokenResponse> {
    Json(VerifyTokenResponse {
        email: claims.email,
    })
}
