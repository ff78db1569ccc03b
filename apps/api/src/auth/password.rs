use anyhow::anyhow;

use crate::errors::AppError;

/// Matches the original account rules: 10 bcrypt rounds.
pub const BCRYPT_COST: u32 = 10;

/// Hashes `password` on the blocking pool.
pub async fn hash_password(password: String) -> Result<String, AppError> {
    tokio::task::spawn_blocking(move || bcrypt::hash(password, BCRYPT_COST))
        .await
        .map_err(|e| AppError::Internal(anyhow!("password hashing task failed: {e}")))?
        .map_err(|e| AppError::Internal(e.into()))
}

/// Checks `password` against a stored bcrypt hash on the blocking pool.
pub async fn verify_password(password: String, hash: String) -> Result<bool, AppError> {
    tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
        .await
        .map_err(|e| AppError::Internal(anyhow!("password verification task failed: {e}")))?
        .map_err(|e| AppError::Internal(e.into()))
}
