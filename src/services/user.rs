//! Account service — registration and credential verification.
//!
//! Passwords are stored as hex sha256 digests; the raw password never
//! leaves the request scope and the hash never leaves this module.

use sha2::{Digest, Sha256};
use sqlx::{PgPool, Row};

use crate::envelope::ApiResult;

#[derive(Debug, thiserror::Error)]
pub enum UserError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// User shape returned to clients. Never carries the password hash.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct UserView {
    pub id: i64,
    pub username: String,
}

/// Hex-encoded sha256 digest of the raw password.
#[must_use]
pub fn hash_password(password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    let bytes = hasher.finalize();
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

/// Register a new account. A taken username is a business failure
/// reported inside the envelope, not an error.
///
/// # Errors
///
/// Returns a database error if the insert fails.
pub async fn register(
    pool: &PgPool,
    username: &str,
    password: &str,
) -> Result<ApiResult<UserView>, UserError> {
    let row = sqlx::query(
        r"INSERT INTO users (username, password_hash)
          VALUES ($1, $2)
          ON CONFLICT (username) DO NOTHING
          RETURNING id",
    )
    .bind(username)
    .bind(hash_password(password))
    .fetch_optional(pool)
    .await?;

    let Some(row) = row else {
        return Ok(ApiResult::fail("User already exists!"));
    };

    let user = UserView { id: row.get("id"), username: username.to_owned() };
    tracing::info!(user_id = user.id, "user registered");
    Ok(ApiResult::ok("Registration successful!", user))
}

/// Verify credentials. An unknown username and a wrong password are
/// indistinguishable to the caller.
///
/// # Errors
///
/// Returns a database error if the lookup fails.
pub async fn login(
    pool: &PgPool,
    username: &str,
    password: &str,
) -> Result<ApiResult<UserView>, UserError> {
    let row = sqlx::query("SELECT id, password_hash FROM users WHERE username = $1")
        .bind(username)
        .fetch_optional(pool)
        .await?;

    let Some(row) = row else {
        return Ok(ApiResult::fail("Wrong username or password!"));
    };

    let stored: String = row.get("password_hash");
    if stored != hash_password(password) {
        return Ok(ApiResult::fail("Wrong username or password!"));
    }

    let user = UserView { id: row.get("id"), username: username.to_owned() };
    tracing::info!(user_id = user.id, "user logged in");
    Ok(ApiResult::ok("Login successful!", user))
}

#[cfg(test)]
#[path = "user_test.rs"]
mod tests;
