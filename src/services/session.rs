//! Server-side session store.
//!
//! DESIGN
//! ======
//! The authenticated identity lives in the `sessions` table keyed by a
//! random token; the client holds only the token in an HttpOnly cookie.
//! An absent, unknown, or expired token all read as "not logged in".
//! Sessions expire after seven days (schema default) and are never
//! refreshed in place.

use std::fmt::Write;

use rand::Rng;
use sqlx::{PgPool, Row};

use crate::services::user::UserView;

pub(crate) fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        let _ = write!(s, "{b:02x}");
    }
    s
}

/// Generate a cryptographically random 32-byte hex session token.
#[must_use]
pub fn generate_token() -> String {
    let bytes: [u8; 32] = rand::rng().random();
    bytes_to_hex(&bytes)
}

/// Open a session for the given user, returning the new token.
///
/// # Errors
///
/// Returns a database error if the insert fails.
pub async fn create_session(pool: &PgPool, user_id: i64) -> Result<String, sqlx::Error> {
    let token = generate_token();
    sqlx::query("INSERT INTO sessions (token, user_id) VALUES ($1, $2)")
        .bind(&token)
        .bind(user_id)
        .execute(pool)
        .await?;
    Ok(token)
}

/// Resolve a session token to its user, if the session is still live.
///
/// # Errors
///
/// Returns a database error if the lookup fails.
pub async fn validate_session(pool: &PgPool, token: &str) -> Result<Option<UserView>, sqlx::Error> {
    let row = sqlx::query(
        r"SELECT u.id, u.username
          FROM sessions s
          JOIN users u ON u.id = s.user_id
          WHERE s.token = $1 AND s.expires_at > now()",
    )
    .bind(token)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(|r| UserView { id: r.get("id"), username: r.get("username") }))
}

/// Close a session by token. Closing an unknown token is a no-op.
///
/// # Errors
///
/// Returns a database error if the delete fails.
pub async fn delete_session(pool: &PgPool, token: &str) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM sessions WHERE token = $1")
        .bind(token)
        .execute(pool)
        .await?;
    Ok(())
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
