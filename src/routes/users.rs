//! Account routes — register, login, session check, logout.
//!
//! DESIGN
//! ======
//! Shape validation runs first in each handler and reports the first
//! violated rule's message inside a failure envelope; the service is only
//! called on a clean payload. Business failures (duplicate user, bad
//! credentials) come back from the service already wrapped. Only store
//! errors surface as HTTP 500.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::Deserialize;
use time::Duration;

use crate::envelope::ApiResult;
use crate::services::user::UserView;
use crate::services::{session, user};
use crate::state::AppState;

const COOKIE_NAME: &str = "session_token";

pub(crate) fn env_bool(key: &str) -> Option<bool> {
    std::env::var(key)
        .ok()
        .and_then(|raw| match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Some(true),
            "0" | "false" | "no" | "off" => Some(false),
            _ => None,
        })
}

/// Secure cookies are opt-in via `COOKIE_SECURE`; plain HTTP deployments
/// stay functional by default.
pub(crate) fn cookie_secure() -> bool {
    env_bool("COOKIE_SECURE").unwrap_or(false)
}

/// Credential payload for register and login. Fields are optional so the
/// handler itself can report which one is missing.
#[derive(Debug, Deserialize)]
pub struct UserPayload {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Validate a credential payload. Returns the trimmed username and raw
/// password, or the first violated rule's message in field order.
pub(crate) fn validate_user(payload: &UserPayload) -> Result<(String, String), &'static str> {
    let username = match payload.username.as_deref().map(str::trim) {
        Some(name) if !name.is_empty() => name.to_owned(),
        _ => return Err("Username cannot be empty!"),
    };
    let password = match payload.password.as_deref() {
        Some(pass) if !pass.is_empty() => pass.to_owned(),
        _ => return Err("Password cannot be empty!"),
    };
    Ok((username, password))
}

pub(crate) fn user_error_to_status(err: user::UserError) -> StatusCode {
    match err {
        user::UserError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// `POST /api/user/register` — create an account.
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<UserPayload>,
) -> Result<Json<ApiResult<UserView>>, StatusCode> {
    let (username, password) = match validate_user(&payload) {
        Ok(fields) => fields,
        Err(message) => return Ok(Json(ApiResult::fail(message))),
    };

    let result = user::register(&state.pool, &username, &password)
        .await
        .map_err(user_error_to_status)?;
    Ok(Json(result))
}

/// `POST /api/user/login` — verify credentials and open a session.
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(payload): Json<UserPayload>,
) -> Result<(CookieJar, Json<ApiResult<UserView>>), StatusCode> {
    let (username, password) = match validate_user(&payload) {
        Ok(fields) => fields,
        Err(message) => return Ok((jar, Json(ApiResult::fail(message)))),
    };

    let result = user::login(&state.pool, &username, &password)
        .await
        .map_err(user_error_to_status)?;

    // A session is opened only on a verified login; failures leave the
    // client's cookies untouched.
    let jar = if let Some(logged_in) = result.data.as_ref() {
        let token = session::create_session(&state.pool, logged_in.id)
            .await
            .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;
        let cookie = Cookie::build((COOKIE_NAME, token))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .secure(cookie_secure());
        jar.add(cookie)
    } else {
        jar
    };

    Ok((jar, Json(result)))
}

/// `GET /api/user/is-login` — report the session's user, if any.
/// Pure read; never mutates the session.
pub async fn is_login(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<Json<ApiResult<UserView>>, StatusCode> {
    let token = jar.get(COOKIE_NAME).map(Cookie::value).unwrap_or_default();
    if token.is_empty() {
        return Ok(Json(ApiResult::fail("")));
    }

    let found = session::validate_session(&state.pool, token)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    Ok(Json(match found {
        Some(logged_in) => ApiResult::ok("User is logged in!", logged_in),
        None => ApiResult::fail(""),
    }))
}

/// `GET /api/user/logout` — close the session and clear the cookie.
/// Always succeeds; logging out twice is safe.
pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
) -> (CookieJar, Json<ApiResult<()>>) {
    if let Some(cookie) = jar.get(COOKIE_NAME) {
        // Best-effort: a dead store must not turn logout into a failure.
        let _ = session::delete_session(&state.pool, cookie.value()).await;
    }

    let clear = Cookie::build((COOKIE_NAME, ""))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(cookie_secure())
        .max_age(Duration::ZERO);

    (jar.add(clear), Json(ApiResult::ok_empty("User logs out successfully!")))
}

#[cfg(test)]
#[path = "users_test.rs"]
mod tests;
