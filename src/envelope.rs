//! Uniform success/failure response envelope.
//!
//! DESIGN
//! ======
//! Every endpoint returns exactly one envelope at HTTP 200; failure is
//! signalled by the `success` flag and a human-readable message, never by
//! the HTTP status code, so clients always inspect the body. The only
//! exception is a store-level error escaping a handler, which the route
//! layer maps to a plain 500.
//!
//! Failure envelopes never carry a payload; the constructors enforce it.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResult<T> {
    pub success: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResult<T> {
    /// Success carrying the operation's payload.
    #[must_use]
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self { success: true, message: message.into(), data: Some(data) }
    }

    /// Success with no payload.
    #[must_use]
    pub fn ok_empty(message: impl Into<String>) -> Self {
        Self { success: true, message: message.into(), data: None }
    }

    /// Failure. Never carries a payload.
    #[must_use]
    pub fn fail(message: impl Into<String>) -> Self {
        Self { success: false, message: message.into(), data: None }
    }
}

#[cfg(test)]
#[path = "envelope_test.rs"]
mod tests;
