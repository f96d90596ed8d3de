//! Domain services used by the HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own business rules and persistence so route handlers
//! can stay focused on shape validation and cookie plumbing. Recoverable
//! failures travel inside the response envelope; store-level errors
//! escape as `sqlx::Error` for the route layer to surface.

pub mod link;
pub mod session;
pub mod user;
