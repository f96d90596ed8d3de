//! Router assembly.
//!
//! Every endpoint lives under the common `/api/user` prefix; the two
//! slices (accounts and jump links) share the router, CORS layer, and
//! request tracing. `/healthz` is the only route outside the prefix.

pub mod links;
pub mod users;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the application router.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/user/register", post(users::register))
        .route("/api/user/login", post(users::login))
        .route("/api/user/is-login", get(users::is_login))
        .route("/api/user/logout", get(users::logout))
        .route("/api/user/addLinks", post(links::add_links))
        .route("/api/user/queryLinks", get(links::query_links))
        .route("/api/user/editLinks", post(links::edit_links))
        .route("/api/user/deleteLinks", post(links::delete_links))
        .route("/healthz", get(healthz))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
