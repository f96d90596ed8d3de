//! Jump-link routes — batch create, list, edit, soft delete.
//!
//! The boundary turns raw payloads into partial `Link` rows and hands the
//! whole batch to the service in one call. Absent payloads short-circuit
//! with a failure envelope before any service call.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::Deserialize;

use crate::envelope::ApiResult;
use crate::services::link::{self, Link, LinkList};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AddLinksBody {
    pub links: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
pub struct LinkEdit {
    pub id: i64,
    pub link: String,
}

#[derive(Debug, Deserialize)]
pub struct EditLinksBody {
    #[serde(rename = "poList")]
    pub edits: Option<Vec<LinkEdit>>,
}

#[derive(Debug, Deserialize)]
pub struct DeleteLinksQuery {
    #[serde(rename = "idList")]
    pub ids: Option<String>,
}

/// True when at least one digit appears anywhere in the string. This is
/// deliberately loose: it does not require every comma-separated token to
/// be numeric. Tokens that slip through fail later, at parse time.
pub(crate) fn contains_digit(raw: &str) -> bool {
    raw.chars().any(|c| c.is_ascii_digit())
}

pub(crate) fn links_from_urls(urls: Vec<String>) -> Vec<Link> {
    urls.into_iter()
        .map(|url| Link { id: None, link: Some(url), status: Some(1) })
        .collect()
}

pub(crate) fn links_from_edits(edits: Vec<LinkEdit>) -> Vec<Link> {
    edits
        .into_iter()
        .map(|edit| Link { id: Some(edit.id), link: Some(edit.link), status: None })
        .collect()
}

/// Parse a comma-separated id list into id-only links, preserving order.
pub(crate) fn links_from_id_list(raw: &str) -> Result<Vec<Link>, std::num::ParseIntError> {
    raw.split(',')
        .map(|token| {
            token
                .parse::<i64>()
                .map(|id| Link { id: Some(id), link: None, status: None })
        })
        .collect()
}

pub(crate) fn link_error_to_status(err: link::LinkError) -> StatusCode {
    match err {
        link::LinkError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// `POST /api/user/addLinks` — insert one active link per URL string.
pub async fn add_links(
    State(state): State<AppState>,
    Json(body): Json<Option<AddLinksBody>>,
) -> Result<Json<ApiResult<LinkList>>, StatusCode> {
    let Some(urls) = body.and_then(|b| b.links) else {
        return Ok(Json(ApiResult::fail("The input link is empty, please reenter it!")));
    };

    let result = link::insert_links(&state.pool, links_from_urls(urls))
        .await
        .map_err(link_error_to_status)?;
    Ok(Json(result))
}

/// `GET /api/user/queryLinks` — list all stored links.
pub async fn query_links(
    State(state): State<AppState>,
) -> Result<Json<ApiResult<LinkList>>, StatusCode> {
    let result = link::get_all_links(&state.pool)
        .await
        .map_err(link_error_to_status)?;
    Ok(Json(result))
}

/// `POST /api/user/editLinks` — rewrite link text by id.
pub async fn edit_links(
    State(state): State<AppState>,
    Json(body): Json<Option<EditLinksBody>>,
) -> Result<Json<ApiResult<LinkList>>, StatusCode> {
    let Some(edits) = body.and_then(|b| b.edits) else {
        return Ok(Json(ApiResult::fail("The input link is empty, please reenter it!")));
    };

    let result = link::update_links(&state.pool, links_from_edits(edits))
        .await
        .map_err(link_error_to_status)?;
    Ok(Json(result))
}

/// `POST /api/user/deleteLinks?idList=1,2,3` — soft-delete by id.
pub async fn delete_links(
    State(state): State<AppState>,
    Query(query): Query<DeleteLinksQuery>,
) -> Result<Json<ApiResult<LinkList>>, StatusCode> {
    let raw = query.ids.unwrap_or_default();
    if raw.is_empty() {
        return Ok(Json(ApiResult::fail("Please enter the link id that needs to be deleted")));
    }
    if !contains_digit(&raw) {
        return Ok(Json(ApiResult::fail("Please enter the correct link id")));
    }

    // A non-numeric token that slipped past the loose digit check is fatal
    // for the request, like any other unhandled failure.
    let links = links_from_id_list(&raw).map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    let result = link::delete_links(&state.pool, links)
        .await
        .map_err(link_error_to_status)?;
    Ok(Json(result))
}

#[cfg(test)]
#[path = "links_test.rs"]
mod tests;
