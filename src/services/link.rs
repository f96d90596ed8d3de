//! Jump-link service — batch insert, list, edit, soft delete.
//!
//! ERROR HANDLING
//! ==============
//! Empty input batches fail inside the envelope before any statement is
//! issued. Non-empty batches run as sequential per-row statements with no
//! transaction: batches are not atomic, and a mid-batch store failure
//! leaves the earlier rows applied. Callers that need atomicity do not
//! exist today; DESIGN.md records the trade-off.

use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use tracing::info;

use crate::envelope::ApiResult;

#[derive(Debug, thiserror::Error)]
pub enum LinkError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Jump-link row. Fields are optional because operations build partial
/// rows: an insert has no id yet, a delete carries only an id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<i32>,
}

/// List-view wrapping the links touched by an operation, in input order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkList {
    pub links: Vec<Link>,
}

/// Insert every link with `status` forced to 1, one row at a time.
/// The returned list echoes the input; store-assigned ids are not read
/// back.
///
/// # Errors
///
/// Returns a database error if any insert fails.
pub async fn insert_links(pool: &PgPool, mut links: Vec<Link>) -> Result<ApiResult<LinkList>, LinkError> {
    if links.is_empty() {
        return Ok(ApiResult::fail("Link cannot be empty!"));
    }

    for link in &mut links {
        link.status = Some(1);
        sqlx::query("INSERT INTO links (link, status) VALUES ($1, 1)")
            .bind(&link.link)
            .execute(pool)
            .await?;
    }

    info!(count = links.len(), "links inserted");
    Ok(ApiResult::ok("Jump link inserted successfully!", LinkList { links }))
}

/// List every stored link, oldest first. No failure path short of a
/// store error.
///
/// # Errors
///
/// Returns a database error if the query fails.
pub async fn get_all_links(pool: &PgPool) -> Result<ApiResult<LinkList>, LinkError> {
    let rows = sqlx::query_as::<_, (i64, String, i32)>("SELECT id, link, status FROM links ORDER BY id")
        .fetch_all(pool)
        .await?;

    let links = rows
        .into_iter()
        .map(|(id, link, status)| Link { id: Some(id), link: Some(link), status: Some(status) })
        .collect();

    Ok(ApiResult::ok("Search successful!", LinkList { links }))
}

/// Rewrite the link text of every row by id. `status` is left untouched.
///
/// # Errors
///
/// Returns a database error if any update fails.
pub async fn update_links(pool: &PgPool, links: Vec<Link>) -> Result<ApiResult<LinkList>, LinkError> {
    if links.is_empty() {
        return Ok(ApiResult::fail("Input can not be empty!"));
    }

    for link in &links {
        sqlx::query("UPDATE links SET link = $2 WHERE id = $1")
            .bind(link.id)
            .bind(&link.link)
            .execute(pool)
            .await?;
    }

    info!(count = links.len(), "links updated");
    Ok(ApiResult::ok("Update completed!", LinkList { links }))
}

/// Soft-delete every row by id: `status` drops to 0, the text stays and
/// the row is kept. There is no way back to active.
///
/// # Errors
///
/// Returns a database error if any update fails.
pub async fn delete_links(pool: &PgPool, mut links: Vec<Link>) -> Result<ApiResult<LinkList>, LinkError> {
    if links.is_empty() {
        return Ok(ApiResult::fail("Input can not be empty!"));
    }

    for link in &mut links {
        link.status = Some(0);
        sqlx::query("UPDATE links SET status = 0 WHERE id = $1")
            .bind(link.id)
            .execute(pool)
            .await?;
    }

    info!(count = links.len(), "links soft-deleted");
    Ok(ApiResult::ok("Delete completed!", LinkList { links }))
}

#[cfg(test)]
#[path = "link_test.rs"]
mod tests;
