//! Shared response types for API handlers.
//!
//! Typed structs instead of ad-hoc `serde_json::json!` blocks, so response
//! shapes are checked at compile time and stay consistent across resources.

use serde::Serialize;

/// Standard list-endpoint envelope: one page of items plus totals.
#[derive(Debug, Serialize)]
pub struct PagedResponse<T: Serialize> {
    pub items: Vec<T>,
    pub num_pages: i64,
    pub total: i64,
}

/// Simple `{ "status": "ok" }` acknowledgment, used by the root probe and
/// the delete endpoints.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
}
