//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Generic page-number parameter (`?page=N`, 1-based).
///
/// Out-of-range values are clamped by `adboard_core::pagination::paginate`.
#[derive(Debug, Deserialize)]
pub struct PageParams {
    pub page: Option<i64>,
}

/// Query parameters for the ad list endpoint.
#[derive(Debug, Deserialize)]
pub struct AdListParams {
    pub page: Option<i64>,
    /// Sort field: `price` (default) or `name`, both descending.
    pub sort: Option<String>,
}
