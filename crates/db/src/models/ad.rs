//! Ad entity model and DTOs.

use adboard_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An `ads` row joined with its location name.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Ad {
    pub id: DbId,
    pub name: String,
    pub price: i64,
    pub description: Option<String>,
    pub logo: Option<String>,
    pub is_published: bool,
    pub author_id: Option<DbId>,
    pub location_name: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// An ad with its attached category names resolved, as served by the list
/// and detail endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct AdDetail {
    #[serde(flatten)]
    pub ad: Ad,
    pub categories: Vec<String>,
}

/// DTO for creating a new ad.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAd {
    pub name: String,
    pub price: i64,
    pub description: Option<String>,
    /// Defaults to false if omitted.
    pub is_published: Option<bool>,
    /// Must reference an existing user.
    pub author_id: DbId,
    /// Resolved get-or-create against `locations.name`.
    pub location_name: String,
    /// Category names; each is resolved get-or-create and attached.
    pub categories: Vec<String>,
}

/// DTO for updating an ad. Full replacement; the category set is replaced
/// with exactly the names listed here.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateAd {
    pub name: String,
    pub price: i64,
    pub description: Option<String>,
    pub is_published: bool,
    pub author_id: DbId,
    pub location_name: String,
    pub categories: Vec<String>,
}

/// Projection returned by the logo upload endpoint.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AdLogo {
    pub id: DbId,
    pub name: String,
    pub logo: Option<String>,
}
