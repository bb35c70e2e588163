//! AdUser entity model and DTOs.
//!
//! An AdUser is a marketplace account record, not an authentication
//! identity. Responses embed the resolved location name rather than the
//! foreign key, matching the payload contract.

use adboard_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An `ad_users` row joined with its location name.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AdUser {
    pub id: DbId,
    pub first_name: String,
    pub last_name: Option<String>,
    pub username: String,
    pub password: String,
    pub role: String,
    pub age: i32,
    pub location_name: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new user. Inserted as supplied; the role enum is
/// enforced by the schema CHECK constraint only.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAdUser {
    pub first_name: String,
    pub last_name: Option<String>,
    pub username: String,
    pub password: String,
    /// Defaults to `member` if omitted.
    pub role: Option<String>,
    pub age: i32,
    /// Resolved get-or-create against `locations.name` when supplied.
    pub location_name: Option<String>,
}

/// DTO for updating a user. Full replacement; validated before persisting.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateAdUser {
    pub first_name: String,
    pub last_name: Option<String>,
    pub username: String,
    pub password: String,
    pub role: String,
    pub age: i32,
    pub location_name: Option<String>,
}
