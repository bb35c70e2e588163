//! Location entity model and DTOs.

use adboard_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `locations` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Location {
    pub id: DbId,
    pub name: Option<String>,
    pub lat: f64,
    pub lng: f64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new location.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateLocation {
    pub name: Option<String>,
    pub lat: f64,
    pub lng: f64,
}

/// DTO for updating a location. Full replacement; all columns are written.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateLocation {
    pub name: Option<String>,
    pub lat: f64,
    pub lng: f64,
}
