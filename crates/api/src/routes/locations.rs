//! Route definitions for the `/locations` resource.

use axum::routing::{delete, get, patch, post};
use axum::Router;

use crate::handlers::locations;
use crate::state::AppState;

/// ```text
/// GET    /             -> list
/// POST   /create       -> create
/// GET    /{id}         -> get_by_id
/// PATCH  /{id}/update  -> update
/// DELETE /{id}/delete  -> remove
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(locations::list))
        .route("/create", post(locations::create))
        .route("/{id}", get(locations::get_by_id))
        .route("/{id}/update", patch(locations::update))
        .route("/{id}/delete", delete(locations::remove))
}
