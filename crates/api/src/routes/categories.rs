//! Route definitions for the `/categories` resource.

use axum::routing::{delete, get, patch, post};
use axum::Router;

use crate::handlers::categories;
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
        .route("/", get(categories::list))
        .route("/create", post(categories::create))
        .route("/{id}", get(categories::get_by_id))
        .route("/{id}/update", patch(categories::update))
        .route("/{id}/delete", delete(categories::remove))
}
