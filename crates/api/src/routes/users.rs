//! Route definitions for the `/users` resource.

use axum::routing::{delete, get, patch, post};
use axum::Router;

use crate::handlers::users;
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
        .route("/", get(users::list))
        .route("/create", post(users::create))
        .route("/{id}", get(users::get_by_id))
        .route("/{id}/update", patch(users::update))
        .route("/{id}/delete", delete(users::remove))
}
