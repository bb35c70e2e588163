//! Route definitions for the `/ads` resource.

use axum::routing::{delete, get, patch, post};
use axum::Router;

use crate::handlers::ads;
use crate::state::AppState;

/// ```text
/// GET    /                   -> list (?page=, ?sort=price|name)
/// POST   /create             -> create
/// GET    /{id}               -> get_by_id
/// PATCH  /{id}/update        -> update
/// POST   /{id}/upload_image  -> upload_logo (multipart field `logo`)
/// DELETE /{id}/delete        -> remove
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(ads::list))
        .route("/create", post(ads::create))
        .route("/{id}", get(ads::get_by_id))
        .route("/{id}/update", patch(ads::update))
        .route("/{id}/upload_image", post(ads::upload_logo))
        .route("/{id}/delete", delete(ads::remove))
}
