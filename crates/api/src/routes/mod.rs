pub mod ads;
pub mod categories;
pub mod health;
pub mod locations;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the resource route tree.
///
/// Route hierarchy:
///
/// ```text
/// /ads                       list, create, get, update, delete
/// /ads/{id}/upload_image     set the logo from a multipart upload
/// /categories                list, create, get, update, delete
/// /users                     list, create, get, update, delete
/// /locations                 list, create, get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/ads", ads::router())
        .nest("/categories", categories::router())
        .nest("/users", users::router())
        .nest("/locations", locations::router())
}
