//! Handlers for the `/users` resource.

use adboard_core::error::CoreError;
use adboard_core::pagination::paginate;
use adboard_core::types::DbId;
use adboard_core::validation::validate_ad_user_update;
use adboard_db::models::ad_user::{AdUser, CreateAdUser, UpdateAdUser};
use adboard_db::repositories::AdUserRepo;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::query::PageParams;
use crate::response::{PagedResponse, StatusResponse};
use crate::state::AppState;

/// GET /users
///
/// One page of users, ascending by username.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> AppResult<Json<PagedResponse<AdUser>>> {
    let total = AdUserRepo::count(&state.pool).await?;
    let page = paginate(total, params.page, &state.config.page);
    let items = AdUserRepo::list_page(&state.pool, page.limit, page.offset).await?;

    Ok(Json(PagedResponse {
        items,
        num_pages: page.num_pages,
        total,
    }))
}

/// GET /users/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<AdUser>> {
    let user = AdUserRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "AdUser",
            id,
        }))?;
    Ok(Json(user))
}

/// POST /users/create
///
/// Inserts the supplied field map directly; the role enum is enforced by
/// the schema CHECK constraint only.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateAdUser>,
) -> AppResult<(StatusCode, Json<AdUser>)> {
    let user = AdUserRepo::create(&state.pool, &input).await?;

    tracing::info!(user_id = user.id, "User created");

    Ok((StatusCode::CREATED, Json(user)))
}

/// PATCH /users/{id}/update
///
/// Full-field replace with validation (lengths, role enum, age).
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateAdUser>,
) -> AppResult<Json<AdUser>> {
    let errors = validate_ad_user_update(
        &input.first_name,
        input.last_name.as_deref(),
        &input.username,
        &input.password,
        &input.role,
        input.age,
    );
    if !errors.is_empty() {
        return Err(AppError::Core(CoreError::Validation(errors)));
    }

    let user = AdUserRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "AdUser",
            id,
        }))?;

    tracing::info!(user_id = id, "User updated");

    Ok(Json(user))
}

/// DELETE /users/{id}/delete
///
/// Authored ads cascade with the row.
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<StatusResponse>> {
    let deleted = AdUserRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "AdUser",
            id,
        }));
    }

    tracing::info!(user_id = id, "User deleted");

    Ok(Json(StatusResponse { status: "ok" }))
}
