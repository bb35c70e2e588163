//! Handlers for the `/categories` resource.

use adboard_core::error::CoreError;
use adboard_core::pagination::paginate;
use adboard_core::types::DbId;
use adboard_core::validation::validate_category_update;
use adboard_db::models::category::{Category, CreateCategory, UpdateCategory};
use adboard_db::repositories::CategoryRepo;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::query::PageParams;
use crate::response::{PagedResponse, StatusResponse};
use crate::state::AppState;

/// GET /categories
///
/// One page of categories, ascending by name.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> AppResult<Json<PagedResponse<Category>>> {
    let total = CategoryRepo::count(&state.pool).await?;
    let page = paginate(total, params.page, &state.config.page);
    let items = CategoryRepo::list_page(&state.pool, page.limit, page.offset).await?;

    Ok(Json(PagedResponse {
        items,
        num_pages: page.num_pages,
        total,
    }))
}

/// GET /categories/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Category>> {
    let category = CategoryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Category",
            id,
        }))?;
    Ok(Json(category))
}

/// POST /categories/create
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateCategory>,
) -> AppResult<(StatusCode, Json<Category>)> {
    let category = CategoryRepo::create(&state.pool, &input).await?;

    tracing::info!(category_id = category.id, "Category created");

    Ok((StatusCode::CREATED, Json(category)))
}

/// PATCH /categories/{id}/update
///
/// Full-field replace. Validates before persisting; a failed validation
/// answers 422 and leaves the stored row untouched.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCategory>,
) -> AppResult<Json<Category>> {
    let errors = validate_category_update(&input.name);
    if !errors.is_empty() {
        return Err(AppError::Core(CoreError::Validation(errors)));
    }

    let category = CategoryRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Category",
            id,
        }))?;

    tracing::info!(category_id = id, "Category updated");

    Ok(Json(category))
}

/// DELETE /categories/{id}/delete
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<StatusResponse>> {
    let deleted = CategoryRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Category",
            id,
        }));
    }

    tracing::info!(category_id = id, "Category deleted");

    Ok(Json(StatusResponse { status: "ok" }))
}
