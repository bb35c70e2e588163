//! Handlers for the `/locations` resource.

use adboard_core::error::CoreError;
use adboard_core::pagination::paginate;
use adboard_core::types::DbId;
use adboard_core::validation::validate_location_update;
use adboard_db::models::location::{CreateLocation, Location, UpdateLocation};
use adboard_db::repositories::LocationRepo;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::query::PageParams;
use crate::response::{PagedResponse, StatusResponse};
use crate::state::AppState;

/// GET /locations
///
/// One page of locations, ascending by name.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> AppResult<Json<PagedResponse<Location>>> {
    let total = LocationRepo::count(&state.pool).await?;
    let page = paginate(total, params.page, &state.config.page);
    let items = LocationRepo::list_page(&state.pool, page.limit, page.offset).await?;

    Ok(Json(PagedResponse {
        items,
        num_pages: page.num_pages,
        total,
    }))
}

/// GET /locations/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Location>> {
    let location = LocationRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Location",
            id,
        }))?;
    Ok(Json(location))
}

/// POST /locations/create
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateLocation>,
) -> AppResult<(StatusCode, Json<Location>)> {
    let location = LocationRepo::create(&state.pool, &input).await?;

    tracing::info!(location_id = location.id, "Location created");

    Ok((StatusCode::CREATED, Json(location)))
}

/// PATCH /locations/{id}/update
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateLocation>,
) -> AppResult<Json<Location>> {
    let errors = validate_location_update(input.name.as_deref());
    if !errors.is_empty() {
        return Err(AppError::Core(CoreError::Validation(errors)));
    }

    let location = LocationRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Location",
            id,
        }))?;

    tracing::info!(location_id = id, "Location updated");

    Ok(Json(location))
}

/// DELETE /locations/{id}/delete
///
/// Referencing users and ads cascade with the row.
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<StatusResponse>> {
    let deleted = LocationRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Location",
            id,
        }));
    }

    tracing::info!(location_id = id, "Location deleted");

    Ok(Json(StatusResponse { status: "ok" }))
}
