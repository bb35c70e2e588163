//! Handlers for the `/ads` resource.
//!
//! List and detail responses embed the author reference, the location
//! name, and the resolved category names. Create and update delegate to
//! the transactional repository methods so the multi-step write (author
//! resolution, location get-or-create, category attachment) is atomic.

use adboard_core::error::CoreError;
use adboard_core::pagination::paginate;
use adboard_core::types::DbId;
use adboard_core::validation::validate_ad_update;
use adboard_db::models::ad::{AdDetail, AdLogo, CreateAd, UpdateAd};
use adboard_db::repositories::AdRepo;
use axum::extract::{Multipart, Path, Query, State};
use axum::http::StatusCode;
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::query::AdListParams;
use crate::response::{PagedResponse, StatusResponse};
use crate::state::AppState;

/// GET /ads
///
/// One page of ads, price descending by default; `?sort=name` switches to
/// name descending.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<AdListParams>,
) -> AppResult<Json<PagedResponse<AdDetail>>> {
    let total = AdRepo::count(&state.pool).await?;
    let page = paginate(total, params.page, &state.config.page);
    let sort = params.sort.as_deref().unwrap_or("price");
    let items = AdRepo::list_page(&state.pool, sort, page.limit, page.offset).await?;

    Ok(Json(PagedResponse {
        items,
        num_pages: page.num_pages,
        total,
    }))
}

/// GET /ads/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<AdDetail>> {
    let ad = AdRepo::find_detail(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Ad", id }))?;
    Ok(Json(ad))
}

/// POST /ads/create
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateAd>,
) -> AppResult<(StatusCode, Json<AdDetail>)> {
    let ad = AdRepo::create(&state.pool, &input).await?;

    tracing::info!(
        ad_id = ad.ad.id,
        author_id = input.author_id,
        categories = input.categories.len(),
        "Ad created",
    );

    Ok((StatusCode::CREATED, Json(ad)))
}

/// PATCH /ads/{id}/update
///
/// Full-field replace; the category set is replaced with exactly the
/// names in the payload.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateAd>,
) -> AppResult<Json<AdDetail>> {
    let errors = validate_ad_update(&input.name, input.price, input.description.as_deref());
    if !errors.is_empty() {
        return Err(AppError::Core(CoreError::Validation(errors)));
    }

    let ad = AdRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Ad", id }))?;

    tracing::info!(ad_id = id, "Ad updated");

    Ok(Json(ad))
}

/// POST /ads/{id}/upload_image
///
/// Reads the multipart field `logo`, stores the file under the configured
/// upload directory, and sets only the logo column.
pub async fn upload_logo(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    mut multipart: Multipart,
) -> AppResult<Json<AdLogo>> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        if field.name() != Some("logo") {
            continue;
        }

        let filename = field.file_name().unwrap_or("logo").to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?;

        // Strip any path components from the client filename; store under
        // a fresh uuid with the original name as a suffix.
        let basename = filename.rsplit(['/', '\\']).next().unwrap_or("logo");
        let stored = format!("{}_{basename}", uuid::Uuid::new_v4());

        let dir = std::path::Path::new(&state.config.upload_dir).join("logos");
        tokio::fs::create_dir_all(&dir)
            .await
            .map_err(|e| AppError::InternalError(format!("Failed to create upload dir: {e}")))?;
        tokio::fs::write(dir.join(&stored), &bytes)
            .await
            .map_err(|e| AppError::InternalError(format!("Failed to store logo: {e}")))?;

        let logo_ref = format!("logos/{stored}");
        let ad = AdRepo::update_logo(&state.pool, id, &logo_ref)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound { entity: "Ad", id }))?;

        tracing::info!(ad_id = id, logo = %logo_ref, bytes = bytes.len(), "Ad logo updated");

        return Ok(Json(ad));
    }

    Err(AppError::BadRequest(
        "multipart field 'logo' is required".into(),
    ))
}

/// DELETE /ads/{id}/delete
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<StatusResponse>> {
    let deleted = AdRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound { entity: "Ad", id }));
    }

    tracing::info!(ad_id = id, "Ad deleted");

    Ok(Json(StatusResponse { status: "ok" }))
}
