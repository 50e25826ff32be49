//! Check-in, seat update and lookup handlers.

use axum::Json;
use axum::extract::{Query, State};

use checkin_core::error::AppError;
use checkin_entity::{PoolStats, SignInfo};

use crate::dto::request::{QueryParams, SignParams, UpdateParams};
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/sign?id&site
///
/// The identity lookup happens before the engine takes the writer lock.
pub async fn sign(
    State(state): State<AppState>,
    Query(params): Query<SignParams>,
) -> Result<Json<ApiResponse<SignInfo>>, ApiError> {
    let id = params.id()?;
    let site = params.site()?;

    let identity = state
        .identity
        .resolve(id)
        .await?
        .ok_or_else(|| AppError::not_found("student id not found"))?;

    let info = state.engine.check_in(id, site, &identity).await?;
    Ok(Json(ApiResponse::ok(info)))
}

/// POST /api/update?id&seat&name&note
pub async fn update(
    State(state): State<AppState>,
    Query(params): Query<UpdateParams>,
) -> Result<Json<ApiResponse<SignInfo>>, ApiError> {
    let id = params.id()?;
    let seat = params.seat()?;

    let info = state
        .engine
        .update_assignment(id, seat, params.name(), params.note.clone())
        .await?;
    Ok(Json(ApiResponse::ok(info)))
}

/// GET /api/query?id | seat&site | username
pub async fn query(
    State(state): State<AppState>,
    Query(params): Query<QueryParams>,
) -> Result<Json<ApiResponse<SignInfo>>, ApiError> {
    let key = params.lookup_key()?;
    let info = state.engine.lookup(&key).await?;
    Ok(Json(ApiResponse::ok(info)))
}

/// GET /api/signs
pub async fn list_signs(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<SignInfo>>>, ApiError> {
    let signs = state.engine.list_signs().await?;
    Ok(Json(ApiResponse::ok(signs)))
}

/// GET /api/stats
pub async fn stats(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<PoolStats>>, ApiError> {
    let stats = state.engine.stats().await?;
    Ok(Json(ApiResponse::ok(stats)))
}
