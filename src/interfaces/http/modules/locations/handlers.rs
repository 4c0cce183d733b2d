//! Location hierarchy HTTP handlers

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;

use crate::application::OccupancyService;
use crate::interfaces::http::common::{error_status, ApiResponse};

use super::dto::*;

/// Application state for hierarchy handlers.
#[derive(Clone)]
pub struct LocationAppState {
    pub occupancy: Arc<OccupancyService>,
}

type HandlerResult<T> = Result<Json<ApiResponse<T>>, (StatusCode, Json<ApiResponse<T>>)>;

#[utoipa::path(
    get,
    path = "/api/v1/locations",
    tag = "Locations",
    responses(
        (status = 200, description = "All locations with availability", body = ApiResponse<Vec<LocationDto>>)
    )
)]
pub async fn list_locations(
    State(state): State<LocationAppState>,
) -> HandlerResult<Vec<LocationDto>> {
    let summaries = state
        .occupancy
        .location_summaries(Utc::now())
        .await
        .map_err(|e| (error_status(&e), Json(ApiResponse::error(e.to_string()))))?;

    let dtos = summaries.into_iter().map(LocationDto::from).collect();
    Ok(Json(ApiResponse::success(dtos)))
}

#[utoipa::path(
    get,
    path = "/api/v1/locations/{location_id}/lots",
    tag = "Locations",
    params(("location_id" = i32, Path, description = "Location ID")),
    responses(
        (status = 200, description = "Lots at the location", body = ApiResponse<Vec<LotDto>>),
        (status = 404, description = "Location not found")
    )
)]
pub async fn list_lots(
    State(state): State<LocationAppState>,
    Path(location_id): Path<i32>,
) -> HandlerResult<Vec<LotDto>> {
    let summaries = state
        .occupancy
        .lots_at_location(location_id, Utc::now())
        .await
        .map_err(|e| (error_status(&e), Json(ApiResponse::error(e.to_string()))))?;

    let dtos = summaries.into_iter().map(LotDto::from).collect();
    Ok(Json(ApiResponse::success(dtos)))
}

#[utoipa::path(
    get,
    path = "/api/v1/lots/{lot_id}/levels",
    tag = "Locations",
    params(("lot_id" = i32, Path, description = "Lot ID")),
    responses(
        (status = 200, description = "Levels in the lot", body = ApiResponse<Vec<LevelDto>>),
        (status = 404, description = "Lot not found")
    )
)]
pub async fn list_levels(
    State(state): State<LocationAppState>,
    Path(lot_id): Path<i32>,
) -> HandlerResult<Vec<LevelDto>> {
    let summary = state
        .occupancy
        .lot_summary(lot_id, Utc::now())
        .await
        .map_err(|e| (error_status(&e), Json(ApiResponse::error(e.to_string()))))?;

    let dtos = summary.levels.into_iter().map(LevelDto::from).collect();
    Ok(Json(ApiResponse::success(dtos)))
}
