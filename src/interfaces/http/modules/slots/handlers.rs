//! Slot grid HTTP handlers

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;

use crate::application::OccupancyService;
use crate::interfaces::http::common::{error_status, ApiResponse};

use super::dto::*;

/// Application state for slot grid handlers.
#[derive(Clone)]
pub struct SlotAppState {
    pub occupancy: Arc<OccupancyService>,
}

#[utoipa::path(
    get,
    path = "/api/v1/levels/{level_id}/grid",
    tag = "Slots",
    params(("level_id" = i32, Path, description = "Level ID")),
    responses(
        (status = 200, description = "Slot grid with derived occupancy", body = ApiResponse<GridDto>),
        (status = 404, description = "Level not found")
    )
)]
pub async fn level_grid(
    State(state): State<SlotAppState>,
    Path(level_id): Path<i32>,
) -> Result<Json<ApiResponse<GridDto>>, (StatusCode, Json<ApiResponse<GridDto>>)> {
    let (views, stats) = state
        .occupancy
        .level_grid(level_id, Utc::now())
        .await
        .map_err(|e| (error_status(&e), Json(ApiResponse::error(e.to_string()))))?;

    Ok(Json(ApiResponse::success(GridDto {
        slots: views.into_iter().map(SlotDto::from).collect(),
        stats: StatsDto::from(stats),
    })))
}
