//! Pricing HTTP handlers

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;

use crate::application::{OccupancyService, PricingEngine};
use crate::interfaces::http::common::{error_status, ApiResponse};

use super::dto::*;

/// Application state for pricing handlers.
#[derive(Clone)]
pub struct PricingAppState {
    pub occupancy: Arc<OccupancyService>,
    pub pricing: Arc<PricingEngine>,
}

#[utoipa::path(
    get,
    path = "/api/v1/pricing/quote",
    tag = "Pricing",
    params(QuoteQuery),
    responses(
        (status = 200, description = "Current quote from live occupancy", body = ApiResponse<QuoteDto>)
    )
)]
pub async fn price_quote(
    State(state): State<PricingAppState>,
    Query(query): Query<QuoteQuery>,
) -> Result<Json<ApiResponse<QuoteDto>>, (StatusCode, Json<ApiResponse<QuoteDto>>)> {
    let occupancy = state
        .occupancy
        .system_occupancy(Utc::now())
        .await
        .map_err(|e| (error_status(&e), Json(ApiResponse::error(e.to_string()))))?;

    let hours = query.hours.clamp(1, 24);
    let quote = state.pricing.quote(occupancy, hours);

    Ok(Json(ApiResponse::success(QuoteDto::from(quote))))
}
