//! Booking HTTP handlers

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::{NaiveDateTime, Utc};

use crate::application::{BookingService, CreateBooking, OccupancyService, PricingEngine};
use crate::domain::{
    BookingRepository, DomainError, RepositoryProvider, SlotRepository, UserRepository,
};
use crate::interfaces::http::common::{
    error_status, ApiResponse, PaginatedResponse, PaginationParams, ValidatedJson,
};

use super::dto::*;

/// Application state for booking handlers.
#[derive(Clone)]
pub struct BookingAppState {
    pub repos: Arc<dyn RepositoryProvider>,
    pub bookings: Arc<BookingService>,
    pub occupancy: Arc<OccupancyService>,
    pub pricing: Arc<PricingEngine>,
}

type HandlerResult<T> = Result<Json<ApiResponse<T>>, (StatusCode, Json<ApiResponse<T>>)>;

fn reject<T>(err: DomainError) -> (StatusCode, Json<ApiResponse<T>>) {
    (error_status(&err), Json(ApiResponse::error(err.to_string())))
}

#[utoipa::path(
    post,
    path = "/api/v1/bookings",
    tag = "Bookings",
    request_body = CreateBookingRequest,
    responses(
        (status = 201, description = "Booking created", body = ApiResponse<BookingDto>),
        (status = 400, description = "Malformed or past time window"),
        (status = 404, description = "Slot or user not found"),
        (status = 409, description = "Slot already booked for the window")
    )
)]
pub async fn create_booking(
    State(state): State<BookingAppState>,
    ValidatedJson(request): ValidatedJson<CreateBookingRequest>,
) -> Result<
    (StatusCode, Json<ApiResponse<BookingDto>>),
    (StatusCode, Json<ApiResponse<BookingDto>>),
> {
    // Parse the wall-clock start time supplied by the form layer
    let start = NaiveDateTime::parse_from_str(&request.start_time, "%Y-%m-%dT%H:%M")
        .map(|dt| dt.and_utc())
        .map_err(|e| {
            reject(DomainError::InvalidInterval(format!(
                "invalid start_time '{}': {}",
                request.start_time, e
            )))
        })?;

    let window = crate::domain::BookingWindow::from_start_and_hours(start, request.duration_hours)
        .map_err(reject)?;

    let slot = state
        .repos
        .slots()
        .find_by_number(&request.slot_number)
        .await
        .map_err(reject)?
        .ok_or_else(|| {
            reject(DomainError::NotFound {
                entity: "ParkingSlot",
                field: "slot_number",
                value: request.slot_number.clone(),
            })
        })?;

    // Quote the current rate from live occupancy; the engine snapshots it
    let occupancy = state.occupancy.system_occupancy(Utc::now()).await.map_err(reject)?;
    let hourly_rate = state.pricing.hourly_rate(occupancy);

    let booking = state
        .bookings
        .create_booking(CreateBooking {
            slot_id: slot.id,
            user_id: request.user_id,
            vehicle_number: request.vehicle_number,
            window,
            hourly_rate,
        })
        .await
        .map_err(reject)?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(BookingDto::from(booking))),
    ))
}

#[utoipa::path(
    post,
    path = "/api/v1/bookings/{booking_id}/cancel",
    tag = "Bookings",
    params(("booking_id" = i32, Path, description = "Booking ID")),
    request_body = CancelBookingRequest,
    responses(
        (status = 200, description = "Booking cancelled (idempotent)", body = ApiResponse<BookingDto>),
        (status = 403, description = "Actor is neither owner nor admin"),
        (status = 404, description = "Booking not found")
    )
)]
pub async fn cancel_booking(
    State(state): State<BookingAppState>,
    Path(booking_id): Path<i32>,
    Json(request): Json<CancelBookingRequest>,
) -> HandlerResult<BookingDto> {
    let booking = state
        .bookings
        .cancel_booking(booking_id, request.user_id)
        .await
        .map_err(reject)?;

    Ok(Json(ApiResponse::success(BookingDto::from(booking))))
}

#[utoipa::path(
    get,
    path = "/api/v1/bookings/{booking_id}",
    tag = "Bookings",
    params(
        ("booking_id" = i32, Path, description = "Booking ID"),
        ActorQuery
    ),
    responses(
        (status = 200, description = "Booking details", body = ApiResponse<BookingDto>),
        (status = 403, description = "Actor may not view this booking"),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_booking(
    State(state): State<BookingAppState>,
    Path(booking_id): Path<i32>,
    Query(actor): Query<ActorQuery>,
) -> HandlerResult<BookingDto> {
    let booking = state
        .bookings
        .get_booking_for(booking_id, actor.user_id)
        .await
        .map_err(reject)?;

    Ok(Json(ApiResponse::success(BookingDto::from(booking))))
}

#[utoipa::path(
    get,
    path = "/api/v1/users/{user_id}/bookings",
    tag = "Bookings",
    params(("user_id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "User's recent bookings", body = ApiResponse<Vec<BookingDto>>)
    )
)]
pub async fn user_bookings(
    State(state): State<BookingAppState>,
    Path(user_id): Path<i32>,
) -> HandlerResult<Vec<BookingDto>> {
    let bookings = state
        .bookings
        .bookings_for_user(user_id, 20)
        .await
        .map_err(reject)?;

    let dtos = bookings.into_iter().map(BookingDto::from).collect();
    Ok(Json(ApiResponse::success(dtos)))
}

#[utoipa::path(
    get,
    path = "/api/v1/bookings",
    tag = "Bookings",
    params(ActorQuery, PaginationParams),
    responses(
        (status = 200, description = "All bookings, paginated (admin only)",
         body = ApiResponse<PaginatedResponse<BookingDto>>),
        (status = 403, description = "Actor is not an admin")
    )
)]
pub async fn list_bookings(
    State(state): State<BookingAppState>,
    Query(actor): Query<ActorQuery>,
    Query(pagination): Query<PaginationParams>,
) -> HandlerResult<PaginatedResponse<BookingDto>> {
    let user = state
        .repos
        .users()
        .find_by_id(actor.user_id)
        .await
        .map_err(reject)?
        .ok_or_else(|| {
            reject(DomainError::NotFound {
                entity: "User",
                field: "id",
                value: actor.user_id.to_string(),
            })
        })?;

    if !user.is_admin {
        return Err(reject(DomainError::Unauthorized(format!(
            "user {} may not list all bookings",
            user.id
        ))));
    }

    let limit = pagination.limit.clamp(1, 100);
    let (bookings, total) = state
        .repos
        .bookings()
        .find_page(pagination.page, limit)
        .await
        .map_err(reject)?;

    let dtos: Vec<BookingDto> = bookings.into_iter().map(BookingDto::from).collect();
    Ok(Json(ApiResponse::success(PaginatedResponse::new(
        dtos,
        total,
        pagination.page.max(1),
        limit,
    ))))
}
