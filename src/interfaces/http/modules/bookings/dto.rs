//! Booking DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::Booking;

/// Request to book a slot
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateBookingRequest {
    /// Slot number to book, e.g. "A_1"
    #[validate(length(min = 1, max = 20))]
    pub slot_number: String,
    /// Requesting user (identity verified upstream)
    pub user_id: i32,
    /// Vehicle registration plate
    #[validate(length(min = 1, max = 20))]
    pub vehicle_number: String,
    /// Start time in local wall-clock form: "YYYY-MM-DDTHH:MM"
    pub start_time: String,
    /// Duration in whole hours. Default: 2
    #[validate(range(min = 1, max = 24))]
    #[serde(default = "default_duration")]
    pub duration_hours: u32,
}

fn default_duration() -> u32 {
    2
}

/// Request to cancel a booking
#[derive(Debug, Deserialize, ToSchema)]
pub struct CancelBookingRequest {
    /// Acting user: the booking's owner or an admin
    pub user_id: i32,
}

/// Booking details in API responses
#[derive(Debug, Serialize, ToSchema)]
pub struct BookingDto {
    pub id: i32,
    pub slot_id: i32,
    pub user_id: i32,
    pub vehicle_number: String,
    pub start_time: String,
    pub end_time: String,
    pub duration_hours: f64,
    /// Hourly rate snapshot in minor currency units
    pub hourly_rate: i64,
    /// Total price snapshot in minor currency units
    pub total_price: i64,
    pub status: String,
    pub cancelled: bool,
    pub created_at: String,
}

impl From<Booking> for BookingDto {
    fn from(b: Booking) -> Self {
        Self {
            id: b.id,
            slot_id: b.slot_id,
            user_id: b.user_id,
            vehicle_number: b.vehicle_number,
            start_time: b.window.start().to_rfc3339(),
            end_time: b.window.end().to_rfc3339(),
            duration_hours: b.duration_hours,
            hourly_rate: b.hourly_rate,
            total_price: b.total_price,
            status: b.status.as_str().to_string(),
            cancelled: b.cancelled,
            created_at: b.created_at.to_rfc3339(),
        }
    }
}

/// Actor identity for queries that need an owner-or-admin check
#[derive(Debug, Deserialize, ToSchema, utoipa::IntoParams)]
pub struct ActorQuery {
    /// Acting user id
    pub user_id: i32,
}
