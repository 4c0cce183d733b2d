//! Booking repository interface

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::model::Booking;
use super::window::BookingWindow;
use crate::domain::DomainResult;

#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Persist a new booking
    async fn save(&self, booking: Booking) -> DomainResult<()>;

    /// Find booking by ID
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Booking>>;

    /// Update an existing booking
    async fn update(&self, booking: Booking) -> DomainResult<()>;

    /// Non-cancelled bookings on a slot overlapping the window
    /// (half-open rule: `start < window.end AND end > window.start`)
    async fn find_overlapping(
        &self,
        slot_id: i32,
        window: &BookingWindow,
    ) -> DomainResult<Vec<Booking>>;

    /// Non-cancelled booking occupying the slot at `at`, if any
    async fn find_occupying(
        &self,
        slot_id: i32,
        at: DateTime<Utc>,
    ) -> DomainResult<Option<Booking>>;

    /// A user's bookings, most recent first
    async fn find_for_user(&self, user_id: i32, limit: u64) -> DomainResult<Vec<Booking>>;

    /// One page of all bookings (any status), most recent first, with total count
    async fn find_page(&self, page: u32, limit: u32) -> DomainResult<(Vec<Booking>, u64)>;

    /// Generate next booking ID
    async fn next_id(&self) -> i32;
}
