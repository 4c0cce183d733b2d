//! Availability & booking engine
//!
//! Single authority for slot conflicts. Every booking is created through
//! [`BookingService::create_booking`] and cancelled through
//! [`BookingService::cancel_booking`]; no other path may construct or flip a
//! reservation. Availability and occupancy are derived from non-cancelled
//! bookings only; there is no stored occupancy flag to drift out of sync.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::domain::{
    Booking, BookingRecord, BookingRepository, BookingWindow, DomainError, DomainResult,
    HistoryRepository, RepositoryProvider, SlotRepository, UserRepository,
};

/// Request to create a booking.
#[derive(Debug, Clone)]
pub struct CreateBooking {
    pub slot_id: i32,
    pub user_id: i32,
    pub vehicle_number: String,
    pub window: BookingWindow,
    /// Hourly rate quoted by the pricing collaborator, snapshotted as-is
    pub hourly_rate: i64,
}

/// Service for booking operations
pub struct BookingService {
    repos: Arc<dyn RepositoryProvider>,
    /// Per-slot mutexes serializing check-then-insert for the same slot
    slot_locks: DashMap<i32, Arc<Mutex<()>>>,
}

impl BookingService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self {
            repos,
            slot_locks: DashMap::new(),
        }
    }

    fn slot_lock(&self, slot_id: i32) -> Arc<Mutex<()>> {
        self.slot_locks
            .entry(slot_id)
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }

    /// Whether the slot is free for the whole window.
    ///
    /// False iff some non-cancelled booking on the slot overlaps the window
    /// under the half-open rule (`s < end AND e > start`).
    pub async fn is_available(&self, slot_id: i32, window: &BookingWindow) -> DomainResult<bool> {
        let conflicts = self.repos.bookings().find_overlapping(slot_id, window).await?;
        Ok(conflicts.is_empty())
    }

    /// Whether the slot is occupied at `at`, derived from bookings.
    pub async fn current_occupancy(&self, slot_id: i32, at: DateTime<Utc>) -> DomainResult<bool> {
        let occupying = self.repos.bookings().find_occupying(slot_id, at).await?;
        Ok(occupying.is_some())
    }

    /// Create a booking after validating policy and availability.
    ///
    /// The availability check and the insert run under the slot's lock, so
    /// two concurrent requests for overlapping windows on the same slot
    /// resolve to exactly one success.
    pub async fn create_booking(&self, request: CreateBooking) -> DomainResult<Booking> {
        let user = self
            .repos
            .users()
            .find_by_id(request.user_id)
            .await?
            .ok_or(DomainError::NotFound {
                entity: "User",
                field: "id",
                value: request.user_id.to_string(),
            })?;

        let slot = self
            .repos
            .slots()
            .find_by_id(request.slot_id)
            .await?
            .ok_or(DomainError::NotFound {
                entity: "ParkingSlot",
                field: "id",
                value: request.slot_id.to_string(),
            })?;

        // New-booking policy: no past start times. Seed/backfill paths write
        // through repositories directly and are not subject to this check.
        let now = Utc::now();
        if request.window.start() < now {
            return Err(DomainError::PastStartTime);
        }

        let lock = self.slot_lock(slot.id);
        let _guard = lock.lock().await;

        if !self.is_available(slot.id, &request.window).await? {
            debug!(
                slot_id = slot.id,
                "Booking rejected: window overlaps existing reservation"
            );
            return Err(DomainError::SlotUnavailable { slot_id: slot.id });
        }

        let id = self.repos.bookings().next_id().await;
        let booking = Booking::new(
            id,
            slot.id,
            user.id,
            request.vehicle_number,
            request.window,
            request.hourly_rate,
        );
        self.repos.bookings().save(booking.clone()).await?;

        self.repos.users().increment_booking_count(user.id).await?;

        let record = BookingRecord::for_new_booking(
            slot.slot_number.clone(),
            user.id,
            request.window.start(),
            booking.duration_hours,
            now,
        );
        self.repos.history().append(record).await?;

        info!(
            booking_id = booking.id,
            slot_id = slot.id,
            user_id = user.id,
            total_price = booking.total_price,
            "Booking created"
        );

        Ok(booking)
    }

    /// Cancel a booking on behalf of `actor_id` (owner or admin).
    ///
    /// Flag and status flip in one update. Cancelling an already-cancelled
    /// booking is an idempotent no-op success with no further side effects.
    pub async fn cancel_booking(&self, booking_id: i32, actor_id: i32) -> DomainResult<Booking> {
        let mut booking = self
            .repos
            .bookings()
            .find_by_id(booking_id)
            .await?
            .ok_or(DomainError::NotFound {
                entity: "Booking",
                field: "id",
                value: booking_id.to_string(),
            })?;

        let actor = self
            .repos
            .users()
            .find_by_id(actor_id)
            .await?
            .ok_or(DomainError::NotFound {
                entity: "User",
                field: "id",
                value: actor_id.to_string(),
            })?;

        if !actor.may_cancel_for(booking.user_id) {
            return Err(DomainError::Unauthorized(format!(
                "user {} may not cancel booking {}",
                actor_id, booking_id
            )));
        }

        if booking.cancelled {
            debug!(booking_id, "Booking already cancelled, treating as no-op");
            return Ok(booking);
        }

        booking.cancel();
        self.repos.bookings().update(booking.clone()).await?;

        info!(booking_id, actor_id, "Booking cancelled");

        Ok(booking)
    }

    /// Booking lookup with owner-or-admin visibility check.
    pub async fn get_booking_for(&self, booking_id: i32, actor_id: i32) -> DomainResult<Booking> {
        let booking = self
            .repos
            .bookings()
            .find_by_id(booking_id)
            .await?
            .ok_or(DomainError::NotFound {
                entity: "Booking",
                field: "id",
                value: booking_id.to_string(),
            })?;

        let actor = self
            .repos
            .users()
            .find_by_id(actor_id)
            .await?
            .ok_or(DomainError::NotFound {
                entity: "User",
                field: "id",
                value: actor_id.to_string(),
            })?;

        if !actor.may_cancel_for(booking.user_id) {
            return Err(DomainError::Unauthorized(format!(
                "user {} may not view booking {}",
                actor_id, booking_id
            )));
        }

        Ok(booking)
    }

    /// A user's recent bookings, newest first.
    pub async fn bookings_for_user(&self, user_id: i32, limit: u64) -> DomainResult<Vec<Booking>> {
        self.repos.bookings().find_for_user(user_id, limit).await
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::location::{LevelRepository, LotRepository};
    use crate::domain::{BookingStatus, ParkingLevel, ParkingLot, ParkingSlot, User};
    use crate::infrastructure::storage::InMemoryRepositories;
    use chrono::Duration;

    const OWNER: i32 = 1;
    const ADMIN: i32 = 2;
    const STRANGER: i32 = 3;
    const SLOT: i32 = 10;
    const RATE: i64 = 5000;

    async fn setup() -> (Arc<InMemoryRepositories>, BookingService) {
        let repos = Arc::new(InMemoryRepositories::new());

        repos.users().save(User::new(OWNER, "owner@example.com", "Owner")).await.unwrap();
        let mut admin = User::new(ADMIN, "admin@example.com", "Admin");
        admin.is_admin = true;
        repos.users().save(admin).await.unwrap();
        repos.users().save(User::new(STRANGER, "other@example.com", "Other")).await.unwrap();

        repos.lots().save(ParkingLot::new(1, 1, "North Lot")).await.unwrap();
        repos.levels().save(ParkingLevel::new(1, 1, "A", 0, 2, 2)).await.unwrap();
        repos.slots().save(ParkingSlot::new(SLOT, 1, "A_1", 0, 0)).await.unwrap();
        repos.slots().save(ParkingSlot::new(SLOT + 1, 1, "A_2", 0, 1)).await.unwrap();

        let service = BookingService::new(repos.clone() as Arc<dyn RepositoryProvider>);
        (repos, service)
    }

    /// Window `hours_from_now .. hours_from_now + len` relative to now,
    /// snapped away from "now" so the past-start policy never interferes.
    fn future_window(hours_from_now: i64, len: i64) -> BookingWindow {
        let start = Utc::now() + Duration::hours(hours_from_now);
        BookingWindow::new(start, start + Duration::hours(len)).unwrap()
    }

    fn request(window: BookingWindow) -> CreateBooking {
        CreateBooking {
            slot_id: SLOT,
            user_id: OWNER,
            vehicle_number: "KA-01-AB-1234".to_string(),
            window,
            hourly_rate: RATE,
        }
    }

    #[tokio::test]
    async fn empty_slot_is_available() {
        let (_, service) = setup().await;
        assert!(service.is_available(SLOT, &future_window(1, 2)).await.unwrap());
    }

    #[tokio::test]
    async fn create_booking_succeeds_and_snapshots_price() {
        let (_, service) = setup().await;
        let booking = service.create_booking(request(future_window(1, 2))).await.unwrap();

        assert_eq!(booking.status, BookingStatus::Active);
        assert!(!booking.cancelled);
        assert_eq!(booking.duration_hours, 2.0);
        assert_eq!(booking.total_price, RATE * 2);
    }

    #[tokio::test]
    async fn overlapping_request_is_rejected() {
        let (_, service) = setup().await;
        // existing [1h,3h), request [2h,4h) overlaps by one hour
        service.create_booking(request(future_window(1, 2))).await.unwrap();

        let err = service
            .create_booking(request(future_window(2, 2)))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::SlotUnavailable { slot_id: SLOT }));
    }

    #[tokio::test]
    async fn contained_window_is_rejected() {
        let (_, service) = setup().await;
        service.create_booking(request(future_window(1, 4))).await.unwrap();

        let err = service
            .create_booking(request(future_window(2, 1)))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::SlotUnavailable { .. }));
    }

    #[tokio::test]
    async fn back_to_back_bookings_both_succeed() {
        let (_, service) = setup().await;
        // [1h,3h) then [3h,5h): adjacency is legal
        service.create_booking(request(future_window(1, 2))).await.unwrap();
        service.create_booking(request(future_window(3, 2))).await.unwrap();
    }

    #[tokio::test]
    async fn adjacent_before_succeeds_partial_overlap_fails() {
        let (_, service) = setup().await;
        // existing [2h,4h)
        service.create_booking(request(future_window(2, 2))).await.unwrap();

        // [1h,2h) ends exactly at the existing start: fine
        service.create_booking(request(future_window(1, 1))).await.unwrap();

        // [1h,3h) reaches one hour into the existing booking: conflict
        let err = service
            .create_booking(request(future_window(1, 2)))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::SlotUnavailable { .. }));
    }

    #[tokio::test]
    async fn other_slot_is_unaffected() {
        let (_, service) = setup().await;
        service.create_booking(request(future_window(1, 2))).await.unwrap();

        let mut req = request(future_window(1, 2));
        req.slot_id = SLOT + 1;
        service.create_booking(req).await.unwrap();
    }

    #[tokio::test]
    async fn past_start_time_is_rejected() {
        let (_, service) = setup().await;
        let start = Utc::now() - Duration::hours(1);
        let window = BookingWindow::new(start, start + Duration::hours(2)).unwrap();

        let err = service.create_booking(request(window)).await.unwrap_err();
        assert!(matches!(err, DomainError::PastStartTime));
    }

    #[tokio::test]
    async fn unknown_slot_is_not_found() {
        let (_, service) = setup().await;
        let mut req = request(future_window(1, 2));
        req.slot_id = 999;

        let err = service.create_booking(req).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { entity: "ParkingSlot", .. }));
    }

    #[tokio::test]
    async fn create_increments_booking_count_and_appends_history() {
        let (repos, service) = setup().await;
        service.create_booking(request(future_window(1, 2))).await.unwrap();

        let user = repos.users().find_by_id(OWNER).await.unwrap().unwrap();
        assert_eq!(user.booking_count, 1);

        let feed = repos.history().find_all().await.unwrap();
        assert_eq!(feed.len(), 1);
        assert_eq!(feed[0].slot_id, "A_1");
        assert_eq!(feed[0].duration_hours, 2.0);
        assert!(feed[0].lead_time_hours > 0.9 && feed[0].lead_time_hours < 1.1);
    }

    #[tokio::test]
    async fn failed_create_has_no_side_effects() {
        let (repos, service) = setup().await;
        service.create_booking(request(future_window(1, 2))).await.unwrap();
        let _ = service.create_booking(request(future_window(1, 2))).await.unwrap_err();

        let user = repos.users().find_by_id(OWNER).await.unwrap().unwrap();
        assert_eq!(user.booking_count, 1);
        assert_eq!(repos.history().find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn cancellation_frees_the_window() {
        let (_, service) = setup().await;
        let booking = service.create_booking(request(future_window(1, 2))).await.unwrap();

        service.cancel_booking(booking.id, OWNER).await.unwrap();

        // a window inside the cancelled one is bookable again
        let start = booking.window.start() + Duration::minutes(30);
        let inner = BookingWindow::new(start, start + Duration::hours(1)).unwrap();
        service.create_booking(request(inner)).await.unwrap();
    }

    #[tokio::test]
    async fn cancel_sets_flag_and_status_together() {
        let (repos, service) = setup().await;
        let booking = service.create_booking(request(future_window(1, 2))).await.unwrap();

        let cancelled = service.cancel_booking(booking.id, OWNER).await.unwrap();
        assert!(cancelled.cancelled);
        assert_eq!(cancelled.status, BookingStatus::Cancelled);

        let stored = repos.bookings().find_by_id(booking.id).await.unwrap().unwrap();
        assert!(stored.cancelled);
        assert_eq!(stored.status, BookingStatus::Cancelled);
    }

    #[tokio::test]
    async fn cancel_is_idempotent_without_double_side_effects() {
        let (repos, service) = setup().await;
        let booking = service.create_booking(request(future_window(1, 2))).await.unwrap();

        service.cancel_booking(booking.id, OWNER).await.unwrap();
        let count_after_first = repos.users().find_by_id(OWNER).await.unwrap().unwrap().booking_count;
        let updated_after_first = repos
            .bookings()
            .find_by_id(booking.id)
            .await
            .unwrap()
            .unwrap()
            .updated_at;

        // second cancel succeeds and changes nothing
        let again = service.cancel_booking(booking.id, OWNER).await.unwrap();
        assert!(again.cancelled);
        assert_eq!(
            repos.users().find_by_id(OWNER).await.unwrap().unwrap().booking_count,
            count_after_first
        );
        assert_eq!(
            repos.bookings().find_by_id(booking.id).await.unwrap().unwrap().updated_at,
            updated_after_first
        );
    }

    #[tokio::test]
    async fn stranger_may_not_cancel() {
        let (_, service) = setup().await;
        let booking = service.create_booking(request(future_window(1, 2))).await.unwrap();

        let err = service.cancel_booking(booking.id, STRANGER).await.unwrap_err();
        assert!(matches!(err, DomainError::Unauthorized(_)));
    }

    #[tokio::test]
    async fn admin_may_cancel_any_booking() {
        let (_, service) = setup().await;
        let booking = service.create_booking(request(future_window(1, 2))).await.unwrap();
        service.cancel_booking(booking.id, ADMIN).await.unwrap();
    }

    #[tokio::test]
    async fn cancel_unknown_booking_is_not_found() {
        let (_, service) = setup().await;
        let err = service.cancel_booking(12345, OWNER).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { entity: "Booking", .. }));
    }

    #[tokio::test]
    async fn occupancy_is_derived_from_bookings() {
        let (_, service) = setup().await;
        let booking = service.create_booking(request(future_window(1, 2))).await.unwrap();

        let inside = booking.window.start() + Duration::minutes(30);
        assert!(service.current_occupancy(SLOT, inside).await.unwrap());

        // end is exclusive: free the very instant the window closes
        assert!(!service.current_occupancy(SLOT, booking.window.end()).await.unwrap());
        assert!(!service
            .current_occupancy(SLOT, booking.window.start() - Duration::seconds(1))
            .await
            .unwrap());
    }

    #[tokio::test]
    async fn cancelled_booking_stops_occupying() {
        let (_, service) = setup().await;
        let booking = service.create_booking(request(future_window(1, 2))).await.unwrap();
        let inside = booking.window.start() + Duration::minutes(30);

        assert!(service.current_occupancy(SLOT, inside).await.unwrap());
        service.cancel_booking(booking.id, OWNER).await.unwrap();
        assert!(!service.current_occupancy(SLOT, inside).await.unwrap());
    }

    #[tokio::test]
    async fn price_snapshot_survives_pricing_changes() {
        let (repos, service) = setup().await;
        let booking = service.create_booking(request(future_window(1, 2))).await.unwrap();
        assert_eq!(booking.total_price, RATE * 2);

        // a later booking at a different rate does not touch the stored one
        let mut req = request(future_window(5, 2));
        req.hourly_rate = RATE * 3;
        service.create_booking(req).await.unwrap();

        let stored = repos.bookings().find_by_id(booking.id).await.unwrap().unwrap();
        assert_eq!(stored.hourly_rate, RATE);
        assert_eq!(stored.total_price, RATE * 2);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_overlapping_creates_yield_one_success() {
        let (_, service) = setup().await;
        let service = Arc::new(service);
        let window = future_window(1, 2);

        let a = {
            let service = service.clone();
            let req = request(window);
            tokio::spawn(async move { service.create_booking(req).await })
        };
        let b = {
            let service = service.clone();
            let req = request(window);
            tokio::spawn(async move { service.create_booking(req).await })
        };

        let (a, b) = (a.await.unwrap(), b.await.unwrap());
        let successes = [&a, &b].iter().filter(|r| r.is_ok()).count();
        assert_eq!(successes, 1);

        let failure = if a.is_err() { a.unwrap_err() } else { b.unwrap_err() };
        assert!(matches!(failure, DomainError::SlotUnavailable { .. }));
    }

    #[tokio::test]
    async fn get_booking_enforces_visibility() {
        let (_, service) = setup().await;
        let booking = service.create_booking(request(future_window(1, 2))).await.unwrap();

        service.get_booking_for(booking.id, OWNER).await.unwrap();
        service.get_booking_for(booking.id, ADMIN).await.unwrap();
        let err = service.get_booking_for(booking.id, STRANGER).await.unwrap_err();
        assert!(matches!(err, DomainError::Unauthorized(_)));
    }
}
