//! Booking domain entity

use chrono::{DateTime, Utc};

use super::window::BookingWindow;

/// Booking status
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingStatus {
    /// Booking holds its slot for the reserved window
    Active,
    /// Window has passed and the booking was honoured
    Completed,
    /// Booking cancelled by the owner or an admin
    Cancelled,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "active" => Self::Active,
            "completed" => Self::Completed,
            _ => Self::Cancelled,
        }
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parking slot booking
///
/// `cancelled` and `status` move together: `cancelled == true` iff
/// `status == Cancelled`. Cancellation is terminal. Bookings are never
/// deleted, only flagged, so the history feed stays complete.
#[derive(Debug, Clone)]
pub struct Booking {
    /// Unique booking ID
    pub id: i32,
    /// Slot being reserved
    pub slot_id: i32,
    /// Requesting user
    pub user_id: i32,
    /// Vehicle registration plate
    pub vehicle_number: String,
    /// Reserved half-open window
    pub window: BookingWindow,
    /// Duration derived from the window
    pub duration_hours: f64,
    /// Hourly rate snapshot at creation time (minor currency units)
    pub hourly_rate: i64,
    /// Total price snapshot, never recomputed retroactively
    pub total_price: i64,
    /// Current status
    pub status: BookingStatus,
    /// Cancellation flag, kept in lockstep with `status`
    pub cancelled: bool,
    /// When the booking was created
    pub created_at: DateTime<Utc>,
    /// Last state change
    pub updated_at: DateTime<Utc>,
}

impl Booking {
    /// Price for a window at the given hourly rate, in minor units.
    ///
    /// Exact for whole-hour windows; fractional hours round half-up.
    pub fn price_for(hourly_rate: i64, window: &BookingWindow) -> i64 {
        (hourly_rate as f64 * window.duration_hours()).round() as i64
    }

    pub fn new(
        id: i32,
        slot_id: i32,
        user_id: i32,
        vehicle_number: impl Into<String>,
        window: BookingWindow,
        hourly_rate: i64,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            slot_id,
            user_id,
            vehicle_number: vehicle_number.into(),
            window,
            duration_hours: window.duration_hours(),
            hourly_rate,
            total_price: Self::price_for(hourly_rate, &window),
            status: BookingStatus::Active,
            cancelled: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Cancel this booking. Flag and status flip together.
    pub fn cancel(&mut self) {
        self.cancelled = true;
        self.status = BookingStatus::Cancelled;
        self.updated_at = Utc::now();
    }

    /// Whether the booking counts against slot availability.
    pub fn blocks_slot(&self) -> bool {
        !self.cancelled
    }

    /// Whether the booking occupies its slot at `at`.
    pub fn occupies_at(&self, at: DateTime<Utc>) -> bool {
        !self.cancelled && self.window.contains(at)
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn sample_window() -> BookingWindow {
        let start = Utc.with_ymd_and_hms(2025, 6, 2, 10, 0, 0).unwrap();
        BookingWindow::new(start, start + Duration::hours(2)).unwrap()
    }

    fn sample_booking() -> Booking {
        Booking::new(1, 7, 42, "KA-01-AB-1234", sample_window(), 5000)
    }

    #[test]
    fn new_booking_is_active() {
        let b = sample_booking();
        assert_eq!(b.status, BookingStatus::Active);
        assert!(!b.cancelled);
        assert!(b.blocks_slot());
    }

    #[test]
    fn price_snapshot_is_rate_times_hours() {
        let b = sample_booking();
        assert_eq!(b.duration_hours, 2.0);
        assert_eq!(b.total_price, 10_000);
    }

    #[test]
    fn cancel_flips_flag_and_status_together() {
        let mut b = sample_booking();
        b.cancel();
        assert!(b.cancelled);
        assert_eq!(b.status, BookingStatus::Cancelled);
        assert!(!b.blocks_slot());
    }

    #[test]
    fn cancelled_booking_never_occupies() {
        let mut b = sample_booking();
        let inside = b.window.start() + Duration::minutes(30);
        assert!(b.occupies_at(inside));
        b.cancel();
        assert!(!b.occupies_at(inside));
    }

    #[test]
    fn occupies_respects_window_bounds() {
        let b = sample_booking();
        assert!(b.occupies_at(b.window.start()));
        assert!(!b.occupies_at(b.window.end()));
        assert!(!b.occupies_at(b.window.start() - Duration::seconds(1)));
    }

    #[test]
    fn fractional_price_rounds() {
        let start = Utc.with_ymd_and_hms(2025, 6, 2, 10, 0, 0).unwrap();
        let w = BookingWindow::new(start, start + Duration::minutes(90)).unwrap();
        // 1.5h * 3333 = 4999.5 → 5000
        assert_eq!(Booking::price_for(3333, &w), 5000);
    }

    #[test]
    fn status_string_roundtrip() {
        for status in &[
            BookingStatus::Active,
            BookingStatus::Completed,
            BookingStatus::Cancelled,
        ] {
            assert_eq!(&BookingStatus::from_str(status.as_str()), status);
        }
    }

    #[test]
    fn unknown_status_defaults_to_cancelled() {
        assert_eq!(BookingStatus::from_str("garbage"), BookingStatus::Cancelled);
    }
}
