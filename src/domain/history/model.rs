//! Append-only booking history record
//!
//! One record per successful booking creation. External analytics consumers
//! (peak-hour, cancellation-risk, anomaly models) train on this feed; the
//! booking engine itself never reads it back.

use chrono::{DateTime, Datelike, Timelike, Utc};

#[derive(Debug, Clone)]
pub struct BookingRecord {
    pub id: i32,
    /// Scheduled start of the booking
    pub timestamp: DateTime<Utc>,
    /// Slot number, e.g. "A_1" (string form, decoupled from slot row ids)
    pub slot_id: String,
    /// Requester id in string form
    pub user_id: String,
    pub occupied: bool,
    pub cancelled: bool,
    pub duration_hours: f64,
    /// Hours between creation and scheduled start
    pub lead_time_hours: f64,
    /// Hour of day of the start (0-23)
    pub hour: i32,
    /// Day of week of the start (0 = Monday)
    pub day_of_week: i32,
}

impl BookingRecord {
    /// Build the record for a booking created `now` that starts at `start`.
    pub fn for_new_booking(
        slot_number: impl Into<String>,
        user_id: i32,
        start: DateTime<Utc>,
        duration_hours: f64,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: 0,
            timestamp: start,
            slot_id: slot_number.into(),
            user_id: user_id.to_string(),
            occupied: true,
            cancelled: false,
            duration_hours,
            lead_time_hours: (start - now).num_seconds() as f64 / 3600.0,
            hour: start.hour() as i32,
            day_of_week: start.weekday().num_days_from_monday() as i32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn record_captures_time_features() {
        // 2025-06-04 is a Wednesday
        let start = Utc.with_ymd_and_hms(2025, 6, 4, 14, 0, 0).unwrap();
        let now = start - Duration::hours(3);
        let rec = BookingRecord::for_new_booking("A_1", 42, start, 2.0, now);

        assert_eq!(rec.hour, 14);
        assert_eq!(rec.day_of_week, 2);
        assert_eq!(rec.lead_time_hours, 3.0);
        assert!(rec.occupied);
        assert!(!rec.cancelled);
        assert_eq!(rec.user_id, "42");
    }
}
