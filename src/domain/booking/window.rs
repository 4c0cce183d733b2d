//! Half-open booking window
//!
//! All overlap and occupancy rules in the system go through this type.
//! A window covers `[start, end)`, start inclusive and end exclusive, so a
//! booking ending at 12:00 and one starting at 12:00 do not conflict.

use chrono::{DateTime, Duration, Utc};

use crate::domain::{DomainError, DomainResult};

/// Validated half-open time interval `[start, end)` with `end > start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookingWindow {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl BookingWindow {
    /// Create a window, rejecting empty or inverted intervals.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> DomainResult<Self> {
        if end <= start {
            return Err(DomainError::InvalidInterval(format!(
                "end {} must be after start {}",
                end, start
            )));
        }
        Ok(Self { start, end })
    }

    /// Create a window from a start time and a whole number of hours.
    pub fn from_start_and_hours(start: DateTime<Utc>, hours: u32) -> DomainResult<Self> {
        if hours == 0 {
            return Err(DomainError::InvalidInterval(
                "duration must be at least one hour".to_string(),
            ));
        }
        Self::new(start, start + Duration::hours(i64::from(hours)))
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// Half-open overlap test: overlap iff `other.start < self.end` and
    /// `other.end > self.start`. Exact adjacency is not an overlap.
    pub fn overlaps(&self, other: &BookingWindow) -> bool {
        other.start < self.end && other.end > self.start
    }

    /// Whether `at` falls inside the window (`start <= at < end`).
    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        self.start <= at && at < self.end
    }

    /// Duration in hours, fractional for sub-hour windows.
    pub fn duration_hours(&self) -> f64 {
        (self.end - self.start).num_seconds() as f64 / 3600.0
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(hour: u32, min: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 2, hour, min, 0).unwrap()
    }

    fn window(start_hour: u32, end_hour: u32) -> BookingWindow {
        BookingWindow::new(at(start_hour, 0), at(end_hour, 0)).unwrap()
    }

    #[test]
    fn rejects_empty_interval() {
        let err = BookingWindow::new(at(10, 0), at(10, 0)).unwrap_err();
        assert!(matches!(err, DomainError::InvalidInterval(_)));
    }

    #[test]
    fn rejects_inverted_interval() {
        let err = BookingWindow::new(at(12, 0), at(10, 0)).unwrap_err();
        assert!(matches!(err, DomainError::InvalidInterval(_)));
    }

    #[test]
    fn rejects_zero_hours() {
        let err = BookingWindow::from_start_and_hours(at(10, 0), 0).unwrap_err();
        assert!(matches!(err, DomainError::InvalidInterval(_)));
    }

    #[test]
    fn from_hours_sets_end() {
        let w = BookingWindow::from_start_and_hours(at(10, 0), 2).unwrap();
        assert_eq!(w.end(), at(12, 0));
        assert_eq!(w.duration_hours(), 2.0);
    }

    #[test]
    fn overlapping_windows_conflict() {
        // [10,12) vs [11,13) overlap by one hour
        assert!(window(10, 12).overlaps(&window(11, 13)));
        assert!(window(11, 13).overlaps(&window(10, 12)));
    }

    #[test]
    fn contained_window_conflicts() {
        assert!(window(10, 14).overlaps(&window(11, 12)));
        assert!(window(11, 12).overlaps(&window(10, 14)));
    }

    #[test]
    fn back_to_back_windows_do_not_conflict() {
        // [10,12) then [12,14): end is exclusive, so no overlap
        assert!(!window(10, 12).overlaps(&window(12, 14)));
        assert!(!window(12, 14).overlaps(&window(10, 12)));
    }

    #[test]
    fn disjoint_windows_do_not_conflict() {
        assert!(!window(8, 9).overlaps(&window(12, 14)));
    }

    #[test]
    fn contains_is_half_open() {
        let w = window(10, 12);
        assert!(w.contains(at(10, 0)));
        assert!(w.contains(at(11, 59)));
        assert!(!w.contains(at(12, 0)));
        assert!(!w.contains(at(9, 59)));
    }

    #[test]
    fn fractional_duration() {
        let w = BookingWindow::new(at(10, 0), at(10, 30)).unwrap();
        assert_eq!(w.duration_hours(), 0.5);
    }
}
