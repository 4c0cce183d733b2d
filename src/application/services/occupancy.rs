//! Derived occupancy queries for the display layer
//!
//! Read-only snapshots: the grid for a level, availability roll-ups for the
//! location hierarchy, and the live occupancy rate that feeds pricing.
//! Served without locking: display reads are informational, not gating.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::domain::location::{LevelRepository, LocationRepository, LotRepository};
use crate::domain::{
    BookingRepository, DomainError, DomainResult, ParkingSlot, RepositoryProvider, SlotRepository,
};

/// One slot cell in a level grid
#[derive(Debug, Clone)]
pub struct SlotView {
    pub id: i32,
    pub slot_number: String,
    pub display_name: String,
    pub row: i32,
    pub column: i32,
    pub occupied: bool,
}

/// Availability stats for a set of slots
#[derive(Debug, Clone, PartialEq)]
pub struct OccupancyStats {
    pub total: u32,
    pub occupied: u32,
    pub available: u32,
    /// Percentage 0.0–100.0, one decimal
    pub occupancy_rate: f64,
}

impl OccupancyStats {
    fn from_counts(total: u32, occupied: u32) -> Self {
        let rate = if total > 0 {
            (occupied as f64 / total as f64 * 1000.0).round() / 10.0
        } else {
            0.0
        };
        Self {
            total,
            occupied,
            available: total - occupied,
            occupancy_rate: rate,
        }
    }
}

/// Availability summary for one level
#[derive(Debug, Clone)]
pub struct LevelSummary {
    pub id: i32,
    pub level_name: String,
    pub level_order: i32,
    pub rows: i32,
    pub columns: i32,
    pub stats: OccupancyStats,
}

/// Availability summary for one lot
#[derive(Debug, Clone)]
pub struct LotSummary {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub levels: Vec<LevelSummary>,
    pub stats: OccupancyStats,
}

/// Availability summary for one location
#[derive(Debug, Clone)]
pub struct LocationSummary {
    pub id: i32,
    pub name: String,
    pub address: Option<String>,
    pub description: Option<String>,
    pub lot_count: u32,
    pub stats: OccupancyStats,
}

/// Service for derived occupancy views
pub struct OccupancyService {
    repos: Arc<dyn RepositoryProvider>,
}

impl OccupancyService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    async fn slot_occupied(&self, slot: &ParkingSlot, at: DateTime<Utc>) -> DomainResult<bool> {
        Ok(self
            .repos
            .bookings()
            .find_occupying(slot.id, at)
            .await?
            .is_some())
    }

    async fn stats_for_slots(
        &self,
        slots: &[ParkingSlot],
        at: DateTime<Utc>,
    ) -> DomainResult<OccupancyStats> {
        let mut occupied = 0u32;
        for slot in slots {
            if self.slot_occupied(slot, at).await? {
                occupied += 1;
            }
        }
        Ok(OccupancyStats::from_counts(slots.len() as u32, occupied))
    }

    /// Slot grid for a level with per-slot derived occupancy.
    pub async fn level_grid(
        &self,
        level_id: i32,
        at: DateTime<Utc>,
    ) -> DomainResult<(Vec<SlotView>, OccupancyStats)> {
        self.repos
            .levels()
            .find_by_id(level_id)
            .await?
            .ok_or(DomainError::NotFound {
                entity: "ParkingLevel",
                field: "id",
                value: level_id.to_string(),
            })?;

        let slots = self.repos.slots().find_by_level(level_id).await?;
        let mut views = Vec::with_capacity(slots.len());
        let mut occupied = 0u32;
        for slot in &slots {
            let is_occupied = self.slot_occupied(slot, at).await?;
            if is_occupied {
                occupied += 1;
            }
            views.push(SlotView {
                id: slot.id,
                slot_number: slot.slot_number.clone(),
                display_name: slot.display_name(),
                row: slot.row,
                column: slot.column,
                occupied: is_occupied,
            });
        }

        let stats = OccupancyStats::from_counts(slots.len() as u32, occupied);
        Ok((views, stats))
    }

    /// Per-level availability for a lot, ordered by level order.
    pub async fn lot_summary(&self, lot_id: i32, at: DateTime<Utc>) -> DomainResult<LotSummary> {
        let lot = self
            .repos
            .lots()
            .find_by_id(lot_id)
            .await?
            .ok_or(DomainError::NotFound {
                entity: "ParkingLot",
                field: "id",
                value: lot_id.to_string(),
            })?;

        let mut levels = Vec::new();
        let mut total = 0u32;
        let mut occupied = 0u32;
        for level in self.repos.levels().find_by_lot(lot.id).await? {
            let slots = self.repos.slots().find_by_level(level.id).await?;
            let stats = self.stats_for_slots(&slots, at).await?;
            total += stats.total;
            occupied += stats.occupied;
            levels.push(LevelSummary {
                id: level.id,
                level_name: level.level_name,
                level_order: level.level_order,
                rows: level.rows,
                columns: level.columns,
                stats,
            });
        }

        Ok(LotSummary {
            id: lot.id,
            name: lot.name,
            description: lot.description,
            levels,
            stats: OccupancyStats::from_counts(total, occupied),
        })
    }

    /// Lots at a location with their availability roll-ups.
    pub async fn lots_at_location(
        &self,
        location_id: i32,
        at: DateTime<Utc>,
    ) -> DomainResult<Vec<LotSummary>> {
        self.repos
            .locations()
            .find_by_id(location_id)
            .await?
            .ok_or(DomainError::NotFound {
                entity: "Location",
                field: "id",
                value: location_id.to_string(),
            })?;

        let mut summaries = Vec::new();
        for lot in self.repos.lots().find_by_location(location_id).await? {
            summaries.push(self.lot_summary(lot.id, at).await?);
        }
        Ok(summaries)
    }

    /// Availability roll-up for every location.
    pub async fn location_summaries(&self, at: DateTime<Utc>) -> DomainResult<Vec<LocationSummary>> {
        let mut summaries = Vec::new();
        for location in self.repos.locations().find_all().await? {
            let lots = self.repos.lots().find_by_location(location.id).await?;
            let mut total = 0u32;
            let mut occupied = 0u32;
            for lot in &lots {
                for level in self.repos.levels().find_by_lot(lot.id).await? {
                    let slots = self.repos.slots().find_by_level(level.id).await?;
                    let stats = self.stats_for_slots(&slots, at).await?;
                    total += stats.total;
                    occupied += stats.occupied;
                }
            }
            summaries.push(LocationSummary {
                id: location.id,
                name: location.name,
                address: location.address,
                description: location.description,
                lot_count: lots.len() as u32,
                stats: OccupancyStats::from_counts(total, occupied),
            });
        }
        Ok(summaries)
    }

    /// System-wide occupancy fraction (0.0–1.0) at `at`; pricing input.
    pub async fn system_occupancy(&self, at: DateTime<Utc>) -> DomainResult<f64> {
        let slots = self.repos.slots().find_all().await?;
        if slots.is_empty() {
            return Ok(0.0);
        }
        let mut occupied = 0u32;
        for slot in &slots {
            if self.slot_occupied(slot, at).await? {
                occupied += 1;
            }
        }
        Ok(occupied as f64 / slots.len() as f64)
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        Booking, BookingWindow, Location, ParkingLevel, ParkingLot, ParkingSlot,
    };
    use crate::infrastructure::storage::InMemoryRepositories;
    use chrono::{Duration, TimeZone};

    async fn setup() -> (Arc<InMemoryRepositories>, OccupancyService, DateTime<Utc>) {
        let repos = Arc::new(InMemoryRepositories::new());
        let at = Utc.with_ymd_and_hms(2025, 6, 2, 11, 0, 0).unwrap();

        repos.locations().save(Location::new(1, "Airport")).await.unwrap();
        repos.lots().save(ParkingLot::new(1, 1, "Terminal Lot")).await.unwrap();
        repos.levels().save(ParkingLevel::new(1, 1, "A", 0, 1, 2)).await.unwrap();
        repos.levels().save(ParkingLevel::new(2, 1, "B", 1, 1, 2)).await.unwrap();
        repos.slots().save(ParkingSlot::new(1, 1, "A_1", 0, 0)).await.unwrap();
        repos.slots().save(ParkingSlot::new(2, 1, "A_2", 0, 1)).await.unwrap();
        repos.slots().save(ParkingSlot::new(3, 2, "B_1", 0, 0)).await.unwrap();
        repos.slots().save(ParkingSlot::new(4, 2, "B_2", 0, 1)).await.unwrap();

        // slot A_1 occupied 10:00-12:00
        let window = BookingWindow::new(at - Duration::hours(1), at + Duration::hours(1)).unwrap();
        repos
            .bookings()
            .save(Booking::new(1, 1, 1, "KA-01", window, 5000))
            .await
            .unwrap();

        let service = OccupancyService::new(repos.clone() as Arc<dyn RepositoryProvider>);
        (repos, service, at)
    }

    #[tokio::test]
    async fn level_grid_marks_occupied_slots() {
        let (_, service, at) = setup().await;
        let (views, stats) = service.level_grid(1, at).await.unwrap();

        assert_eq!(views.len(), 2);
        assert!(views[0].occupied);
        assert!(!views[1].occupied);
        assert_eq!(views[0].display_name, "A-01");
        assert_eq!(stats, OccupancyStats::from_counts(2, 1));
        assert_eq!(stats.occupancy_rate, 50.0);
    }

    #[tokio::test]
    async fn grid_frees_slot_when_window_ends() {
        let (_, service, at) = setup().await;
        // booking ends at 12:00; at exactly 12:00 the slot is free
        let (views, _) = service.level_grid(1, at + Duration::hours(1)).await.unwrap();
        assert!(!views[0].occupied);
    }

    #[tokio::test]
    async fn cancelled_booking_is_excluded_from_grid() {
        let (repos, service, at) = setup().await;
        let mut booking = repos.bookings().find_by_id(1).await.unwrap().unwrap();
        booking.cancel();
        repos.bookings().update(booking).await.unwrap();

        let (views, stats) = service.level_grid(1, at).await.unwrap();
        assert!(!views[0].occupied);
        assert_eq!(stats.available, 2);
    }

    #[tokio::test]
    async fn unknown_level_is_not_found() {
        let (_, service, at) = setup().await;
        let err = service.level_grid(99, at).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { entity: "ParkingLevel", .. }));
    }

    #[tokio::test]
    async fn lot_summary_rolls_up_levels() {
        let (_, service, at) = setup().await;
        let summary = service.lot_summary(1, at).await.unwrap();

        assert_eq!(summary.levels.len(), 2);
        assert_eq!(summary.stats.total, 4);
        assert_eq!(summary.stats.occupied, 1);
        assert_eq!(summary.stats.occupancy_rate, 25.0);
        assert_eq!(summary.levels[0].stats.available, 1);
        assert_eq!(summary.levels[1].stats.available, 2);
    }

    #[tokio::test]
    async fn location_summaries_cover_all_lots() {
        let (_, service, at) = setup().await;
        let summaries = service.location_summaries(at).await.unwrap();

        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].lot_count, 1);
        assert_eq!(summaries[0].stats.total, 4);
        assert_eq!(summaries[0].stats.available, 3);
    }

    #[tokio::test]
    async fn system_occupancy_is_fraction() {
        let (_, service, at) = setup().await;
        assert_eq!(service.system_occupancy(at).await.unwrap(), 0.25);
        // outside any booking window the system is empty
        assert_eq!(
            service.system_occupancy(at + Duration::hours(2)).await.unwrap(),
            0.0
        );
    }

    #[test]
    fn stats_handle_empty_slot_set() {
        let stats = OccupancyStats::from_counts(0, 0);
        assert_eq!(stats.occupancy_rate, 0.0);
        assert_eq!(stats.available, 0);
    }
}
