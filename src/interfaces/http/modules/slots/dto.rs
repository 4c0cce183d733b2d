//! Slot grid DTOs

use serde::Serialize;
use utoipa::ToSchema;

use crate::application::services::occupancy::{OccupancyStats, SlotView};

/// One slot cell in the grid
#[derive(Debug, Serialize, ToSchema)]
pub struct SlotDto {
    pub id: i32,
    pub slot_number: String,
    pub display_name: String,
    pub row: i32,
    pub column: i32,
    /// Derived from bookings at request time
    pub occupied: bool,
}

impl From<SlotView> for SlotDto {
    fn from(v: SlotView) -> Self {
        Self {
            id: v.id,
            slot_number: v.slot_number,
            display_name: v.display_name,
            row: v.row,
            column: v.column,
            occupied: v.occupied,
        }
    }
}

/// Availability stats for the grid
#[derive(Debug, Serialize, ToSchema)]
pub struct StatsDto {
    pub total: u32,
    pub occupied: u32,
    pub available: u32,
    /// Percentage 0.0–100.0
    pub occupancy_rate: f64,
}

impl From<OccupancyStats> for StatsDto {
    fn from(s: OccupancyStats) -> Self {
        Self {
            total: s.total,
            occupied: s.occupied,
            available: s.available,
            occupancy_rate: s.occupancy_rate,
        }
    }
}

/// Level grid with stats
#[derive(Debug, Serialize, ToSchema)]
pub struct GridDto {
    pub slots: Vec<SlotDto>,
    pub stats: StatsDto,
}
