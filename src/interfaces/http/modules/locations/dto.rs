//! Location hierarchy DTOs

use serde::Serialize;
use utoipa::ToSchema;

use crate::application::services::occupancy::{LevelSummary, LocationSummary, LotSummary};

/// Location with availability roll-up
#[derive(Debug, Serialize, ToSchema)]
pub struct LocationDto {
    pub id: i32,
    pub name: String,
    pub address: Option<String>,
    pub description: Option<String>,
    pub lot_count: u32,
    pub total_slots: u32,
    pub available_slots: u32,
    /// Percentage 0.0–100.0
    pub occupancy_rate: f64,
}

impl From<LocationSummary> for LocationDto {
    fn from(s: LocationSummary) -> Self {
        Self {
            id: s.id,
            name: s.name,
            address: s.address,
            description: s.description,
            lot_count: s.lot_count,
            total_slots: s.stats.total,
            available_slots: s.stats.available,
            occupancy_rate: s.stats.occupancy_rate,
        }
    }
}

/// Level with availability roll-up
#[derive(Debug, Serialize, ToSchema)]
pub struct LevelDto {
    pub id: i32,
    pub name: String,
    pub order: i32,
    pub rows: i32,
    pub columns: i32,
    pub total: u32,
    pub available: u32,
    pub occupancy_rate: f64,
}

impl From<LevelSummary> for LevelDto {
    fn from(s: LevelSummary) -> Self {
        Self {
            id: s.id,
            name: s.level_name,
            order: s.level_order,
            rows: s.rows,
            columns: s.columns,
            total: s.stats.total,
            available: s.stats.available,
            occupancy_rate: s.stats.occupancy_rate,
        }
    }
}

/// Lot with per-level breakdown
#[derive(Debug, Serialize, ToSchema)]
pub struct LotDto {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub total_slots: u32,
    pub available_slots: u32,
    pub occupancy_rate: f64,
    pub levels: Vec<LevelDto>,
}

impl From<LotSummary> for LotDto {
    fn from(s: LotSummary) -> Self {
        Self {
            id: s.id,
            name: s.name,
            description: s.description,
            total_slots: s.stats.total,
            available_slots: s.stats.available,
            occupancy_rate: s.stats.occupancy_rate,
            levels: s.levels.into_iter().map(LevelDto::from).collect(),
        }
    }
}
