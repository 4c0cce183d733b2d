//! Parking slot repository interface

use async_trait::async_trait;

use super::model::ParkingSlot;
use crate::domain::DomainResult;

#[async_trait]
pub trait SlotRepository: Send + Sync {
    /// Persist a new slot
    async fn save(&self, slot: ParkingSlot) -> DomainResult<()>;

    /// Find slot by ID
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<ParkingSlot>>;

    /// Find slot by its slot number, e.g. "A_1"
    async fn find_by_number(&self, slot_number: &str) -> DomainResult<Option<ParkingSlot>>;

    /// All slots on a level, ordered by (row, column)
    async fn find_by_level(&self, level_id: i32) -> DomainResult<Vec<ParkingSlot>>;

    /// All slots in the system
    async fn find_all(&self) -> DomainResult<Vec<ParkingSlot>>;
}
