//! Location hierarchy repository interfaces

use async_trait::async_trait;

use super::model::{Location, ParkingLevel, ParkingLot};
use crate::domain::DomainResult;

#[async_trait]
pub trait LocationRepository: Send + Sync {
    async fn save(&self, location: Location) -> DomainResult<()>;

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Location>>;

    async fn find_all(&self) -> DomainResult<Vec<Location>>;
}

#[async_trait]
pub trait LotRepository: Send + Sync {
    async fn save(&self, lot: ParkingLot) -> DomainResult<()>;

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<ParkingLot>>;

    /// Lots at a location
    async fn find_by_location(&self, location_id: i32) -> DomainResult<Vec<ParkingLot>>;
}

#[async_trait]
pub trait LevelRepository: Send + Sync {
    async fn save(&self, level: ParkingLevel) -> DomainResult<()>;

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<ParkingLevel>>;

    /// Levels in a lot, ordered by `level_order`
    async fn find_by_lot(&self, lot_id: i32) -> DomainResult<Vec<ParkingLevel>>;
}
