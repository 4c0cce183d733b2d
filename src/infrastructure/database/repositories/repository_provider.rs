//! SeaORM implementation of RepositoryProvider

use sea_orm::DatabaseConnection;

use crate::domain::booking::BookingRepository;
use crate::domain::history::HistoryRepository;
use crate::domain::location::{LevelRepository, LocationRepository, LotRepository};
use crate::domain::repositories::RepositoryProvider;
use crate::domain::slot::SlotRepository;
use crate::domain::user::UserRepository;

use super::booking_repository::SeaOrmBookingRepository;
use super::history_repository::SeaOrmHistoryRepository;
use super::location_repository::{
    SeaOrmLevelRepository, SeaOrmLocationRepository, SeaOrmLotRepository,
};
use super::slot_repository::SeaOrmSlotRepository;
use super::user_repository::SeaOrmUserRepository;

/// Unified repository provider backed by SeaORM.
///
/// Holds one connection pool and exposes per-aggregate repository accessors.
///
/// ```ignore
/// let repos = SeaOrmRepositoryProvider::new(db.clone());
/// let slot = repos.slots().find_by_number("A_1").await?;
/// let hits = repos.bookings().find_overlapping(slot.id, &window).await?;
/// ```
pub struct SeaOrmRepositoryProvider {
    users: SeaOrmUserRepository,
    locations: SeaOrmLocationRepository,
    lots: SeaOrmLotRepository,
    levels: SeaOrmLevelRepository,
    slots: SeaOrmSlotRepository,
    bookings: SeaOrmBookingRepository,
    history: SeaOrmHistoryRepository,
}

impl SeaOrmRepositoryProvider {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            users: SeaOrmUserRepository::new(db.clone()),
            locations: SeaOrmLocationRepository::new(db.clone()),
            lots: SeaOrmLotRepository::new(db.clone()),
            levels: SeaOrmLevelRepository::new(db.clone()),
            slots: SeaOrmSlotRepository::new(db.clone()),
            bookings: SeaOrmBookingRepository::new(db.clone()),
            history: SeaOrmHistoryRepository::new(db),
        }
    }
}

impl RepositoryProvider for SeaOrmRepositoryProvider {
    fn users(&self) -> &dyn UserRepository {
        &self.users
    }

    fn locations(&self) -> &dyn LocationRepository {
        &self.locations
    }

    fn lots(&self) -> &dyn LotRepository {
        &self.lots
    }

    fn levels(&self) -> &dyn LevelRepository {
        &self.levels
    }

    fn slots(&self) -> &dyn SlotRepository {
        &self.slots
    }

    fn bookings(&self) -> &dyn BookingRepository {
        &self.bookings
    }

    fn history(&self) -> &dyn HistoryRepository {
        &self.history
    }
}
