//! SeaORM repository implementations

mod booking_repository;
mod history_repository;
mod location_repository;
mod repository_provider;
mod slot_repository;
mod user_repository;

pub use booking_repository::SeaOrmBookingRepository;
pub use history_repository::SeaOrmHistoryRepository;
pub use location_repository::{
    SeaOrmLevelRepository, SeaOrmLocationRepository, SeaOrmLotRepository,
};
pub use repository_provider::SeaOrmRepositoryProvider;
pub use slot_repository::SeaOrmSlotRepository;
pub use user_repository::SeaOrmUserRepository;
