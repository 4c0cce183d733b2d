mod model;
mod repository;

pub use model::{Location, ParkingLevel, ParkingLot};
pub use repository::{LevelRepository, LocationRepository, LotRepository};
