mod model;
mod repository;

pub use model::ParkingSlot;
pub use repository::SlotRepository;
