pub mod booking;
pub mod error;
pub mod history;
pub mod location;
pub mod repositories;
pub mod slot;
pub mod user;

// Re-export commonly used types
pub use booking::{Booking, BookingRepository, BookingStatus, BookingWindow};
pub use error::{DomainError, DomainResult};
pub use history::{BookingRecord, HistoryRepository};
pub use location::{Location, ParkingLevel, ParkingLot};
pub use repositories::RepositoryProvider;
pub use slot::{ParkingSlot, SlotRepository};
pub use user::{User, UserRepository};
