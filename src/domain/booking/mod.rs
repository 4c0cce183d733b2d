//! Booking aggregate: entity, status, half-open window, repository trait

mod model;
mod repository;
mod window;

pub use model::{Booking, BookingStatus};
pub use repository::BookingRepository;
pub use window::BookingWindow;
