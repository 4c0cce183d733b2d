//! SeaORM entities

pub mod booking;
pub mod booking_history;
pub mod location;
pub mod parking_level;
pub mod parking_lot;
pub mod parking_slot;
pub mod user;
