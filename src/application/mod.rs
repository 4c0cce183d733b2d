pub mod services;

pub use services::{
    BookingService, CreateBooking, OccupancyService, PriceQuote, PriceTier, PricingEngine,
};
