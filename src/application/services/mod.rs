pub mod booking;
pub mod occupancy;
pub mod pricing;

pub use booking::{BookingService, CreateBooking};
pub use occupancy::{
    LevelSummary, LocationSummary, LotSummary, OccupancyService, OccupancyStats, SlotView,
};
pub use pricing::{PriceQuote, PriceTier, PricingEngine};
