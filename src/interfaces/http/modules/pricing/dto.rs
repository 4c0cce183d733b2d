//! Pricing DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::PriceQuote;

/// Quote query parameters
#[derive(Debug, Deserialize, ToSchema, utoipa::IntoParams)]
pub struct QuoteQuery {
    /// Hours to park. Default: 1
    #[serde(default = "default_hours")]
    pub hours: u32,
}

fn default_hours() -> u32 {
    1
}

/// Current price quote (amounts in minor currency units)
#[derive(Debug, Serialize, ToSchema)]
pub struct QuoteDto {
    pub base_price: i64,
    pub multiplier: f64,
    pub hourly_rate: i64,
    pub hours: u32,
    pub total_price: i64,
    /// Occupancy percentage the quote was computed from
    pub occupancy_percent: f64,
    pub is_surge: bool,
    pub tier: String,
}

impl From<PriceQuote> for QuoteDto {
    fn from(q: PriceQuote) -> Self {
        Self {
            base_price: q.base_price,
            multiplier: q.multiplier,
            hourly_rate: q.hourly_rate,
            hours: q.hours,
            total_price: q.total_price,
            occupancy_percent: (q.occupancy_rate * 1000.0).round() / 10.0,
            is_surge: q.is_surge,
            tier: q.tier.to_string(),
        }
    }
}
