//! Occupancy-based dynamic pricing
//!
//! Deterministic function from occupancy to an hourly rate. Constructed
//! explicitly and passed into the booking flow as a dependency; the engine
//! snapshots the quoted rate into each booking, so later pricing changes
//! never alter stored totals.

/// Price tier label shown alongside a quote
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceTier {
    Standard,
    Moderate,
    Peak,
    Premium,
}

impl PriceTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Standard => "Standard",
            Self::Moderate => "Moderate",
            Self::Peak => "Peak",
            Self::Premium => "Premium",
        }
    }
}

impl std::fmt::Display for PriceTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A priced parking quote (amounts in minor currency units)
#[derive(Debug, Clone)]
pub struct PriceQuote {
    pub base_price: i64,
    pub multiplier: f64,
    pub hourly_rate: i64,
    pub hours: u32,
    pub total_price: i64,
    /// Occupancy the quote was computed from (0.0 to 1.0)
    pub occupancy_rate: f64,
    pub is_surge: bool,
    pub tier: PriceTier,
}

/// Dynamic pricing engine.
///
/// Rate is flat at `base_price` up to `surge_threshold` occupancy, then ramps
/// linearly to `max_multiplier` × base at 100% occupancy.
#[derive(Debug, Clone)]
pub struct PricingEngine {
    base_price: i64,
    min_multiplier: f64,
    max_multiplier: f64,
    surge_threshold: f64,
}

impl PricingEngine {
    pub const DEFAULT_BASE_PRICE: i64 = 5000;
    pub const DEFAULT_MAX_MULTIPLIER: f64 = 2.0;
    pub const DEFAULT_SURGE_THRESHOLD: f64 = 0.8;

    pub fn new(base_price: i64) -> Self {
        Self {
            base_price,
            min_multiplier: 1.0,
            max_multiplier: Self::DEFAULT_MAX_MULTIPLIER,
            surge_threshold: Self::DEFAULT_SURGE_THRESHOLD,
        }
    }

    pub fn with_surge(mut self, surge_threshold: f64, max_multiplier: f64) -> Self {
        self.surge_threshold = surge_threshold;
        self.max_multiplier = max_multiplier;
        self
    }

    /// Multiplier for the given occupancy, rounded to two decimals.
    pub fn multiplier(&self, occupancy_rate: f64) -> f64 {
        let occupancy = occupancy_rate.clamp(0.0, 1.0);
        if occupancy <= self.surge_threshold {
            return self.min_multiplier;
        }

        let excess = occupancy - self.surge_threshold;
        let range_above = 1.0 - self.surge_threshold;
        let additional = excess / range_above * (self.max_multiplier - self.min_multiplier);

        let multiplier = (self.min_multiplier + additional).min(self.max_multiplier);
        (multiplier * 100.0).round() / 100.0
    }

    /// Hourly rate in minor units for the given occupancy.
    pub fn hourly_rate(&self, occupancy_rate: f64) -> i64 {
        (self.base_price as f64 * self.multiplier(occupancy_rate)).round() as i64
    }

    /// Tier label for the given occupancy.
    pub fn tier(&self, occupancy_rate: f64) -> PriceTier {
        match occupancy_rate {
            o if o < 0.5 => PriceTier::Standard,
            o if o < 0.7 => PriceTier::Moderate,
            o if o < 0.85 => PriceTier::Peak,
            _ => PriceTier::Premium,
        }
    }

    /// Full quote for parking `hours` at the given occupancy.
    pub fn quote(&self, occupancy_rate: f64, hours: u32) -> PriceQuote {
        let multiplier = self.multiplier(occupancy_rate);
        let hourly_rate = self.hourly_rate(occupancy_rate);

        PriceQuote {
            base_price: self.base_price,
            multiplier,
            hourly_rate,
            hours,
            total_price: hourly_rate * i64::from(hours),
            occupancy_rate: occupancy_rate.clamp(0.0, 1.0),
            is_surge: multiplier > self.min_multiplier,
            tier: self.tier(occupancy_rate),
        }
    }
}

impl Default for PricingEngine {
    fn default() -> Self {
        Self::new(Self::DEFAULT_BASE_PRICE)
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_rate_below_threshold() {
        let pricing = PricingEngine::new(5000);
        assert_eq!(pricing.multiplier(0.0), 1.0);
        assert_eq!(pricing.multiplier(0.5), 1.0);
        assert_eq!(pricing.multiplier(0.8), 1.0);
        assert_eq!(pricing.hourly_rate(0.5), 5000);
    }

    #[test]
    fn ramp_above_threshold() {
        let pricing = PricingEngine::new(5000);
        // halfway between 0.8 and 1.0 → halfway between 1.0 and 2.0
        assert_eq!(pricing.multiplier(0.9), 1.5);
        assert_eq!(pricing.hourly_rate(0.9), 7500);
    }

    #[test]
    fn full_occupancy_hits_max() {
        let pricing = PricingEngine::new(5000);
        assert_eq!(pricing.multiplier(1.0), 2.0);
        assert_eq!(pricing.hourly_rate(1.0), 10_000);
    }

    #[test]
    fn occupancy_is_clamped() {
        let pricing = PricingEngine::new(5000);
        assert_eq!(pricing.multiplier(1.5), 2.0);
        assert_eq!(pricing.multiplier(-0.3), 1.0);
    }

    #[test]
    fn multiplier_rounds_to_two_decimals() {
        let pricing = PricingEngine::new(5000);
        // 0.85 → 1.0 + 0.05/0.2 = 1.25 exactly; 0.87 → 1.35
        assert_eq!(pricing.multiplier(0.85), 1.25);
        assert_eq!(pricing.multiplier(0.87), 1.35);
    }

    #[test]
    fn quote_totals_rate_times_hours() {
        let pricing = PricingEngine::new(5000);
        let quote = pricing.quote(0.9, 3);
        assert_eq!(quote.hourly_rate, 7500);
        assert_eq!(quote.total_price, 22_500);
        assert!(quote.is_surge);
    }

    #[test]
    fn quote_below_threshold_is_not_surge() {
        let pricing = PricingEngine::new(5000);
        let quote = pricing.quote(0.4, 2);
        assert!(!quote.is_surge);
        assert_eq!(quote.total_price, 10_000);
    }

    #[test]
    fn tier_labels_follow_occupancy() {
        let pricing = PricingEngine::default();
        assert_eq!(pricing.tier(0.3), PriceTier::Standard);
        assert_eq!(pricing.tier(0.6), PriceTier::Moderate);
        assert_eq!(pricing.tier(0.8), PriceTier::Peak);
        assert_eq!(pricing.tier(0.9), PriceTier::Premium);
    }

    #[test]
    fn custom_surge_config() {
        let pricing = PricingEngine::new(1000).with_surge(0.5, 3.0);
        assert_eq!(pricing.multiplier(0.5), 1.0);
        assert_eq!(pricing.multiplier(0.75), 2.0);
        assert_eq!(pricing.multiplier(1.0), 3.0);
    }
}
