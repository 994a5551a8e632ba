//! Pricing module
//!
//! Regional PPP conversion and demand-driven dynamic pricing

mod demand;
mod dynamic;
mod regional;

pub use demand::{DemandMetrics, DemandStats};
pub use dynamic::{
    AdjustmentFactors, CompetitivePricing, DynamicPriceQuote, DynamicPricer, NeutralCompetition,
    PriceOutlook,
};
pub use regional::{RegionalPrice, RegionalPriceConverter};
