//! Market opportunity scoring
//!
//! Additive point model over market size, success probability, ROI and risk

mod scorer;
mod types;

pub use scorer::OpportunityScorer;
pub use types::{OpportunityScore, Recommendation, ScoreBreakdown};
