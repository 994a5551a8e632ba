//! Opportunity scoring types

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// What to do about an opportunity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Recommendation {
    /// Score >= pursue threshold
    Pursue,
    /// Score between the monitor and pursue thresholds
    Monitor,
    /// Score below the monitor threshold
    Pass,
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Recommendation::Pursue => "pursue",
            Recommendation::Monitor => "monitor",
            Recommendation::Pass => "pass",
        };
        f.write_str(name)
    }
}

/// Points contributed by each scoring component
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub market_size: Decimal,
    pub probability: Decimal,
    pub roi: Decimal,
    pub risk_penalty: Decimal,
}

/// Viability score for one opportunity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpportunityScore {
    pub opportunity_id: String,
    /// Normalized score in [0, 100]
    pub score: Decimal,
    pub recommendation: Recommendation,
    pub breakdown: ScoreBreakdown,
    pub rationale: Vec<String>,
    pub risk_mitigation: Vec<String>,
}
