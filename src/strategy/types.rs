//! Strategy optimization types

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Business performance snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceSnapshot {
    /// Trial-to-paid conversion, as a fraction
    pub conversion_rate: Decimal,
    /// Monthly churn, as a fraction
    pub churn_rate: Decimal,
    /// Customer satisfaction on a 1-5 scale
    pub customer_satisfaction: Decimal,
    /// Competitive position index
    pub competitive_position: Decimal,
}

/// Proposal priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// Sort weight: high=3, medium=2, low=1
    pub fn weight(&self) -> u8 {
        match self {
            Priority::High => 3,
            Priority::Medium => 2,
            Priority::Low => 1,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        };
        f.write_str(name)
    }
}

/// Implementation risk of a proposal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskTier {
    Low,
    Medium,
    High,
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RiskTier::Low => "low",
            RiskTier::Medium => "medium",
            RiskTier::High => "high",
        };
        f.write_str(name)
    }
}

/// Estimated deltas, as fractions
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExpectedImpact {
    pub revenue: Decimal,
    pub conversion: Decimal,
    pub churn: Decimal,
}

/// One optimization proposal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationProposal {
    pub strategy: String,
    pub description: String,
    pub expected_impact: ExpectedImpact,
    pub implementation: Vec<String>,
    pub priority: Priority,
    pub risk_level: RiskTier,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_weights() {
        assert!(Priority::High.weight() > Priority::Medium.weight());
        assert!(Priority::Medium.weight() > Priority::Low.weight());
    }

    #[test]
    fn test_snapshot_from_json() {
        let snapshot: PerformanceSnapshot = serde_json::from_str(
            r#"{"conversion_rate":"0.05","churn_rate":0.03,"customer_satisfaction":4.2,"competitive_position":0.6}"#,
        )
        .unwrap();
        assert_eq!(snapshot.conversion_rate, Decimal::new(5, 2));
        assert_eq!(snapshot.customer_satisfaction, Decimal::new(42, 1));
    }
}
