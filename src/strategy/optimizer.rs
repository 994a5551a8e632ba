//! Rule-based pricing strategy recommendations

use super::types::{ExpectedImpact, OptimizationProposal, PerformanceSnapshot, Priority, RiskTier};
use crate::config::OptimizerConfig;
use crate::telemetry::record_proposals;
use rust_decimal_macros::dec;

/// Evaluates performance snapshots against the optimization rules
#[derive(Debug, Clone, Default)]
pub struct StrategyOptimizer {
    config: OptimizerConfig,
}

impl StrategyOptimizer {
    pub fn new(config: OptimizerConfig) -> Self {
        Self { config }
    }

    /// Proposals for `performance`, highest priority first
    ///
    /// Rules are evaluated independently. Proposals with the same priority
    /// keep rule order.
    pub fn optimize(&self, performance: &PerformanceSnapshot) -> Vec<OptimizationProposal> {
        let mut proposals = Vec::new();

        if performance.conversion_rate < self.config.low_conversion_rate {
            proposals.push(lower_price_point());
        }
        if performance.churn_rate > self.config.high_churn_rate {
            proposals.push(annual_commitment_incentive());
        }
        if performance.customer_satisfaction > self.config.high_satisfaction {
            proposals.push(premium_value_tier());
        }

        // Vec::sort_by_key is stable
        proposals.sort_by_key(|p| std::cmp::Reverse(p.priority.weight()));

        record_proposals(proposals.len());
        tracing::debug!(
            conversion_rate = %performance.conversion_rate,
            churn_rate = %performance.churn_rate,
            satisfaction = %performance.customer_satisfaction,
            proposals = proposals.len(),
            "Strategy optimized"
        );
        proposals
    }
}

fn steps(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn lower_price_point() -> OptimizationProposal {
    OptimizationProposal {
        strategy: "Lower Price Point".to_string(),
        description: "Introduce an intermediate tier below the current entry plan to lift conversion"
            .to_string(),
        expected_impact: ExpectedImpact {
            revenue: dec!(0.10),
            conversion: dec!(0.25),
            churn: dec!(-0.05),
        },
        implementation: steps(&[
            "Define a reduced feature set for the intermediate tier",
            "A/B test the new price point on the pricing page",
            "Monitor cannibalization of the existing entry tier",
        ]),
        priority: Priority::High,
        risk_level: RiskTier::Medium,
    }
}

fn annual_commitment_incentive() -> OptimizationProposal {
    OptimizationProposal {
        strategy: "Annual Commitment Incentive".to_string(),
        description: "Offer a discount for annual billing to reduce churn".to_string(),
        expected_impact: ExpectedImpact {
            revenue: dec!(0.05),
            conversion: dec!(0.0),
            churn: dec!(-0.30),
        },
        implementation: steps(&[
            "Offer two months free on annual plans",
            "Prompt monthly customers to switch at renewal",
            "Track retention of annual cohorts",
        ]),
        priority: Priority::Medium,
        risk_level: RiskTier::Low,
    }
}

fn premium_value_tier() -> OptimizationProposal {
    OptimizationProposal {
        strategy: "Premium Value Tier".to_string(),
        description: "Add a value-based premium tier for highly satisfied customers".to_string(),
        expected_impact: ExpectedImpact {
            revenue: dec!(0.20),
            conversion: dec!(-0.02),
            churn: dec!(0.0),
        },
        implementation: steps(&[
            "Bundle advanced analytics and priority support",
            "Interview top accounts about willingness to pay",
            "Launch to existing customers before public release",
        ]),
        priority: Priority::Medium,
        risk_level: RiskTier::Medium,
    }
}
