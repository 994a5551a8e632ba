//! Pricing strategy optimization
//!
//! Turns conversion, churn and satisfaction metrics into prioritized
//! pricing proposals

mod optimizer;
mod types;

pub use optimizer::StrategyOptimizer;
pub use types::{ExpectedImpact, OptimizationProposal, PerformanceSnapshot, Priority, RiskTier};
