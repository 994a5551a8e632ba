//! Strategy optimization command

use super::output::{self, OutputFormat};
use crate::strategy::PerformanceSnapshot;
use crate::PricingEngine;
use clap::Args;
use rust_decimal::Decimal;

#[derive(Args, Debug)]
pub struct OptimizeArgs {
    /// Conversion rate as a fraction
    #[arg(long)]
    pub conversion_rate: Decimal,

    /// Churn rate as a fraction
    #[arg(long)]
    pub churn_rate: Decimal,

    /// Customer satisfaction (1-5)
    #[arg(long)]
    pub satisfaction: Decimal,

    /// Competitive position index
    #[arg(long, default_value = "0.5")]
    pub competitive_position: Decimal,
}

impl OptimizeArgs {
    pub fn execute(&self, engine: &PricingEngine, format: OutputFormat) -> anyhow::Result<()> {
        let snapshot = PerformanceSnapshot {
            conversion_rate: self.conversion_rate,
            churn_rate: self.churn_rate,
            customer_satisfaction: self.satisfaction,
            competitive_position: self.competitive_position,
        };
        let proposals = engine.optimize_strategy(&snapshot);

        match format {
            OutputFormat::Json => output::print_json(&proposals)?,
            OutputFormat::Table => println!("{}", output::format_proposals(&proposals)),
        }
        Ok(())
    }
}
