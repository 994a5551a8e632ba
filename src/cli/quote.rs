//! Dynamic pricing command

use super::output::{self, OutputFormat};
use crate::pricing::DemandMetrics;
use crate::PricingEngine;
use clap::Args;
use rust_decimal::Decimal;

#[derive(Args, Debug)]
pub struct QuoteArgs {
    /// Region code
    #[arg(short, long)]
    pub region: String,

    /// Tier identifier
    #[arg(short, long)]
    pub tier: String,

    /// Current period demand
    #[arg(long)]
    pub current: Decimal,

    /// Historical demand, comma separated, oldest first
    #[arg(long, value_delimiter = ',', required = true)]
    pub history: Vec<Decimal>,

    /// Seasonality index in [-1, 1]
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    pub seasonality: Decimal,

    /// Competitor activity index
    #[arg(long, default_value = "0")]
    pub competitor_activity: Decimal,
}

impl QuoteArgs {
    pub fn execute(&self, engine: &PricingEngine, format: OutputFormat) -> anyhow::Result<()> {
        let demand = DemandMetrics {
            current: self.current,
            historical: self.history.clone(),
            seasonality: self.seasonality,
            competitor_activity: self.competitor_activity,
        };
        let quote = engine.compute_dynamic_price(&self.region, &self.tier, &demand)?;

        match format {
            OutputFormat::Json => output::print_json(&quote)?,
            OutputFormat::Table => println!("{}", output::format_quote(&quote)),
        }
        Ok(())
    }
}
