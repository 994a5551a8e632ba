//! Regional conversion commands

use super::output::{self, OutputFormat};
use crate::PricingEngine;
use clap::Args;
use rust_decimal::Decimal;

#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Region code (e.g. JP)
    #[arg(short, long)]
    pub region: String,

    /// Tier identifier; its base price is used when --price is omitted
    #[arg(short, long, default_value = "professional")]
    pub tier: String,

    /// Reference price in USD
    #[arg(short, long)]
    pub price: Option<Decimal>,
}

impl ConvertArgs {
    pub fn execute(&self, engine: &PricingEngine, format: OutputFormat) -> anyhow::Result<()> {
        let base_price = match self.price {
            Some(price) => price,
            None => engine.tier_price(&self.tier)?,
        };
        let price = engine.convert_regional_price(base_price, &self.region, &self.tier)?;

        match format {
            OutputFormat::Json => output::print_json(&price)?,
            OutputFormat::Table => println!("{}", output::format_regional_price(&price)),
        }
        Ok(())
    }
}

#[derive(Args, Debug)]
pub struct MatrixArgs {
    /// Tier identifier
    #[arg(short, long, default_value = "professional")]
    pub tier: String,
}

impl MatrixArgs {
    pub fn execute(&self, engine: &PricingEngine, format: OutputFormat) -> anyhow::Result<()> {
        let base_price = engine.tier_price(&self.tier)?;
        let prices = engine.regional_price_matrix(base_price, &self.tier)?;

        match format {
            OutputFormat::Json => output::print_json(&prices)?,
            OutputFormat::Table => println!("{}", output::format_price_matrix(&prices)),
        }
        Ok(())
    }
}
