//! Opportunity scoring commands

use super::output::{self, OutputFormat};
use crate::PricingEngine;
use clap::Args;

#[derive(Args, Debug)]
pub struct ScoreArgs {
    /// Opportunity identifier
    pub opportunity: String,
}

impl ScoreArgs {
    pub fn execute(&self, engine: &PricingEngine, format: OutputFormat) -> anyhow::Result<()> {
        let score = engine.score_opportunity(&self.opportunity)?;

        match format {
            OutputFormat::Json => output::print_json(&score)?,
            OutputFormat::Table => println!("{}", output::format_score(&score)),
        }
        Ok(())
    }
}

/// Rank every registered opportunity
pub fn execute_rank(engine: &PricingEngine, format: OutputFormat) -> anyhow::Result<()> {
    let ranking = engine.rank_opportunities();

    match format {
        OutputFormat::Json => output::print_json(&ranking)?,
        OutputFormat::Table => println!("{}", output::format_ranking(&ranking)),
    }
    Ok(())
}
