//! CLI interface for the pricing engine
//!
//! Provides subcommands for:
//! - `convert`: PPP and tax conversion of a price for one region
//! - `matrix`: a tier's price converted for every region
//! - `quote`: demand-adjusted dynamic price
//! - `score`: viability score for one opportunity
//! - `rank`: all opportunities, best first
//! - `optimize`: pricing strategy proposals from performance metrics
//! - `catalog`: list reference data
//! - `config`: show effective configuration

mod catalog;
mod convert;
mod optimize;
pub mod output;
mod quote;
mod score;

pub use catalog::CatalogArgs;
pub use convert::{ConvertArgs, MatrixArgs};
pub use optimize::OptimizeArgs;
pub use output::OutputFormat;
pub use quote::QuoteArgs;
pub use score::{execute_rank, ScoreArgs};

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "pricing-engine")]
#[command(about = "Pricing and market scoring for a managed DNS product")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table, global = true)]
    pub format: OutputFormat,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert a reference price for one region
    Convert(ConvertArgs),
    /// Convert a tier's price for every region
    Matrix(MatrixArgs),
    /// Compute a demand-adjusted dynamic price
    Quote(QuoteArgs),
    /// Score one market opportunity
    Score(ScoreArgs),
    /// Rank all market opportunities
    Rank,
    /// Recommend pricing strategy changes
    Optimize(OptimizeArgs),
    /// List reference data
    Catalog(CatalogArgs),
    /// Show effective configuration
    Config,
}
