//! Reference data listing

use super::output::{self, OutputFormat};
use crate::catalog::CatalogFile;
use crate::PricingEngine;
use clap::{Args, ValueEnum};

/// Which reference table to list
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CatalogTable {
    Tiers,
    Regions,
    Opportunities,
    /// Whole catalog as a TOML document
    All,
}

#[derive(Args, Debug)]
pub struct CatalogArgs {
    /// Table to list
    #[arg(value_enum, default_value_t = CatalogTable::All)]
    pub table: CatalogTable,
}

impl CatalogArgs {
    pub fn execute(&self, engine: &PricingEngine, format: OutputFormat) -> anyhow::Result<()> {
        match (self.table, format) {
            (CatalogTable::Tiers, OutputFormat::Json) => output::print_json(&engine.tiers())?,
            (CatalogTable::Tiers, OutputFormat::Table) => {
                println!("{}", output::format_tiers(&engine.tiers()))
            }
            (CatalogTable::Regions, OutputFormat::Json) => output::print_json(&engine.regions())?,
            (CatalogTable::Regions, OutputFormat::Table) => {
                println!("{}", output::format_regions(&engine.regions()))
            }
            (CatalogTable::Opportunities, OutputFormat::Json) => {
                output::print_json(&engine.opportunities())?
            }
            (CatalogTable::Opportunities, OutputFormat::Table) => {
                println!("{}", output::format_opportunities(&engine.opportunities()))
            }
            (CatalogTable::All, format) => {
                let file = CatalogFile {
                    tiers: engine.tiers(),
                    regions: engine.regions(),
                    opportunities: engine.opportunities(),
                };
                match format {
                    OutputFormat::Json => output::print_json(&file)?,
                    OutputFormat::Table => println!("{}", toml::to_string_pretty(&file)?),
                }
            }
        }
        Ok(())
    }
}
