//! Catalog sources
//!
//! Reference data either comes from the compiled-in seed tables or from a
//! TOML file on disk. Loading is the only async step in the crate.

use super::types::{MarketOpportunity, PricingTier, RegionalPricing};
use super::{seed, Catalog, CatalogError};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where reference data is loaded from
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Load and validate the catalog
    async fn load(&self) -> Result<Catalog, CatalogError>;
    /// Short description for logs
    fn describe(&self) -> String;
}

/// Compiled-in seed tables
#[derive(Debug, Clone, Copy, Default)]
pub struct SeedCatalogSource;

#[async_trait]
impl CatalogSource for SeedCatalogSource {
    async fn load(&self) -> Result<Catalog, CatalogError> {
        Catalog::seeded()
    }

    fn describe(&self) -> String {
        "built-in seed data".to_string()
    }
}

/// On-disk catalog layout
///
/// ```toml
/// [[tiers]]
/// id = "starter"
/// name = "Starter"
/// base_price = 9.99
/// billing_cycle = "monthly"
/// limits = { domains = 5, records_per_domain = 100, monthly_queries = 1000000, team_members = 1 }
///
/// [[regions]]
/// region = "JP"
/// currency = "JPY"
/// ppp_multiplier = 0.85
/// tax_rate = 0.10
/// tax_type = "Consumption Tax"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogFile {
    #[serde(default)]
    pub tiers: Vec<PricingTier>,
    #[serde(default)]
    pub regions: Vec<RegionalPricing>,
    #[serde(default)]
    pub opportunities: Vec<MarketOpportunity>,
}

impl CatalogFile {
    pub fn parse(content: &str) -> Result<Self, CatalogError> {
        Ok(toml::from_str(content)?)
    }

    /// Snapshot of the seed tables, useful as a starting point for a file
    pub fn from_seed() -> Self {
        Self {
            tiers: seed::tiers(),
            regions: seed::regions(),
            opportunities: seed::opportunities(),
        }
    }

    pub fn into_catalog(self) -> Result<Catalog, CatalogError> {
        Catalog::from_records(self.tiers, self.regions, self.opportunities)
    }
}

/// Catalog read from a TOML file
#[derive(Debug, Clone)]
pub struct TomlCatalogSource {
    path: PathBuf,
}

impl TomlCatalogSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CatalogSource for TomlCatalogSource {
    async fn load(&self) -> Result<Catalog, CatalogError> {
        let content = tokio::fs::read_to_string(&self.path).await?;
        let catalog = CatalogFile::parse(&content)?.into_catalog()?;
        tracing::debug!(path = %self.path.display(), ?catalog, "Catalog file loaded");
        Ok(catalog)
    }

    fn describe(&self) -> String {
        format!("catalog file {}", self.path.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    const CATALOG: &str = r#"
        [[tiers]]
        id = "starter"
        name = "Starter"
        base_price = 10
        billing_cycle = "monthly"
        limits = { domains = 5, records_per_domain = 100, monthly_queries = 1000000, team_members = 1 }

        [[regions]]
        region = "JP"
        currency = "JPY"
        ppp_multiplier = 0.85
        tax_rate = 0.10
        tax_type = "Consumption Tax"
        payment_methods = ["card"]

        [[opportunities]]
        id = "web3-dns"
        name = "Web3"
        market_size = 850000000
        addressable_revenue = 42000000
        probability = 0.75
        risk_level = "medium"
        business_case = { investment = 2500000, roi_multiple = 3.2, payback_months = 18 }
    "#;

    #[test]
    fn test_parse_catalog_file() {
        let file = CatalogFile::parse(CATALOG).unwrap();
        assert_eq!(file.tiers.len(), 1);
        assert_eq!(file.regions[0].ppp_multiplier, dec!(0.85));
        assert_eq!(file.opportunities[0].business_case.roi_multiple, dec!(3.2));
    }

    #[test]
    fn test_empty_catalog_file_is_valid() {
        let catalog = CatalogFile::parse("").unwrap().into_catalog().unwrap();
        assert!(catalog.tiers.is_empty());
        assert!(catalog.regions.is_empty());
    }

    #[test]
    fn test_invalid_toml() {
        assert!(matches!(
            CatalogFile::parse("[[tiers]\nid ="),
            Err(CatalogError::Parse(_))
        ));
    }

    #[test]
    fn test_seed_roundtrips_through_toml() {
        let text = toml::to_string(&CatalogFile::from_seed()).unwrap();
        let catalog = CatalogFile::parse(&text).unwrap().into_catalog().unwrap();
        assert_eq!(catalog.regions.len(), seed::regions().len());
    }

    #[tokio::test]
    async fn test_seed_source() {
        let catalog = SeedCatalogSource.load().await.unwrap();
        assert!(catalog.tiers.get("professional").is_some());
    }

    #[tokio::test]
    async fn test_missing_file() {
        let source = TomlCatalogSource::new("/nonexistent/catalog.toml");
        assert!(matches!(source.load().await, Err(CatalogError::Io(_))));
    }
}
