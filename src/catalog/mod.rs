//! Reference data catalog
//!
//! Static tiers, regional pricing and market opportunities, exposed through
//! read-only repositories and loaded once at startup from a catalog source.

mod loader;
mod repository;
pub mod seed;
mod types;

pub use loader::{CatalogFile, CatalogSource, SeedCatalogSource, TomlCatalogSource};
pub use repository::{InMemoryRepository, ReferenceRepository};
pub use types::{
    BillingCycle, BusinessCase, Identified, MarketOpportunity, PricingTier, RegionalPricing,
    RiskLevel, TierLimits, UsageLimit,
};

use rust_decimal::Decimal;
use std::sync::Arc;
use thiserror::Error;

/// Catalog construction errors
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Two records share an identifier
    #[error("Duplicate {kind} id: {id}")]
    DuplicateId { kind: &'static str, id: String },
    /// A record failed a range check
    #[error("Invalid {kind} '{id}': {reason}")]
    InvalidRecord {
        kind: &'static str,
        id: String,
        reason: String,
    },
    /// Catalog file could not be read
    #[error("Failed to read catalog: {0}")]
    Io(#[from] std::io::Error),
    /// Catalog file is not valid TOML
    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] toml::de::Error),
}

/// The three reference repositories the engine reads from
#[derive(Clone)]
pub struct Catalog {
    pub tiers: Arc<dyn ReferenceRepository<PricingTier>>,
    pub regions: Arc<dyn ReferenceRepository<RegionalPricing>>,
    pub opportunities: Arc<dyn ReferenceRepository<MarketOpportunity>>,
}

impl Catalog {
    /// Assemble a catalog from explicit repositories
    pub fn new(
        tiers: Arc<dyn ReferenceRepository<PricingTier>>,
        regions: Arc<dyn ReferenceRepository<RegionalPricing>>,
        opportunities: Arc<dyn ReferenceRepository<MarketOpportunity>>,
    ) -> Self {
        Self {
            tiers,
            regions,
            opportunities,
        }
    }

    /// Validate records and build in-memory repositories
    pub fn from_records(
        tiers: Vec<PricingTier>,
        regions: Vec<RegionalPricing>,
        opportunities: Vec<MarketOpportunity>,
    ) -> Result<Self, CatalogError> {
        tiers.iter().try_for_each(validate_tier)?;
        regions.iter().try_for_each(validate_region)?;
        opportunities.iter().try_for_each(validate_opportunity)?;

        Ok(Self::new(
            Arc::new(InMemoryRepository::from_records("tier", tiers)?),
            Arc::new(InMemoryRepository::from_records("region", regions)?),
            Arc::new(InMemoryRepository::from_records(
                "opportunity",
                opportunities,
            )?),
        ))
    }

    /// Catalog built from the compiled-in seed tables
    pub fn seeded() -> Result<Self, CatalogError> {
        Self::from_records(seed::tiers(), seed::regions(), seed::opportunities())
    }
}

impl std::fmt::Debug for Catalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Catalog")
            .field("tiers", &self.tiers.len())
            .field("regions", &self.regions.len())
            .field("opportunities", &self.opportunities.len())
            .finish()
    }
}

fn invalid(kind: &'static str, id: &str, reason: impl Into<String>) -> CatalogError {
    CatalogError::InvalidRecord {
        kind,
        id: id.to_string(),
        reason: reason.into(),
    }
}

fn validate_tier(tier: &PricingTier) -> Result<(), CatalogError> {
    if tier.base_price < Decimal::ZERO {
        return Err(invalid("tier", &tier.id, "base_price must be non-negative"));
    }
    Ok(())
}

fn validate_region(region: &RegionalPricing) -> Result<(), CatalogError> {
    if region.ppp_multiplier <= Decimal::ZERO || region.ppp_multiplier > Decimal::ONE {
        return Err(invalid(
            "region",
            &region.region,
            format!("ppp_multiplier {} outside (0, 1]", region.ppp_multiplier),
        ));
    }
    if region.tax_rate < Decimal::ZERO || region.tax_rate >= Decimal::ONE {
        return Err(invalid(
            "region",
            &region.region,
            format!("tax_rate {} outside [0, 1)", region.tax_rate),
        ));
    }
    Ok(())
}

fn validate_opportunity(opportunity: &MarketOpportunity) -> Result<(), CatalogError> {
    if opportunity.probability < Decimal::ZERO || opportunity.probability > Decimal::ONE {
        return Err(invalid(
            "opportunity",
            &opportunity.id,
            format!("probability {} outside [0, 1]", opportunity.probability),
        ));
    }
    if opportunity.market_size < Decimal::ZERO {
        return Err(invalid(
            "opportunity",
            &opportunity.id,
            "market_size must be non-negative",
        ));
    }
    if opportunity.business_case.roi_multiple < Decimal::ZERO {
        return Err(invalid(
            "opportunity",
            &opportunity.id,
            "roi_multiple must be non-negative",
        ));
    }
    Ok(())
}
