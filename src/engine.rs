//! Pricing and market scoring engine
//!
//! Facade over the converter, dynamic pricer, opportunity scorer and
//! strategy optimizer. Built from an injected catalog and configuration;
//! every operation is a synchronous pure function over read-only data.

use crate::catalog::{
    Catalog, CatalogSource, MarketOpportunity, PricingTier, RegionalPricing,
    SeedCatalogSource, TomlCatalogSource,
};
use crate::config::Config;
use crate::error::{EngineError, EntityKind, SetupError};
use crate::opportunity::{OpportunityScore, OpportunityScorer};
use crate::pricing::{
    DemandMetrics, DynamicPriceQuote, DynamicPricer, RegionalPrice, RegionalPriceConverter,
};
use crate::strategy::{OptimizationProposal, PerformanceSnapshot, StrategyOptimizer};
use rust_decimal::Decimal;

/// Entry point for all pricing and scoring operations
pub struct PricingEngine {
    catalog: Catalog,
    converter: RegionalPriceConverter,
    dynamic: DynamicPricer,
    scorer: OpportunityScorer,
    optimizer: StrategyOptimizer,
}

impl PricingEngine {
    /// Build an engine over `catalog`, rejecting an invalid `config`
    pub fn new(catalog: Catalog, config: &Config) -> Result<Self, SetupError> {
        config.validate().map_err(SetupError::InvalidConfig)?;

        let converter = RegionalPriceConverter::new(catalog.regions.clone());
        let dynamic = DynamicPricer::new(
            catalog.tiers.clone(),
            converter.clone(),
            config.dynamic_pricing.clone(),
        );
        let scorer =
            OpportunityScorer::new(catalog.opportunities.clone(), config.scoring.clone());
        let optimizer = StrategyOptimizer::new(config.optimizer.clone());

        Ok(Self {
            catalog,
            converter,
            dynamic,
            scorer,
            optimizer,
        })
    }

    /// Load the catalog named by `config` (or the seed data) and build an engine
    pub async fn from_config(config: &Config) -> Result<Self, SetupError> {
        config.validate().map_err(SetupError::InvalidConfig)?;

        let source: Box<dyn CatalogSource> = match &config.catalog.path {
            Some(path) => Box::new(TomlCatalogSource::new(path)),
            None => Box::new(SeedCatalogSource),
        };
        let catalog = source.load().await?;
        tracing::info!(source = %source.describe(), ?catalog, "Catalog loaded");
        Self::new(catalog, config)
    }

    /// Replace the dynamic pricer, e.g. to plug in a competitive feed
    pub fn with_dynamic_pricer(mut self, dynamic: DynamicPricer) -> Self {
        self.dynamic = dynamic;
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// PPP and tax conversion of a reference price
    pub fn convert_regional_price(
        &self,
        base_price: Decimal,
        region: &str,
        tier: &str,
    ) -> Result<RegionalPrice, EngineError> {
        self.converter.convert(base_price, region, tier)
    }

    /// Demand-adjusted regional quote for a tier
    pub fn compute_dynamic_price(
        &self,
        region: &str,
        tier: &str,
        demand: &DemandMetrics,
    ) -> Result<DynamicPriceQuote, EngineError> {
        self.dynamic.compute(region, tier, demand)
    }

    /// Viability score for a registered opportunity
    pub fn score_opportunity(&self, opportunity_id: &str) -> Result<OpportunityScore, EngineError> {
        self.scorer.score(opportunity_id)
    }

    /// Prioritized proposals for a performance snapshot; may be empty
    pub fn optimize_strategy(
        &self,
        performance: &PerformanceSnapshot,
    ) -> Vec<OptimizationProposal> {
        self.optimizer.optimize(performance)
    }

    /// Every opportunity scored, best first
    pub fn rank_opportunities(&self) -> Vec<OpportunityScore> {
        self.scorer.rank()
    }

    /// A reference price converted for every region
    pub fn regional_price_matrix(
        &self,
        base_price: Decimal,
        tier: &str,
    ) -> Result<Vec<RegionalPrice>, EngineError> {
        self.converter.convert_all(base_price, tier)
    }

    /// Base price of a registered tier
    pub fn tier_price(&self, tier: &str) -> Result<Decimal, EngineError> {
        self.catalog
            .tiers
            .get(tier)
            .map(|t| t.base_price)
            .ok_or_else(|| EngineError::not_found(EntityKind::Tier, tier))
    }

    pub fn tiers(&self) -> Vec<PricingTier> {
        self.catalog.tiers.get_all()
    }

    pub fn regions(&self) -> Vec<RegionalPricing> {
        self.catalog.regions.get_all()
    }

    pub fn opportunities(&self) -> Vec<MarketOpportunity> {
        self.catalog.opportunities.get_all()
    }
}
