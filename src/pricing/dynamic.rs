//! Demand-driven dynamic pricing
//!
//! A quote is the tier's base price scaled by three independent
//! multipliers (demand, competitive, seasonal) and then converted for the
//! target region. Quotes are recomputed on every call and never cached.

use super::demand::{DemandMetrics, DemandStats};
use super::regional::{RegionalPrice, RegionalPriceConverter};
use crate::catalog::{PricingTier, ReferenceRepository};
use crate::config::DynamicPricingConfig;
use crate::error::{EngineError, EntityKind};
use crate::telemetry::{record_lookup_failure, record_multiplier, record_operation, Operation};
use chrono::{DateTime, TimeDelta, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Itemized multipliers behind a dynamic quote
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AdjustmentFactors {
    pub demand: Decimal,
    pub competitive: Decimal,
    pub seasonal: Decimal,
    /// Product of the three factors
    pub total: Decimal,
}

/// Direction suggested by a quote's total multiplier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceOutlook {
    Raise,
    Maintain,
    Discount,
}

impl PriceOutlook {
    /// Fixed advice list for this outlook
    pub fn recommendations(&self) -> Vec<String> {
        let lines: [&str; 3] = match self {
            PriceOutlook::Raise => [
                "Demand is running hot: consider raising the price",
                "Add premium features to support the higher price point",
                "Watch competitor pricing for a reaction",
            ],
            PriceOutlook::Discount => [
                "Demand is soft: consider a time-limited discount",
                "Bundle add-on services to lift perceived value",
                "Review positioning against lower-priced competitors",
            ],
            PriceOutlook::Maintain => [
                "Maintain the current price",
                "Invest in feature improvements rather than price changes",
                "Keep tracking demand against the historical baseline",
            ],
        };
        lines.iter().map(|s| s.to_string()).collect()
    }
}

/// Result of a dynamic pricing computation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DynamicPriceQuote {
    pub tier: String,
    pub region: String,
    /// Tier base price before adjustment
    pub original_price: Decimal,
    /// Base price times the total multiplier
    pub adjusted_price: Decimal,
    pub adjustment_factors: AdjustmentFactors,
    /// Adjusted price converted for the region
    pub regional_price: RegionalPrice,
    pub valid_from: DateTime<Utc>,
    /// Advisory expiry; callers re-invoke after this
    pub valid_until: DateTime<Utc>,
    /// Confidence in [min_confidence, 1]
    pub confidence: Decimal,
    pub outlook: PriceOutlook,
    pub recommendations: Vec<String>,
}

impl DynamicPriceQuote {
    /// Whether the quote is still inside its validity window at `now`
    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.valid_from && now < self.valid_until
    }
}

/// Source of the competitive multiplier
///
/// No competitor price feed is integrated yet; [`NeutralCompetition`] is
/// the only implementation.
pub trait CompetitivePricing: Send + Sync {
    fn multiplier(&self, region: &str, tier: &str, competitor_activity: Decimal) -> Decimal;
}

/// Competitive multiplier that never moves the price
#[derive(Debug, Clone, Copy, Default)]
pub struct NeutralCompetition;

impl CompetitivePricing for NeutralCompetition {
    fn multiplier(&self, _region: &str, _tier: &str, _competitor_activity: Decimal) -> Decimal {
        Decimal::ONE
    }
}

/// Computes demand-adjusted regional quotes
pub struct DynamicPricer {
    tiers: Arc<dyn ReferenceRepository<PricingTier>>,
    converter: RegionalPriceConverter,
    competition: Box<dyn CompetitivePricing>,
    config: DynamicPricingConfig,
}

impl DynamicPricer {
    pub fn new(
        tiers: Arc<dyn ReferenceRepository<PricingTier>>,
        converter: RegionalPriceConverter,
        config: DynamicPricingConfig,
    ) -> Self {
        Self {
            tiers,
            converter,
            competition: Box::new(NeutralCompetition),
            config,
        }
    }

    /// Replace the competitive multiplier source
    pub fn with_competition(mut self, competition: Box<dyn CompetitivePricing>) -> Self {
        self.competition = competition;
        self
    }

    /// Compute a quote valid from now
    pub fn compute(
        &self,
        region: &str,
        tier: &str,
        demand: &DemandMetrics,
    ) -> Result<DynamicPriceQuote, EngineError> {
        self.compute_at(region, tier, demand, Utc::now())
    }

    /// Compute a quote valid from `now`
    pub fn compute_at(
        &self,
        region: &str,
        tier: &str,
        demand: &DemandMetrics,
        now: DateTime<Utc>,
    ) -> Result<DynamicPriceQuote, EngineError> {
        let pricing_tier = self.tiers.get(tier).ok_or_else(|| {
            record_lookup_failure(EntityKind::Tier);
            tracing::warn!(tier, "Unknown tier");
            EngineError::not_found(EntityKind::Tier, tier)
        })?;

        let stats = DemandStats::from_history(&demand.historical)?;
        if stats.mean <= Decimal::ZERO {
            return Err(EngineError::InvalidInput(format!(
                "historical demand mean must be positive, got {}",
                stats.mean
            )));
        }

        let factors = AdjustmentFactors::compose(
            self.demand_multiplier(demand.current, stats.mean),
            self.competition
                .multiplier(region, tier, demand.competitor_activity),
            self.seasonal_multiplier(demand.seasonality)?,
        )?;

        let original_price = pricing_tier.base_price;
        let adjusted_price = original_price
            .checked_mul(factors.total)
            .ok_or_else(|| EngineError::overflow("adjusted price"))?;
        let valid_until = TimeDelta::try_hours(self.config.validity_hours)
            .and_then(|window| now.checked_add_signed(window))
            .ok_or_else(|| {
                EngineError::InvalidInput(format!(
                    "validity window of {} hours is out of range",
                    self.config.validity_hours
                ))
            })?;
        let regional_price = self.converter.convert(adjusted_price, region, tier)?;

        let confidence = self.confidence(&stats);
        let outlook = self.outlook(factors.total);

        record_operation(Operation::DynamicQuote);
        record_multiplier(factors.total);
        tracing::debug!(
            region,
            tier,
            demand = %factors.demand,
            seasonal = %factors.seasonal,
            total = %factors.total,
            %confidence,
            "Dynamic price computed"
        );

        Ok(DynamicPriceQuote {
            tier: tier.to_string(),
            region: region.to_string(),
            original_price,
            adjusted_price,
            adjustment_factors: factors,
            regional_price,
            valid_from: now,
            valid_until,
            confidence,
            outlook,
            recommendations: outlook.recommendations(),
        })
    }

    /// current / historical mean, clamped to the configured band
    ///
    /// `historical_mean` is positive, so an overflowing quotient has the
    /// sign of `current` and saturates to the matching bound.
    fn demand_multiplier(&self, current: Decimal, historical_mean: Decimal) -> Decimal {
        let (floor, ceiling) = (self.config.demand_floor, self.config.demand_ceiling);
        match current.checked_div(historical_mean) {
            Some(ratio) => ratio.max(floor).min(ceiling),
            None if current.is_sign_negative() => floor,
            None => ceiling,
        }
    }

    /// 1 + seasonality * sensitivity, with seasonality clamped to [-1, 1]
    fn seasonal_multiplier(&self, seasonality: Decimal) -> Result<Decimal, EngineError> {
        let seasonality = seasonality.clamp(Decimal::NEGATIVE_ONE, Decimal::ONE);
        seasonality
            .checked_mul(self.config.seasonal_sensitivity)
            .and_then(|shift| Decimal::ONE.checked_add(shift))
            .ok_or_else(|| EngineError::overflow("seasonal multiplier"))
    }

    /// max(floor, data_quality * (1 - volatility))
    fn confidence(&self, stats: &DemandStats) -> Decimal {
        let data_quality = if stats.samples >= self.config.full_quality_samples {
            Decimal::ONE
        } else {
            self.config.reduced_quality_factor
        };
        (data_quality * (Decimal::ONE - stats.volatility)).max(self.config.min_confidence)
    }

    fn outlook(&self, total: Decimal) -> PriceOutlook {
        if total > self.config.raise_threshold {
            PriceOutlook::Raise
        } else if total < self.config.discount_threshold {
            PriceOutlook::Discount
        } else {
            PriceOutlook::Maintain
        }
    }
}

impl AdjustmentFactors {
    fn compose(
        demand: Decimal,
        competitive: Decimal,
        seasonal: Decimal,
    ) -> Result<Self, EngineError> {
        let total = demand
            .checked_mul(competitive)
            .and_then(|t| t.checked_mul(seasonal))
            .ok_or_else(|| EngineError::overflow("total multiplier"))?;
        Ok(Self {
            demand,
            competitive,
            seasonal,
            total,
        })
    }
}
