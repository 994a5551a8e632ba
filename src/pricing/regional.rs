//! Purchasing-power and tax conversion of reference prices

use crate::catalog::{ReferenceRepository, RegionalPricing};
use crate::error::{EngineError, EntityKind};
use crate::telemetry::{record_lookup_failure, record_operation, Operation};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A reference price converted for one region
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionalPrice {
    pub region: String,
    /// Tier label the price was requested for
    pub tier: String,
    /// Reference (USD) price the conversion started from
    pub base_price: Decimal,
    /// PPP-adjusted price
    pub local_price: Decimal,
    pub currency: String,
    /// Whether a PPP discount was applied
    pub ppp_adjusted: bool,
    pub tax_amount: Decimal,
    /// Local price plus tax
    pub tax_included: Decimal,
    pub tax_type: String,
    /// Base price minus local price
    pub savings: Decimal,
    pub payment_methods: Vec<String>,
}

/// Converts reference prices using regional PPP multipliers and tax rates
#[derive(Clone)]
pub struct RegionalPriceConverter {
    regions: Arc<dyn ReferenceRepository<RegionalPricing>>,
}

impl RegionalPriceConverter {
    pub fn new(regions: Arc<dyn ReferenceRepository<RegionalPricing>>) -> Self {
        Self { regions }
    }

    /// Convert `base_price` for `region`
    ///
    /// `tier` is carried through as a label; the price itself is
    /// caller-supplied.
    pub fn convert(
        &self,
        base_price: Decimal,
        region: &str,
        tier: &str,
    ) -> Result<RegionalPrice, EngineError> {
        if base_price < Decimal::ZERO {
            return Err(EngineError::InvalidInput(format!(
                "base price must be non-negative, got {}",
                base_price
            )));
        }

        let regional = self.regions.get(region).ok_or_else(|| {
            record_lookup_failure(EntityKind::Region);
            tracing::warn!(region, "Unknown region");
            EngineError::not_found(EntityKind::Region, region)
        })?;

        let price = apply(&regional, base_price, tier)?;
        record_operation(Operation::RegionalConversion);
        tracing::debug!(
            region,
            tier,
            %base_price,
            local_price = %price.local_price,
            tax_included = %price.tax_included,
            "Regional price converted"
        );
        Ok(price)
    }

    /// Convert `base_price` for every registered region, ordered by code
    pub fn convert_all(
        &self,
        base_price: Decimal,
        tier: &str,
    ) -> Result<Vec<RegionalPrice>, EngineError> {
        if base_price < Decimal::ZERO {
            return Err(EngineError::InvalidInput(format!(
                "base price must be non-negative, got {}",
                base_price
            )));
        }

        self.regions
            .get_all()
            .iter()
            .map(|regional| apply(regional, base_price, tier))
            .collect()
    }
}

fn apply(
    regional: &RegionalPricing,
    base_price: Decimal,
    tier: &str,
) -> Result<RegionalPrice, EngineError> {
    let local_price = base_price
        .checked_mul(regional.ppp_multiplier)
        .ok_or_else(|| EngineError::overflow("local price"))?;
    let tax_amount = local_price
        .checked_mul(regional.tax_rate)
        .ok_or_else(|| EngineError::overflow("tax amount"))?;
    let tax_included = local_price
        .checked_add(tax_amount)
        .ok_or_else(|| EngineError::overflow("tax-inclusive price"))?;
    let savings = base_price
        .checked_sub(local_price)
        .ok_or_else(|| EngineError::overflow("savings"))?;

    Ok(RegionalPrice {
        region: regional.region.clone(),
        tier: tier.to_string(),
        base_price,
        local_price,
        currency: regional.currency.clone(),
        ppp_adjusted: regional.ppp_multiplier != Decimal::ONE,
        tax_amount,
        tax_included,
        tax_type: regional.tax_type.clone(),
        savings,
        payment_methods: regional.payment_methods.clone(),
    })
}
