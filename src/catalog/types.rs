//! Reference data types
//!
//! Tiers, regional pricing and market opportunities. All of these are
//! loaded once and never mutated afterwards.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Entities stored in a reference repository are keyed by a string id
pub trait Identified {
    fn id(&self) -> &str;
}

/// Billing cycle of a pricing tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillingCycle {
    Monthly,
    Annual,
}

/// A single usage limit
///
/// Serialized as an integer where `-1` means unlimited. Limits above
/// `i64::MAX` have no wire form and fail to serialize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "i64")]
pub enum UsageLimit {
    Limited(u64),
    Unlimited,
}

impl UsageLimit {
    /// Wire sentinel for an unlimited allowance
    pub const UNLIMITED_SENTINEL: i64 = -1;

    pub fn is_unlimited(&self) -> bool {
        matches!(self, UsageLimit::Unlimited)
    }
}

impl TryFrom<i64> for UsageLimit {
    type Error = String;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            Self::UNLIMITED_SENTINEL => Ok(UsageLimit::Unlimited),
            v if v >= 0 => Ok(UsageLimit::Limited(v as u64)),
            v => Err(format!("usage limit must be >= 0 or -1 (unlimited), got {}", v)),
        }
    }
}

impl TryFrom<UsageLimit> for i64 {
    type Error = String;

    fn try_from(limit: UsageLimit) -> Result<Self, Self::Error> {
        match limit {
            UsageLimit::Limited(n) => {
                i64::try_from(n).map_err(|_| format!("usage limit {} exceeds i64::MAX", n))
            }
            UsageLimit::Unlimited => Ok(UsageLimit::UNLIMITED_SENTINEL),
        }
    }
}

impl Serialize for UsageLimit {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let value = i64::try_from(*self).map_err(<S::Error as serde::ser::Error>::custom)?;
        serializer.serialize_i64(value)
    }
}

impl fmt::Display for UsageLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UsageLimit::Limited(n) => write!(f, "{}", n),
            UsageLimit::Unlimited => f.write_str("unlimited"),
        }
    }
}

/// Usage limits attached to a tier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierLimits {
    /// Managed DNS zones
    pub domains: UsageLimit,
    /// Records per zone
    pub records_per_domain: UsageLimit,
    /// Resolved queries per month
    pub monthly_queries: UsageLimit,
    /// Seats
    pub team_members: UsageLimit,
}

/// A named pricing plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingTier {
    /// Tier identifier (e.g. "professional")
    pub id: String,
    /// Display name
    pub name: String,
    /// Base price in the reference currency (USD)
    pub base_price: Decimal,
    pub billing_cycle: BillingCycle,
    pub limits: TierLimits,
}

impl Identified for PricingTier {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Purchasing-power and tax data for one region
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionalPricing {
    /// Region code (e.g. "JP")
    pub region: String,
    /// ISO 4217 currency code
    pub currency: String,
    /// PPP multiplier relative to USD, in (0, 1]
    pub ppp_multiplier: Decimal,
    /// Tax rate as a fraction (0.10 = 10%)
    pub tax_rate: Decimal,
    /// Tax label (VAT, GST, ...)
    pub tax_type: String,
    /// Locally supported payment methods
    #[serde(default)]
    pub payment_methods: Vec<String>,
}

impl Identified for RegionalPricing {
    fn id(&self) -> &str {
        &self.region
    }
}

/// Qualitative risk level of an opportunity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        };
        f.write_str(name)
    }
}

/// Business case behind an opportunity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessCase {
    /// Required investment in USD
    pub investment: Decimal,
    /// Expected return as a multiple of the investment
    pub roi_multiple: Decimal,
    /// Months until break-even
    pub payback_months: u32,
}

/// A market opportunity record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketOpportunity {
    pub id: String,
    pub name: String,
    /// Total addressable market in USD
    pub market_size: Decimal,
    /// Revenue this product could realistically address, in USD
    pub addressable_revenue: Decimal,
    /// Probability of success in [0, 1]
    pub probability: Decimal,
    pub risk_level: RiskLevel,
    pub business_case: BusinessCase,
}

impl Identified for MarketOpportunity {
    fn id(&self) -> &str {
        &self.id
    }
}
