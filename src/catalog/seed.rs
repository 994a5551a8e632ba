//! Built-in reference tables
//!
//! Pricing tiers, regional purchasing-power data and market opportunities
//! shipped with the binary. A TOML catalog file can replace all of them.

use super::types::{
    BillingCycle, BusinessCase, MarketOpportunity, PricingTier, RegionalPricing, RiskLevel,
    TierLimits, UsageLimit,
};
use rust_decimal_macros::dec;

pub fn tiers() -> Vec<PricingTier> {
    vec![
        PricingTier {
            id: "starter".to_string(),
            name: "Starter".to_string(),
            base_price: dec!(9.99),
            billing_cycle: BillingCycle::Monthly,
            limits: TierLimits {
                domains: UsageLimit::Limited(5),
                records_per_domain: UsageLimit::Limited(100),
                monthly_queries: UsageLimit::Limited(1_000_000),
                team_members: UsageLimit::Limited(1),
            },
        },
        PricingTier {
            id: "professional".to_string(),
            name: "Professional".to_string(),
            base_price: dec!(49.99),
            billing_cycle: BillingCycle::Monthly,
            limits: TierLimits {
                domains: UsageLimit::Limited(50),
                records_per_domain: UsageLimit::Limited(1_000),
                monthly_queries: UsageLimit::Limited(25_000_000),
                team_members: UsageLimit::Limited(10),
            },
        },
        PricingTier {
            id: "business".to_string(),
            name: "Business".to_string(),
            base_price: dec!(199.99),
            billing_cycle: BillingCycle::Monthly,
            limits: TierLimits {
                domains: UsageLimit::Limited(500),
                records_per_domain: UsageLimit::Unlimited,
                monthly_queries: UsageLimit::Limited(250_000_000),
                team_members: UsageLimit::Limited(50),
            },
        },
        PricingTier {
            id: "enterprise".to_string(),
            name: "Enterprise".to_string(),
            base_price: dec!(9999),
            billing_cycle: BillingCycle::Annual,
            limits: TierLimits {
                domains: UsageLimit::Unlimited,
                records_per_domain: UsageLimit::Unlimited,
                monthly_queries: UsageLimit::Unlimited,
                team_members: UsageLimit::Unlimited,
            },
        },
    ]
}

fn region(
    code: &str,
    currency: &str,
    ppp_multiplier: rust_decimal::Decimal,
    tax_rate: rust_decimal::Decimal,
    tax_type: &str,
    payment_methods: &[&str],
) -> RegionalPricing {
    RegionalPricing {
        region: code.to_string(),
        currency: currency.to_string(),
        ppp_multiplier,
        tax_rate,
        tax_type: tax_type.to_string(),
        payment_methods: payment_methods.iter().map(|m| m.to_string()).collect(),
    }
}

pub fn regions() -> Vec<RegionalPricing> {
    vec![
        region("US", "USD", dec!(1.0), dec!(0.0), "Sales Tax", &["card", "paypal", "ach"]),
        region("GB", "GBP", dec!(0.90), dec!(0.20), "VAT", &["card", "paypal", "bacs"]),
        region("DE", "EUR", dec!(0.95), dec!(0.19), "VAT", &["card", "sepa", "paypal"]),
        region(
            "JP",
            "JPY",
            dec!(0.85),
            dec!(0.10),
            "Consumption Tax",
            &["card", "konbini", "paypay"],
        ),
        region("BR", "BRL", dec!(0.45), dec!(0.17), "ICMS", &["card", "pix", "boleto"]),
        region("IN", "INR", dec!(0.25), dec!(0.18), "GST", &["card", "upi", "netbanking"]),
        region("ID", "IDR", dec!(0.30), dec!(0.11), "PPN", &["card", "gopay", "ovo"]),
    ]
}

pub fn opportunities() -> Vec<MarketOpportunity> {
    vec![
        MarketOpportunity {
            id: "web3-dns".to_string(),
            name: "Web3 naming and resolution".to_string(),
            market_size: dec!(850000000),
            addressable_revenue: dec!(42000000),
            probability: dec!(0.75),
            risk_level: RiskLevel::Medium,
            business_case: BusinessCase {
                investment: dec!(2500000),
                roi_multiple: dec!(3.2),
                payback_months: 18,
            },
        },
        MarketOpportunity {
            id: "enterprise-security".to_string(),
            name: "Protective DNS for enterprises".to_string(),
            market_size: dec!(3200000000),
            addressable_revenue: dec!(160000000),
            probability: dec!(0.80),
            risk_level: RiskLevel::Low,
            business_case: BusinessCase {
                investment: dec!(5000000),
                roi_multiple: dec!(4.5),
                payback_months: 14,
            },
        },
        MarketOpportunity {
            id: "metaverse-domains".to_string(),
            name: "Metaverse domain registry analytics".to_string(),
            market_size: dec!(400000000),
            addressable_revenue: dec!(8000000),
            probability: dec!(0.35),
            risk_level: RiskLevel::High,
            business_case: BusinessCase {
                investment: dec!(3000000),
                roi_multiple: dec!(1.8),
                payback_months: 36,
            },
        },
        MarketOpportunity {
            id: "iot-dns".to_string(),
            name: "DNS for IoT device fleets".to_string(),
            market_size: dec!(1200000000),
            addressable_revenue: dec!(36000000),
            probability: dec!(0.60),
            risk_level: RiskLevel::Medium,
            business_case: BusinessCase {
                investment: dec!(4000000),
                roi_multiple: dec!(2.5),
                payback_months: 24,
            },
        },
        MarketOpportunity {
            id: "apac-edge".to_string(),
            name: "APAC edge resolver network".to_string(),
            market_size: dec!(2000000000),
            addressable_revenue: dec!(90000000),
            probability: dec!(0.55),
            risk_level: RiskLevel::High,
            business_case: BusinessCase {
                investment: dec!(12000000),
                roi_multiple: dec!(2.0),
                payback_months: 30,
            },
        },
    ]
}
