//! Invariants checked over a grid of inputs

use dns_pricing_engine::catalog::{
    BusinessCase, Catalog, InMemoryRepository, MarketOpportunity, RiskLevel,
};
use dns_pricing_engine::config::{Config, ScoringConfig};
use dns_pricing_engine::opportunity::{OpportunityScorer, Recommendation};
use dns_pricing_engine::pricing::DemandMetrics;
use dns_pricing_engine::PricingEngine;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::sync::Arc;

fn engine() -> PricingEngine {
    PricingEngine::new(Catalog::seeded().unwrap(), &Config::default()).unwrap()
}

#[test]
fn test_conversion_formulas_for_all_regions() {
    let engine = engine();
    for region in engine.regions() {
        for base in [dec!(0), dec!(1), dec!(9.99), dec!(100), dec!(9999)] {
            let price = engine
                .convert_regional_price(base, &region.region, "any")
                .unwrap();
            assert_eq!(price.local_price, base * region.ppp_multiplier);
            assert_eq!(
                price.tax_included,
                price.local_price * (Decimal::ONE + region.tax_rate)
            );
            assert_eq!(price.savings, base - price.local_price);
            // Idempotent
            assert_eq!(
                engine
                    .convert_regional_price(base, &region.region, "any")
                    .unwrap(),
                price
            );
        }
    }
}

#[test]
fn test_dynamic_bounds_over_extreme_inputs() {
    let engine = engine();
    let histories = [
        vec![dec!(1)],
        vec![dec!(10), dec!(1000)],
        vec![dec!(100); 24],
        vec![dec!(0.001), dec!(5000), dec!(3), dec!(77)],
        vec![dec!(0.5), dec!(0.5)],
        vec![Decimal::MAX],
    ];
    let currents = [
        Decimal::MIN,
        dec!(0),
        dec!(0.5),
        dec!(100),
        dec!(100000000),
        Decimal::MAX,
    ];
    let seasonalities = [
        Decimal::MIN,
        dec!(-1),
        dec!(-0.25),
        dec!(0),
        dec!(0.75),
        Decimal::MAX,
    ];

    for history in &histories {
        for &current in &currents {
            for &seasonality in &seasonalities {
                let quote = engine
                    .compute_dynamic_price(
                        "BR",
                        "starter",
                        &DemandMetrics {
                            current,
                            historical: history.clone(),
                            seasonality,
                            competitor_activity: dec!(0),
                        },
                    )
                    .unwrap();
                let f = quote.adjustment_factors;
                assert!(f.demand >= dec!(0.8) && f.demand <= dec!(1.2));
                assert!(f.seasonal >= dec!(0.9) && f.seasonal <= dec!(1.1));
                assert!(quote.confidence >= dec!(0.3) && quote.confidence <= dec!(1));
            }
        }
    }
}

#[test]
fn test_scores_bounded_over_grid() {
    let mut records = Vec::new();
    let mut n = 0;
    for size in [dec!(0), dec!(1000000), dec!(850000000), Decimal::MAX] {
        for probability in [dec!(0), dec!(0.5), dec!(1)] {
            for roi in [dec!(0), dec!(2.5), Decimal::MAX] {
                for risk in [RiskLevel::Low, RiskLevel::Medium, RiskLevel::High] {
                    n += 1;
                    records.push(MarketOpportunity {
                        id: format!("opp-{}", n),
                        name: "grid".to_string(),
                        market_size: size,
                        addressable_revenue: dec!(0),
                        probability,
                        risk_level: risk,
                        business_case: BusinessCase {
                            investment: dec!(1),
                            roi_multiple: roi,
                            payback_months: 1,
                        },
                    });
                }
            }
        }
    }

    let repo = InMemoryRepository::from_records("opportunity", records).unwrap();
    let scorer = OpportunityScorer::new(Arc::new(repo), ScoringConfig::default());
    for result in scorer.rank() {
        assert!(result.score >= dec!(0));
        assert!(result.score <= dec!(100));
        let expected = if result.score >= dec!(70) {
            Recommendation::Pursue
        } else if result.score >= dec!(50) {
            Recommendation::Monitor
        } else {
            Recommendation::Pass
        };
        assert_eq!(result.recommendation, expected);
    }
}
