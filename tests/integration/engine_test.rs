//! End-to-end tests of the engine operations

use dns_pricing_engine::catalog::Catalog;
use dns_pricing_engine::config::Config;
use dns_pricing_engine::opportunity::Recommendation;
use dns_pricing_engine::pricing::{DemandMetrics, PriceOutlook};
use dns_pricing_engine::strategy::{PerformanceSnapshot, Priority};
use dns_pricing_engine::{EngineError, EntityKind, PricingEngine};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn engine() -> PricingEngine {
    PricingEngine::new(Catalog::seeded().unwrap(), &Config::default()).unwrap()
}

#[test]
fn test_japan_scenario() {
    let price = engine()
        .convert_regional_price(dec!(100), "JP", "professional")
        .unwrap();
    assert_eq!(price.local_price, dec!(85));
    assert_eq!(price.tax_included, dec!(93.5));
    assert_eq!(price.savings, dec!(15));
    assert_eq!(price.currency, "JPY");
}

#[test]
fn test_india_scenario() {
    let price = engine()
        .convert_regional_price(dec!(100), "IN", "professional")
        .unwrap();
    assert_eq!(price.local_price, dec!(25));
    assert_eq!(price.tax_included, dec!(29.5));
    assert_eq!(price.savings, dec!(75));
}

#[test]
fn test_web3_opportunity_scenario() {
    let score = engine().score_opportunity("web3-dns").unwrap();
    assert_eq!(score.score, dec!(66.5));
    assert_eq!(score.recommendation, Recommendation::Monitor);
    assert!(!score.risk_mitigation.is_empty());
}

#[test]
fn test_optimize_low_conversion_scenario() {
    let proposals = engine().optimize_strategy(&PerformanceSnapshot {
        conversion_rate: dec!(0.05),
        churn_rate: dec!(0.03),
        customer_satisfaction: dec!(4.2),
        competitive_position: dec!(0.5),
    });
    assert_eq!(proposals.len(), 1);
    assert_eq!(proposals[0].strategy, "Lower Price Point");
    assert_eq!(proposals[0].priority, Priority::High);
}

#[test]
fn test_dynamic_quote_end_to_end() {
    let engine = engine();
    let quote = engine
        .compute_dynamic_price(
            "DE",
            "business",
            &DemandMetrics {
                current: dec!(130),
                historical: vec![dec!(100); 12],
                seasonality: dec!(0.5),
                competitor_activity: dec!(0.2),
            },
        )
        .unwrap();

    // demand capped at 1.2, seasonal 1.05
    assert_eq!(quote.adjustment_factors.total, dec!(1.26));
    assert_eq!(quote.outlook, PriceOutlook::Raise);
    assert_eq!(quote.recommendations.len(), 3);
    assert_eq!(quote.confidence, dec!(1));
    assert_eq!(
        quote.regional_price.local_price,
        dec!(199.99) * dec!(1.26) * dec!(0.95)
    );
}

#[test]
fn test_unknown_identifiers_raise_not_found() {
    let engine = engine();
    let demand = DemandMetrics {
        current: dec!(1),
        historical: vec![dec!(1)],
        seasonality: dec!(0),
        competitor_activity: dec!(0),
    };

    assert_eq!(
        engine.convert_regional_price(dec!(10), "XX", "starter"),
        Err(EngineError::not_found(EntityKind::Region, "XX"))
    );
    assert_eq!(
        engine.compute_dynamic_price("US", "nope", &demand).unwrap_err(),
        EngineError::not_found(EntityKind::Tier, "nope")
    );
    assert_eq!(
        engine.compute_dynamic_price("XX", "starter", &demand).unwrap_err(),
        EngineError::not_found(EntityKind::Region, "XX")
    );
    assert_eq!(
        engine.score_opportunity("nope").unwrap_err(),
        EngineError::not_found(EntityKind::Opportunity, "nope")
    );
}

#[test]
fn test_rank_opportunities() {
    let ranking = engine().rank_opportunities();
    assert_eq!(ranking.len(), 5);
    for pair in ranking.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
}

#[test]
fn test_engines_are_independent() {
    let mut strict = Config::default();
    strict.optimizer.low_conversion_rate = dec!(0.01);
    let strict_engine = PricingEngine::new(Catalog::seeded().unwrap(), &strict).unwrap();
    let default_engine = engine();

    let snapshot = PerformanceSnapshot {
        conversion_rate: dec!(0.05),
        churn_rate: dec!(0.0),
        customer_satisfaction: dec!(3),
        competitive_position: dec!(0.5),
    };
    assert!(strict_engine.optimize_strategy(&snapshot).is_empty());
    assert_eq!(default_engine.optimize_strategy(&snapshot).len(), 1);
}

#[test]
fn test_extreme_demand_does_not_panic() {
    let engine = engine();
    let extreme = |current, historical| DemandMetrics {
        current,
        historical,
        seasonality: dec!(0),
        competitor_activity: dec!(0),
    };

    let quote = engine
        .compute_dynamic_price("US", "starter", &extreme(Decimal::MAX, vec![dec!(0.5), dec!(0.5)]))
        .unwrap();
    assert_eq!(quote.adjustment_factors.demand, dec!(1.2));

    let err = engine
        .compute_dynamic_price(
            "US",
            "starter",
            &extreme(dec!(1), vec![Decimal::MAX, Decimal::MAX]),
        )
        .unwrap_err();
    assert!(matches!(err, EngineError::InvalidInput(_)));
}

#[test]
fn test_invalid_config_is_rejected_at_construction() {
    let mut config = Config::default();
    config.dynamic_pricing.demand_floor = dec!(1.5);
    assert!(PricingEngine::new(Catalog::seeded().unwrap(), &config).is_err());
}
