//! Integration tests for catalog loading

use dns_pricing_engine::catalog::{CatalogError, CatalogFile, CatalogSource, TomlCatalogSource};
use dns_pricing_engine::config::Config;
use dns_pricing_engine::PricingEngine;
use rust_decimal_macros::dec;
use std::io::Write;

const CATALOG: &str = r#"
    [[tiers]]
    id = "hobby"
    name = "Hobby"
    base_price = 5
    billing_cycle = "monthly"
    limits = { domains = 1, records_per_domain = 50, monthly_queries = 100000, team_members = 1 }

    [[regions]]
    region = "MX"
    currency = "MXN"
    ppp_multiplier = 0.5
    tax_rate = 0.16
    tax_type = "IVA"
    payment_methods = ["card", "oxxo"]

    [[opportunities]]
    id = "latam-resellers"
    name = "LATAM reseller channel"
    market_size = 300000000
    addressable_revenue = 9000000
    probability = 0.6
    risk_level = "low"
    business_case = { investment = 800000, roi_multiple = 2.0, payback_months = 12 }
"#;

fn write_catalog(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[tokio::test]
async fn test_toml_source_loads_file() {
    let file = write_catalog(CATALOG);
    let catalog = TomlCatalogSource::new(file.path()).load().await.unwrap();

    assert_eq!(catalog.tiers.len(), 1);
    assert_eq!(catalog.regions.get("MX").unwrap().tax_rate, dec!(0.16));
    assert!(catalog.regions.get("JP").is_none());
}

#[tokio::test]
async fn test_engine_from_config_with_catalog_path() {
    let file = write_catalog(CATALOG);
    let mut config = Config::default();
    config.catalog.path = Some(file.path().to_path_buf());

    let engine = PricingEngine::from_config(&config).await.unwrap();

    let price = engine
        .convert_regional_price(dec!(100), "MX", "hobby")
        .unwrap();
    assert_eq!(price.local_price, dec!(50));
    assert_eq!(price.tax_included, dec!(58));

    // Seed regions are replaced, not merged
    assert!(engine
        .convert_regional_price(dec!(100), "JP", "hobby")
        .unwrap_err()
        .is_not_found());

    let score = engine.score_opportunity("latam-resellers").unwrap();
    // 6 + 18 + 20 - 0
    assert_eq!(score.score, dec!(44));
}

#[tokio::test]
async fn test_invalid_region_in_file_rejected() {
    let file = write_catalog(
        r#"
        [[regions]]
        region = "ZZ"
        currency = "ZZZ"
        ppp_multiplier = 1.5
        tax_rate = 0.1
        tax_type = "VAT"
        "#,
    );
    let result = TomlCatalogSource::new(file.path()).load().await;
    assert!(matches!(result, Err(CatalogError::InvalidRecord { .. })));
}

#[tokio::test]
async fn test_seed_export_can_be_reloaded() {
    let text = toml::to_string_pretty(&CatalogFile::from_seed()).unwrap();
    let file = write_catalog(&text);
    let catalog = TomlCatalogSource::new(file.path()).load().await.unwrap();
    assert_eq!(catalog.opportunities.len(), 5);
    assert_eq!(
        catalog.regions.get("IN").unwrap().ppp_multiplier,
        dec!(0.25)
    );
}
