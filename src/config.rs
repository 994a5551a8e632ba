//! Configuration types for the pricing engine

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure
///
/// Every section falls back to its defaults, so an empty file is valid.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub dynamic_pricing: DynamicPricingConfig,
    pub scoring: ScoringConfig,
    pub optimizer: OptimizerConfig,
    pub catalog: CatalogConfig,
    pub telemetry: TelemetryConfig,
}

/// Dynamic pricing constants
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct DynamicPricingConfig {
    /// Lowest allowed demand multiplier
    pub demand_floor: Decimal,
    /// Highest allowed demand multiplier
    pub demand_ceiling: Decimal,
    /// Seasonal swing per unit of seasonality index
    pub seasonal_sensitivity: Decimal,
    /// How long a quote stays valid
    pub validity_hours: i64,
    /// Confidence never drops below this
    pub min_confidence: Decimal,
    /// History length needed for full data quality
    pub full_quality_samples: usize,
    /// Data quality factor for shorter histories
    pub reduced_quality_factor: Decimal,
    /// Total multiplier above which a price increase is suggested
    pub raise_threshold: Decimal,
    /// Total multiplier below which a discount is suggested
    pub discount_threshold: Decimal,
}

impl Default for DynamicPricingConfig {
    fn default() -> Self {
        Self {
            demand_floor: Decimal::new(8, 1),      // 0.8
            demand_ceiling: Decimal::new(12, 1),   // 1.2
            seasonal_sensitivity: Decimal::new(1, 1), // 0.1
            validity_hours: 24,
            min_confidence: Decimal::new(3, 1), // 0.3
            full_quality_samples: 12,
            reduced_quality_factor: Decimal::new(5, 1), // 0.5
            raise_threshold: Decimal::new(11, 1),       // 1.1
            discount_threshold: Decimal::new(9, 1),     // 0.9
        }
    }
}

/// Opportunity scoring weights and thresholds
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Points per $1B of market size
    pub market_size_points_per_billion: Decimal,
    pub market_size_cap: Decimal,
    /// Points for probability 1.0
    pub probability_weight: Decimal,
    /// Points per unit of ROI multiple
    pub roi_points_per_multiple: Decimal,
    pub roi_cap: Decimal,
    pub high_risk_penalty: Decimal,
    pub medium_risk_penalty: Decimal,
    pub low_risk_penalty: Decimal,
    /// Scores at or above this are "pursue"
    pub pursue_threshold: Decimal,
    /// Scores at or above this (and below pursue) are "monitor"
    pub monitor_threshold: Decimal,
    pub market_size_rationale_threshold: Decimal,
    pub probability_rationale_threshold: Decimal,
    pub roi_rationale_threshold: Decimal,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            market_size_points_per_billion: Decimal::from(20),
            market_size_cap: Decimal::from(100),
            probability_weight: Decimal::from(30),
            roi_points_per_multiple: Decimal::from(10),
            roi_cap: Decimal::from(40),
            high_risk_penalty: Decimal::from(10),
            medium_risk_penalty: Decimal::from(5),
            low_risk_penalty: Decimal::ZERO,
            pursue_threshold: Decimal::from(70),
            monitor_threshold: Decimal::from(50),
            market_size_rationale_threshold: Decimal::from(15),
            probability_rationale_threshold: Decimal::from(20),
            roi_rationale_threshold: Decimal::from(25),
        }
    }
}

/// Strategy optimizer trigger thresholds
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct OptimizerConfig {
    /// Conversion below this proposes a lower price point
    pub low_conversion_rate: Decimal,
    /// Churn above this proposes an annual incentive
    pub high_churn_rate: Decimal,
    /// Satisfaction above this proposes a premium tier
    pub high_satisfaction: Decimal,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            low_conversion_rate: Decimal::new(10, 2), // 0.10
            high_churn_rate: Decimal::new(5, 2),      // 0.05
            high_satisfaction: Decimal::new(45, 1),   // 4.5
        }
    }
}

/// Reference data location
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// TOML catalog file; the built-in seed data is used when absent
    pub path: Option<PathBuf>,
}

/// Telemetry configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TelemetryConfig {
    pub log_level: String,
    pub log_format: LogFormat,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
        }
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable format
    #[default]
    Pretty,
    /// JSON format for log aggregation
    Json,
}

/// Longest quote validity window accepted, one year
pub const MAX_VALIDITY_HOURS: i64 = 24 * 366;

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Check cross-field constraints, reporting every problem at once
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();
        let dp = &self.dynamic_pricing;

        if dp.demand_floor <= Decimal::ZERO {
            errors.push("dynamic_pricing.demand_floor: must be positive".to_string());
        }
        if dp.demand_floor > dp.demand_ceiling {
            errors.push(format!(
                "dynamic_pricing: demand_floor {} exceeds demand_ceiling {}",
                dp.demand_floor, dp.demand_ceiling
            ));
        }
        if dp.validity_hours <= 0 || dp.validity_hours > MAX_VALIDITY_HOURS {
            errors.push(format!(
                "dynamic_pricing.validity_hours: must be within [1, {}]",
                MAX_VALIDITY_HOURS
            ));
        }
        if dp.seasonal_sensitivity < Decimal::ZERO || dp.seasonal_sensitivity > Decimal::ONE {
            errors.push("dynamic_pricing.seasonal_sensitivity: must be within [0, 1]".to_string());
        }
        if dp.min_confidence < Decimal::ZERO || dp.min_confidence > Decimal::ONE {
            errors.push("dynamic_pricing.min_confidence: must be within [0, 1]".to_string());
        }
        if dp.discount_threshold > dp.raise_threshold {
            errors.push(format!(
                "dynamic_pricing: discount_threshold {} exceeds raise_threshold {}",
                dp.discount_threshold, dp.raise_threshold
            ));
        }

        let sc = &self.scoring;
        if sc.monitor_threshold > sc.pursue_threshold {
            errors.push(format!(
                "scoring: monitor_threshold {} exceeds pursue_threshold {}",
                sc.monitor_threshold, sc.pursue_threshold
            ));
        }
        for (name, value) in [
            ("high_risk_penalty", sc.high_risk_penalty),
            ("medium_risk_penalty", sc.medium_risk_penalty),
            ("low_risk_penalty", sc.low_risk_penalty),
        ] {
            if value < Decimal::ZERO {
                errors.push(format!("scoring.{}: must be non-negative", name));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.dynamic_pricing.demand_floor, dec!(0.8));
        assert_eq!(config.dynamic_pricing.demand_ceiling, dec!(1.2));
        assert_eq!(config.dynamic_pricing.validity_hours, 24);
        assert_eq!(config.scoring.pursue_threshold, dec!(70));
        assert_eq!(config.optimizer.high_satisfaction, dec!(4.5));
        assert!(config.catalog.path.is_none());
        assert_eq!(config.telemetry.log_format, LogFormat::Pretty);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_deserialize() {
        let toml = r#"
            [dynamic_pricing]
            demand_floor = 0.7
            validity_hours = 12

            [scoring]
            pursue_threshold = 75

            [optimizer]
            high_churn_rate = 0.08

            [catalog]
            path = "./catalog.toml"

            [telemetry]
            log_level = "debug"
            log_format = "json"
        "#;

        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.dynamic_pricing.demand_floor, dec!(0.7));
        // Unset fields keep their defaults
        assert_eq!(config.dynamic_pricing.demand_ceiling, dec!(1.2));
        assert_eq!(config.dynamic_pricing.validity_hours, 12);
        assert_eq!(config.scoring.pursue_threshold, dec!(75));
        assert_eq!(config.scoring.monitor_threshold, dec!(50));
        assert_eq!(config.optimizer.high_churn_rate, dec!(0.08));
        assert_eq!(
            config.catalog.path,
            Some(PathBuf::from("./catalog.toml"))
        );
        assert_eq!(config.telemetry.log_format, LogFormat::Json);
    }

    #[test]
    fn test_validate_reports_all_errors() {
        let mut config = Config::default();
        config.dynamic_pricing.demand_floor = dec!(1.5);
        config.dynamic_pricing.validity_hours = 0;
        config.scoring.monitor_threshold = dec!(80);

        let errors = config.validate().unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors[0].contains("demand_floor"));
    }

    #[test]
    fn test_validate_bounds_validity_window() {
        let mut config = Config::default();
        config.dynamic_pricing.validity_hours = MAX_VALIDITY_HOURS;
        assert!(config.validate().is_ok());

        config.dynamic_pricing.validity_hours = i64::MAX;
        let errors = config.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("validity_hours"));
    }

    #[test]
    fn test_validate_seasonal_sensitivity() {
        let mut config = Config::default();
        config.dynamic_pricing.seasonal_sensitivity = Decimal::MAX;
        let errors = config.validate().unwrap_err();
        assert!(errors[0].contains("seasonal_sensitivity"));
    }

    #[test]
    fn test_load_missing_file() {
        assert!(Config::load("/nonexistent/pricing.toml").is_err());
    }
}
