//! Demand metrics and historical statistics

use crate::error::EngineError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Demand observations supplied with a dynamic pricing request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemandMetrics {
    /// Current period demand count
    pub current: Decimal,
    /// Historical demand counts, oldest first
    pub historical: Vec<Decimal>,
    /// Seasonality index, roughly in [-1, 1]
    pub seasonality: Decimal,
    /// Competitor activity index
    pub competitor_activity: Decimal,
}

/// Summary statistics over a demand history
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DemandStats {
    /// Number of samples
    pub samples: usize,
    /// Arithmetic mean
    pub mean: Decimal,
    /// Coefficient of variation clamped to [0, 1]
    pub volatility: Decimal,
}

impl DemandStats {
    /// Compute statistics over a non-empty history
    pub fn from_history(history: &[Decimal]) -> Result<Self, EngineError> {
        if history.is_empty() {
            return Err(EngineError::InvalidInput(
                "historical demand must not be empty".to_string(),
            ));
        }

        let samples = history.len();
        let total = history
            .iter()
            .try_fold(Decimal::ZERO, |acc, v| acc.checked_add(*v))
            .ok_or_else(|| EngineError::overflow("historical demand total"))?;
        let mean = total / Decimal::from(samples);

        Ok(Self {
            samples,
            mean,
            volatility: coefficient_of_variation(history, mean),
        })
    }
}

/// Population standard deviation over mean, clamped to [0, 1]
///
/// Fewer than two samples, or a non-positive mean, give maximal volatility.
fn coefficient_of_variation(history: &[Decimal], mean: Decimal) -> Decimal {
    if history.len() < 2 || mean <= Decimal::ZERO {
        return Decimal::ONE;
    }

    let values: Vec<f64> = history
        .iter()
        .map(|v| f64::try_from(*v).unwrap_or(0.0))
        .collect();
    let n = values.len() as f64;
    let mean_f = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean_f).powi(2)).sum::<f64>() / n;
    let std_dev = variance.sqrt();

    let cv = Decimal::try_from(std_dev / mean_f).unwrap_or(Decimal::ONE);
    cv.clamp(Decimal::ZERO, Decimal::ONE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_empty_history() {
        let err = DemandStats::from_history(&[]).unwrap_err();
        assert!(matches!(err, EngineError::InvalidInput(_)));
    }

    #[test]
    fn test_overflowing_history_is_rejected() {
        let err = DemandStats::from_history(&[Decimal::MAX, Decimal::MAX]).unwrap_err();
        assert_eq!(err, EngineError::overflow("historical demand total"));
    }

    #[test]
    fn test_single_extreme_sample() {
        let stats = DemandStats::from_history(&[Decimal::MAX]).unwrap();
        assert_eq!(stats.mean, Decimal::MAX);
        assert_eq!(stats.volatility, dec!(1));
    }

    #[test]
    fn test_single_sample_is_maximally_volatile() {
        let stats = DemandStats::from_history(&[dec!(100)]).unwrap();
        assert_eq!(stats.samples, 1);
        assert_eq!(stats.mean, dec!(100));
        assert_eq!(stats.volatility, dec!(1));
    }

    #[test]
    fn test_constant_history_has_zero_volatility() {
        let stats = DemandStats::from_history(&[dec!(50); 6]).unwrap();
        assert_eq!(stats.mean, dec!(50));
        assert_eq!(stats.volatility, dec!(0));
    }

    #[test]
    fn test_known_coefficient_of_variation() {
        // mean 100, population std dev 10
        let stats = DemandStats::from_history(&[dec!(90), dec!(110)]).unwrap();
        assert_eq!(stats.mean, dec!(100));
        assert!((stats.volatility - dec!(0.1)).abs() < dec!(0.0000001));
    }

    #[test]
    fn test_volatility_clamped_to_one() {
        let stats = DemandStats::from_history(&[dec!(0), dec!(0), dec!(0), dec!(1000)]).unwrap();
        assert_eq!(stats.volatility, dec!(1));
    }

    #[test]
    fn test_zero_mean_is_maximally_volatile() {
        let stats = DemandStats::from_history(&[dec!(0), dec!(0)]).unwrap();
        assert_eq!(stats.mean, dec!(0));
        assert_eq!(stats.volatility, dec!(1));
    }
}
