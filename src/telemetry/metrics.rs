//! Engine metrics
//!
//! Counters and histograms go through the `metrics` facade. Without an
//! installed recorder they are no-ops.

use crate::error::EntityKind;
use rust_decimal::Decimal;

/// Counted engine operations
#[derive(Debug, Clone, Copy)]
pub enum Operation {
    /// Regional price conversion
    RegionalConversion,
    /// Dynamic price quote
    DynamicQuote,
    /// Opportunity score
    OpportunityScore,
}

/// Count one completed operation
pub fn record_operation(operation: Operation) {
    let metric_name = match operation {
        Operation::RegionalConversion => "pricing_regional_conversions_total",
        Operation::DynamicQuote => "pricing_dynamic_quotes_total",
        Operation::OpportunityScore => "pricing_opportunity_scores_total",
    };

    ::metrics::counter!(metric_name).increment(1);
}

/// Count proposals emitted by the strategy optimizer
pub fn record_proposals(count: usize) {
    ::metrics::counter!("pricing_strategy_proposals_total").increment(count as u64);
}

/// Count a lookup against an unregistered id
pub fn record_lookup_failure(kind: EntityKind) {
    let label = match kind {
        EntityKind::Tier => "tier",
        EntityKind::Region => "region",
        EntityKind::Opportunity => "opportunity",
    };

    ::metrics::counter!("pricing_lookup_failures_total", "kind" => label).increment(1);
}

/// Record the total multiplier of a dynamic quote
pub fn record_multiplier(total: Decimal) {
    let value = f64::try_from(total).unwrap_or(0.0);
    ::metrics::histogram!("pricing_dynamic_multiplier").record(value);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_recording_without_recorder_is_noop() {
        record_operation(Operation::DynamicQuote);
        record_proposals(3);
        record_lookup_failure(EntityKind::Region);
        record_multiplier(dec!(1.32));
    }
}
