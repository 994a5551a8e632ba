//! Telemetry module
//!
//! Structured logging and engine metrics

mod logging;
mod metrics;

pub use logging::init_logging;
pub use metrics::{
    record_lookup_failure, record_multiplier, record_operation, record_proposals, Operation,
};

use crate::config::TelemetryConfig;

/// Initialize all telemetry subsystems
pub fn init_telemetry(config: &TelemetryConfig) -> anyhow::Result<()> {
    init_logging(&config.log_level, config.log_format)?;
    tracing::debug!(
        level = %config.log_level,
        format = ?config.log_format,
        "Telemetry initialized"
    );
    Ok(())
}
