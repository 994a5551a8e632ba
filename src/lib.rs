//! dns-pricing-engine: pricing and market scoring for a managed DNS product
//!
//! This library provides the core components for:
//! - Reference catalog of pricing tiers, regional PPP data and market opportunities
//! - Regional price conversion with purchasing-power and tax adjustment
//! - Demand-driven dynamic pricing with confidence scoring
//! - Market opportunity viability scoring and ranking
//! - Rule-based pricing strategy recommendations
//! - Structured logging and metrics

pub mod catalog;
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod opportunity;
pub mod pricing;
pub mod strategy;
pub mod telemetry;

pub use engine::PricingEngine;
pub use error::{EngineError, EntityKind, SetupError};
