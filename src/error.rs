//! Engine error types

use crate::catalog::CatalogError;
use std::fmt;
use thiserror::Error;

/// Kind of reference entity a lookup was made against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    /// Pricing tier
    Tier,
    /// Regional pricing entry
    Region,
    /// Market opportunity
    Opportunity,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EntityKind::Tier => "tier",
            EntityKind::Region => "region",
            EntityKind::Opportunity => "opportunity",
        };
        f.write_str(name)
    }
}

/// Errors surfaced by engine operations
#[derive(Debug, Error, PartialEq)]
pub enum EngineError {
    /// Identifier is not registered in the reference tables
    #[error("Unknown {kind}: {id}")]
    NotFound { kind: EntityKind, id: String },
    /// Caller supplied input the formulas cannot handle
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl EngineError {
    pub fn not_found(kind: EntityKind, id: impl Into<String>) -> Self {
        EngineError::NotFound {
            kind,
            id: id.into(),
        }
    }

    /// A computed quantity left the representable decimal range
    pub fn overflow(quantity: &str) -> Self {
        EngineError::InvalidInput(format!("{} overflows the decimal range", quantity))
    }

    /// True for lookup failures
    pub fn is_not_found(&self) -> bool {
        matches!(self, EngineError::NotFound { .. })
    }
}

/// Errors raised while building an engine
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("Invalid configuration: {}", .0.join("; "))]
    InvalidConfig(Vec<String>),

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
