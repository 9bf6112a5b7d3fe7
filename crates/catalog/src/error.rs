//! Catalog error types.

use thiserror::Error;

use crate::SatelliteId;

/// Errors that can occur when building or rendering a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The listing could not be rendered as JSON.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A catalog must hold at least one satellite.
    #[error("Catalog must contain at least one satellite")]
    Empty,

    /// Two records share the same id.
    #[error("Duplicate satellite id: {0}")]
    DuplicateId(SatelliteId),
}

/// Result type for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;
