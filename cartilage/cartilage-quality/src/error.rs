//! Error types for quality control.

use thiserror::Error;

/// Errors from boundary quality control.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QualityError {
    /// Topology analysis failed.
    #[error(transparent)]
    Topology(#[from] cartilage_topology::TopologyError),

    /// Distance-query construction failed.
    #[error(transparent)]
    Sdf(#[from] cartilage_sdf::SdfError),
}

/// Result alias for quality control.
pub type QualityResult<T> = Result<T, QualityError>;
