//! Error types for topology analysis.

use thiserror::Error;

/// Errors from topology analysis.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TopologyError {
    /// The face set is closed and has no boundary loop.
    #[error("face set has no boundary loop")]
    NoBoundary,

    /// The face set is empty.
    #[error("face set is empty")]
    EmptyFaceSet,
}

/// Result alias for topology operations.
pub type TopologyResult<T> = Result<T, TopologyError>;
