//! Error types for distance queries.

use thiserror::Error;

/// Errors from distance-query construction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SdfError {
    /// The target mesh has no faces.
    #[error("cannot build a distance query over an empty mesh")]
    EmptyMesh,

    /// The target point set is empty.
    #[error("cannot build a vertex index over an empty point set")]
    EmptyPointSet,
}

/// Result alias for distance queries.
pub type SdfResult<T> = Result<T, SdfError>;
