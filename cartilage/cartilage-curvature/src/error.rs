//! Error types for curvature computation.

use thiserror::Error;

/// Errors from curvature computation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CurvatureError {
    /// The mesh has no faces.
    #[error("cannot compute curvature on an empty mesh")]
    EmptyMesh,
}

/// Result alias for curvature operations.
pub type CurvatureResult<T> = Result<T, CurvatureError>;
