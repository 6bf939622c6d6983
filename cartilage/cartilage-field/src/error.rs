//! Error types for field construction.

use thiserror::Error;

/// Errors from thickness-field construction.
#[derive(Debug, Error, PartialEq)]
pub enum FieldError {
    /// No constraint vertices were given to the blend solve.
    #[error("boundary-value blend needs at least one constrained vertex")]
    NoConstraints,

    /// A constrained vertex index is out of range.
    #[error("constrained vertex {0} out of range for {1} vertices")]
    ConstraintOutOfRange(u32, usize),

    /// The conjugate-gradient solve did not reach the tolerance.
    #[error("blend solve stalled at relative residual {residual:.3e}")]
    SolveFailed {
        /// Relative residual at the final iteration.
        residual: f64,
    },

    /// No vertices were given for thickness assignment.
    #[error("thickness assignment needs at least one vertex")]
    NoVertices,

    /// Geodesic distance failed.
    #[error(transparent)]
    Geodesic(#[from] cartilage_geodesic::GeodesicError),

    /// Distance-query construction failed.
    #[error(transparent)]
    Sdf(#[from] cartilage_sdf::SdfError),
}

/// Result alias for field operations.
pub type FieldResult<T> = Result<T, FieldError>;
