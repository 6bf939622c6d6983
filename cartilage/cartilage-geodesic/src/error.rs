//! Error types for geodesic distance.

use thiserror::Error;

/// Errors from geodesic distance computation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeodesicError {
    /// No source vertices were given.
    #[error("geodesic distance needs at least one source vertex")]
    NoSources,

    /// A source vertex index is out of range.
    #[error("source vertex {0} out of range for {1} vertices")]
    SourceOutOfRange(u32, usize),
}

/// Result alias for geodesic operations.
pub type GeodesicResult<T> = Result<T, GeodesicError>;
