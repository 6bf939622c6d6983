//! Error types for wall construction.

use thiserror::Error;

/// Errors from wall construction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WallError {
    /// A boundary loop has fewer than three vertices.
    #[error("boundary loop has {len} vertices, need at least 3")]
    DegenerateLoop {
        /// Vertex count of the offending loop.
        len: usize,
    },

    /// A boundary loop has (near) zero total length.
    #[error("boundary loop has zero length")]
    ZeroLengthLoop,

    /// A loop vertex index is out of range.
    #[error("loop vertex {0} out of range for {1} vertices")]
    VertexOutOfRange(u32, usize),
}

/// Result alias for wall construction.
pub type WallResult<T> = Result<T, WallError>;
