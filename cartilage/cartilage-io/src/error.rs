//! Error types for mesh and record I/O.

use thiserror::Error;

/// Errors from mesh and record I/O.
#[derive(Debug, Error)]
pub enum IoError {
    /// Underlying filesystem error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A malformed line in an OBJ file.
    #[error("OBJ parse error at line {line}: {message}")]
    Parse {
        /// 1-based line number.
        line: usize,
        /// What went wrong.
        message: String,
    },

    /// A face references a vertex that does not exist.
    #[error("OBJ face at line {line} references vertex {index} of {count}")]
    FaceIndexOutOfRange {
        /// 1-based line number.
        line: usize,
        /// The offending 1-based vertex reference.
        index: i64,
        /// Number of vertices read so far.
        count: usize,
    },

    /// JSON (de)serialization failed.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Result alias for I/O operations.
pub type IoResult<T> = Result<T, IoError>;
