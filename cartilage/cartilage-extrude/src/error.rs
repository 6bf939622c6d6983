//! Error types for extrusion.

use thiserror::Error;

/// Errors from extrusion.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtrudeError {
    /// The input mesh has no faces, so vertex normals are undefined.
    #[error("cannot extrude an empty mesh")]
    EmptyMesh,

    /// The thickness field does not match the vertex count.
    #[error("thickness field has {got} entries for {expected} vertices")]
    FieldSizeMismatch {
        /// Vertex count of the mesh.
        expected: usize,
        /// Length of the provided field.
        got: usize,
    },
}

/// Result alias for extrusion.
pub type ExtrudeResult<T> = Result<T, ExtrudeError>;
