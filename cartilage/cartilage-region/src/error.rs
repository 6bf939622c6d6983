//! Error types for region selection.

use thiserror::Error;

/// Errors from region selection and refinement.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegionError {
    /// A selection or refinement step left no faces.
    ///
    /// Raised eagerly so a bad gap distance fails here instead of producing
    /// a nonsense blend or extrusion three stages later.
    #[error("region is empty after {stage}")]
    EmptyRegion {
        /// The step that produced the empty region.
        stage: &'static str,
    },

    /// Topology analysis failed.
    #[error(transparent)]
    Topology(#[from] cartilage_topology::TopologyError),

    /// Distance-query construction failed.
    #[error(transparent)]
    Sdf(#[from] cartilage_sdf::SdfError),

    /// Curvature computation failed.
    #[error(transparent)]
    Curvature(#[from] cartilage_curvature::CurvatureError),
}

/// Result alias for region operations.
pub type RegionResult<T> = Result<T, RegionError>;
