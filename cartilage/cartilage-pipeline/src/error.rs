//! Error type aggregating every pipeline stage.

use thiserror::Error;

/// Errors from a joint pipeline run.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Region selection or refinement failed.
    #[error(transparent)]
    Region(#[from] cartilage_region::RegionError),

    /// Thickness-field construction failed.
    #[error(transparent)]
    Field(#[from] cartilage_field::FieldError),

    /// Extrusion failed.
    #[error(transparent)]
    Extrude(#[from] cartilage_extrude::ExtrudeError),

    /// Wall construction failed.
    #[error(transparent)]
    Wall(#[from] cartilage_wall::WallError),

    /// Quality control failed.
    #[error(transparent)]
    Quality(#[from] cartilage_quality::QualityError),

    /// Topology analysis failed.
    #[error(transparent)]
    Topology(#[from] cartilage_topology::TopologyError),

    /// Distance-query construction failed.
    #[error(transparent)]
    Sdf(#[from] cartilage_sdf::SdfError),

    /// Curvature computation failed.
    #[error(transparent)]
    Curvature(#[from] cartilage_curvature::CurvatureError),

    /// The femoral head has no candidate fovea component.
    #[error("no fovea component outside the base region")]
    NoFoveaComponent,
}

/// Result alias for pipeline runs.
pub type PipelineResult<T> = Result<T, PipelineError>;
