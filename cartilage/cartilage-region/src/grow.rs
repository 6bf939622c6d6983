//! Curvature-gated region growth.

use crate::error::{RegionError, RegionResult};
use cartilage_curvature::{face_curvature, CurvatureMeasure};
use cartilage_topology::{boundary_vertices, VertexFaceAdjacency};
use cartilage_types::{Convergence, FaceSet, SurfaceMesh};
use tracing::{debug, info};

/// Configuration for curvature-gated growth.
///
/// The femoral cartilage layer covers more of the head than the contact seed
/// alone, so the seed is grown outward, admitting rim-adjacent faces whose
/// curvature stays inside the open interval `(min_curvature, max_curvature)`.
/// The gate is what stops growth at the head-neck junction, where the
/// minimum principal curvature leaves the cap's range.
#[derive(Debug, Clone, Copy)]
pub struct GrowConfig {
    /// Which curvature measure gates admission.
    pub measure: CurvatureMeasure,
    /// Lower (exclusive) curvature bound in 1/mm.
    pub min_curvature: f64,
    /// Upper (exclusive) curvature bound in 1/mm.
    pub max_curvature: f64,
    /// Safety cap on growth rounds.
    pub max_iterations: usize,
}

impl Default for GrowConfig {
    fn default() -> Self {
        Self {
            measure: CurvatureMeasure::Minimum,
            min_curvature: 0.0,
            max_curvature: 0.5,
            max_iterations: 200,
        }
    }
}

impl GrowConfig {
    /// Set the curvature measure.
    #[must_use]
    pub const fn with_measure(mut self, measure: CurvatureMeasure) -> Self {
        self.measure = measure;
        self
    }

    /// Set the open admission interval.
    #[must_use]
    pub const fn with_bounds(mut self, min: f64, max: f64) -> Self {
        self.min_curvature = min;
        self.max_curvature = max;
        self
    }

    /// Set the iteration cap.
    #[must_use]
    pub const fn with_max_iterations(mut self, cap: usize) -> Self {
        self.max_iterations = cap;
        self
    }
}

/// Grow a region outward, admitting rim-adjacent faces that pass the
/// curvature gate.
///
/// # Errors
///
/// [`RegionError::EmptyRegion`] for an empty seed, or a curvature error for
/// an empty mesh.
pub fn grow_region(
    mesh: &SurfaceMesh,
    region: &FaceSet,
    config: &GrowConfig,
) -> RegionResult<(FaceSet, Convergence)> {
    if region.is_empty() {
        return Err(RegionError::EmptyRegion {
            stage: "growth seeding",
        });
    }

    let curvature = face_curvature(mesh, config.measure)?;
    let adjacency = VertexFaceAdjacency::build(&mesh.faces, mesh.vertex_count());
    let mut region = region.clone();

    for round in 0..config.max_iterations {
        let local = mesh.gather_faces(&region);
        let rim = boundary_vertices(&local);
        let admitted: FaceSet = adjacency
            .faces_of_vertices(&rim)
            .difference(&region)
            .iter()
            .filter(|&f| {
                let k = curvature[f];
                k > config.min_curvature && k < config.max_curvature
            })
            .collect();

        if admitted.is_empty() {
            info!(rounds = round, faces = region.len(), "region growth converged");
            return Ok((region, Convergence::Converged { iterations: round }));
        }
        debug!(round, admitted = admitted.len(), "growing region");
        region = region.union(&admitted);
    }

    info!(faces = region.len(), "region growth hit the iteration cap");
    Ok((region, Convergence::CapReached))
}

#[cfg(test)]
mod tests {
    use super::*;
    use cartilage_types::Point3;

    fn grid() -> SurfaceMesh {
        let mut vertices = Vec::new();
        for row in 0..5 {
            for col in 0..5 {
                vertices.push(Point3::new(f64::from(col), f64::from(row), 0.0));
            }
        }
        let mut faces = Vec::new();
        for row in 0..4_u32 {
            for col in 0..4_u32 {
                let v0 = row * 5 + col;
                faces.push([v0, v0 + 1, v0 + 5]);
                faces.push([v0 + 1, v0 + 6, v0 + 5]);
            }
        }
        SurfaceMesh::from_parts(vertices, faces)
    }

    #[test]
    fn flat_grid_floods_under_wide_gate() {
        let mesh = grid();
        let seed = FaceSet::from_indices([0]);
        let config = GrowConfig::default()
            .with_measure(CurvatureMeasure::Mean)
            .with_bounds(-0.1, 0.1);
        let (grown, status) = grow_region(&mesh, &seed, &config).unwrap();
        assert_eq!(grown.len(), mesh.face_count());
        assert!(status.is_converged());
    }

    #[test]
    fn closed_gate_admits_nothing() {
        let mesh = grid();
        let seed = FaceSet::from_indices([0]);
        let config = GrowConfig::default().with_bounds(0.5, 1.0);
        let (grown, status) = grow_region(&mesh, &seed, &config).unwrap();
        assert_eq!(grown.as_slice(), &[0]);
        assert_eq!(status, Convergence::Converged { iterations: 0 });
    }

    #[test]
    fn tight_cap_reports_truncation() {
        let mesh = grid();
        let seed = FaceSet::from_indices([0]);
        let config = GrowConfig::default()
            .with_measure(CurvatureMeasure::Mean)
            .with_bounds(-0.1, 0.1)
            .with_max_iterations(1);
        let (grown, status) = grow_region(&mesh, &seed, &config).unwrap();
        assert!(grown.len() > 1);
        assert_eq!(status, Convergence::CapReached);
    }

    #[test]
    fn empty_seed_is_an_error() {
        let mesh = grid();
        assert!(matches!(
            grow_region(&mesh, &FaceSet::new(), &GrowConfig::default()),
            Err(RegionError::EmptyRegion { .. })
        ));
    }
}
