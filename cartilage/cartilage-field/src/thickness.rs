//! Joint-space thickness sampling.

use crate::error::{FieldError, FieldResult};
use cartilage_sdf::SurfaceDistance;
use cartilage_types::SurfaceMesh;
use tracing::debug;

/// Per-vertex thickness values, full mesh size, zero outside the patch.
#[derive(Debug, Clone)]
pub struct ThicknessProfile {
    values: Vec<f64>,
}

impl ThicknessProfile {
    /// Thickness of one vertex, zero outside the assigned patch.
    #[must_use]
    pub fn get(&self, vertex: u32) -> f64 {
        self.values.get(vertex as usize).copied().unwrap_or(0.0)
    }

    /// All per-vertex values.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// Smallest assigned (non-zero-vertex) thickness.
    ///
    /// This is the minimum joint space scaled by the thickness factor, the
    /// per-subject figure the measurement table records.
    #[must_use]
    pub fn min_assigned(&self) -> Option<f64> {
        self.values
            .iter()
            .copied()
            .filter(|&v| v > 0.0)
            .min_by(f64::total_cmp)
    }

    /// Largest assigned thickness, zero for an all-zero profile.
    #[must_use]
    pub fn max_assigned(&self) -> f64 {
        self.values.iter().copied().fold(0.0, f64::max)
    }
}

/// Assign each patch vertex a share of its distance to the opposing bone.
///
/// The value is `factor` times the unsigned distance to `target`, written
/// into a full-size profile that is zero everywhere else. With
/// `factor = 0.5` the two layers of a joint split the space evenly; the
/// without-gap variant uses a larger factor so the opposing layers meet.
///
/// # Errors
///
/// [`FieldError::NoVertices`] for an empty vertex list.
pub fn assign_thickness(
    mesh: &SurfaceMesh,
    target: &SurfaceDistance,
    vertices: &[u32],
    factor: f64,
) -> FieldResult<ThicknessProfile> {
    if vertices.is_empty() {
        return Err(FieldError::NoVertices);
    }
    let positions: Vec<_> = vertices
        .iter()
        .filter_map(|&v| mesh.vertices.get(v as usize).copied())
        .collect();
    let distances = target.distances(&positions);

    let mut values = vec![0.0; mesh.vertex_count()];
    for (&v, &d) in vertices.iter().zip(&distances) {
        values[v as usize] = d * factor;
    }
    debug!(
        assigned = vertices.len(),
        factor, "assigned joint-space thickness"
    );
    Ok(ThicknessProfile { values })
}

/// Cap every field value at a ceiling.
///
/// The blend interpolant can overshoot the sampled joint space near steep
/// thickness gradients; clamping restores the physical bound.
#[must_use]
pub fn clamp_field(values: &[f64], ceiling: f64) -> Vec<f64> {
    values.iter().map(|&v| v.min(ceiling)).collect()
}
