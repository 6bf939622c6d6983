//! Pubic symphysis pipeline.
//!
//! Unlike the sacroiliac joint, both pubic surfaces are seeded independently
//! from the joint space; the symphyseal faces are flat enough that the two
//! selections already line up without a transfer step.

use crate::error::PipelineResult;
use crate::params::SeamJointParams;
use crate::seam::{build_seam, SeamOutput};
use cartilage_region::select_interface;
use cartilage_types::SurfaceMesh;

/// Synthesize the interpubic disc between the left and right pubis.
///
/// # Errors
///
/// Fails fast when seeding or refinement empties a region or the rims are
/// too degenerate to sweep a wall between.
pub fn synthesize(
    left: &SurfaceMesh,
    right: &SurfaceMesh,
    params: &SeamJointParams,
) -> PipelineResult<SeamOutput> {
    let left_seed = select_interface(left, right, params.gap_distance)?;
    let right_seed = select_interface(right, left, params.gap_distance)?;
    build_seam(left, right, &left_seed, &right_seed, params, "pubic")
}

#[cfg(test)]
mod tests {
    use super::*;
    use cartilage_types::Point3;

    fn grid(n: u32, z: f64) -> SurfaceMesh {
        let mut vertices = Vec::new();
        for row in 0..=n {
            for col in 0..=n {
                vertices.push(Point3::new(f64::from(col), f64::from(row), z));
            }
        }
        let mut faces = Vec::new();
        for row in 0..n {
            for col in 0..n {
                let v0 = row * (n + 1) + col;
                faces.push([v0, v0 + 1, v0 + n + 1]);
                faces.push([v0 + 1, v0 + n + 2, v0 + n + 1]);
            }
        }
        SurfaceMesh::from_parts(vertices, faces)
    }

    #[test]
    fn symmetric_seeding_produces_a_closed_disc() {
        let left = grid(8, 0.0);
        let right = grid(8, 1.0);
        let params = SeamJointParams {
            gap_distance: 1.5,
            fill_gaps: false,
            smoothing_iterations: 1,
            upsampling_iterations: 0,
            ..SeamJointParams::default()
        };
        let out = synthesize(&left, &right, &params).unwrap();
        assert!(cartilage_topology::boundary_edges(&out.shell.faces).is_empty());
        assert!(out
            .measurements
            .iter()
            .any(|(name, _)| name == "pubic_joint_space_min"));
    }
}
