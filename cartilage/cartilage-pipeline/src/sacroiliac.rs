//! Sacroiliac joint pipeline.
//!
//! The sacral side is seeded from the joint space; the iliac side is seeded
//! by transferring the sacral region onto the ilium, so the two auricular
//! patches face each other by construction.

use crate::error::PipelineResult;
use crate::params::SeamJointParams;
use crate::seam::{build_seam, SeamOutput};
use cartilage_region::{expand_vertices, select_interface_with_opposite};
use cartilage_types::SurfaceMesh;

/// Synthesize the sacroiliac cartilage shell between a sacrum and an ilium.
///
/// # Errors
///
/// Fails fast when seeding or refinement empties a region or the rims are
/// too degenerate to sweep a wall between.
pub fn synthesize(
    sacrum: &SurfaceMesh,
    ilium: &SurfaceMesh,
    params: &SeamJointParams,
) -> PipelineResult<SeamOutput> {
    let (sacral_seed, opposite) =
        select_interface_with_opposite(sacrum, ilium, params.gap_distance)?;
    let iliac_seed = expand_vertices(ilium, &opposite)?;
    build_seam(sacrum, ilium, &sacral_seed, &iliac_seed, params, "sacroiliac")
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
    fn parallel_plates_produce_a_closed_shell() {
        let sacrum = grid(8, 0.0);
        let ilium = grid(8, 1.5);
        let params = SeamJointParams {
            gap_distance: 2.0,
            smoothing_iterations: 1,
            upsampling_iterations: 0,
            ..SeamJointParams::default()
        };
        let out = synthesize(&sacrum, &ilium, &params).unwrap();
        assert!(cartilage_topology::boundary_edges(&out.shell.faces).is_empty());
        assert!(out
            .measurements
            .iter()
            .any(|(name, _)| name == "sacroiliac_joint_space_min"));
    }
}
