//! Fovea capping for the femoral head.
//!
//! The fovea capitis carries no cartilage, so the curvature-gated femoral
//! region grows around it and leaves a hole. When a study wants the ligament
//! attachment covered anyway, the hole is capped with a flat plug of uniform
//! thickness.

use crate::error::{PipelineError, PipelineResult};
use crate::stages::{close_extruded_shell, patch_mesh};
use cartilage_extrude::extrude_uniform;
use cartilage_topology::connected_components;
use cartilage_types::{FaceSet, SurfaceMesh};
use tracing::info;

/// Build a uniform-thickness plug over the fovea enclosed by `base`.
///
/// The complement of `base` on the femoral head splits into the rest of the
/// bone plus any enclosed islands; the smallest island is taken to be the
/// fovea, extruded outward by `thickness` millimeters and closed into its
/// own shell.
///
/// # Errors
///
/// [`PipelineError::NoFoveaComponent`] when the complement has no island
/// besides the bone remainder.
pub fn cap_fovea(
    femur: &SurfaceMesh,
    base: &FaceSet,
    thickness: f64,
) -> PipelineResult<SurfaceMesh> {
    let all = FaceSet::from_indices(0..femur.face_count());
    let complement = all.difference(base);
    if complement.is_empty() {
        return Err(PipelineError::NoFoveaComponent);
    }

    let faces = femur.gather_faces(&complement);
    let components = connected_components(&faces);
    if components.count < 2 {
        return Err(PipelineError::NoFoveaComponent);
    }

    let sizes = components.sizes();
    let bone_remainder = sizes
        .iter()
        .enumerate()
        .max_by_key(|&(_, size)| size)
        .map(|(label, _)| label)
        .ok_or(PipelineError::NoFoveaComponent)?;
    let fovea_label = sizes
        .iter()
        .enumerate()
        .filter(|&(label, _)| label != bone_remainder)
        .min_by_key(|&(_, size)| size)
        .map(|(label, _)| label)
        .ok_or(PipelineError::NoFoveaComponent)?;

    let fovea: FaceSet = components
        .faces_of(fovea_label)
        .iter()
        .map(|local| complement.as_slice()[local])
        .collect();
    info!(faces = fovea.len(), thickness, "capping fovea");

    let patch = patch_mesh(femur, &fovea);
    let plug = extrude_uniform(&patch, thickness)?;
    close_extruded_shell(&patch, &plug)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use cartilage_types::Point3;

    /// 6x6 quad grid with a face region covering everything except the
    /// outermost ring of quads and one central quad.
    fn grid_with_island() -> (SurfaceMesh, FaceSet, FaceSet) {
        let n = 6_u32;
        let mut vertices = Vec::new();
        for row in 0..=n {
            for col in 0..=n {
                vertices.push(Point3::new(f64::from(col), f64::from(row), 0.0));
            }
        }
        let mut faces = Vec::new();
        let mut base = Vec::new();
        let mut island = Vec::new();
        for row in 0..n {
            for col in 0..n {
                let v0 = row * (n + 1) + col;
                let first = faces.len();
                faces.push([v0, v0 + 1, v0 + n + 1]);
                faces.push([v0 + 1, v0 + n + 2, v0 + n + 1]);
                let rim = row == 0 || col == 0 || row == n - 1 || col == n - 1;
                if row == 2 && col == 2 {
                    island.extend([first, first + 1]);
                } else if !rim {
                    base.extend([first, first + 1]);
                }
            }
        }
        (
            SurfaceMesh::from_parts(vertices, faces),
            FaceSet::from_indices(base),
            FaceSet::from_indices(island),
        )
    }

    #[test]
    fn caps_the_enclosed_island() {
        let (mesh, base, island) = grid_with_island();
        let plug = cap_fovea(&mesh, &base, 0.5).unwrap();
        assert!(cartilage_topology::boundary_edges(&plug.faces).is_empty());
        assert_eq!(island.len(), 2);
        // unit quad extruded by 0.5: two unit sheets plus four 1 x 0.5 walls
        assert_relative_eq!(plug.signed_volume(), 0.5, epsilon = 1e-9);
        assert_relative_eq!(plug.surface_area(), 4.0, epsilon = 1e-9);
    }

    #[test]
    fn no_island_is_an_error() {
        let (mesh, _, _) = grid_with_island();
        // base covering everything leaves an empty complement
        let all = FaceSet::from_indices(0..mesh.face_count());
        assert!(matches!(
            cap_fovea(&mesh, &all, 0.5),
            Err(PipelineError::NoFoveaComponent)
        ));
        // base leaving only the connected outer remainder has no island
        let (mesh, base, island) = grid_with_island();
        let open = base.union(&island);
        assert!(matches!(
            cap_fovea(&mesh, &open, 0.5),
            Err(PipelineError::NoFoveaComponent)
        ));
    }
}
