//! Filling enclosed holes in a region.

use crate::error::{RegionError, RegionResult};
use cartilage_topology::{boundary_loops, VertexFaceAdjacency};
use cartilage_types::{Convergence, FaceSet, SurfaceMesh};
use tracing::{debug, warn};

const MAX_FILL_ROUNDS: usize = 100;

/// Absorb faces enclosed by a region until only its outer rim remains.
///
/// Trimming and the curvature gate can leave small holes inside an otherwise
/// solid region. A hole shows up as an extra boundary loop; every mesh face
/// incident to a non-outer loop gets pulled into the region, repeatedly,
/// until the region has a single boundary loop. The longest loop is taken as
/// the outer rim.
///
/// Returns [`Convergence::Converged`] once a single loop remains; if a hole
/// loop persists with nothing left to absorb, the underlying mesh itself has
/// a hole there, which is logged and treated as converged.
///
/// # Errors
///
/// [`RegionError::EmptyRegion`] for an empty input region.
pub fn fill_gaps(
    mesh: &SurfaceMesh,
    region: &FaceSet,
) -> RegionResult<(FaceSet, Convergence)> {
    if region.is_empty() {
        return Err(RegionError::EmptyRegion { stage: "gap filling" });
    }

    let adjacency = VertexFaceAdjacency::build(&mesh.faces, mesh.vertex_count());
    let mut region = region.clone();

    for round in 0..MAX_FILL_ROUNDS {
        let local = mesh.gather_faces(&region);
        let mut loops = boundary_loops(&local);
        if loops.len() <= 1 {
            return Ok((region, Convergence::Converged { iterations: round }));
        }

        let outer = loops
            .iter()
            .enumerate()
            .max_by_key(|(_, ring)| ring.len())
            .map(|(i, _)| i)
            .unwrap_or(0);
        loops.swap_remove(outer);
        let hole_vertices: Vec<u32> = loops.into_iter().flatten().collect();

        let additions = adjacency
            .faces_of_vertices(&hole_vertices)
            .difference(&region);
        if additions.is_empty() {
            warn!(round, "hole loop persists but the mesh has no faces there");
            return Ok((region, Convergence::Converged { iterations: round }));
        }
        debug!(round, added = additions.len(), "filled hole faces");
        region = region.union(&additions);
    }

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
    fn punched_hole_is_refilled() {
        let mesh = grid();
        // quad (1,1) is faces 10 and 11; removing both punches a hole
        let holed = FaceSet::from_indices((0..mesh.face_count()).filter(|f| *f != 10 && *f != 11));
        let (filled, status) = fill_gaps(&mesh, &holed).unwrap();
        assert_eq!(filled.len(), mesh.face_count());
        assert!(status.is_converged());
    }

    #[test]
    fn solid_region_is_untouched() {
        let mesh = grid();
        let region = FaceSet::from_indices(0..mesh.face_count());
        let (filled, status) = fill_gaps(&mesh, &region).unwrap();
        assert_eq!(filled, region);
        assert_eq!(status, Convergence::Converged { iterations: 0 });
    }

    #[test]
    fn empty_region_is_an_error() {
        let mesh = grid();
        assert!(matches!(
            fill_gaps(&mesh, &FaceSet::new()),
            Err(RegionError::EmptyRegion { .. })
        ));
    }
}
