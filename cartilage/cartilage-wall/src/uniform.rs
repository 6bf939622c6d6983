//! Ruled wall between a loop and its displaced twin.

use crate::error::{WallError, WallResult};
use tracing::debug;

/// Bridge a boundary loop to its displaced copy with two triangles per edge.
///
/// The copy is assumed to live in the same merged vertex array at
/// `vertex_offset`, the layout [`SurfaceMesh::merge`] produces when the
/// extruded sheet is appended after the base sheet. The loop is treated as
/// closed.
///
/// Winding faces the quads outward when the loop runs counter-clockwise
/// around the upper sheet and the copy sits above the original.
///
/// # Errors
///
/// [`WallError::DegenerateLoop`] for loops shorter than three vertices.
///
/// [`SurfaceMesh::merge`]: cartilage_types::SurfaceMesh::merge
pub fn uniform_wall(ring: &[u32], vertex_offset: u32) -> WallResult<Vec<[u32; 3]>> {
    if ring.len() < 3 {
        return Err(WallError::DegenerateLoop { len: ring.len() });
    }

    let mut faces = Vec::with_capacity(ring.len() * 2);
    for i in 0..ring.len() {
        let a = ring[i];
        let b = ring[(i + 1) % ring.len()];
        let a_top = a + vertex_offset;
        let b_top = b + vertex_offset;
        faces.push([a, b, a_top]);
        faces.push([b, b_top, a_top]);
    }
    debug!(loop_len = ring.len(), faces = faces.len(), "built uniform wall");
    Ok(faces)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_triangles_per_loop_edge() {
        let ring = [0, 1, 2, 3];
        let wall = uniform_wall(&ring, 10).unwrap();
        assert_eq!(wall.len(), 8);
    }

    #[test]
    fn quads_connect_matching_vertices() {
        let ring = [0, 1, 2];
        let wall = uniform_wall(&ring, 5).unwrap();
        assert_eq!(wall[0], [0, 1, 5]);
        assert_eq!(wall[1], [1, 6, 5]);
        // last quad wraps around to the loop start
        assert_eq!(wall[4], [2, 0, 7]);
        assert_eq!(wall[5], [0, 5, 7]);
    }

    #[test]
    fn wall_boundary_is_exactly_the_two_loops() {
        let ring = [0, 1, 2, 3];
        let wall = uniform_wall(&ring, 4).unwrap();
        let mut rim = cartilage_topology::boundary_edges(&wall);
        rim.sort_unstable();
        let expected = vec![
            [0, 1], [0, 3], [1, 2], [2, 3],
            [4, 5], [4, 7], [5, 6], [6, 7],
        ];
        assert_eq!(rim, expected);
    }

    #[test]
    fn short_loop_is_rejected() {
        assert_eq!(
            uniform_wall(&[0, 1], 10).err(),
            Some(WallError::DegenerateLoop { len: 2 })
        );
    }
}
