//! Boundary edges, vertices, faces and loops of a face set.

use crate::error::{TopologyError, TopologyResult};
use hashbrown::HashMap;
use tracing::warn;

#[inline]
fn undirected(a: u32, b: u32) -> [u32; 2] {
    if a <= b {
        [a, b]
    } else {
        [b, a]
    }
}

fn edge_counts(faces: &[[u32; 3]]) -> HashMap<[u32; 2], u32> {
    let mut counts: HashMap<[u32; 2], u32> = HashMap::with_capacity(faces.len() * 3 / 2);
    for &[a, b, c] in faces {
        for (u, v) in [(a, b), (b, c), (c, a)] {
            *counts.entry(undirected(u, v)).or_insert(0) += 1;
        }
    }
    counts
}

/// Undirected edges that belong to exactly one face, sorted for determinism.
#[must_use]
pub fn boundary_edges(faces: &[[u32; 3]]) -> Vec<[u32; 2]> {
    let mut edges: Vec<[u32; 2]> = edge_counts(faces)
        .into_iter()
        .filter_map(|(edge, count)| (count == 1).then_some(edge))
        .collect();
    edges.sort_unstable();
    edges
}

/// Sorted, deduplicated vertices lying on the boundary of the face set.
#[must_use]
pub fn boundary_vertices(faces: &[[u32; 3]]) -> Vec<u32> {
    let mut vertices: Vec<u32> = boundary_edges(faces).into_iter().flatten().collect();
    vertices.sort_unstable();
    vertices.dedup();
    vertices
}

/// Local indices of faces with at least `min_boundary_edges` boundary edges.
pub(crate) fn faces_by_boundary_edge_count(
    faces: &[[u32; 3]],
    min_boundary_edges: usize,
) -> Vec<usize> {
    let counts = edge_counts(faces);
    faces
        .iter()
        .enumerate()
        .filter_map(|(i, &[a, b, c])| {
            let on_boundary = [(a, b), (b, c), (c, a)]
                .into_iter()
                .filter(|&(u, v)| counts.get(&undirected(u, v)) == Some(&1))
                .count();
            (on_boundary >= min_boundary_edges).then_some(i)
        })
        .collect()
}

/// Local indices of faces touching the boundary by at least one edge.
#[must_use]
pub fn boundary_faces(faces: &[[u32; 3]]) -> Vec<usize> {
    faces_by_boundary_edge_count(faces, 1)
}

/// Ordered boundary loops of the face set.
///
/// Boundary edges are taken in face winding direction, so each loop runs
/// counter-clockwise around its hole when the faces are counter-clockwise.
/// Chains that cannot be closed (non-manifold boundary) are dropped with a
/// warning.
#[must_use]
pub fn boundary_loops(faces: &[[u32; 3]]) -> Vec<Vec<u32>> {
    let counts = edge_counts(faces);

    // start vertex -> end vertex of each directed boundary edge
    let mut next: HashMap<u32, u32> = HashMap::new();
    for &[a, b, c] in faces {
        for (u, v) in [(a, b), (b, c), (c, a)] {
            if counts.get(&undirected(u, v)) == Some(&1) && next.insert(u, v).is_some() {
                warn!(vertex = u, "non-manifold boundary vertex, loop split is arbitrary");
            }
        }
    }

    let mut starts: Vec<u32> = next.keys().copied().collect();
    starts.sort_unstable();

    let mut loops = Vec::new();
    for start in starts {
        if !next.contains_key(&start) {
            continue;
        }
        let mut traced = vec![start];
        let mut current = start;
        while let Some(succ) = next.remove(&current) {
            if succ == start {
                loops.push(traced);
                break;
            }
            traced.push(succ);
            current = succ;
        }
    }
    loops
}

/// The boundary loop with the most vertices.
///
/// # Errors
///
/// [`TopologyError::EmptyFaceSet`] for an empty slice,
/// [`TopologyError::NoBoundary`] for a closed surface.
pub fn longest_boundary_loop(faces: &[[u32; 3]]) -> TopologyResult<Vec<u32>> {
    if faces.is_empty() {
        return Err(TopologyError::EmptyFaceSet);
    }
    boundary_loops(faces)
        .into_iter()
        .max_by_key(Vec::len)
        .ok_or(TopologyError::NoBoundary)
}

#[cfg(test)]
mod tests {
    use super::*;

    // 2x1 strip of quads: vertices 0..6 laid out in two rows of three.
    //
    //   3---4---5
    //   | / | / |
    //   0---1---2
    fn strip() -> Vec<[u32; 3]> {
        vec![[0, 1, 3], [1, 4, 3], [1, 2, 4], [2, 5, 4]]
    }

    #[test]
    fn strip_boundary_edges() {
        let edges = boundary_edges(&strip());
        assert_eq!(edges.len(), 6);
        assert!(edges.contains(&[0, 1]));
        assert!(edges.contains(&[0, 3]));
        // interior diagonals are not boundary
        assert!(!edges.contains(&[1, 3]));
        assert!(!edges.contains(&[2, 4]));
    }

    #[test]
    fn strip_boundary_vertices_are_all() {
        assert_eq!(boundary_vertices(&strip()), vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn single_loop_visits_every_rim_vertex() {
        let loops = boundary_loops(&strip());
        assert_eq!(loops.len(), 1);
        let mut sorted = loops[0].clone();
        sorted.sort_unstable();
        assert_eq!(sorted, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn loop_follows_winding() {
        let loops = boundary_loops(&strip());
        let ring = &loops[0];
        // directed edge 0->1 is a face edge, so 1 follows 0 in the loop
        let pos = ring.iter().position(|&v| v == 0).unwrap();
        assert_eq!(ring[(pos + 1) % ring.len()], 1);
    }

    #[test]
    fn closed_surface_has_no_loops() {
        // tetrahedron
        let faces = [[0, 2, 1], [0, 1, 3], [1, 2, 3], [2, 0, 3]];
        assert!(boundary_edges(&faces).is_empty());
        assert_eq!(
            longest_boundary_loop(&faces),
            Err(TopologyError::NoBoundary)
        );
    }

    #[test]
    fn empty_faces_is_an_error() {
        assert_eq!(
            longest_boundary_loop(&[]),
            Err(TopologyError::EmptyFaceSet)
        );
    }

    #[test]
    fn boundary_faces_of_strip() {
        // every face of a single strip touches the rim
        assert_eq!(boundary_faces(&strip()), vec![0, 1, 2, 3]);
    }
}
