//! Multi-source Dijkstra over the mesh edge graph.

use crate::error::{GeodesicError, GeodesicResult};
use cartilage_types::SurfaceMesh;
use hashbrown::HashMap;
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use tracing::debug;

/// Per-vertex distance to the nearest source.
///
/// Unreachable vertices (other components) hold `f64::INFINITY`.
#[derive(Debug, Clone)]
pub struct DistanceField {
    distances: Vec<f64>,
}

impl DistanceField {
    /// Distance of one vertex, infinite if unreachable or out of range.
    #[must_use]
    pub fn get(&self, vertex: u32) -> f64 {
        self.distances
            .get(vertex as usize)
            .copied()
            .unwrap_or(f64::INFINITY)
    }

    /// All per-vertex distances.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.distances
    }

    /// Vertices within a distance bound, sorted.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    // Vertex counts fit u32 throughout the workspace.
    pub fn within(&self, bound: f64) -> Vec<u32> {
        self.distances
            .iter()
            .enumerate()
            .filter_map(|(v, &d)| (d <= bound).then_some(v as u32))
            .collect()
    }
}

#[derive(PartialEq)]
struct QueueEntry {
    distance: f64,
    vertex: u32,
}

impl Eq for QueueEntry {}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // reversed for a min-heap
        other
            .distance
            .total_cmp(&self.distance)
            .then_with(|| other.vertex.cmp(&self.vertex))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Shortest edge-graph distance from any source vertex to every vertex.
///
/// # Errors
///
/// [`GeodesicError::NoSources`] for an empty source list,
/// [`GeodesicError::SourceOutOfRange`] if a source index exceeds the mesh.
pub fn distance_from_sources(
    mesh: &SurfaceMesh,
    sources: &[u32],
) -> GeodesicResult<DistanceField> {
    if sources.is_empty() {
        return Err(GeodesicError::NoSources);
    }
    let n = mesh.vertex_count();
    if let Some(&bad) = sources.iter().find(|&&s| (s as usize) >= n) {
        return Err(GeodesicError::SourceOutOfRange(bad, n));
    }

    // undirected weighted adjacency
    let mut neighbors: HashMap<u32, Vec<(u32, f64)>> = HashMap::with_capacity(n);
    for &[a, b, c] in &mesh.faces {
        for (u, v) in [(a, b), (b, c), (c, a)] {
            let length = (mesh.vertices[v as usize] - mesh.vertices[u as usize]).norm();
            neighbors.entry(u).or_default().push((v, length));
            neighbors.entry(v).or_default().push((u, length));
        }
    }

    let mut distances = vec![f64::INFINITY; n];
    let mut heap = BinaryHeap::new();
    for &s in sources {
        distances[s as usize] = 0.0;
        heap.push(QueueEntry {
            distance: 0.0,
            vertex: s,
        });
    }

    while let Some(QueueEntry { distance, vertex }) = heap.pop() {
        if distance > distances[vertex as usize] {
            continue;
        }
        if let Some(adjacent) = neighbors.get(&vertex) {
            for &(next, length) in adjacent {
                let candidate = distance + length;
                if candidate < distances[next as usize] {
                    distances[next as usize] = candidate;
                    heap.push(QueueEntry {
                        distance: candidate,
                        vertex: next,
                    });
                }
            }
        }
    }

    debug!(sources = sources.len(), vertices = n, "geodesic field computed");
    Ok(DistanceField { distances })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use cartilage_types::Point3;

    /// 1x3 strip of unit quads along x.
    fn strip() -> SurfaceMesh {
        let mut vertices = Vec::new();
        for row in 0..2 {
            for col in 0..4 {
                vertices.push(Point3::new(f64::from(col), f64::from(row), 0.0));
            }
        }
        let faces = vec![
            [0, 1, 4], [1, 5, 4],
            [1, 2, 5], [2, 6, 5],
            [2, 3, 6], [3, 7, 6],
        ];
        SurfaceMesh::from_parts(vertices, faces)
    }

    #[test]
    fn single_source_walks_the_strip() {
        let field = distance_from_sources(&strip(), &[0]).unwrap();
        assert_relative_eq!(field.get(0), 0.0);
        assert_relative_eq!(field.get(1), 1.0);
        assert_relative_eq!(field.get(2), 2.0);
        assert_relative_eq!(field.get(3), 3.0);
    }

    #[test]
    fn multi_source_takes_the_nearer() {
        let field = distance_from_sources(&strip(), &[0, 3]).unwrap();
        assert_relative_eq!(field.get(1), 1.0);
        assert_relative_eq!(field.get(2), 1.0);
    }

    #[test]
    fn axis_path_beats_diagonal() {
        let field = distance_from_sources(&strip(), &[0]).unwrap();
        // two unit edges (0-1, 1-5), not the 1-4 diagonal route
        assert_relative_eq!(field.get(5), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn within_bound() {
        let field = distance_from_sources(&strip(), &[0]).unwrap();
        assert_eq!(field.within(1.0), vec![0, 1, 4]);
    }

    #[test]
    fn no_sources_is_an_error() {
        assert_eq!(
            distance_from_sources(&strip(), &[]).err(),
            Some(GeodesicError::NoSources)
        );
    }

    #[test]
    fn out_of_range_source_is_an_error() {
        assert_eq!(
            distance_from_sources(&strip(), &[99]).err(),
            Some(GeodesicError::SourceOutOfRange(99, 8))
        );
    }
}
