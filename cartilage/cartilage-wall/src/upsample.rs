//! Midpoint subdivision.

use cartilage_types::{Point3, SurfaceMesh};
use hashbrown::HashMap;
use tracing::debug;

/// Midpoint 1-to-4 subdivision, applied `iterations` times.
///
/// Every edge gains a midpoint vertex, shared between the two faces on the
/// edge, and every face splits into four. Used on merged shells whose sweep
/// wall is a single row of long triangles.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
// Vertex counts fit u32 throughout the workspace.
pub fn upsample(mesh: &SurfaceMesh, iterations: usize) -> SurfaceMesh {
    let mut result = mesh.clone();
    for _ in 0..iterations {
        let mut midpoints: HashMap<[u32; 2], u32> = HashMap::new();
        let mut vertices = result.vertices.clone();
        let mut faces = Vec::with_capacity(result.faces.len() * 4);

        for &[a, b, c] in &result.faces {
            let mut midpoint = |u: u32, v: u32, verts: &mut Vec<Point3<f64>>| -> u32 {
                let key = if u <= v { [u, v] } else { [v, u] };
                *midpoints.entry(key).or_insert_with(|| {
                    let m = (verts[u as usize].coords + verts[v as usize].coords) / 2.0;
                    verts.push(Point3::from(m));
                    (verts.len() - 1) as u32
                })
            };
            let ab = midpoint(a, b, &mut vertices);
            let bc = midpoint(b, c, &mut vertices);
            let ca = midpoint(c, a, &mut vertices);
            faces.extend_from_slice(&[
                [a, ab, ca],
                [ab, b, bc],
                [ca, bc, c],
                [ab, bc, ca],
            ]);
        }
        result = SurfaceMesh::from_parts(vertices, faces);
    }
    debug!(
        vertices = result.vertex_count(),
        faces = result.face_count(),
        "upsampled mesh"
    );
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn single_triangle_splits_into_four() {
        let mesh = SurfaceMesh::from_parts(
            vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(2.0, 0.0, 0.0),
                Point3::new(0.0, 2.0, 0.0),
            ],
            vec![[0, 1, 2]],
        );
        let fine = upsample(&mesh, 1);
        assert_eq!(fine.face_count(), 4);
        assert_eq!(fine.vertex_count(), 6);
        assert_relative_eq!(fine.surface_area(), mesh.surface_area(), epsilon = 1e-12);
    }

    #[test]
    fn shared_edge_midpoint_is_deduplicated() {
        let mesh = SurfaceMesh::from_parts(
            vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(1.0, 1.0, 0.0),
                Point3::new(0.0, 1.0, 0.0),
            ],
            vec![[0, 1, 2], [0, 2, 3]],
        );
        let fine = upsample(&mesh, 1);
        assert_eq!(fine.face_count(), 8);
        // 4 original + 5 edge midpoints (diagonal shared once)
        assert_eq!(fine.vertex_count(), 9);
    }

    #[test]
    fn zero_iterations_is_identity() {
        let mesh = SurfaceMesh::from_parts(
            vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(0.0, 1.0, 0.0),
            ],
            vec![[0, 1, 2]],
        );
        assert_eq!(upsample(&mesh, 0), mesh);
    }

    #[test]
    fn winding_is_preserved() {
        let mesh = SurfaceMesh::from_parts(
            vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(0.0, 1.0, 0.0),
            ],
            vec![[0, 1, 2]],
        );
        let fine = upsample(&mesh, 2);
        for triangle in fine.triangles() {
            let n = triangle.normal().unwrap();
            assert!(n.z > 0.0);
        }
    }
}
