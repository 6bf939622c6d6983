//! Fold detection from incident-normal spread.

use cartilage_topology::{boundary_vertices, VertexFaceAdjacency};
use cartilage_types::{Point3, Triangle, Vector3};

/// Default fold threshold in radians.
///
/// A rim vertex whose incident face normals disagree by more than this is
/// treated as folded. Anything past ~115 degrees means the layer doubles
/// back on itself rather than curving.
pub const DEFAULT_FOLD_THRESHOLD: f64 = 2.0;

fn face_normal(vertices: &[Point3<f64>], face: [u32; 3]) -> Option<Vector3<f64>> {
    Triangle::new(
        vertices[face[0] as usize],
        vertices[face[1] as usize],
        vertices[face[2] as usize],
    )
    .normal()
}

/// Largest pairwise angle between the normals of the faces around a vertex.
///
/// Zero for vertices with fewer than two (non-degenerate) incident faces.
#[must_use]
pub fn normal_spread(
    vertices: &[Point3<f64>],
    faces: &[[u32; 3]],
    incident: &[usize],
) -> f64 {
    let normals: Vec<Vector3<f64>> = incident
        .iter()
        .filter_map(|&f| face_normal(vertices, faces[f]))
        .collect();

    let mut spread = 0.0_f64;
    for (i, a) in normals.iter().enumerate() {
        for b in &normals[i + 1..] {
            let angle = a.dot(b).clamp(-1.0, 1.0).acos();
            spread = spread.max(angle);
        }
    }
    spread
}

/// Boundary vertices whose incident-normal spread exceeds `threshold`.
#[must_use]
pub fn fold_vertices(
    vertices: &[Point3<f64>],
    faces: &[[u32; 3]],
    threshold: f64,
) -> Vec<u32> {
    let adjacency = VertexFaceAdjacency::build(faces, vertices.len());
    boundary_vertices(faces)
        .into_iter()
        .filter(|&v| normal_spread(vertices, faces, adjacency.faces_of(v)) > threshold)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    /// Two triangles sharing edge 1-2 and folded flat onto each other.
    fn folded_pair() -> (Vec<Point3<f64>>, Vec<[u32; 3]>) {
        let vertices = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.5, 1.0, 0.0),
            Point3::new(-0.5, 1.0, 0.0),
        ];
        // [0,1,2] faces +z, [2,1,3] faces -z: a closed fold along 1-2
        (vertices, vec![[0, 1, 2], [2, 1, 3]])
    }

    #[test]
    fn fold_is_detected_on_the_shared_edge() {
        let (vertices, faces) = folded_pair();
        let folded = fold_vertices(&vertices, &faces, DEFAULT_FOLD_THRESHOLD);
        assert_eq!(folded, vec![1, 2]);
    }

    #[test]
    fn flat_pair_is_clean() {
        let vertices = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        ];
        let faces = vec![[0, 1, 2], [0, 2, 3]];
        assert!(fold_vertices(&vertices, &faces, DEFAULT_FOLD_THRESHOLD).is_empty());
    }

    #[test]
    fn spread_of_a_right_angle() {
        // two faces meeting at 90 degrees along the y axis
        let vertices = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 0.0, 1.0),
        ];
        let faces = vec![[0, 2, 1], [0, 1, 3]];
        let adjacency = VertexFaceAdjacency::build(&faces, vertices.len());
        let spread = normal_spread(&vertices, &faces, adjacency.faces_of(0));
        assert_relative_eq!(spread, std::f64::consts::FRAC_PI_2, epsilon = 1e-12);
    }

    #[test]
    fn lone_face_has_zero_spread() {
        let (vertices, faces) = folded_pair();
        assert_relative_eq!(normal_spread(&vertices, &faces, &[0]), 0.0);
    }
}
