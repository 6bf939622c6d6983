//! Discrete curvature operators.

use crate::error::{CurvatureError, CurvatureResult};
use crate::measure::CurvatureMeasure;
use cartilage_types::{SurfaceMesh, Vector3};
use hashbrown::HashSet;
use tracing::debug;

/// Per-vertex curvature values, one entry per mesh vertex.
#[derive(Debug, Clone)]
pub struct VertexCurvatures {
    /// Mean curvature `H = (k1 + k2) / 2`, signed by the surface normal.
    pub mean: Vec<f64>,
    /// Gaussian curvature `K = k1 * k2` from the angle defect.
    pub gaussian: Vec<f64>,
    /// Smaller principal curvature `k2 = H - sqrt(max(H^2 - K, 0))`.
    pub minimum: Vec<f64>,
    /// Larger principal curvature `k1 = H + sqrt(max(H^2 - K, 0))`.
    pub maximum: Vec<f64>,
}

impl VertexCurvatures {
    /// The values of one measure.
    #[must_use]
    pub fn measure(&self, measure: CurvatureMeasure) -> &[f64] {
        match measure {
            CurvatureMeasure::Gaussian => &self.gaussian,
            CurvatureMeasure::Mean => &self.mean,
            CurvatureMeasure::Minimum => &self.minimum,
            CurvatureMeasure::Maximum => &self.maximum,
        }
    }
}

fn cotangent(a: &Vector3<f64>, b: &Vector3<f64>) -> f64 {
    let cross = a.cross(b).norm();
    if cross < f64::EPSILON {
        0.0
    } else {
        a.dot(b) / cross
    }
}

/// Per-vertex curvature from the cotangent Laplacian and angle defect.
///
/// The mean curvature sign follows the area-weighted vertex normal: convex
/// regions (normals diverging) come out positive. Boundary vertices use the
/// half-disk angle defect, but their values are only meaningful well inside
/// the surface; the growth gate never reads values on the rim it is expanding.
///
/// # Errors
///
/// [`CurvatureError::EmptyMesh`] if the mesh has no faces.
pub fn vertex_curvatures(mesh: &SurfaceMesh) -> CurvatureResult<VertexCurvatures> {
    if mesh.is_empty() {
        return Err(CurvatureError::EmptyMesh);
    }

    let n = mesh.vertex_count();
    let mut laplacian = vec![Vector3::zeros(); n];
    let mut area = vec![0.0_f64; n];
    let mut angle_sum = vec![0.0_f64; n];

    for &[i0, i1, i2] in &mesh.faces {
        let idx = [i0 as usize, i1 as usize, i2 as usize];
        let p = [mesh.vertices[idx[0]], mesh.vertices[idx[1]], mesh.vertices[idx[2]]];

        let face_area = (p[1] - p[0]).cross(&(p[2] - p[0])).norm() / 2.0;
        for corner in 0..3 {
            let a = idx[corner];
            let prev = p[(corner + 2) % 3];
            let next = p[(corner + 1) % 3];
            let u = next - p[corner];
            let v = prev - p[corner];

            // barycentric vertex area
            area[a] += face_area / 3.0;
            let denom = u.norm() * v.norm();
            if denom > f64::EPSILON {
                angle_sum[a] += (u.dot(&v) / denom).clamp(-1.0, 1.0).acos();
            }

            // the angle at this corner weights the opposite edge
            let w = cotangent(&u, &v);
            let b = idx[(corner + 1) % 3];
            let c = idx[(corner + 2) % 3];
            let opposite = mesh.vertices[c] - mesh.vertices[b];
            laplacian[b] += opposite * (w / 2.0);
            laplacian[c] -= opposite * (w / 2.0);
        }
    }

    let boundary = boundary_vertex_set(&mesh.faces);
    let normals = mesh.vertex_normals();

    let mut mean = vec![0.0_f64; n];
    let mut gaussian = vec![0.0_f64; n];
    let mut minimum = vec![0.0_f64; n];
    let mut maximum = vec![0.0_f64; n];

    for v in 0..n {
        if area[v] < f64::EPSILON {
            continue;
        }
        let hn = laplacian[v] / (2.0 * area[v]);
        // the mean curvature normal points opposite the surface normal on
        // convex regions, hence the negated dot for a positive-convex sign
        let h = if hn.dot(&normals[v]) > 0.0 {
            -hn.norm()
        } else {
            hn.norm()
        };
        let defect = if boundary.contains(&(v as u32)) {
            std::f64::consts::PI - angle_sum[v]
        } else {
            2.0 * std::f64::consts::PI - angle_sum[v]
        };
        let k = defect / area[v];
        let spread = (h * h - k).max(0.0).sqrt();

        mean[v] = h;
        gaussian[v] = k;
        minimum[v] = h - spread;
        maximum[v] = h + spread;
    }

    debug!(vertices = n, "computed vertex curvatures");
    Ok(VertexCurvatures {
        mean,
        gaussian,
        minimum,
        maximum,
    })
}

/// Per-face curvature: the mean of the three corner values of one measure.
///
/// # Errors
///
/// [`CurvatureError::EmptyMesh`] if the mesh has no faces.
pub fn face_curvature(
    mesh: &SurfaceMesh,
    measure: CurvatureMeasure,
) -> CurvatureResult<Vec<f64>> {
    let per_vertex = vertex_curvatures(mesh)?;
    let values = per_vertex.measure(measure);
    Ok(mesh
        .faces
        .iter()
        .map(|&[a, b, c]| {
            (values[a as usize] + values[b as usize] + values[c as usize]) / 3.0
        })
        .collect())
}

fn boundary_vertex_set(faces: &[[u32; 3]]) -> HashSet<u32> {
    let mut counts: hashbrown::HashMap<[u32; 2], u32> = hashbrown::HashMap::new();
    for &[a, b, c] in faces {
        for (u, v) in [(a, b), (b, c), (c, a)] {
            let key = if u <= v { [u, v] } else { [v, u] };
            *counts.entry(key).or_insert(0) += 1;
        }
    }
    counts
        .into_iter()
        .filter_map(|(edge, count)| (count == 1).then_some(edge))
        .flatten()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use cartilage_types::Point3;

    /// Icosphere: subdivided icosahedron projected onto the given radius.
    fn icosphere(radius: f64, subdivisions: u32) -> SurfaceMesh {
        let phi = (1.0 + 5.0_f64.sqrt()) / 2.0;
        let raw = [
            (-1.0, phi, 0.0),
            (1.0, phi, 0.0),
            (-1.0, -phi, 0.0),
            (1.0, -phi, 0.0),
            (0.0, -1.0, phi),
            (0.0, 1.0, phi),
            (0.0, -1.0, -phi),
            (0.0, 1.0, -phi),
            (phi, 0.0, -1.0),
            (phi, 0.0, 1.0),
            (-phi, 0.0, -1.0),
            (-phi, 0.0, 1.0),
        ];
        let mut vertices: Vec<Point3<f64>> = raw
            .iter()
            .map(|&(x, y, z)| {
                let p = Vector3::new(x, y, z).normalize() * radius;
                Point3::from(p)
            })
            .collect();
        let mut faces: Vec<[u32; 3]> = vec![
            [0, 11, 5], [0, 5, 1], [0, 1, 7], [0, 7, 10], [0, 10, 11],
            [1, 5, 9], [5, 11, 4], [11, 10, 2], [10, 7, 6], [7, 1, 8],
            [3, 9, 4], [3, 4, 2], [3, 2, 6], [3, 6, 8], [3, 8, 9],
            [4, 9, 5], [2, 4, 11], [6, 2, 10], [8, 6, 7], [9, 8, 1],
        ];

        for _ in 0..subdivisions {
            let mut midpoints: hashbrown::HashMap<[u32; 2], u32> = hashbrown::HashMap::new();
            let mut next_faces = Vec::with_capacity(faces.len() * 4);
            for &[a, b, c] in &faces {
                let mut mid = |u: u32, v: u32, verts: &mut Vec<Point3<f64>>| -> u32 {
                    let key = if u <= v { [u, v] } else { [v, u] };
                    *midpoints.entry(key).or_insert_with(|| {
                        let m = (verts[u as usize].coords + verts[v as usize].coords) / 2.0;
                        let m = m.normalize() * radius;
                        verts.push(Point3::from(m));
                        (verts.len() - 1) as u32
                    })
                };
                let ab = mid(a, b, &mut vertices);
                let bc = mid(b, c, &mut vertices);
                let ca = mid(c, a, &mut vertices);
                next_faces.extend_from_slice(&[
                    [a, ab, ca],
                    [ab, b, bc],
                    [ca, bc, c],
                    [ab, bc, ca],
                ]);
            }
            faces = next_faces;
        }

        SurfaceMesh::from_parts(vertices, faces)
    }

    #[test]
    fn sphere_mean_curvature_near_inverse_radius() {
        let radius = 10.0;
        let sphere = icosphere(radius, 2);
        let curvatures = vertex_curvatures(&sphere).unwrap();
        let avg: f64 =
            curvatures.mean.iter().sum::<f64>() / curvatures.mean.len() as f64;
        let expected = 1.0 / radius;
        assert!(
            (avg - expected).abs() < expected * 0.1,
            "avg mean curvature {avg} vs expected {expected}"
        );
    }

    #[test]
    fn sphere_gaussian_curvature_near_inverse_radius_squared() {
        let radius = 10.0;
        let sphere = icosphere(radius, 2);
        let curvatures = vertex_curvatures(&sphere).unwrap();
        let avg: f64 =
            curvatures.gaussian.iter().sum::<f64>() / curvatures.gaussian.len() as f64;
        let expected = 1.0 / (radius * radius);
        assert!(
            (avg - expected).abs() < expected * 0.1,
            "avg gaussian curvature {avg} vs expected {expected}"
        );
    }

    #[test]
    fn principal_curvatures_bracket_mean() {
        let sphere = icosphere(5.0, 1);
        let curvatures = vertex_curvatures(&sphere).unwrap();
        for v in 0..curvatures.mean.len() {
            assert!(curvatures.minimum[v] <= curvatures.mean[v] + 1e-12);
            assert!(curvatures.maximum[v] >= curvatures.mean[v] - 1e-12);
        }
    }

    #[test]
    fn flat_grid_interior_is_flat() {
        // 3x3 vertex grid in the plane, interior vertex 4
        let mut vertices = Vec::new();
        for row in 0..3 {
            for col in 0..3 {
                vertices.push(Point3::new(f64::from(col), f64::from(row), 0.0));
            }
        }
        let faces = vec![
            [0, 1, 3], [1, 4, 3], [1, 2, 4], [2, 5, 4],
            [3, 4, 6], [4, 7, 6], [4, 5, 7], [5, 8, 7],
        ];
        let mesh = SurfaceMesh::from_parts(vertices, faces);
        let curvatures = vertex_curvatures(&mesh).unwrap();
        assert!(curvatures.mean[4].abs() < 1e-9);
        assert!(curvatures.gaussian[4].abs() < 1e-9);
    }

    #[test]
    fn face_curvature_averages_corners() {
        let sphere = icosphere(2.0, 1);
        let per_face = face_curvature(&sphere, CurvatureMeasure::Mean).unwrap();
        assert_eq!(per_face.len(), sphere.face_count());
    }

    #[test]
    fn empty_mesh_rejected() {
        assert_eq!(
            vertex_curvatures(&SurfaceMesh::new()).err(),
            Some(CurvatureError::EmptyMesh)
        );
    }
}
