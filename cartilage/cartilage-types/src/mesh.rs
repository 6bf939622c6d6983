//! Indexed triangle mesh.

use crate::{Aabb, FaceSet, Triangle};
use nalgebra::{Point3, Vector3};

/// An indexed triangle mesh.
///
/// Stores vertex positions and faces separately, with faces referencing
/// vertices by index. This is the interchange type between every stage of the
/// synthesis pipeline: region selection works on face indices into the
/// `faces` array, extrusion produces a new `vertices` array against the same
/// `faces`, and wall closure merges several meshes into one.
///
/// # Winding Order
///
/// Faces use counter-clockwise (CCW) winding when viewed from outside, so
/// normals point outward by the right-hand rule.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SurfaceMesh {
    /// Vertex positions in millimeters.
    pub vertices: Vec<Point3<f64>>,

    /// Triangle faces as indices into the vertex array.
    /// Each face is `[v0, v1, v2]` with counter-clockwise winding.
    pub faces: Vec<[u32; 3]>,
}

impl SurfaceMesh {
    /// Create a new empty mesh.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            vertices: Vec::new(),
            faces: Vec::new(),
        }
    }

    /// Create a mesh with pre-allocated capacity.
    #[inline]
    #[must_use]
    pub fn with_capacity(vertex_count: usize, face_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            faces: Vec::with_capacity(face_count),
        }
    }

    /// Create a mesh from vertices and faces.
    ///
    /// # Example
    ///
    /// ```
    /// use cartilage_types::{SurfaceMesh, Point3};
    ///
    /// let vertices = vec![
    ///     Point3::new(0.0, 0.0, 0.0),
    ///     Point3::new(1.0, 0.0, 0.0),
    ///     Point3::new(0.0, 1.0, 0.0),
    /// ];
    /// let mesh = SurfaceMesh::from_parts(vertices, vec![[0, 1, 2]]);
    /// assert_eq!(mesh.face_count(), 1);
    /// ```
    #[inline]
    #[must_use]
    pub const fn from_parts(vertices: Vec<Point3<f64>>, faces: Vec<[u32; 3]>) -> Self {
        Self { vertices, faces }
    }

    /// Number of vertices.
    #[inline]
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of faces.
    #[inline]
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// A mesh with no faces is considered empty, even if vertices exist.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// The concrete triangle at a face index, or `None` if out of bounds.
    #[must_use]
    pub fn triangle(&self, face_index: usize) -> Option<Triangle> {
        self.faces.get(face_index).map(|&[i0, i1, i2]| Triangle {
            v0: self.vertices[i0 as usize],
            v1: self.vertices[i1 as usize],
            v2: self.vertices[i2 as usize],
        })
    }

    /// Iterate over all faces as concrete triangles.
    pub fn triangles(&self) -> impl Iterator<Item = Triangle> + '_ {
        self.faces.iter().map(|&[i0, i1, i2]| Triangle {
            v0: self.vertices[i0 as usize],
            v1: self.vertices[i1 as usize],
            v2: self.vertices[i2 as usize],
        })
    }

    /// The centroid of each face, in face order.
    #[must_use]
    pub fn face_centroids(&self) -> Vec<Point3<f64>> {
        self.triangles().map(|t| t.centroid()).collect()
    }

    /// Sorted, deduplicated vertex indices referenced by a face subset.
    #[must_use]
    pub fn subset_vertices(&self, faces: &FaceSet) -> Vec<u32> {
        let mut idxs: Vec<u32> = faces
            .iter()
            .filter_map(|f| self.faces.get(f))
            .flatten()
            .copied()
            .collect();
        idxs.sort_unstable();
        idxs.dedup();
        idxs
    }

    /// The faces of a subset gathered into a new face array.
    ///
    /// Indices still refer to this mesh's vertex array; this is not a
    /// standalone mesh.
    #[must_use]
    pub fn gather_faces(&self, faces: &FaceSet) -> Vec<[u32; 3]> {
        faces.iter().filter_map(|f| self.faces.get(f).copied()).collect()
    }

    /// A copy of this mesh with every face's winding reversed.
    ///
    /// Returns a new mesh; the input is left untouched so face arrays shared
    /// with region selections cannot be corrupted.
    #[must_use]
    pub fn flipped(&self) -> Self {
        Self {
            vertices: self.vertices.clone(),
            faces: self.faces.iter().map(|&[a, b, c]| [b, a, c]).collect(),
        }
    }

    /// Uniformly scale all vertex positions around the origin.
    ///
    /// Used only by the I/O layer for millimeter/meter conversion.
    #[must_use]
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            vertices: self.vertices.iter().map(|v| v * factor).collect(),
            faces: self.faces.clone(),
        }
    }

    /// Total surface area of all faces.
    #[must_use]
    pub fn surface_area(&self) -> f64 {
        self.triangles().map(|t| t.area()).sum()
    }

    /// Surface area of a face subset.
    #[must_use]
    pub fn subset_area(&self, faces: &FaceSet) -> f64 {
        faces
            .iter()
            .filter_map(|f| self.triangle(f))
            .map(|t| t.area())
            .sum()
    }

    /// Signed volume via the divergence theorem.
    ///
    /// Positive for a closed mesh with outward normals; near zero for open or
    /// inconsistently wound meshes.
    #[must_use]
    pub fn signed_volume(&self) -> f64 {
        let mut volume = 0.0;
        for &[i0, i1, i2] in &self.faces {
            let v0 = self.vertices[i0 as usize].coords;
            let v1 = self.vertices[i1 as usize].coords;
            let v2 = self.vertices[i2 as usize].coords;
            volume += v0.dot(&v1.cross(&v2));
        }
        volume / 6.0
    }

    /// Minimum edge length over all faces.
    ///
    /// Returns `None` for an empty mesh. The cleaning epsilon is derived from
    /// this.
    #[must_use]
    pub fn min_edge_length(&self) -> Option<f64> {
        let mut min: Option<f64> = None;
        for &[i0, i1, i2] in &self.faces {
            let a = self.vertices[i0 as usize];
            let b = self.vertices[i1 as usize];
            let c = self.vertices[i2 as usize];
            for len in [(b - a).norm(), (c - b).norm(), (a - c).norm()] {
                min = Some(min.map_or(len, |m: f64| m.min(len)));
            }
        }
        min
    }

    /// Append another mesh, offsetting its face indices.
    #[allow(clippy::cast_possible_truncation)]
    // Mesh indices are u32; vertex counts beyond 4B are unsupported by design.
    pub fn merge(&mut self, other: &Self) {
        let offset = self.vertices.len() as u32;
        self.vertices.extend_from_slice(&other.vertices);
        self.faces.extend(
            other
                .faces
                .iter()
                .map(|&[a, b, c]| [a + offset, b + offset, c + offset]),
        );
    }

    /// Area-weighted vertex normal directions.
    ///
    /// Each incident face contributes its (unnormalized) cross product, which
    /// weights by twice the face area. Degenerate faces contribute nothing.
    /// Vertices with no incident faces get a zero normal.
    #[must_use]
    pub fn vertex_normals(&self) -> Vec<Vector3<f64>> {
        let mut normals = vec![Vector3::zeros(); self.vertices.len()];
        for &[i0, i1, i2] in &self.faces {
            let a = self.vertices[i0 as usize];
            let b = self.vertices[i1 as usize];
            let c = self.vertices[i2 as usize];
            let weighted = (b - a).cross(&(c - a));
            normals[i0 as usize] += weighted;
            normals[i1 as usize] += weighted;
            normals[i2 as usize] += weighted;
        }
        for n in &mut normals {
            if let Some(unit) = n.try_normalize(f64::EPSILON) {
                *n = unit;
            }
        }
        normals
    }

    /// Axis-aligned bounding box over all vertices.
    #[must_use]
    pub fn bounds(&self) -> Aabb {
        Aabb::from_points(self.vertices.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn unit_tetrahedron() -> SurfaceMesh {
        SurfaceMesh::from_parts(
            vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(0.0, 1.0, 0.0),
                Point3::new(0.0, 0.0, 1.0),
            ],
            vec![[0, 2, 1], [0, 1, 3], [1, 2, 3], [2, 0, 3]],
        )
    }

    #[test]
    fn empty_mesh() {
        let mesh = SurfaceMesh::new();
        assert!(mesh.is_empty());
        assert!(mesh.min_edge_length().is_none());
    }

    #[test]
    fn tetrahedron_volume() {
        let mesh = unit_tetrahedron();
        assert_relative_eq!(mesh.signed_volume(), 1.0 / 6.0, epsilon = 1e-12);
    }

    #[test]
    fn flipped_negates_volume() {
        let mesh = unit_tetrahedron();
        let flipped = mesh.flipped();
        assert_relative_eq!(
            flipped.signed_volume(),
            -mesh.signed_volume(),
            epsilon = 1e-12
        );
        // Original untouched
        assert_eq!(mesh.faces[0], [0, 2, 1]);
    }

    #[test]
    fn merge_offsets_indices() {
        let mut a = unit_tetrahedron();
        let b = unit_tetrahedron();
        a.merge(&b);
        assert_eq!(a.vertex_count(), 8);
        assert_eq!(a.face_count(), 8);
        assert_eq!(a.faces[4], [4, 6, 5]);
    }

    #[test]
    fn subset_vertices_sorted_unique() {
        let mesh = unit_tetrahedron();
        let set = FaceSet::from_indices([0, 1]);
        assert_eq!(mesh.subset_vertices(&set), vec![0, 1, 2, 3]);
    }

    #[test]
    fn zero_scalar_extrude_roundtrip_area() {
        let mesh = unit_tetrahedron();
        let scaled = mesh.scaled(2.0);
        assert_relative_eq!(scaled.surface_area(), mesh.surface_area() * 4.0, epsilon = 1e-12);
    }

    #[test]
    fn vertex_normals_unit_length() {
        let mesh = unit_tetrahedron();
        for n in mesh.vertex_normals() {
            assert_relative_eq!(n.norm(), 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn min_edge_length_tetrahedron() {
        let mesh = unit_tetrahedron();
        assert_relative_eq!(mesh.min_edge_length().unwrap(), 1.0, epsilon = 1e-12);
    }
}
