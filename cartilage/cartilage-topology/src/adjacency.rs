//! CSR vertex-to-face adjacency.

use cartilage_types::FaceSet;

/// Compressed sparse row mapping from vertex index to incident faces.
///
/// Face indices are local to the slice the adjacency was built from. Built
/// once per refinement step and queried many times, so construction is two
/// counting passes with no per-vertex allocation.
#[derive(Debug, Clone)]
pub struct VertexFaceAdjacency {
    offsets: Vec<usize>,
    faces: Vec<usize>,
}

impl VertexFaceAdjacency {
    /// Build the adjacency for a face slice over `vertex_count` vertices.
    ///
    /// Face indices beyond the vertex count are ignored rather than panicking;
    /// callers validate meshes at the I/O boundary.
    #[must_use]
    pub fn build(faces: &[[u32; 3]], vertex_count: usize) -> Self {
        let mut counts = vec![0_usize; vertex_count];
        for face in faces {
            for &v in face {
                if let Some(c) = counts.get_mut(v as usize) {
                    *c += 1;
                }
            }
        }

        let mut offsets = Vec::with_capacity(vertex_count + 1);
        let mut total = 0;
        offsets.push(0);
        for c in &counts {
            total += c;
            offsets.push(total);
        }

        let mut cursor = offsets.clone();
        let mut incident = vec![0_usize; total];
        for (face_index, face) in faces.iter().enumerate() {
            for &v in face {
                let v = v as usize;
                if v < vertex_count {
                    incident[cursor[v]] = face_index;
                    cursor[v] += 1;
                }
            }
        }

        Self {
            offsets,
            faces: incident,
        }
    }

    /// Faces incident to a vertex, in face-slice order.
    #[must_use]
    pub fn faces_of(&self, vertex: u32) -> &[usize] {
        let v = vertex as usize;
        if v + 1 >= self.offsets.len() {
            return &[];
        }
        &self.faces[self.offsets[v]..self.offsets[v + 1]]
    }

    /// Number of vertices the adjacency covers.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.offsets.len().saturating_sub(1)
    }

    /// All faces incident to any vertex in the given list.
    #[must_use]
    pub fn faces_of_vertices(&self, vertices: &[u32]) -> FaceSet {
        FaceSet::from_indices(
            vertices
                .iter()
                .flat_map(|&v| self.faces_of(v).iter().copied()),
        )
    }
}
