//! Mesh cleanup after merges.

use cartilage_types::SurfaceMesh;
use hashbrown::{HashMap, HashSet};
use tracing::debug;

/// What a cleanup pass changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CleanReport {
    /// Vertices merged into a nearby representative.
    pub welded_vertices: usize,
    /// Faces dropped for repeating a vertex after welding.
    pub degenerate_faces: usize,
    /// Faces dropped as duplicates (winding-insensitive).
    pub duplicate_faces: usize,
    /// Vertices dropped because no face referenced them.
    pub unreferenced_vertices: usize,
}

/// Clean with the default tolerance: one hundredth of the shortest edge.
///
/// Merging a wall with its two sheets duplicates every rim vertex; welding
/// makes the shell watertight again, and the follow-up passes drop the faces
/// and vertices the weld obsoleted.
#[must_use]
pub fn clean_mesh(mesh: &SurfaceMesh) -> (SurfaceMesh, CleanReport) {
    let epsilon = mesh.min_edge_length().map_or(0.0, |edge| edge / 100.0);
    clean_mesh_with_epsilon(mesh, epsilon)
}

/// Clean with an explicit welding tolerance.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
// Vertex counts fit u32 throughout the workspace.
pub fn clean_mesh_with_epsilon(mesh: &SurfaceMesh, epsilon: f64) -> (SurfaceMesh, CleanReport) {
    let mut report = CleanReport::default();

    // weld: spatial hash over epsilon-sized cells, probing the 27 neighbors
    let mut representative_of = vec![0_u32; mesh.vertex_count()];
    let mut representatives: Vec<usize> = Vec::new();
    let mut cells: HashMap<[i64; 3], Vec<usize>> = HashMap::new();

    for (i, p) in mesh.vertices.iter().enumerate() {
        let cell = if epsilon > 0.0 {
            [
                (p.x / epsilon).floor() as i64,
                (p.y / epsilon).floor() as i64,
                (p.z / epsilon).floor() as i64,
            ]
        } else {
            [0, 0, 0]
        };

        let mut found = None;
        'probe: for dx in -1..=1_i64 {
            for dy in -1..=1_i64 {
                for dz in -1..=1_i64 {
                    let key = [cell[0] + dx, cell[1] + dy, cell[2] + dz];
                    if let Some(candidates) = cells.get(&key) {
                        for &c in candidates {
                            let q = mesh.vertices[representatives[c]];
                            if (p - q).norm() <= epsilon {
                                found = Some(c);
                                break 'probe;
                            }
                        }
                    }
                }
            }
        }

        match found {
            Some(c) => {
                representative_of[i] = c as u32;
                report.welded_vertices += 1;
            }
            None => {
                let c = representatives.len();
                representatives.push(i);
                cells.entry(cell).or_default().push(c);
                representative_of[i] = c as u32;
            }
        }
    }

    // remap faces, dropping degenerates and winding-insensitive duplicates
    let mut seen: HashSet<[u32; 3]> = HashSet::with_capacity(mesh.face_count());
    let mut faces = Vec::with_capacity(mesh.face_count());
    for &[a, b, c] in &mesh.faces {
        let face = [
            representative_of[a as usize],
            representative_of[b as usize],
            representative_of[c as usize],
        ];
        if face[0] == face[1] || face[1] == face[2] || face[0] == face[2] {
            report.degenerate_faces += 1;
            continue;
        }
        let mut key = face;
        key.sort_unstable();
        if seen.insert(key) {
            faces.push(face);
        } else {
            report.duplicate_faces += 1;
        }
    }

    // compact unreferenced vertices
    let mut used = vec![false; representatives.len()];
    for face in &faces {
        for &v in face {
            used[v as usize] = true;
        }
    }
    let mut compact_index = vec![0_u32; representatives.len()];
    let mut vertices = Vec::new();
    for (old, &keep) in used.iter().enumerate() {
        if keep {
            compact_index[old] = vertices.len() as u32;
            vertices.push(mesh.vertices[representatives[old]]);
        } else {
            report.unreferenced_vertices += 1;
        }
    }
    for face in &mut faces {
        for v in face.iter_mut() {
            *v = compact_index[*v as usize];
        }
    }

    debug!(?report, "cleaned mesh");
    (SurfaceMesh::from_parts(vertices, faces), report)
}
