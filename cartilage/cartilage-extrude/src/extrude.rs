//! Extrusion along vertex normals.

use crate::error::{ExtrudeError, ExtrudeResult};
use cartilage_types::SurfaceMesh;
use tracing::debug;

/// Push every vertex along its area-weighted normal by a per-vertex amount.
///
/// Faces are copied unchanged, so the result is a displaced twin of the
/// input patch. A zero field returns an exact copy.
///
/// # Errors
///
/// [`ExtrudeError::EmptyMesh`] for a faceless mesh,
/// [`ExtrudeError::FieldSizeMismatch`] when the field length is wrong.
pub fn extrude_along_normals(mesh: &SurfaceMesh, field: &[f64]) -> ExtrudeResult<SurfaceMesh> {
    if mesh.is_empty() {
        return Err(ExtrudeError::EmptyMesh);
    }
    if field.len() != mesh.vertex_count() {
        return Err(ExtrudeError::FieldSizeMismatch {
            expected: mesh.vertex_count(),
            got: field.len(),
        });
    }

    let normals = mesh.vertex_normals();
    let vertices = mesh
        .vertices
        .iter()
        .zip(&normals)
        .zip(field)
        .map(|((v, n), &h)| v + n * h)
        .collect();
    debug!(vertices = mesh.vertex_count(), "extruded along thickness field");
    Ok(SurfaceMesh::from_parts(vertices, mesh.faces.clone()))
}

/// Push every vertex along its normal by the same amount.
///
/// Negative offsets extrude inward, which the fovea cap uses to sandwich its
/// patch from both sides.
///
/// # Errors
///
/// [`ExtrudeError::EmptyMesh`] for a faceless mesh.
pub fn extrude_uniform(mesh: &SurfaceMesh, offset: f64) -> ExtrudeResult<SurfaceMesh> {
    let field = vec![offset; mesh.vertex_count()];
    extrude_along_normals(mesh, &field)
}
