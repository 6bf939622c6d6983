//! Interface seeding between opposing bone surfaces.

use crate::error::{RegionError, RegionResult};
use cartilage_sdf::{SurfaceDistance, VertexIndex};
use cartilage_topology::VertexFaceAdjacency;
use cartilage_types::{FaceSet, SurfaceMesh};
use tracing::{debug, info};

/// Faces of `primary` whose centroid lies within `gap_distance` of
/// `secondary`.
///
/// This is the seed every joint pipeline starts from: the subset of one bone
/// surface that actually faces the opposing bone across the joint space.
///
/// # Errors
///
/// [`RegionError::EmptyRegion`] when no face is close enough, which almost
/// always means the gap distance is too small for the subject's joint space.
pub fn select_interface(
    primary: &SurfaceMesh,
    secondary: &SurfaceMesh,
    gap_distance: f64,
) -> RegionResult<FaceSet> {
    let sdf = SurfaceDistance::new(secondary)?;
    let centroids = primary.face_centroids();
    let distances = sdf.distances(&centroids);

    let region = FaceSet::from_indices(
        distances
            .iter()
            .enumerate()
            .filter_map(|(face, &d)| (d < gap_distance).then_some(face)),
    );
    if region.is_empty() {
        return Err(RegionError::EmptyRegion {
            stage: "interface selection",
        });
    }
    info!(
        faces = region.len(),
        gap_distance, "selected interface region"
    );
    Ok(region)
}

/// Like [`select_interface`], additionally returning the secondary-surface
/// vertices nearest to the selected region.
///
/// The opposite-side vertex list seeds the matching cartilage layer on the
/// other bone, so the two layers of a joint face each other by construction.
///
/// # Errors
///
/// Same as [`select_interface`].
pub fn select_interface_with_opposite(
    primary: &SurfaceMesh,
    secondary: &SurfaceMesh,
    gap_distance: f64,
) -> RegionResult<(FaceSet, Vec<u32>)> {
    let region = select_interface(primary, secondary, gap_distance)?;

    let index = VertexIndex::new(&secondary.vertices)?;
    let selected_positions: Vec<_> = region
        .iter()
        .filter_map(|f| primary.triangle(f))
        .map(|t| t.centroid())
        .collect();
    #[allow(clippy::cast_possible_truncation)]
    // Vertex counts fit u32 throughout the workspace.
    let opposite: Vec<u32> = index
        .nearest_each(&selected_positions)
        .into_iter()
        .map(|v| v as u32)
        .collect();
    debug!(
        opposite_vertices = opposite.len(),
        "mapped region onto opposing surface"
    );
    Ok((region, opposite))
}

/// Expand vertex indices into the set of faces incident to any of them.
///
/// Turns the opposite-side vertex list from
/// [`select_interface_with_opposite`] into a face region on that mesh.
///
/// # Errors
///
/// [`RegionError::EmptyRegion`] if no face touches any given vertex.
pub fn expand_vertices(mesh: &SurfaceMesh, vertices: &[u32]) -> RegionResult<FaceSet> {
    let adjacency = VertexFaceAdjacency::build(&mesh.faces, mesh.vertex_count());
    let region = adjacency.faces_of_vertices(vertices);
    if region.is_empty() {
        return Err(RegionError::EmptyRegion {
            stage: "vertex expansion",
        });
    }
    Ok(region)
}
