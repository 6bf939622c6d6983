//! Region refinement: trimming, component filtering, ear removal.

use crate::error::{RegionError, RegionResult};
use cartilage_topology::{
    boundary_vertices, find_ears, largest_component, VertexFaceAdjacency,
};
use cartilage_types::{Convergence, FaceSet, SurfaceMesh};
use tracing::debug;

/// Map local indices into a gathered face slice back to parent-mesh indices.
fn to_global(region: &FaceSet, local: impl IntoIterator<Item = usize>) -> FaceSet {
    let slice = region.as_slice();
    FaceSet::from_indices(local.into_iter().filter_map(|l| slice.get(l).copied()))
}

/// Peel `iterations` rings of boundary-touching faces off a region.
///
/// One ring is every selected face incident to a boundary vertex of the
/// selection. The raw interface seed has a frayed rim of faces that barely
/// cleared the gap threshold; trimming eats that rim back to solid material.
/// The result is always a subset of the input.
///
/// # Errors
///
/// [`RegionError::EmptyRegion`] if the region empties out before the
/// requested iterations finish.
pub fn trim_boundary(
    mesh: &SurfaceMesh,
    region: &FaceSet,
    iterations: usize,
) -> RegionResult<FaceSet> {
    let mut region = region.clone();
    for round in 0..iterations {
        let local = mesh.gather_faces(&region);
        let rim_vertices = boundary_vertices(&local);
        let adjacency = VertexFaceAdjacency::build(&local, mesh.vertex_count());
        let ring = to_global(&region, adjacency.faces_of_vertices(&rim_vertices).iter());

        region = region.difference(&ring);
        debug!(round, removed = ring.len(), left = region.len(), "trimmed rim");
        if region.is_empty() {
            return Err(RegionError::EmptyRegion {
                stage: "boundary trimming",
            });
        }
    }
    Ok(region)
}

/// Keep only the largest edge-connected component of a region.
///
/// # Errors
///
/// [`RegionError::EmptyRegion`] for an empty input region.
pub fn keep_largest(mesh: &SurfaceMesh, region: &FaceSet) -> RegionResult<FaceSet> {
    if region.is_empty() {
        return Err(RegionError::EmptyRegion {
            stage: "component filtering",
        });
    }
    let local = mesh.gather_faces(region);
    let largest = largest_component(&local)?;
    Ok(to_global(region, largest.iter()))
}

/// Shave ear faces (two or more boundary edges) off a region until none
/// remain or the iteration cap is hit.
///
/// Removing one ear can expose another, so this runs to a fixed point rather
/// than a fixed count.
///
/// # Errors
///
/// [`RegionError::EmptyRegion`] if ear removal consumes the whole region.
pub fn remove_ears(
    mesh: &SurfaceMesh,
    region: &FaceSet,
    max_iterations: usize,
) -> RegionResult<(FaceSet, Convergence)> {
    let mut region = region.clone();
    for round in 0..max_iterations {
        let local = mesh.gather_faces(&region);
        let ears = find_ears(&local);
        if ears.is_empty() {
            return Ok((region, Convergence::Converged { iterations: round }));
        }
        debug!(round, ears = ears.len(), "removing ears");
        region = region.difference(&to_global(&region, ears));
        if region.is_empty() {
            return Err(RegionError::EmptyRegion {
                stage: "ear removal",
            });
        }
    }
    Ok((region, Convergence::CapReached))
}
