//! Ear detection.

use crate::boundary::faces_by_boundary_edge_count;

/// Local indices of ear faces: faces with two or more boundary edges.
///
/// Ears are single-triangle spikes hanging off a region's rim. Removing them
/// can expose new ears, so callers iterate to a fixed point.
#[must_use]
pub fn find_ears(faces: &[[u32; 3]]) -> Vec<usize> {
    faces_by_boundary_edge_count(faces, 2)
}
