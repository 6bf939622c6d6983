//! Nearest-vertex lookup via a KD-tree.

use crate::error::{SdfError, SdfResult};
use cartilage_types::Point3;
use kiddo::float::kdtree::KdTree;
use kiddo::SquaredEuclidean;

/// KD-tree over a fixed set of vertex positions.
///
/// Distinct from [`crate::SurfaceDistance`]: this answers "which vertex is
/// nearest", which seeding uses to transfer a region from one bone surface to
/// the opposing one.
pub struct VertexIndex {
    // Bucket size 256: kiddo panics when more items than the bucket size
    // share one coordinate, which planar meshes routinely do.
    tree: KdTree<f64, u64, 3, 256, u32>,
}

impl VertexIndex {
    /// Build an index over the given positions.
    ///
    /// # Errors
    ///
    /// [`SdfError::EmptyPointSet`] if `points` is empty.
    pub fn new(points: &[Point3<f64>]) -> SdfResult<Self> {
        if points.is_empty() {
            return Err(SdfError::EmptyPointSet);
        }
        let mut tree = KdTree::new();
        for (i, p) in points.iter().enumerate() {
            tree.add(&[p.x, p.y, p.z], i as u64);
        }
        Ok(Self { tree })
    }

    /// Index of and Euclidean distance to the nearest vertex.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    // Item ids were produced from usize indices, so the cast back is lossless.
    pub fn nearest(&self, p: &Point3<f64>) -> (usize, f64) {
        let hit = self.tree.nearest_one::<SquaredEuclidean>(&[p.x, p.y, p.z]);
        (hit.item as usize, hit.distance.sqrt())
    }

    /// Nearest vertex index for each query point, deduplicated and sorted.
    #[must_use]
    pub fn nearest_each(&self, points: &[Point3<f64>]) -> Vec<usize> {
        let mut out: Vec<usize> = points.iter().map(|p| self.nearest(p).0).collect();
        out.sort_unstable();
        out.dedup();
        out
    }
}
