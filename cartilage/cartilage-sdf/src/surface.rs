//! Exact point-to-surface distance over a triangle mesh.

use crate::closest::closest_point_on_triangle;
use crate::error::{SdfError, SdfResult};
use cartilage_types::{Point3, SurfaceMesh, Triangle, Vector3};
use rayon::prelude::*;
use tracing::debug;

/// Result of a closest-point query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClosestHit {
    /// Closest point on the surface.
    pub point: Point3<f64>,
    /// Index of the face the point lies on.
    pub face: usize,
    /// Unsigned Euclidean distance.
    pub distance: f64,
}

/// Exact distance queries against a fixed target surface.
///
/// Owns a flattened copy of the target triangles so queries never touch the
/// source mesh. Per-query cost is linear in the face count; batch entry
/// points parallelize over queries with `rayon`, which is where all the
/// pipeline's query volume lives.
#[derive(Debug, Clone)]
pub struct SurfaceDistance {
    triangles: Vec<Triangle>,
    normals: Vec<Vector3<f64>>,
}

impl SurfaceDistance {
    /// Build a distance query over a mesh.
    ///
    /// # Errors
    ///
    /// [`SdfError::EmptyMesh`] if the mesh has no faces.
    pub fn new(mesh: &SurfaceMesh) -> SdfResult<Self> {
        if mesh.is_empty() {
            return Err(SdfError::EmptyMesh);
        }
        let triangles: Vec<Triangle> = mesh.triangles().collect();
        let normals = triangles
            .iter()
            .map(|t| t.normal().unwrap_or_else(Vector3::zeros))
            .collect();
        debug!(faces = triangles.len(), "built surface distance query");
        Ok(Self { triangles, normals })
    }

    /// Number of target faces.
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.triangles.len()
    }

    /// Closest point on the surface to a query point.
    #[must_use]
    pub fn closest(&self, p: &Point3<f64>) -> ClosestHit {
        let mut best = ClosestHit {
            point: self.triangles[0].v0,
            face: 0,
            distance: f64::INFINITY,
        };
        for (face, triangle) in self.triangles.iter().enumerate() {
            let q = closest_point_on_triangle(p, triangle);
            let distance = (p - q).norm();
            if distance < best.distance {
                best = ClosestHit {
                    point: q,
                    face,
                    distance,
                };
            }
        }
        best
    }

    /// Signed distance: positive on the side the face normal points to.
    ///
    /// The sign comes from the nearest face's normal, which is adequate for
    /// the smooth, well-tessellated bone surfaces this pipeline consumes.
    #[must_use]
    pub fn signed_distance(&self, p: &Point3<f64>) -> f64 {
        let hit = self.closest(p);
        if (p - hit.point).dot(&self.normals[hit.face]) < 0.0 {
            -hit.distance
        } else {
            hit.distance
        }
    }

    /// Signed distances for a batch of points, in input order.
    #[must_use]
    pub fn signed_distances(&self, points: &[Point3<f64>]) -> Vec<f64> {
        points
            .par_iter()
            .map(|p| self.signed_distance(p))
            .collect()
    }

    /// Unsigned distances for a batch of points, in input order.
    #[must_use]
    pub fn distances(&self, points: &[Point3<f64>]) -> Vec<f64> {
        points.par_iter().map(|p| self.closest(p).distance).collect()
    }

    /// Closest surface points for a batch of points, in input order.
    #[must_use]
    pub fn closest_points(&self, points: &[Point3<f64>]) -> Vec<Point3<f64>> {
        points.par_iter().map(|p| self.closest(p).point).collect()
    }

    /// Project penetrating points back onto the surface.
    ///
    /// Points on the negative side are replaced by their closest surface
    /// point; the rest pass through unchanged. Returns the new positions and
    /// how many moved. The sign convention follows [`Self::signed_distance`],
    /// so the target should be a closed surface with outward normals.
    #[must_use]
    pub fn remove_penetration(&self, points: &[Point3<f64>]) -> (Vec<Point3<f64>>, usize) {
        let resolved: Vec<(Point3<f64>, bool)> = points
            .par_iter()
            .map(|p| {
                let hit = self.closest(p);
                if (p - hit.point).dot(&self.normals[hit.face]) < 0.0 {
                    (hit.point, true)
                } else {
                    (*p, false)
                }
            })
            .collect();
        let moved = resolved.iter().filter(|&&(_, m)| m).count();
        if moved > 0 {
            debug!(moved, "resolved surface penetration");
        }
        (resolved.into_iter().map(|(p, _)| p).collect(), moved)
    }
}
