//! Boundary-loop smoothing with surface re-snap.

use crate::error::QualityResult;
use cartilage_sdf::SurfaceDistance;
use cartilage_topology::boundary_loops;
use cartilage_types::Point3;
use tracing::debug;

/// Configuration for boundary smoothing.
#[derive(Debug, Clone, Copy)]
pub struct SmoothConfig {
    /// Blend toward the neighbor midpoint, in `[0, 1]`.
    pub factor: f64,
    /// Number of smoothing passes.
    pub iterations: usize,
}

impl Default for SmoothConfig {
    fn default() -> Self {
        Self {
            factor: 0.5,
            iterations: 3,
        }
    }
}

impl SmoothConfig {
    /// Set the blend factor.
    #[must_use]
    pub const fn with_factor(mut self, factor: f64) -> Self {
        self.factor = factor;
        self
    }

    /// Set the pass count.
    #[must_use]
    pub const fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }
}

/// Relax every boundary loop toward its neighbor midpoints, snapping each
/// moved vertex back onto `surface` after every pass.
///
/// Each rim vertex moves by `factor * (midpoint(prev, next) - v)` per pass,
/// then is replaced by its closest point on the bone surface, so the rim
/// stays glued to the anatomy however hard it is smoothed. Interior vertices
/// are returned unchanged; the input is untouched.
///
/// # Errors
///
/// Currently infallible beyond the `QualityResult` signature; kept fallible
/// for parity with the rest of the pipeline stages.
pub fn smooth_boundary(
    vertices: &[Point3<f64>],
    faces: &[[u32; 3]],
    surface: &SurfaceDistance,
    config: &SmoothConfig,
) -> QualityResult<Vec<Point3<f64>>> {
    let loops = boundary_loops(faces);
    let mut result = vertices.to_vec();

    for _ in 0..config.iterations {
        for ring in &loops {
            let snapshot: Vec<Point3<f64>> =
                ring.iter().map(|&v| result[v as usize]).collect();
            for (i, &v) in ring.iter().enumerate() {
                let prev = snapshot[(i + ring.len() - 1) % ring.len()];
                let next = snapshot[(i + 1) % ring.len()];
                let midpoint = Point3::from((prev.coords + next.coords) / 2.0);
                let relaxed = snapshot[i] + (midpoint - snapshot[i]) * config.factor;
                result[v as usize] = surface.closest(&relaxed).point;
            }
        }
    }
    debug!(
        loops = loops.len(),
        passes = config.iterations,
        "smoothed boundary"
    );
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use cartilage_types::SurfaceMesh;

    /// A large flat square to snap against.
    fn plane() -> SurfaceMesh {
        SurfaceMesh::from_parts(
            vec![
                Point3::new(-10.0, -10.0, 0.0),
                Point3::new(10.0, -10.0, 0.0),
                Point3::new(10.0, 10.0, 0.0),
                Point3::new(-10.0, 10.0, 0.0),
            ],
            vec![[0, 1, 2], [0, 2, 3]],
        )
    }

    /// Fan around center vertex 0 with a jagged rim vertex.
    fn jagged_fan() -> (Vec<Point3<f64>>, Vec<[u32; 3]>) {
        let vertices = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(2.0, 1.0, 0.0), // juts outward
            Point3::new(0.0, 1.0, 0.0),
            Point3::new(-1.0, 0.0, 0.0),
        ];
        let faces = vec![[0, 1, 2], [0, 2, 3], [0, 3, 4]];
        (vertices, faces)
    }

    #[test]
    fn jag_is_pulled_toward_neighbor_midpoint() {
        let (vertices, faces) = jagged_fan();
        let surface = SurfaceDistance::new(&plane()).unwrap();
        let config = SmoothConfig::default().with_factor(1.0).with_iterations(1);
        let smoothed = smooth_boundary(&vertices, &faces, &surface, &config).unwrap();
        // vertex 2 moves to the midpoint of its rim neighbors 1 and 3
        assert_relative_eq!(smoothed[2].x, 0.5, epsilon = 1e-12);
        assert_relative_eq!(smoothed[2].y, 0.5, epsilon = 1e-12);
    }

    #[test]
    fn snap_keeps_the_rim_on_the_surface() {
        let (mut vertices, faces) = jagged_fan();
        vertices[2].z = 0.8; // lift the jag off the bone
        let surface = SurfaceDistance::new(&plane()).unwrap();
        let smoothed =
            smooth_boundary(&vertices, &faces, &surface, &SmoothConfig::default()).unwrap();
        for p in &smoothed {
            assert_relative_eq!(p.z, 0.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn input_is_untouched() {
        let (vertices, faces) = jagged_fan();
        let before = vertices.clone();
        let surface = SurfaceDistance::new(&plane()).unwrap();
        let _ = smooth_boundary(&vertices, &faces, &surface, &SmoothConfig::default()).unwrap();
        assert_eq!(vertices, before);
    }

    #[test]
    fn zero_factor_only_snaps() {
        let (vertices, faces) = jagged_fan();
        let surface = SurfaceDistance::new(&plane()).unwrap();
        let config = SmoothConfig::default().with_factor(0.0);
        let smoothed = smooth_boundary(&vertices, &faces, &surface, &config).unwrap();
        for (a, b) in vertices.iter().zip(&smoothed) {
            assert_relative_eq!((a - b).norm(), 0.0, epsilon = 1e-12);
        }
    }
}
