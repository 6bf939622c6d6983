//! Rim taper ramp.

use crate::error::FieldResult;
use cartilage_geodesic::distance_from_sources;
use cartilage_types::SurfaceMesh;
use std::f64::consts::PI;
use tracing::debug;

/// Quarter-sine taper over a geodesic band inward from the patch rim.
///
/// Returns `(vertices, values)`: the vertices whose geodesic distance `d`
/// from the rim is at most `bandwidth`, each valued
/// `min_thickness * sin(d * pi / (2 * bandwidth))`. The rim itself gets zero
/// and the value rises to `min_thickness` at the inner edge of the band, so
/// the blend solve can hand over to the interior thickness without a kink.
///
/// # Errors
///
/// A geodesic error if `rim` is empty or out of range.
pub fn taper_ramp(
    mesh: &SurfaceMesh,
    rim: &[u32],
    min_thickness: f64,
    bandwidth: f64,
) -> FieldResult<(Vec<u32>, Vec<f64>)> {
    let field = distance_from_sources(mesh, rim)?;
    let band = field.within(bandwidth);
    let values = band
        .iter()
        .map(|&v| min_thickness * (field.get(v) * PI / (2.0 * bandwidth)).sin())
        .collect();
    debug!(band = band.len(), bandwidth, "built rim taper");
    Ok((band, values))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use cartilage_types::Point3;

    /// 1x4 strip of unit quads along x.
    fn strip() -> SurfaceMesh {
        let mut vertices = Vec::new();
        for row in 0..2 {
            for col in 0..5 {
                vertices.push(Point3::new(f64::from(col), f64::from(row), 0.0));
            }
        }
        let mut faces = Vec::new();
        for col in 0..4_u32 {
            faces.push([col, col + 1, col + 5]);
            faces.push([col + 1, col + 6, col + 5]);
        }
        SurfaceMesh::from_parts(vertices, faces)
    }

    #[test]
    fn ramp_rises_from_rim() {
        let mesh = strip();
        // rim is the left column
        let (band, values) = taper_ramp(&mesh, &[0, 5], 0.6, 2.0).unwrap();
        let value_of = |v: u32| {
            band.iter()
                .position(|&b| b == v)
                .map(|i| values[i])
                .unwrap()
        };
        // d = 0 at the rim, d = 1 halfway, d = 2 at the band edge
        assert_relative_eq!(value_of(0), 0.0, epsilon = 1e-12);
        assert_relative_eq!(value_of(1), 0.6 * (PI / 4.0).sin(), epsilon = 1e-12);
        assert_relative_eq!(value_of(2), 0.6, epsilon = 1e-12);
    }

    #[test]
    fn band_excludes_distant_vertices() {
        let mesh = strip();
        let (band, _) = taper_ramp(&mesh, &[0, 5], 0.6, 1.5).unwrap();
        assert!(!band.contains(&3));
        assert!(!band.contains(&4));
    }
}
