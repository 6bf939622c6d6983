//! Harmonic and biharmonic boundary-value blending.

use crate::error::{FieldError, FieldResult};
use cartilage_types::Point3;
use hashbrown::HashMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Order of the boundary-value blend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlendOrder {
    /// Solve the Laplace equation: membrane-like, fastest falloff.
    Harmonic,
    /// Solve the bi-Laplace equation: thin-plate-like, smoother handover
    /// at the constraints.
    Biharmonic,
}

const CG_TOLERANCE: f64 = 1e-8;

/// Sparse symmetric matrix as per-row adjacency lists.
struct SparseRows {
    rows: Vec<Vec<(u32, f64)>>,
}

impl SparseRows {
    fn apply(&self, x: &[f64], out: &mut [f64]) {
        for (i, row) in self.rows.iter().enumerate() {
            let mut acc = 0.0;
            for &(j, w) in row {
                acc += w * x[j as usize];
            }
            out[i] = acc;
        }
    }
}

/// Cotangent Laplacian `L = D - W` and barycentric vertex areas.
fn cotan_laplacian(vertices: &[Point3<f64>], faces: &[[u32; 3]]) -> (SparseRows, Vec<f64>) {
    let n = vertices.len();
    let mut weights: Vec<HashMap<u32, f64>> = vec![HashMap::new(); n];
    let mut area = vec![0.0_f64; n];

    for &[i0, i1, i2] in faces {
        let idx = [i0, i1, i2];
        let p = [
            vertices[i0 as usize],
            vertices[i1 as usize],
            vertices[i2 as usize],
        ];
        let face_area = (p[1] - p[0]).cross(&(p[2] - p[0])).norm() / 2.0;

        for corner in 0..3 {
            area[idx[corner] as usize] += face_area / 3.0;

            let u = p[(corner + 1) % 3] - p[corner];
            let v = p[(corner + 2) % 3] - p[corner];
            let cross = u.cross(&v).norm();
            let cot = if cross < f64::EPSILON {
                0.0
            } else {
                u.dot(&v) / cross
            };
            // the angle at this corner weights the opposite edge
            let a = idx[(corner + 1) % 3];
            let b = idx[(corner + 2) % 3];
            *weights[a as usize].entry(b).or_insert(0.0) += cot / 2.0;
            *weights[b as usize].entry(a).or_insert(0.0) += cot / 2.0;
        }
    }

    let rows = weights
        .into_iter()
        .enumerate()
        .map(|(i, row)| {
            let diagonal: f64 = row.values().sum();
            let mut entries: Vec<(u32, f64)> = row.into_iter().map(|(j, w)| (j, -w)).collect();
            #[allow(clippy::cast_possible_truncation)]
            // Vertex counts fit u32 throughout the workspace.
            entries.push((i as u32, diagonal));
            entries.sort_unstable_by_key(|&(j, _)| j);
            entries
        })
        .collect();

    (SparseRows { rows }, area)
}

/// Apply the blend operator: `L` for harmonic, `L M^-1 L` for biharmonic.
fn apply_operator(
    laplacian: &SparseRows,
    area: &[f64],
    order: BlendOrder,
    x: &[f64],
    scratch: &mut [f64],
    out: &mut [f64],
) {
    match order {
        BlendOrder::Harmonic => laplacian.apply(x, out),
        BlendOrder::Biharmonic => {
            laplacian.apply(x, scratch);
            for (s, &a) in scratch.iter_mut().zip(area) {
                if a > f64::EPSILON {
                    *s /= a;
                }
            }
            laplacian.apply(scratch, out);
        }
    }
}

/// Interpolate constrained values over a patch by solving a harmonic or
/// biharmonic boundary-value problem.
///
/// `constraints` pins vertices (typically the interior thickness samples and
/// the rim taper band) and the solve fills every other vertex referenced by
/// `faces`. Vertices outside the patch come back as zero.
///
/// # Errors
///
/// [`FieldError::NoConstraints`] for an empty constraint list,
/// [`FieldError::ConstraintOutOfRange`] for a bad index, and
/// [`FieldError::SolveFailed`] if conjugate gradients stalls.
pub fn blend_field(
    vertices: &[Point3<f64>],
    faces: &[[u32; 3]],
    constraints: &[(u32, f64)],
    order: BlendOrder,
) -> FieldResult<Vec<f64>> {
    if constraints.is_empty() {
        return Err(FieldError::NoConstraints);
    }
    let n = vertices.len();
    if let Some(&(bad, _)) = constraints.iter().find(|&&(v, _)| (v as usize) >= n) {
        return Err(FieldError::ConstraintOutOfRange(bad, n));
    }

    let fixed: HashMap<u32, f64> = constraints.iter().copied().collect();
    let mut in_patch = vec![false; n];
    for face in faces {
        for &v in face {
            in_patch[v as usize] = true;
        }
    }
    #[allow(clippy::cast_possible_truncation)]
    // Vertex counts fit u32 throughout the workspace.
    let free: Vec<u32> = (0..n as u32)
        .filter(|v| in_patch[*v as usize] && !fixed.contains_key(v))
        .collect();

    let (laplacian, area) = cotan_laplacian(vertices, faces);

    let mut full = vec![0.0_f64; n];
    for (&v, &value) in &fixed {
        full[v as usize] = value;
    }

    // rhs = -(A x_fixed) restricted to free vertices
    let mut scratch = vec![0.0_f64; n];
    let mut image = vec![0.0_f64; n];
    apply_operator(&laplacian, &area, order, &full, &mut scratch, &mut image);
    let rhs: Vec<f64> = free.iter().map(|&v| -image[v as usize]).collect();

    let solution = conjugate_gradient(|x_free, out_free| {
        // scatter free values, fixed entries are zero inside the operator
        let mut x_full = vec![0.0_f64; n];
        for (&v, &value) in free.iter().zip(x_free.iter()) {
            x_full[v as usize] = value;
        }
        let mut y_full = vec![0.0_f64; n];
        let mut s = vec![0.0_f64; n];
        apply_operator(&laplacian, &area, order, &x_full, &mut s, &mut y_full);
        for (o, &v) in out_free.iter_mut().zip(free.iter()) {
            *o = y_full[v as usize];
        }
    }, &rhs)?;

    for (&v, &value) in free.iter().zip(solution.iter()) {
        full[v as usize] = value;
    }
    debug!(
        free = free.len(),
        fixed = fixed.len(),
        ?order,
        "blend solve finished"
    );
    Ok(full)
}

/// Plain conjugate gradients on an implicit symmetric operator.
fn conjugate_gradient<F>(mut apply: F, rhs: &[f64]) -> FieldResult<Vec<f64>>
where
    F: FnMut(&[f64], &mut [f64]),
{
    let n = rhs.len();
    let rhs_norm = rhs.iter().map(|r| r * r).sum::<f64>().sqrt();
    if n == 0 || rhs_norm < f64::EPSILON {
        return Ok(vec![0.0; n]);
    }

    let mut x = vec![0.0_f64; n];
    let mut r = rhs.to_vec();
    let mut p = r.clone();
    let mut ap = vec![0.0_f64; n];
    let mut rr: f64 = r.iter().map(|v| v * v).sum();

    let max_iterations = 100 + 10 * n;
    for _ in 0..max_iterations {
        apply(&p, &mut ap);
        let pap: f64 = p.iter().zip(&ap).map(|(a, b)| a * b).sum();
        if pap.abs() < f64::EPSILON * rr {
            break;
        }
        let alpha = rr / pap;
        for i in 0..n {
            x[i] += alpha * p[i];
            r[i] -= alpha * ap[i];
        }
        let rr_next: f64 = r.iter().map(|v| v * v).sum();
        if rr_next.sqrt() < CG_TOLERANCE * rhs_norm {
            return Ok(x);
        }
        let beta = rr_next / rr;
        rr = rr_next;
        for i in 0..n {
            p[i] = r[i] + beta * p[i];
        }
    }

    let residual = rr.sqrt() / rhs_norm;
    if residual < CG_TOLERANCE * 100.0 {
        // close enough for a geometry field; note it and keep going
        debug!(residual, "blend solve finished just above tolerance");
        return Ok(x);
    }
    Err(FieldError::SolveFailed { residual })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    /// Triangulated 4x4 quad grid on a 5x5 vertex lattice.
    fn grid() -> (Vec<Point3<f64>>, Vec<[u32; 3]>) {
        let mut vertices = Vec::new();
        for row in 0..5 {
            for col in 0..5 {
                vertices.push(Point3::new(f64::from(col), f64::from(row), 0.0));
            }
        }
        let mut faces = Vec::new();
        for row in 0..4_u32 {
            for col in 0..4_u32 {
                let v0 = row * 5 + col;
                faces.push([v0, v0 + 1, v0 + 5]);
                faces.push([v0 + 1, v0 + 6, v0 + 5]);
            }
        }
        (vertices, faces)
    }

    fn column_constraints() -> Vec<(u32, f64)> {
        let mut constraints = Vec::new();
        for row in 0..5_u32 {
            constraints.push((row * 5, 0.0));
            constraints.push((row * 5 + 4, 1.0));
        }
        constraints
    }

    #[test]
    fn harmonic_blend_is_linear_on_a_grid() {
        let (vertices, faces) = grid();
        let field = blend_field(&vertices, &faces, &column_constraints(), BlendOrder::Harmonic)
            .unwrap();
        for (v, vertex) in vertices.iter().enumerate() {
            assert_relative_eq!(field[v], vertex.x / 4.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn biharmonic_blend_reproduces_linear_data() {
        let (vertices, faces) = grid();
        let field = blend_field(&vertices, &faces, &column_constraints(), BlendOrder::Biharmonic)
            .unwrap();
        for (v, vertex) in vertices.iter().enumerate() {
            assert_relative_eq!(field[v], vertex.x / 4.0, epsilon = 1e-4);
        }
    }

    #[test]
    fn constraints_are_reproduced_exactly() {
        let (vertices, faces) = grid();
        let field = blend_field(&vertices, &faces, &column_constraints(), BlendOrder::Harmonic)
            .unwrap();
        assert_relative_eq!(field[0], 0.0);
        assert_relative_eq!(field[4], 1.0);
    }

    #[test]
    fn no_constraints_is_an_error() {
        let (vertices, faces) = grid();
        assert_eq!(
            blend_field(&vertices, &faces, &[], BlendOrder::Harmonic).err(),
            Some(FieldError::NoConstraints)
        );
    }

    #[test]
    fn out_of_range_constraint_is_an_error() {
        let (vertices, faces) = grid();
        assert_eq!(
            blend_field(&vertices, &faces, &[(99, 1.0)], BlendOrder::Harmonic).err(),
            Some(FieldError::ConstraintOutOfRange(99, 25))
        );
    }

    #[test]
    fn vertices_outside_the_patch_stay_zero() {
        let (mut vertices, faces) = grid();
        vertices.push(Point3::new(50.0, 50.0, 0.0));
        let field = blend_field(&vertices, &faces, &column_constraints(), BlendOrder::Harmonic)
            .unwrap();
        assert_relative_eq!(field[25], 0.0);
    }
}
