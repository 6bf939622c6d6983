//! Sweep-line wall between two mismatched boundary loops.

use crate::error::{WallError, WallResult};
use cartilage_types::Point3;
use tracing::debug;

fn validate_loop(ring: &[u32], vertex_count: usize) -> WallResult<()> {
    if ring.len() < 3 {
        return Err(WallError::DegenerateLoop { len: ring.len() });
    }
    if let Some(&bad) = ring.iter().find(|&&v| (v as usize) >= vertex_count) {
        return Err(WallError::VertexOutOfRange(bad, vertex_count));
    }
    Ok(())
}

/// Normalized cumulative arc length of a closed ring, one entry per vertex
/// including the closing copy of the first.
fn arc_params(vertices: &[Point3<f64>], closed: &[u32]) -> WallResult<Vec<f64>> {
    let mut cumulative = Vec::with_capacity(closed.len());
    let mut total = 0.0;
    cumulative.push(0.0);
    for pair in closed.windows(2) {
        total += (vertices[pair[1] as usize] - vertices[pair[0] as usize]).norm();
        cumulative.push(total);
    }
    if total < f64::EPSILON {
        return Err(WallError::ZeroLengthLoop);
    }
    for c in &mut cumulative {
        *c /= total;
    }
    Ok(cumulative)
}

/// Bridge two boundary loops of unequal length and vertex count.
///
/// The two loops are parameterized by normalized arc length and swept in
/// lockstep: a rung `[bottom, top]` advances whichever loop's next vertex
/// comes first along the sweep, and every advance emits a triangle between
/// the old rung and the new. The bottom loop is traversed reversed, matching
/// the winding of a flipped base layer in the merged shell.
///
/// The top loop is rotated to start at its vertex nearest the bottom start;
/// equidistant candidates resolve to the lowest vertex index so the wall is
/// deterministic.
///
/// # Errors
///
/// [`WallError::DegenerateLoop`] for loops shorter than three vertices,
/// [`WallError::VertexOutOfRange`] for bad indices, and
/// [`WallError::ZeroLengthLoop`] for a loop with no extent.
pub fn sweep_wall(
    vertices: &[Point3<f64>],
    bottom: &[u32],
    top: &[u32],
) -> WallResult<Vec<[u32; 3]>> {
    validate_loop(bottom, vertices.len())?;
    validate_loop(top, vertices.len())?;

    let bottom: Vec<u32> = bottom.iter().rev().copied().collect();
    let start_position = vertices[bottom[0] as usize];

    // nearest top vertex, ties to the lowest vertex index
    let mut best = (f64::INFINITY, u32::MAX, 0_usize);
    for (i, &v) in top.iter().enumerate() {
        let d = (vertices[v as usize] - start_position).norm();
        if d < best.0 || (d <= best.0 + f64::EPSILON && v < best.1) {
            best = (d, v, i);
        }
    }
    let top: Vec<u32> = top[best.2..].iter().chain(&top[..best.2]).copied().collect();

    // close both rings
    let mut bottom_closed = bottom;
    bottom_closed.push(bottom_closed[0]);
    let mut top_closed = top;
    top_closed.push(top_closed[0]);

    let bottom_params = arc_params(vertices, &bottom_closed)?;
    let top_params = arc_params(vertices, &top_closed)?;

    // merged sweep events, skipping both param-0 entries (the initial rung)
    const BOTTOM: u8 = 0;
    const TOP: u8 = 1;
    let mut events: Vec<(f64, u8, u32)> = bottom_params
        .iter()
        .zip(&bottom_closed)
        .skip(1)
        .map(|(&t, &v)| (t, BOTTOM, v))
        .chain(
            top_params
                .iter()
                .zip(&top_closed)
                .skip(1)
                .map(|(&t, &v)| (t, TOP, v)),
        )
        .collect();
    events.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));

    let mut rung = [bottom_closed[0], top_closed[0]];
    let mut faces = Vec::with_capacity(events.len());
    for (_, side, vertex) in events {
        let previous = rung;
        rung[side as usize] = vertex;

        // the two rungs share one vertex; the other three form the triangle
        let mut corners: Vec<u32> = Vec::with_capacity(3);
        for candidate in [previous[0], previous[1], rung[0], rung[1]] {
            if !corners.contains(&candidate) {
                corners.push(candidate);
            }
        }
        if corners.len() == 3 {
            faces.push([corners[2], corners[1], corners[0]]);
        }
    }

    debug!(faces = faces.len(), "built sweep wall");
    Ok(faces)
}
