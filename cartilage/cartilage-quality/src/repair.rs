//! Fold repair by face removal.

use crate::dihedral::fold_vertices;
use cartilage_types::{Convergence, Point3};
use hashbrown::HashSet;
use tracing::{debug, warn};

/// Drop faces that carry two or more folded vertices.
///
/// A face with a single folded corner usually flattens out once its folded
/// neighbors are gone, so only faces dominated by the fold are removed.
#[must_use]
pub fn remove_folded_faces(faces: &[[u32; 3]], folded: &[u32]) -> Vec<[u32; 3]> {
    let folded: HashSet<u32> = folded.iter().copied().collect();
    faces
        .iter()
        .filter(|face| face.iter().filter(|v| folded.contains(*v)).count() < 2)
        .copied()
        .collect()
}

/// Remove folded faces and recheck until the rim is clean or the cap hits.
///
/// Face removal exposes a new rim, which can itself be folded, so detection
/// and removal alternate. If folds persist but no face qualifies for
/// removal, the loop cannot make progress and reports
/// [`Convergence::CapReached`] early.
#[must_use]
pub fn repair_folds(
    vertices: &[Point3<f64>],
    faces: &[[u32; 3]],
    threshold: f64,
    max_rounds: usize,
) -> (Vec<[u32; 3]>, Convergence) {
    let mut faces = faces.to_vec();
    for round in 0..max_rounds {
        let folded = fold_vertices(vertices, &faces, threshold);
        if folded.is_empty() {
            return (faces, Convergence::Converged { iterations: round });
        }
        let repaired = remove_folded_faces(&faces, &folded);
        if repaired.len() == faces.len() {
            warn!(
                folded = folded.len(),
                "folds persist but no face qualifies for removal"
            );
            return (faces, Convergence::CapReached);
        }
        debug!(
            round,
            removed = faces.len() - repaired.len(),
            "removed folded faces"
        );
        faces = repaired;
    }
    (faces, Convergence::CapReached)
}
