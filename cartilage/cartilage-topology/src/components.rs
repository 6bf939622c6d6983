//! Edge-connected components of a face set.

use crate::error::{TopologyError, TopologyResult};
use cartilage_types::FaceSet;
use hashbrown::HashMap;

/// Per-face component labels for a face slice.
#[derive(Debug, Clone)]
pub struct FaceComponents {
    /// Component label of each face, `0..count`.
    pub labels: Vec<usize>,
    /// Number of distinct components.
    pub count: usize,
}

impl FaceComponents {
    /// Face count of each component, indexed by label.
    #[must_use]
    pub fn sizes(&self) -> Vec<usize> {
        let mut sizes = vec![0_usize; self.count];
        for &label in &self.labels {
            sizes[label] += 1;
        }
        sizes
    }

    /// Local face indices belonging to one component.
    #[must_use]
    pub fn faces_of(&self, label: usize) -> FaceSet {
        FaceSet::from_indices(
            self.labels
                .iter()
                .enumerate()
                .filter_map(|(face, &l)| (l == label).then_some(face)),
        )
    }
}

/// Label faces by edge-connected component.
///
/// Two faces are connected when they share an undirected edge. Labels are
/// assigned in order of first appearance, so face 0 is always in component 0.
#[must_use]
pub fn connected_components(faces: &[[u32; 3]]) -> FaceComponents {
    // undirected edge -> faces using it
    let mut edge_faces: HashMap<[u32; 2], Vec<usize>> =
        HashMap::with_capacity(faces.len() * 3 / 2);
    for (i, &[a, b, c]) in faces.iter().enumerate() {
        for (u, v) in [(a, b), (b, c), (c, a)] {
            let key = if u <= v { [u, v] } else { [v, u] };
            edge_faces.entry(key).or_default().push(i);
        }
    }

    let mut labels = vec![usize::MAX; faces.len()];
    let mut count = 0;
    let mut stack = Vec::new();

    for seed in 0..faces.len() {
        if labels[seed] != usize::MAX {
            continue;
        }
        labels[seed] = count;
        stack.push(seed);
        while let Some(face) = stack.pop() {
            let [a, b, c] = faces[face];
            for (u, v) in [(a, b), (b, c), (c, a)] {
                let key = if u <= v { [u, v] } else { [v, u] };
                if let Some(sharers) = edge_faces.get(&key) {
                    for &other in sharers {
                        if labels[other] == usize::MAX {
                            labels[other] = count;
                            stack.push(other);
                        }
                    }
                }
            }
        }
        count += 1;
    }

    FaceComponents { labels, count }
}

/// Local indices of the largest edge-connected component.
///
/// # Errors
///
/// [`TopologyError::EmptyFaceSet`] if the slice is empty.
pub fn largest_component(faces: &[[u32; 3]]) -> TopologyResult<FaceSet> {
    if faces.is_empty() {
        return Err(TopologyError::EmptyFaceSet);
    }
    let components = connected_components(faces);
    let sizes = components.sizes();
    let largest = sizes
        .iter()
        .enumerate()
        .max_by_key(|&(_, size)| size)
        .map(|(label, _)| label)
        .ok_or(TopologyError::EmptyFaceSet)?;
    Ok(components.faces_of(largest))
}
