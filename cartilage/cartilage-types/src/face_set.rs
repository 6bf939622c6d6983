//! Ordered set of face indices.

/// An ordered set of face indices denoting a sub-region of a mesh.
///
/// Kept as a sorted, deduplicated `Vec<usize>` rather than a hash set so
/// region operations are deterministic and set algebra is a linear merge.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FaceSet {
    indices: Vec<usize>,
}

impl FaceSet {
    /// Create an empty set.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            indices: Vec::new(),
        }
    }

    /// Build a set from arbitrary indices, sorting and deduplicating.
    #[must_use]
    pub fn from_indices<I>(indices: I) -> Self
    where
        I: IntoIterator<Item = usize>,
    {
        let mut indices: Vec<usize> = indices.into_iter().collect();
        indices.sort_unstable();
        indices.dedup();
        Self { indices }
    }

    /// Number of faces in the set.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// True if the set holds no faces.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Membership test by binary search.
    #[must_use]
    pub fn contains(&self, face: usize) -> bool {
        self.indices.binary_search(&face).is_ok()
    }

    /// Iterate over face indices in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.indices.iter().copied()
    }

    /// The sorted indices as a slice.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[usize] {
        &self.indices
    }

    /// Faces in `self` but not in `other`.
    #[must_use]
    pub fn difference(&self, other: &Self) -> Self {
        Self {
            indices: self
                .indices
                .iter()
                .copied()
                .filter(|&f| !other.contains(f))
                .collect(),
        }
    }

    /// Faces present in both sets.
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        Self {
            indices: self
                .indices
                .iter()
                .copied()
                .filter(|&f| other.contains(f))
                .collect(),
        }
    }

    /// Faces present in either set.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let mut merged = self.indices.clone();
        merged.extend_from_slice(&other.indices);
        Self::from_indices(merged)
    }

    /// Faces in exactly one of the two sets.
    #[must_use]
    pub fn symmetric_difference(&self, other: &Self) -> Self {
        let mut out = self.difference(other);
        out.indices.extend(other.difference(self).indices);
        out.indices.sort_unstable();
        out
    }
}

impl FromIterator<usize> for FaceSet {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        Self::from_indices(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_indices_sorts_and_dedups() {
        let set = FaceSet::from_indices([3, 1, 3, 0]);
        assert_eq!(set.as_slice(), &[0, 1, 3]);
    }

    #[test]
    fn set_algebra() {
        let a = FaceSet::from_indices([0, 1, 2, 3]);
        let b = FaceSet::from_indices([2, 3, 4]);
        assert_eq!(a.difference(&b).as_slice(), &[0, 1]);
        assert_eq!(a.intersection(&b).as_slice(), &[2, 3]);
        assert_eq!(a.union(&b).as_slice(), &[0, 1, 2, 3, 4]);
        assert_eq!(a.symmetric_difference(&b).as_slice(), &[0, 1, 4]);
    }

    #[test]
    fn contains_uses_sorted_order() {
        let set = FaceSet::from_indices([5, 2, 9]);
        assert!(set.contains(9));
        assert!(!set.contains(3));
    }
}
