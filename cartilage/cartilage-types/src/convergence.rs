//! Convergence status for iteration-capped algorithms.

/// Outcome of an iterative refinement loop with a safety cap.
///
/// Region growth, ear removal and fold repair all iterate toward a fixed
/// point but refuse to loop forever. The status lets a caller distinguish a
/// genuine fixed point from a truncated run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Convergence {
    /// The loop reached a fixed point after the given number of iterations.
    Converged {
        /// Iterations actually performed.
        iterations: usize,
    },
    /// The iteration cap was hit before a fixed point was reached.
    CapReached,
}

impl Convergence {
    /// True if a fixed point was reached.
    #[inline]
    #[must_use]
    pub const fn is_converged(&self) -> bool {
        matches!(self, Self::Converged { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converged_predicate() {
        assert!(Convergence::Converged { iterations: 3 }.is_converged());
        assert!(!Convergence::CapReached.is_converged());
    }
}
