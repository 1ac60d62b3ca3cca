use thiserror::Error;

/// Errors reported by [`BPTreeMap`](crate::BPTreeMap) construction.
///
/// Construction is the only fallible operation: once a map exists, insertion
/// and every query degrade to empty/absent results instead of failing.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum TreeError {
    /// The requested branching factor cannot form a valid tree. A factor of 2
    /// or less would leave a split node with fewer than two children.
    #[error("invalid branching factor: {0} (must be greater than 2)")]
    InvalidBranchingFactor(usize),
}
