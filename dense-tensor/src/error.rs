use thiserror::Error;

/// Errors raised by tensor construction, multi-index access and operations.
///
/// All of them signal a violated calling contract: nothing is mutated when one is returned.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum TensorError {
    /// Number of index components differs from the tensor rank.
    #[error("Invalid rank: expected {expected} indices, got {actual}")]
    InvalidRank { expected: usize, actual: usize },

    /// An index component is not strictly less than its axis extent.
    #[error("Index out of range: index {index} on axis {axis} with extent {extent}")]
    IndexOutOfRange {
        axis: usize,
        index: usize,
        extent: usize,
    },

    /// Element counts disagree.
    #[error("Size mismatch: expected {expected} elements, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },
}
