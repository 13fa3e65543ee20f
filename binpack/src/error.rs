use thiserror::Error;

/// Errors reported when an input violates the preconditions of the packing heuristics.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PackError {
    /// A bin of zero capacity can never hold an item.
    #[error("bin capacity must be positive")]
    InvalidCapacity,
    /// An item heavier than the bin capacity can never be placed.
    #[error("item {index} (weight {weight}) exceeds the bin capacity {capacity}")]
    ItemExceedsCapacity {
        index: usize,
        weight: u64,
        capacity: u64,
    },
}

pub type PackResult<T> = Result<T, PackError>;
