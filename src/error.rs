// model = "claude-opus-4-5"
// created = "2026-10-17"
// modified = "2026-10-17"
// driver = "Isaac Clayton"

//! Errors reported by [`AggTree`](crate::AggTree) operations.

/// Result alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Error returned when an operation cannot be carried out.
///
/// `OutOfRange` and `InvalidRange` are caller mistakes and are reported
/// before anything is modified. `InvariantViolation` means the slot buffer
/// itself is inconsistent and the tree should not be used further.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A `get` or `set` index outside `0..len`.
    #[error("index {index} out of range for length {len}")]
    OutOfRange { index: usize, len: usize },

    /// A query range that is empty or reaches past the end.
    #[error("invalid range {start}..{end} for length {len}")]
    InvalidRange { start: usize, end: usize, len: usize },

    /// An aggregate slot was missing or stale where a value was required.
    #[error("aggregate invariant violated (slot {slot:?})")]
    InvariantViolation { slot: Option<usize> },
}
