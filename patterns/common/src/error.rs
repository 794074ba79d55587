//! Error type shared by every pattern crate.
//!
//! Not-found results are never errors; they use `None`, `false` or `-1`.
//! `PatternError` covers inputs that break an exercise's stated constraints.

use thiserror::Error;

/// Errors raised when an exercise's input constraints are violated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    /// A walk visited more nodes than the arena holds.
    #[error("cycle detected after visiting {visited} nodes")]
    CycleDetected {
        /// Nodes visited before giving up
        visited: usize,
    },

    /// A list position past the end of the list.
    #[error("node position {pos} out of range for list of length {len}")]
    NodeOutOfRange {
        /// Requested 0-based position
        pos: usize,
        /// Length of the list
        len: usize,
    },

    /// A buffer whose size does not match the declared element counts.
    #[error("invalid capacity: expected {expected} slots, got {actual}")]
    InvalidCapacity {
        /// Slots required by the declared counts
        expected: usize,
        /// Slots actually provided
        actual: usize,
    },

    /// No exercise is registered under this slug.
    #[error("unknown exercise: {0}")]
    UnknownExercise(String),
}

/// Result alias for pattern operations.
pub type Result<T> = std::result::Result<T, PatternError>;
