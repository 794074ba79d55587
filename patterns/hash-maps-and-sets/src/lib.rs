//! Hash Maps and Sets
//!
//! Trading O(n) memory for O(1) lookups of previously seen values:
//! - Pair sum over an unsorted array (two-sum)

// Modules
pub mod pair_sum; // LeetCode 1

pub use pair_sum::{two_sum, two_sum_indices};

use patterns_common::ExerciseInfo;

/// Metadata for every exercise in this crate.
pub const EXERCISES: [ExerciseInfo; 1] = [pair_sum::INFO];
