//! Two Pointers
//!
//! Two index cursors over a fixed-length sequence, starting at the ends (or
//! both at the front) and moving under a comparison rule until they meet:
//! - Valid palindrome (inward, skipping punctuation)
//! - First occurrence of a substring (naive restart, not KMP)
//! - Merge two sorted arrays from the back
//! - Reverse a sequence in place

// Modules
pub mod first_occurrence; // LeetCode 28
pub mod merge_sorted_array; // LeetCode 88
pub mod reverse_string; // LeetCode 344
pub mod valid_palindrome; // LeetCode 125

pub use first_occurrence::{first_occurrence, str_str};
pub use merge_sorted_array::merge_sorted;
pub use reverse_string::reverse_in_place;
pub use valid_palindrome::is_palindrome;

use patterns_common::ExerciseInfo;

/// Metadata for every exercise in this crate.
pub const EXERCISES: [ExerciseInfo; 4] = [
    valid_palindrome::INFO,
    first_occurrence::INFO,
    merge_sorted_array::INFO,
    reverse_string::INFO,
];
