//! Linked Lists
//!
//! In-place rewiring of singly linked lists stored in a
//! [`NodeArena`](patterns_common::NodeArena):
//! - Remove duplicates from a sorted list (splice without advancing)
//! - Remove every node holding a target value, head included
//! - Reverse a list in one pass
//!
//! Every operation returns the (possibly new) head. Removed nodes stay in the
//! arena, unreachable.

// Modules
pub mod remove_duplicates; // LeetCode 83
pub mod remove_elements; // LeetCode 203
pub mod reverse_list; // LeetCode 206

pub use remove_duplicates::delete_duplicates;
pub use remove_elements::remove_elements;
pub use reverse_list::reverse_list;

use patterns_common::ExerciseInfo;

/// Metadata for every exercise in this crate.
pub const EXERCISES: [ExerciseInfo; 3] = [
    remove_duplicates::INFO,
    remove_elements::INFO,
    reverse_list::INFO,
];
