//! Fast-Slow Pointers
//!
//! Two cursors over a "next" relation, one advancing twice per step of the
//! other:
//! - Linked list cycle detection (Floyd's tortoise and hare)
//! - Intersection of two linked lists (cursors swap heads at the end)
//! - Middle of a linked list
//! - Happy numbers (cycle detection over an implicit sequence)

// Modules
pub mod happy_number; // LeetCode 202
pub mod intersection; // LeetCode 160
pub mod linked_list_cycle; // LeetCode 141
pub mod middle_node; // LeetCode 876

pub use happy_number::{digit_square_sum, is_happy};
pub use intersection::intersection;
pub use linked_list_cycle::has_cycle;
pub use middle_node::middle_node;

use patterns_common::ExerciseInfo;

/// Metadata for every exercise in this crate.
pub const EXERCISES: [ExerciseInfo; 4] = [
    linked_list_cycle::INFO,
    intersection::INFO,
    middle_node::INFO,
    happy_number::INFO,
];
