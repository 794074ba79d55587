//! Intersection of Two Linked Lists (LeetCode 160)

use patterns_common::{Difficulty, ExerciseInfo, NodeArena, NodeId, Pattern};
use tracing::trace;

pub const INFO: ExerciseInfo = ExerciseInfo {
    slug: "intersection-of-two-linked-lists",
    title: "Intersection of Two Linked Lists",
    pattern: Pattern::FastSlowPointers,
    difficulty: Difficulty::Easy,
    leetcode: 160,
    time: "O(m + n)",
    space: "O(1)",
};

/// Returns the first node shared by both lists, or `None` if they are disjoint.
///
/// Cursor A walks list A then list B, cursor B walks B then A. Both cover
/// `len(A) + len(B)` nodes, so they line up at the shared node, or reach the
/// end together when there is none. Both lists must live in `arena` and be
/// acyclic.
///
/// # Example
/// ```
/// use patterns_common::NodeArena;
/// use patterns_fast_slow::intersection;
///
/// let mut arena = NodeArena::new();
/// let shared = arena.push_list(&[8, 4, 5]);
/// let a = arena.push_list(&[4, 1]);
/// let a = arena.append(a, shared).unwrap();
/// let b = arena.push_list(&[5, 6, 1]);
/// let b = arena.append(b, shared).unwrap();
///
/// assert_eq!(intersection(&arena, a, b), shared);
/// ```
pub fn intersection(
    arena: &NodeArena,
    head_a: Option<NodeId>,
    head_b: Option<NodeId>,
) -> Option<NodeId> {
    let (mut ptr_a, mut ptr_b) = (head_a, head_b);
    while ptr_a != ptr_b {
        ptr_a = match ptr_a {
            Some(id) => arena.next(id),
            None => head_b,
        };
        ptr_b = match ptr_b {
            Some(id) => arena.next(id),
            None => head_a,
        };
    }
    trace!(found = ptr_a.is_some(), "cursors aligned");
    ptr_a
}
