//! Reverse Linked List (LeetCode 206)

use patterns_common::{Difficulty, ExerciseInfo, NodeArena, NodeId, Pattern};
use tracing::debug;

pub const INFO: ExerciseInfo = ExerciseInfo {
    slug: "reverse-linked-list",
    title: "Reverse Linked List",
    pattern: Pattern::LinkedLists,
    difficulty: Difficulty::Easy,
    leetcode: 206,
    time: "O(n)",
    space: "O(1)",
};

/// Reverses the list in one pass and returns the old tail as the new head.
///
/// Each node is re-pointed at the node visited before it.
///
/// # Example
/// ```
/// use patterns_common::NodeArena;
/// use patterns_linked_lists::reverse_list;
///
/// let mut arena = NodeArena::new();
/// let head = arena.push_list(&[1, 2, 3]);
/// let head = reverse_list(&mut arena, head);
/// assert_eq!(arena.values(head).unwrap(), vec![3, 2, 1]);
/// ```
pub fn reverse_list(arena: &mut NodeArena, head: Option<NodeId>) -> Option<NodeId> {
    let (mut previous, mut current) = (None, head);
    let mut visited = 0usize;
    while let Some(cur) = current {
        let next = arena.next(cur);
        arena.set_next(cur, previous);
        previous = Some(cur);
        current = next;
        visited += 1;
    }
    debug!(visited, "reversed");
    previous
}
