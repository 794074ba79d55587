//! Remove Linked List Elements (LeetCode 203)

use patterns_common::{Difficulty, ExerciseInfo, NodeArena, NodeId, Pattern};
use tracing::trace;

pub const INFO: ExerciseInfo = ExerciseInfo {
    slug: "remove-linked-list-elements",
    title: "Remove Linked List Elements",
    pattern: Pattern::LinkedLists,
    difficulty: Difficulty::Easy,
    leetcode: 203,
    time: "O(n)",
    space: "O(1)",
};

/// Removes every node whose value equals `val` and returns the new head.
///
/// Matching nodes at the front move the head itself; later matches are
/// spliced out behind a trailing cursor that only advances past kept nodes.
///
/// # Example
/// ```
/// use patterns_common::NodeArena;
/// use patterns_linked_lists::remove_elements;
///
/// let mut arena = NodeArena::new();
/// let head = arena.push_list(&[1, 2, 6, 3, 4, 5, 6]);
/// let head = remove_elements(&mut arena, head, 6);
/// assert_eq!(arena.values(head).unwrap(), vec![1, 2, 3, 4, 5]);
/// ```
pub fn remove_elements(arena: &mut NodeArena, head: Option<NodeId>, val: i32) -> Option<NodeId> {
    let mut head = head;
    while let Some(h) = head.filter(|&h| arena.val(h) == val) {
        head = arena.next(h);
    }

    let mut previous = head?;
    while let Some(current) = arena.next(previous) {
        if arena.val(current) == val {
            trace!(val, "splicing node");
            let after = arena.next(current);
            arena.set_next(previous, after);
        } else {
            previous = current;
        }
    }
    head
}

#[cfg(test)]
mod tests {
    use super::*;

    fn remove(values: &[i32], val: i32) -> Vec<i32> {
        let mut arena = NodeArena::new();
        let head = arena.push_list(values);
        let head = remove_elements(&mut arena, head, val);
        arena.values(head).unwrap()
    }

    #[test]
    fn test_example() {
        assert_eq!(remove(&[1, 2, 6, 3, 4, 5, 6], 6), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_empty() {
        assert_eq!(remove(&[], 1), Vec::<i32>::new());
    }

    #[test]
    fn test_every_node_removed() {
        assert_eq!(remove(&[7, 7, 7, 7], 7), Vec::<i32>::new());
    }

    #[test]
    fn test_head_removed() {
        assert_eq!(remove(&[1, 1, 2, 1], 1), vec![2]);
        assert_eq!(remove(&[5, 6], 5), vec![6]);
    }

    #[test]
    fn test_consecutive_in_middle() {
        assert_eq!(remove(&[1, 2, 2, 2, 3], 2), vec![1, 3]);
    }

    #[test]
    fn test_value_absent() {
        assert_eq!(remove(&[1, 2, 3], 9), vec![1, 2, 3]);
    }

    #[test]
    fn test_new_head_is_first_kept_node() {
        let mut arena = NodeArena::new();
        let head = arena.push_list(&[4, 4, 9, 4]);
        let expected = arena.nth(head, 2);

        assert_eq!(remove_elements(&mut arena, head, 4), expected);
    }
}
