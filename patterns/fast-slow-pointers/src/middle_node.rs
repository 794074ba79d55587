//! Middle of the Linked List (LeetCode 876)

use patterns_common::{Difficulty, ExerciseInfo, NodeArena, NodeId, Pattern};

pub const INFO: ExerciseInfo = ExerciseInfo {
    slug: "middle-of-the-linked-list",
    title: "Middle of the Linked List",
    pattern: Pattern::FastSlowPointers,
    difficulty: Difficulty::Easy,
    leetcode: 876,
    time: "O(n)",
    space: "O(1)",
};

/// Returns the middle node; the second of the two middles for even lengths.
///
/// When fast runs off the end, slow has covered half the distance.
pub fn middle_node(arena: &NodeArena, head: Option<NodeId>) -> Option<NodeId> {
    let (mut slow, mut fast) = (head, head);
    while let Some(next) = fast.and_then(|f| arena.next(f)) {
        slow = slow.and_then(|s| arena.next(s));
        fast = arena.next(next);
    }
    slow
}

#[cfg(test)]
mod tests {
    use super::*;

    fn middle_value(values: &[i32]) -> Option<i32> {
        let mut arena = NodeArena::new();
        let head = arena.push_list(values);
        middle_node(&arena, head).map(|id| arena.val(id))
    }

    #[test]
    fn test_odd_length() {
        assert_eq!(middle_value(&[1, 2, 3, 4, 5]), Some(3));
    }

    #[test]
    fn test_even_length_returns_second_middle() {
        assert_eq!(middle_value(&[1, 2, 3, 4, 5, 6]), Some(4));
        assert_eq!(middle_value(&[1, 2]), Some(2));
    }

    #[test]
    fn test_empty_and_single() {
        assert_eq!(middle_value(&[]), None);
        assert_eq!(middle_value(&[9]), Some(9));
    }

    #[test]
    fn test_returns_node_not_copy() {
        let mut arena = NodeArena::new();
        let head = arena.push_list(&[1, 2, 3]);
        let mid = middle_node(&arena, head);
        assert_eq!(mid, arena.nth(head, 1));
        assert_eq!(arena.values(mid).unwrap(), vec![2, 3]);
    }
}
