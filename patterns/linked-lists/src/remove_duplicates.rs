//! Remove Duplicates from Sorted List (LeetCode 83)

use patterns_common::{Difficulty, ExerciseInfo, NodeArena, NodeId, Pattern};
use tracing::trace;

pub const INFO: ExerciseInfo = ExerciseInfo {
    slug: "remove-duplicates-from-sorted-list",
    title: "Remove Duplicates from Sorted List",
    pattern: Pattern::LinkedLists,
    difficulty: Difficulty::Easy,
    leetcode: 83,
    time: "O(n)",
    space: "O(1)",
};

/// Keeps the first node of every run of equal values in a sorted list.
///
/// When the successor repeats the current value it is spliced out and the
/// cursor stays put, so runs of any length collapse to one node. The head
/// never changes.
///
/// # Example
/// ```
/// use patterns_common::NodeArena;
/// use patterns_linked_lists::delete_duplicates;
///
/// let mut arena = NodeArena::new();
/// let head = arena.push_list(&[1, 1, 2, 3, 3]);
/// let head = delete_duplicates(&mut arena, head);
/// assert_eq!(arena.values(head).unwrap(), vec![1, 2, 3]);
/// ```
pub fn delete_duplicates(arena: &mut NodeArena, head: Option<NodeId>) -> Option<NodeId> {
    let mut current = head;
    while let Some(cur) = current {
        match arena.next(cur) {
            Some(next) if arena.val(next) == arena.val(cur) => {
                trace!(val = arena.val(cur), "splicing duplicate");
                let after = arena.next(next);
                arena.set_next(cur, after);
            }
            next => current = next,
        }
    }
    head
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dedup(values: &[i32]) -> Vec<i32> {
        let mut arena = NodeArena::new();
        let head = arena.push_list(values);
        let head = delete_duplicates(&mut arena, head);
        arena.values(head).unwrap()
    }

    #[test]
    fn test_examples() {
        assert_eq!(dedup(&[1, 1, 2]), vec![1, 2]);
        assert_eq!(dedup(&[1, 1, 2, 3, 3]), vec![1, 2, 3]);
    }

    #[test]
    fn test_empty_and_single() {
        assert_eq!(dedup(&[]), Vec::<i32>::new());
        assert_eq!(dedup(&[1]), vec![1]);
    }

    #[test]
    fn test_no_duplicates() {
        assert_eq!(dedup(&[1, 2, 3, 4, 5]), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_runs_of_three_or_more() {
        assert_eq!(dedup(&[2, 2, 2]), vec![2]);
        assert_eq!(dedup(&[2, 2, 2, 2, 2]), vec![2]);
        assert_eq!(dedup(&[1, 1]), vec![1]);
    }

    #[test]
    fn test_runs_at_the_ends() {
        assert_eq!(dedup(&[1, 1, 1, 2, 3]), vec![1, 2, 3]);
        assert_eq!(dedup(&[1, 2, 3, 3, 3]), vec![1, 2, 3]);
    }

    #[test]
    fn test_multiple_groups() {
        assert_eq!(
            dedup(&[1, 1, 2, 2, 3, 4, 4, 5, 5, 5]),
            vec![1, 2, 3, 4, 5]
        );
    }

    #[test]
    fn test_negative_and_boundary_values() {
        assert_eq!(dedup(&[-3, -3, -1, 0, 0, 1, 1]), vec![-3, -1, 0, 1]);
        assert_eq!(dedup(&[-100, -100, 100, 100]), vec![-100, 100]);
    }

    #[test]
    fn test_head_is_kept() {
        let mut arena = NodeArena::new();
        let head = arena.push_list(&[7, 7, 8]);
        assert_eq!(delete_duplicates(&mut arena, head), head);
    }
}
