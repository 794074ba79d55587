//! Linked List Cycle (LeetCode 141)
//!
//! Slow advances one node per step, fast advances two. On a loop fast laps
//! slow and they land on the same node; otherwise fast runs off the end.

use patterns_common::{Difficulty, ExerciseInfo, NodeArena, NodeId, Pattern};
use tracing::trace;

pub const INFO: ExerciseInfo = ExerciseInfo {
    slug: "linked-list-cycle",
    title: "Linked List Cycle",
    pattern: Pattern::FastSlowPointers,
    difficulty: Difficulty::Easy,
    leetcode: 141,
    time: "O(n)",
    space: "O(1)",
};

/// Returns true if following `next` from `head` never reaches the end.
///
/// # Example
/// ```
/// use patterns_common::NodeArena;
/// use patterns_fast_slow::has_cycle;
///
/// let mut arena = NodeArena::new();
/// let head = arena.push_list(&[3, 2, 0, -4]);
/// assert!(!has_cycle(&arena, head));
///
/// arena.make_cycle(head, 1).unwrap();
/// assert!(has_cycle(&arena, head));
/// ```
pub fn has_cycle(arena: &NodeArena, head: Option<NodeId>) -> bool {
    let (mut slow, mut fast) = (head, head);
    let mut steps = 0usize;

    // fast and fast.next must both exist before taking the double step
    while let Some(next) = fast.and_then(|f| arena.next(f)) {
        slow = slow.and_then(|s| arena.next(s));
        fast = arena.next(next);
        steps += 1;

        if slow == fast {
            trace!(steps, "cursors met");
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_cycle() {
        let mut arena = NodeArena::new();
        let head = arena.push_list(&[1, 2, 3, 4, 5]);
        assert!(!has_cycle(&arena, head));
    }

    #[test]
    fn test_empty_and_single() {
        let mut arena = NodeArena::new();
        assert!(!has_cycle(&arena, None));

        let head = arena.push_list(&[1]);
        assert!(!has_cycle(&arena, head));
    }

    #[test]
    fn test_self_loop() {
        let mut arena = NodeArena::new();
        let head = arena.push_list(&[1]);
        arena.make_cycle(head, 0).unwrap();
        assert!(has_cycle(&arena, head));
    }

    #[test]
    fn test_tail_back_to_every_position() {
        for len in 1..8 {
            for pos in 0..len {
                let mut arena = NodeArena::new();
                let values: Vec<i32> = (0..len as i32).collect();
                let head = arena.push_list(&values);
                arena.make_cycle(head, pos).unwrap();
                assert!(has_cycle(&arena, head), "len {len}, pos {pos}");
            }
        }
    }

    #[test]
    fn test_leetcode_examples() {
        let mut arena = NodeArena::new();
        let head = arena.push_list(&[1, 2]);
        arena.make_cycle(head, 0).unwrap();
        assert!(has_cycle(&arena, head));

        let mut arena = NodeArena::new();
        let head = arena.push_list(&[3, 2, 0, -4]);
        arena.make_cycle(head, 1).unwrap();
        assert!(has_cycle(&arena, head));
    }
}
