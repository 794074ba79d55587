//! Reverse String (LeetCode 344)

use patterns_common::{Difficulty, ExerciseInfo, Pattern};

pub const INFO: ExerciseInfo = ExerciseInfo {
    slug: "reverse-string",
    title: "Reverse String",
    pattern: Pattern::TwoPointers,
    difficulty: Difficulty::Easy,
    leetcode: 344,
    time: "O(n)",
    space: "O(1)",
};

/// Reverses `s` by swapping from both ends until the cursors meet.
///
/// # Example
/// ```
/// use patterns_two_pointers::reverse_in_place;
///
/// let mut s = ['h', 'e', 'l', 'l', 'o'];
/// reverse_in_place(&mut s);
/// assert_eq!(s, ['o', 'l', 'l', 'e', 'h']);
/// ```
pub fn reverse_in_place<T>(s: &mut [T]) {
    if s.len() < 2 {
        return;
    }
    let (mut left, mut right) = (0, s.len() - 1);
    while left < right {
        s.swap(left, right);
        left += 1;
        right -= 1;
    }
}
