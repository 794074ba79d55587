//! Happy Number (LeetCode 202)
//!
//! Repeatedly replacing a number by the sum of the squares of its digits
//! either reaches 1 or falls into a loop that never contains 1. The sequence
//! is an implicit linked list, so the same tortoise and hare applies.

use patterns_common::{Difficulty, ExerciseInfo, Pattern};
use tracing::trace;

pub const INFO: ExerciseInfo = ExerciseInfo {
    slug: "happy-number",
    title: "Happy Number",
    pattern: Pattern::FastSlowPointers,
    difficulty: Difficulty::Easy,
    leetcode: 202,
    time: "O(log n)",
    space: "O(1)",
};

/// Sum of the squares of the decimal digits of `n`.
///
/// # Example
/// ```
/// use patterns_fast_slow::digit_square_sum;
/// assert_eq!(digit_square_sum(19), 82);
/// assert_eq!(digit_square_sum(0), 0);
/// ```
pub fn digit_square_sum(mut n: u32) -> u32 {
    let mut sum = 0;
    while n > 0 {
        let d = n % 10;
        sum += d * d;
        n /= 10;
    }
    sum
}

/// Returns true if the digit-square sequence starting at `n` reaches 1.
///
/// # Example
/// ```
/// use patterns_fast_slow::is_happy;
/// assert!(is_happy(19));
/// assert!(!is_happy(2));
/// ```
pub fn is_happy(n: u32) -> bool {
    let (mut slow, mut fast) = (n, n);
    loop {
        slow = digit_square_sum(slow);
        fast = digit_square_sum(digit_square_sum(fast));
        if fast == 1 {
            return true;
        }
        if fast == slow {
            trace!(n, loop_value = fast, "unhappy loop");
            return false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    #[test]
    fn test_digit_square_sum() {
        assert_eq!(digit_square_sum(82), 68);
        assert_eq!(digit_square_sum(68), 100);
        assert_eq!(digit_square_sum(100), 1);
        assert_eq!(digit_square_sum(u32::MAX), 16 + 4 + 81 + 16 + 81 + 49 + 4 + 81 + 36 + 25);
    }

    #[test]
    fn test_known_values() {
        assert!(is_happy(1));
        assert!(is_happy(7));
        assert!(is_happy(19));
        assert!(is_happy(100));
        assert!(!is_happy(2));
        assert!(!is_happy(4));
        assert!(!is_happy(0));
    }

    fn is_happy_by_set(mut n: u32) -> bool {
        let mut seen = HashSet::new();
        while n != 1 && seen.insert(n) {
            n = digit_square_sum(n);
        }
        n == 1
    }

    proptest! {
        #[test]
        fn agrees_with_visited_set(n in 0u32..1_000_000) {
            prop_assert_eq!(is_happy(n), is_happy_by_set(n));
        }
    }
}
