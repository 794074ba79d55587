//! Merge Sorted Array (LeetCode 88)
//!
//! `nums1` holds `m` sorted values followed by `n` free slots, `nums2` holds
//! `n` sorted values. Filling from the back means a write never lands on a
//! value of `nums1` that has not been read yet.

use patterns_common::{Difficulty, ExerciseInfo, Pattern, PatternError, Result};
use tracing::debug;

pub const INFO: ExerciseInfo = ExerciseInfo {
    slug: "merge-sorted-array",
    title: "Merge Sorted Array",
    pattern: Pattern::TwoPointers,
    difficulty: Difficulty::Easy,
    leetcode: 88,
    time: "O(m + n)",
    space: "O(1)",
};

/// Merges the first `n` values of `nums2` into `nums1` in place.
///
/// # Errors
///
/// [`PatternError::InvalidCapacity`] if `nums1` is not exactly `m + n` long
/// or `nums2` holds fewer than `n` values.
///
/// # Example
/// ```
/// use patterns_two_pointers::merge_sorted;
///
/// let mut nums1 = [1, 2, 3, 0, 0, 0];
/// merge_sorted(&mut nums1, 3, &[2, 5, 6], 3).unwrap();
/// assert_eq!(nums1, [1, 2, 2, 3, 5, 6]);
/// ```
pub fn merge_sorted<T: Ord + Copy>(
    nums1: &mut [T],
    m: usize,
    nums2: &[T],
    n: usize,
) -> Result<()> {
    // Counts too large to add can never describe a real buffer.
    let expected = m.checked_add(n).unwrap_or(usize::MAX);
    if nums1.len() != expected {
        return Err(PatternError::InvalidCapacity {
            expected,
            actual: nums1.len(),
        });
    }
    if nums2.len() < n {
        return Err(PatternError::InvalidCapacity {
            expected: n,
            actual: nums2.len(),
        });
    }

    let (mut i, mut j, mut last) = (m, n, expected);
    while j > 0 {
        last -= 1;
        if i > 0 && nums1[i - 1] > nums2[j - 1] {
            nums1[last] = nums1[i - 1];
            i -= 1;
        } else {
            nums1[last] = nums2[j - 1];
            j -= 1;
        }
    }
    // Whatever is left of nums1 is already in its final place.
    debug!(m, n, untouched = i, "merged");
    Ok(())
}
