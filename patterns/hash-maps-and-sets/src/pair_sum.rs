//! Pair Sum - Unsorted (LeetCode 1)
//!
//! One pass over the array. Before recording `nums[i]`, look up its
//! complement `target - nums[i]` among the values already seen.

use std::collections::HashMap;

use patterns_common::{Difficulty, ExerciseInfo, Pattern};
use tracing::trace;

pub const INFO: ExerciseInfo = ExerciseInfo {
    slug: "pair-sum-unsorted",
    title: "Pair Sum - Unsorted",
    pattern: Pattern::HashMapsAndSets,
    difficulty: Difficulty::Medium,
    leetcode: 1,
    time: "O(n)",
    space: "O(n)",
};

/// Indices `(j, i)` with `j < i` and `nums[j] + nums[i] == target`.
///
/// Returns the pair completed earliest in the scan; `j` is the first index
/// holding the complement. `None` when no pair exists. The sum is computed
/// in `i64`, so extreme values cannot overflow.
///
/// # Example
/// ```
/// use patterns_hash_maps::two_sum;
/// assert_eq!(two_sum(&[2, 7, 11, 15], 9), Some((0, 1)));
/// assert_eq!(two_sum(&[1, 2], 7), None);
/// ```
pub fn two_sum(nums: &[i32], target: i32) -> Option<(usize, usize)> {
    let mut seen: HashMap<i64, usize> = HashMap::with_capacity(nums.len());
    for (i, &v) in nums.iter().enumerate() {
        let complement = i64::from(target) - i64::from(v);
        if let Some(&j) = seen.get(&complement) {
            trace!(j, i, "pair found");
            return Some((j, i));
        }
        seen.entry(i64::from(v)).or_insert(i);
    }
    None
}

/// [`two_sum`] in list form: `[j, i]`, or empty when there is no pair.
///
/// # Example
/// ```
/// use patterns_hash_maps::two_sum_indices;
/// assert_eq!(two_sum_indices(&[3, 2, 4], 6), vec![1, 2]);
/// assert!(two_sum_indices(&[3], 6).is_empty());
/// ```
pub fn two_sum_indices(nums: &[i32], target: i32) -> Vec<usize> {
    two_sum(nums, target).map_or_else(Vec::new, |(j, i)| vec![j, i])
}
