//! Find the Index of the First Occurrence in a String (LeetCode 28)
//!
//! The outer cursor marks a candidate start, the inner cursor extends the
//! match. On a mismatch the inner cursor restarts from the next candidate,
//! giving O(n·m) in the worst case. No failure table as in KMP.

use patterns_common::{Difficulty, ExerciseInfo, Pattern};
use tracing::trace;

pub const INFO: ExerciseInfo = ExerciseInfo {
    slug: "find-the-index-of-the-first-occurrence-in-a-string",
    title: "Find the Index of the First Occurrence in a String",
    pattern: Pattern::TwoPointers,
    difficulty: Difficulty::Easy,
    leetcode: 28,
    time: "O(n * m)",
    space: "O(1)",
};

/// Byte offset of the first occurrence of `needle` in `haystack`.
///
/// An empty needle matches at offset 0.
///
/// # Example
/// ```
/// use patterns_two_pointers::first_occurrence;
/// assert_eq!(first_occurrence("sadbutsad", "sad"), Some(0));
/// assert_eq!(first_occurrence("leetcode", "leeto"), None);
/// ```
pub fn first_occurrence(haystack: &str, needle: &str) -> Option<usize> {
    let (hay, pat) = (haystack.as_bytes(), needle.as_bytes());
    if pat.is_empty() {
        return Some(0);
    }

    let mut start = 0;
    while start + pat.len() <= hay.len() {
        let mut matched = 0;
        while matched < pat.len() && hay[start + matched] == pat[matched] {
            matched += 1;
        }
        if matched == pat.len() {
            return Some(start);
        }
        if matched > 0 {
            trace!(start, matched, "partial match, restarting");
        }
        start += 1;
    }
    None
}

/// Like [`first_occurrence`] but with the `-1` sentinel for "not found".
///
/// # Example
/// ```
/// use patterns_two_pointers::str_str;
/// assert_eq!(str_str("sadbutsad", "sad"), 0);
/// assert_eq!(str_str("leetcode", "leeto"), -1);
/// ```
pub fn str_str(haystack: &str, needle: &str) -> isize {
    // Slice lengths never exceed isize::MAX
    first_occurrence(haystack, needle).map_or(-1, |i| i as isize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_examples() {
        assert_eq!(str_str("sadbutsad", "sad"), 0);
        assert_eq!(str_str("leetcode", "leeto"), -1);
    }

    #[test]
    fn test_match_after_partial_match() {
        assert_eq!(str_str("mississippi", "issip"), 4);
        assert_eq!(str_str("aaab", "aab"), 1);
    }

    #[test]
    fn test_match_at_end() {
        assert_eq!(str_str("hello", "llo"), 2);
        assert_eq!(str_str("abc", "c"), 2);
    }

    #[test]
    fn test_needle_longer_than_haystack() {
        assert_eq!(str_str("ab", "abc"), -1);
        assert_eq!(str_str("", "a"), -1);
    }

    #[test]
    fn test_empty_needle() {
        assert_eq!(first_occurrence("abc", ""), Some(0));
        assert_eq!(first_occurrence("", ""), Some(0));
    }

    #[test]
    fn test_sentinel_is_signed_offset() {
        let missing: isize = str_str("abc", "d");
        let found: isize = str_str("abcd", "d");
        assert_eq!(missing, -1);
        assert_eq!(found, 3);
    }

    #[test]
    fn test_whole_string() {
        assert_eq!(first_occurrence("same", "same"), Some(0));
    }
}
