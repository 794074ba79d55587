//! Valid Palindrome (LeetCode 125)

use patterns_common::{Difficulty, ExerciseInfo, Pattern};

pub const INFO: ExerciseInfo = ExerciseInfo {
    slug: "valid-palindrome",
    title: "Valid Palindrome",
    pattern: Pattern::TwoPointers,
    difficulty: Difficulty::Easy,
    leetcode: 125,
    time: "O(n)",
    space: "O(1)",
};

/// Returns true if `s` reads the same both ways once non-alphanumeric
/// characters are dropped and case is folded.
///
/// The front and back of one double-ended iterator act as the two cursors,
/// so nothing is allocated.
///
/// # Example
/// ```
/// use patterns_two_pointers::is_palindrome;
/// assert!(is_palindrome("No lemon, no melon"));
/// assert!(!is_palindrome("race a car"));
/// ```
pub fn is_palindrome(s: &str) -> bool {
    let mut chars = s
        .chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase);

    loop {
        match (chars.next(), chars.next_back()) {
            (Some(front), Some(back)) if front != back => return false,
            (Some(_), Some(_)) => continue,
            // Cursors met or crossed
            _ => return true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_examples() {
        assert!(is_palindrome("No lemon, no melon"));
        assert!(is_palindrome("A man, a plan, a canal: Panama"));
        assert!(!is_palindrome("race a car"));
    }

    #[test]
    fn test_empty_and_punctuation_only() {
        assert!(is_palindrome(""));
        assert!(is_palindrome(" "));
        assert!(is_palindrome(".,!?"));
    }

    #[test]
    fn test_digits_count() {
        assert!(!is_palindrome("0P"));
        assert!(is_palindrome("12a21"));
        assert!(!is_palindrome("ab2a"));
    }

    #[test]
    fn test_odd_and_even_lengths() {
        assert!(is_palindrome("a"));
        assert!(is_palindrome("aa"));
        assert!(is_palindrome("aba"));
        assert!(!is_palindrome("ab"));
    }

    #[test]
    fn test_unicode_case_folding() {
        assert!(is_palindrome("Été"));
        assert!(is_palindrome("ÅbbÅ"));
    }
}
