//! Exercise metadata.
//!
//! Every solution module exports an `INFO` constant describing the problem it
//! solves. The runner collects them into its catalog.

use std::fmt;

use serde::Serialize;

/// The technique an exercise practises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Pattern {
    FastSlowPointers,
    TwoPointers,
    LinkedLists,
    HashMapsAndSets,
}

impl Pattern {
    pub const ALL: [Pattern; 4] = [
        Pattern::FastSlowPointers,
        Pattern::TwoPointers,
        Pattern::LinkedLists,
        Pattern::HashMapsAndSets,
    ];

    /// Kebab-case name, as used on the command line.
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Pattern::FastSlowPointers => "fast-slow-pointers",
            Pattern::TwoPointers => "two-pointers",
            Pattern::LinkedLists => "linked-lists",
            Pattern::HashMapsAndSets => "hash-maps-and-sets",
        }
    }

    /// Parses a kebab-case pattern name.
    #[must_use]
    pub fn from_slug(slug: &str) -> Option<Pattern> {
        Pattern::ALL.into_iter().find(|p| p.slug() == slug)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        };
        f.write_str(name)
    }
}

/// Static description of one exercise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExerciseInfo {
    /// Kebab-case identifier, unique across the workspace
    pub slug: &'static str,
    pub title: &'static str,
    pub pattern: Pattern,
    pub difficulty: Difficulty,
    /// LeetCode problem number
    pub leetcode: u32,
    /// Time complexity in big-O notation
    pub time: &'static str,
    /// Auxiliary space complexity in big-O notation
    pub space: &'static str,
}

impl fmt::Display for ExerciseInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} (LeetCode {}, {}) time {} space {}",
            self.slug, self.title, self.leetcode, self.difficulty, self.time, self.space
        )
    }
}
