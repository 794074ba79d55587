//! The exercise catalog: metadata plus a sample run for every solution.
//!
//! Each sample function builds its inputs, calls the solution once and
//! renders one line per input, in the shape `call(args) = result`.

use patterns_common::{ExerciseInfo, NodeArena, NodeId, Pattern, PatternError, Result};
use patterns_fast_slow as fast_slow;
use patterns_hash_maps as hash_maps;
use patterns_linked_lists as linked_lists;
use patterns_two_pointers as two_pointers;

/// Renders the sample output of one exercise.
pub type SampleFn = fn() -> Result<Vec<String>>;

#[derive(Debug, Clone, Copy)]
pub struct Exercise {
    pub info: ExerciseInfo,
    pub run: SampleFn,
}

impl Exercise {
    const fn new(info: ExerciseInfo, run: SampleFn) -> Self {
        Self { info, run }
    }
}

/// Every exercise, grouped by pattern.
pub fn catalog() -> Vec<Exercise> {
    vec![
        Exercise::new(fast_slow::linked_list_cycle::INFO, linked_list_cycle),
        Exercise::new(fast_slow::intersection::INFO, intersection),
        Exercise::new(fast_slow::middle_node::INFO, middle_node),
        Exercise::new(fast_slow::happy_number::INFO, happy_number),
        Exercise::new(two_pointers::valid_palindrome::INFO, valid_palindrome),
        Exercise::new(two_pointers::first_occurrence::INFO, first_occurrence),
        Exercise::new(two_pointers::merge_sorted_array::INFO, merge_sorted_array),
        Exercise::new(two_pointers::reverse_string::INFO, reverse_string),
        Exercise::new(linked_lists::remove_duplicates::INFO, remove_duplicates),
        Exercise::new(linked_lists::remove_elements::INFO, remove_elements),
        Exercise::new(linked_lists::reverse_list::INFO, reverse_list),
        Exercise::new(hash_maps::pair_sum::INFO, pair_sum),
    ]
}

/// Exercises belonging to `pattern`, or all of them.
pub fn filter(pattern: Option<Pattern>) -> Vec<Exercise> {
    catalog()
        .into_iter()
        .filter(|ex| pattern.is_none_or(|p| ex.info.pattern == p))
        .collect()
}

/// Looks an exercise up by slug.
pub fn find(slug: &str) -> Result<Exercise> {
    catalog()
        .into_iter()
        .find(|ex| ex.info.slug == slug)
        .ok_or_else(|| PatternError::UnknownExercise(slug.to_string()))
}

fn describe(arena: &NodeArena, node: Option<NodeId>) -> String {
    match node {
        Some(id) => format!("node({})", arena.val(id)),
        None => "null".to_string(),
    }
}

// =============================================================================
// Fast-slow pointers
// =============================================================================

fn linked_list_cycle() -> Result<Vec<String>> {
    let cases: [(&[i32], Option<usize>); 3] = [
        (&[3, 2, 0, -4], Some(1)),
        (&[1, 2], Some(0)),
        (&[1], None),
    ];

    let mut lines = Vec::new();
    for (values, pos) in cases {
        let mut arena = NodeArena::new();
        let head = arena.push_list(values);
        if let Some(pos) = pos {
            arena.make_cycle(head, pos)?;
        }
        let pos = pos.map_or(-1, |p| p as i64);
        lines.push(format!(
            "has_cycle({values:?}, pos={pos}) = {}",
            fast_slow::has_cycle(&arena, head)
        ));
    }
    Ok(lines)
}

fn intersection() -> Result<Vec<String>> {
    let mut arena = NodeArena::new();
    let shared = arena.push_list(&[8, 4, 5]);
    let a = arena.push_list(&[4, 1]);
    let a = arena.append(a, shared)?;
    let b = arena.push_list(&[5, 6, 1]);
    let b = arena.append(b, shared)?;
    let c = arena.push_list(&[2, 6, 4]);

    Ok(vec![
        format!(
            "intersection({:?}, {:?}) = {}",
            arena.values(a)?,
            arena.values(b)?,
            describe(&arena, fast_slow::intersection(&arena, a, b))
        ),
        format!(
            "intersection({:?}, {:?}) = {}",
            arena.values(c)?,
            arena.values(b)?,
            describe(&arena, fast_slow::intersection(&arena, c, b))
        ),
    ])
}

fn middle_node() -> Result<Vec<String>> {
    let mut lines = Vec::new();
    for values in [&[1, 2, 3, 4, 5][..], &[1, 2, 3, 4, 5, 6][..]] {
        let mut arena = NodeArena::new();
        let head = arena.push_list(values);
        let middle = fast_slow::middle_node(&arena, head);
        lines.push(format!("middle_node({values:?}) = {}", describe(&arena, middle)));
    }
    Ok(lines)
}

fn happy_number() -> Result<Vec<String>> {
    Ok([19, 2, 7]
        .into_iter()
        .map(|n| format!("is_happy({n}) = {}", fast_slow::is_happy(n)))
        .collect())
}

// =============================================================================
// Two pointers
// =============================================================================

fn valid_palindrome() -> Result<Vec<String>> {
    Ok(["No lemon, no melon", "race a car"]
        .into_iter()
        .map(|s| format!("is_palindrome({s:?}) = {}", two_pointers::is_palindrome(s)))
        .collect())
}

fn first_occurrence() -> Result<Vec<String>> {
    Ok([("sadbutsad", "sad"), ("leetcode", "leeto")]
        .into_iter()
        .map(|(haystack, needle)| {
            format!(
                "str_str({haystack:?}, {needle:?}) = {}",
                two_pointers::str_str(haystack, needle)
            )
        })
        .collect())
}

fn merge_sorted_array() -> Result<Vec<String>> {
    let cases: [([i32; 6], [i32; 3]); 2] = [
        ([4, 5, 6, 0, 0, 0], [1, 2, 3]),
        ([1, 2, 3, 0, 0, 0], [2, 5, 6]),
    ];

    let mut lines = Vec::new();
    for (mut nums1, nums2) in cases {
        let before = nums1;
        two_pointers::merge_sorted(&mut nums1, 3, &nums2, 3)?;
        lines.push(format!("merge({before:?}, 3, {nums2:?}, 3) = {nums1:?}"));
    }
    Ok(lines)
}

fn reverse_string() -> Result<Vec<String>> {
    let mut hannah = ["H", "a", "n", "n", "a", "h"];
    let mut hello = ["h", "e", "l", "l", "o"];

    let mut lines = Vec::new();
    let before = hannah;
    two_pointers::reverse_in_place(&mut hannah);
    lines.push(format!("reverse({before:?}) = {hannah:?}"));

    let before = hello;
    two_pointers::reverse_in_place(&mut hello);
    lines.push(format!("reverse({before:?}) = {hello:?}"));
    Ok(lines)
}

// =============================================================================
// Linked lists
// =============================================================================

fn remove_duplicates() -> Result<Vec<String>> {
    let mut lines = Vec::new();
    for values in [&[1, 1, 2, 3, 3][..], &[][..], &[2, 2, 2][..]] {
        let mut arena = NodeArena::new();
        let head = arena.push_list(values);
        let head = linked_lists::delete_duplicates(&mut arena, head);
        lines.push(format!("delete_duplicates({values:?}) = {:?}", arena.values(head)?));
    }
    Ok(lines)
}

fn remove_elements() -> Result<Vec<String>> {
    let values = [1, 2, 6, 3, 4, 5, 6];
    let mut arena = NodeArena::new();
    let head = arena.push_list(&values);
    let head = linked_lists::remove_elements(&mut arena, head, 6);
    Ok(vec![format!("remove_elements({values:?}, 6) = {:?}", arena.values(head)?)])
}

fn reverse_list() -> Result<Vec<String>> {
    let mut lines = Vec::new();
    for values in [&[1, 2, 3][..], &[][..]] {
        let mut arena = NodeArena::new();
        let head = arena.push_list(values);
        let head = linked_lists::reverse_list(&mut arena, head);
        lines.push(format!("reverse_list({values:?}) = {:?}", arena.values(head)?));
    }
    Ok(lines)
}

// =============================================================================
// Hash maps and sets
// =============================================================================

fn pair_sum() -> Result<Vec<String>> {
    Ok([(&[2, 7, 11, 15][..], 9), (&[3, 2, 4][..], 6), (&[1, 2][..], 7)]
        .into_iter()
        .map(|(nums, target)| {
            format!(
                "two_sum({nums:?}, {target}) = {:?}",
                hash_maps::two_sum_indices(nums, target)
            )
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_matches_crate_exports() {
        let from_crates: Vec<ExerciseInfo> = fast_slow::EXERCISES
            .into_iter()
            .chain(two_pointers::EXERCISES)
            .chain(linked_lists::EXERCISES)
            .chain(hash_maps::EXERCISES)
            .collect();
        let listed: Vec<ExerciseInfo> = catalog().into_iter().map(|ex| ex.info).collect();
        assert_eq!(listed, from_crates);
    }

    #[test]
    fn test_slugs_are_unique() {
        let slugs: HashSet<&str> = catalog().iter().map(|ex| ex.info.slug).collect();
        assert_eq!(slugs.len(), catalog().len());
    }

    #[test]
    fn test_every_sample_runs() {
        for ex in catalog() {
            let lines = (ex.run)().unwrap();
            assert!(!lines.is_empty(), "{} produced no output", ex.info.slug);
        }
    }

    #[test]
    fn test_find() {
        let ex = find("happy-number").unwrap();
        assert_eq!(ex.info.leetcode, 202);
        assert_eq!(
            find("fizz-buzz").unwrap_err(),
            PatternError::UnknownExercise("fizz-buzz".to_string())
        );
    }

    #[test]
    fn test_filter_by_pattern() {
        let lists = filter(Some(Pattern::LinkedLists));
        assert_eq!(lists.len(), 3);
        assert!(lists.iter().all(|ex| ex.info.pattern == Pattern::LinkedLists));
        assert_eq!(filter(None).len(), catalog().len());
    }

    #[test]
    fn test_sample_output() {
        assert_eq!(
            pair_sum().unwrap()[0],
            "two_sum([2, 7, 11, 15], 9) = [0, 1]"
        );
        assert_eq!(
            first_occurrence().unwrap(),
            vec![
                "str_str(\"sadbutsad\", \"sad\") = 0",
                "str_str(\"leetcode\", \"leeto\") = -1"
            ]
        );
        assert_eq!(
            merge_sorted_array().unwrap()[1],
            "merge([1, 2, 3, 0, 0, 0], 3, [2, 5, 6], 3) = [1, 2, 2, 3, 5, 6]"
        );
        assert_eq!(
            remove_duplicates().unwrap(),
            vec![
                "delete_duplicates([1, 1, 2, 3, 3]) = [1, 2, 3]",
                "delete_duplicates([]) = []",
                "delete_duplicates([2, 2, 2]) = [2]"
            ]
        );
        assert_eq!(
            linked_list_cycle().unwrap()[2],
            "has_cycle([1], pos=-1) = false"
        );
        assert_eq!(
            intersection().unwrap(),
            vec![
                "intersection([4, 1, 8, 4, 5], [5, 6, 1, 8, 4, 5]) = node(8)",
                "intersection([2, 6, 4], [5, 6, 1, 8, 4, 5]) = null"
            ]
        );
    }
}
