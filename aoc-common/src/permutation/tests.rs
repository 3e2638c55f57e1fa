//! Tests for permutation enumeration.

use std::collections::HashSet;

use super::*;

fn collect_all(n: usize) -> Vec<Vec<usize>> {
    let mut permutations = IndexPermutations::new(n);
    let mut all = Vec::new();
    while let Some(order) = permutations.next_permutation() {
        all.push(order.to_vec());
    }
    all
}

#[test]
fn test_three_elements_in_sjt_order() {
    assert_eq!(
        collect_all(3),
        vec![
            vec![0, 1, 2],
            vec![0, 2, 1],
            vec![2, 0, 1],
            vec![2, 1, 0],
            vec![1, 2, 0],
            vec![1, 0, 2],
        ]
    );
}

#[test]
fn test_counts_and_uniqueness() {
    for (n, expected) in [(0, 1), (1, 1), (2, 2), (3, 6), (4, 24), (5, 120)] {
        let all = collect_all(n);
        assert_eq!(all.len(), expected, "n = {n}");
        let unique: HashSet<&Vec<usize>> = all.iter().collect();
        assert_eq!(unique.len(), expected, "duplicates for n = {n}");
        for order in &all {
            let mut sorted = order.clone();
            sorted.sort_unstable();
            assert_eq!(sorted, (0..n).collect::<Vec<_>>());
        }
    }
}

#[test]
fn test_zero_elements_yield_one_empty_permutation() {
    let mut permutations = IndexPermutations::new(0);
    assert!(permutations.has_next());
    assert_eq!(permutations.next_permutation(), Some(&[][..]));
    assert!(!permutations.has_next());
    assert_eq!(permutations.next_permutation(), None);
}

#[test]
fn test_has_next_tracks_exhaustion() {
    let mut permutations = IndexPermutations::new(2);
    assert_eq!(permutations.len(), Some(2));
    assert!(permutations.has_next());
    assert_eq!(permutations.next_permutation(), Some(&[0, 1][..]));
    assert!(permutations.has_next());
    assert_eq!(permutations.next_permutation(), Some(&[1, 0][..]));
    assert!(!permutations.has_next());
    assert_eq!(permutations.remaining(), Some(0));
    // Exhaustion is sticky.
    assert_eq!(permutations.next_permutation(), None);
    assert_eq!(permutations.next_permutation(), None);
}

#[test]
fn test_len_overflow() {
    assert_eq!(IndexPermutations::new(20).len(), Some(2_432_902_008_176_640_000));
    assert_eq!(IndexPermutations::new(21).len(), None);
}

#[test]
fn test_element_permutations() {
    let words: Vec<String> = Permutations::new("abc".chars())
        .map(|order| order.into_iter().collect())
        .collect();
    assert_eq!(words, vec!["abc", "acb", "cab", "cba", "bca", "bac"]);
}

#[test]
fn test_element_permutations_size_hint() {
    let mut permutations = Permutations::new(vec![1, 2, 3, 4]);
    assert_eq!(permutations.size_hint(), (24, Some(24)));
    permutations.next();
    assert_eq!(permutations.size_hint(), (23, Some(23)));
    assert_eq!(permutations.count(), 23);
}

#[test]
fn test_element_permutations_of_nothing() {
    let mut permutations = Permutations::new(Vec::<u8>::new());
    assert_eq!(permutations.next(), Some(vec![]));
    assert_eq!(permutations.next(), None);
}
