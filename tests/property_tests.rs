//! Property-based tests for the crate-wide invariants

use proptest::prelude::*;
use std::cmp::Ordering;

use bytelanes::{
    equal, find, find_byte, hash, levenshtein, levenshtein_memory_needed, order, rfind_byte,
    Sequence,
};

proptest! {
    #[test]
    fn prop_order_agrees_with_std_and_is_antisymmetric(
        a in prop::collection::vec(any::<u8>(), 0..200),
        b in prop::collection::vec(any::<u8>(), 0..200),
    ) {
        prop_assert_eq!(order(&a, &b), a.cmp(&b));
        prop_assert_eq!(order(&a, &b), order(&b, &a).reverse());
    }

    #[test]
    fn prop_equal_iff_order_equal(
        a in prop::collection::vec(any::<u8>(), 0..64),
        b in prop::collection::vec(any::<u8>(), 0..64),
    ) {
        prop_assert_eq!(equal(&a, &b), order(&a, &b) == Ordering::Equal);
        prop_assert!(equal(&a, &a));
    }

    #[test]
    fn prop_find_byte_is_first_match(
        haystack in prop::collection::vec(any::<u8>(), 0..300),
        needle in any::<u8>(),
    ) {
        let found = find_byte(&haystack, needle);
        prop_assert_eq!(found, haystack.iter().position(|&b| b == needle));
        if let Some(at) = found {
            prop_assert_eq!(haystack[at], needle);
        }
        prop_assert_eq!(
            rfind_byte(&haystack, needle),
            haystack.iter().rposition(|&b| b == needle)
        );
    }

    #[test]
    fn prop_find_matches_naive_search(
        haystack in prop::collection::vec(0u8..4, 0..300),
        needle in prop::collection::vec(0u8..4, 1..80),
    ) {
        // A tiny alphabet makes real matches likely.
        let expected = haystack.windows(needle.len()).position(|w| w == needle);
        let found = find(&haystack, &needle);
        prop_assert_eq!(found, expected);
        if let Some(at) = found {
            prop_assert!(equal(&haystack[at..at + needle.len()], &needle));
        }
    }

    #[test]
    fn prop_hash_deterministic_and_length_sensitive(
        data in prop::collection::vec(any::<u8>(), 0..100),
    ) {
        prop_assert_eq!(hash(&data), hash(&data));
        let mut extended = data.clone();
        extended.push(0);
        prop_assert_ne!(hash(&extended), hash(&data));
    }

    #[test]
    fn prop_levenshtein_bounded_and_symmetric(
        a in prop::collection::vec(any::<u8>(), 0..40),
        b in prop::collection::vec(any::<u8>(), 0..40),
        bound in 0usize..20,
    ) {
        let mut scratch = vec![0u8; levenshtein_memory_needed(a.len(), b.len())];
        let bounded = levenshtein(&a, &b, &mut scratch, bound).unwrap();
        prop_assert!(bounded <= bound);

        let exact = levenshtein(&a, &b, &mut scratch, usize::MAX).unwrap();
        let reverse = levenshtein(&b, &a, &mut scratch, usize::MAX).unwrap();
        prop_assert_eq!(exact, reverse);
        // The exact distance never exceeds the longer length.
        prop_assert!(exact <= a.len().max(b.len()));
        // The bounded result is exact whenever the true distance is below the bound.
        if exact < bound {
            prop_assert_eq!(bounded, exact);
        }
    }

    #[test]
    fn prop_sort_produces_sorted_permutation(
        strings in prop::collection::vec(prop::collection::vec(any::<u8>(), 0..12), 0..60),
    ) {
        let views: Vec<&[u8]> = strings.iter().map(|s| s.as_slice()).collect();
        let mut order_vec = vec![0u64; views.len()];
        let mut sequence = Sequence::with_identity(views.as_slice(), &mut order_vec).unwrap();
        sequence.sort();

        for rank in 1..views.len() {
            let previous = views[order_vec[rank - 1] as usize];
            let here = views[order_vec[rank] as usize];
            prop_assert!(previous <= here, "rank {} out of order", rank);
        }

        let mut seen = order_vec.clone();
        seen.sort_unstable();
        prop_assert_eq!(seen, (0..views.len() as u64).collect::<Vec<_>>());
    }

    #[test]
    fn prop_merge_of_sorted_halves_is_sorted(
        mut strings in prop::collection::vec(prop::collection::vec(any::<u8>(), 0..8), 2..40),
        split_seed in any::<usize>(),
    ) {
        let middle = split_seed % (strings.len() + 1);
        strings[..middle].sort();
        strings[middle..].sort();
        let views: Vec<&[u8]> = strings.iter().map(|s| s.as_slice()).collect();

        let mut order_vec = vec![0u64; views.len()];
        let mut sequence = Sequence::with_identity(views.as_slice(), &mut order_vec).unwrap();
        sequence.merge(middle, |a, b| order(a, b) == Ordering::Less);

        for rank in 1..views.len() {
            let previous = views[order_vec[rank - 1] as usize];
            let here = views[order_vec[rank] as usize];
            prop_assert!(previous <= here, "rank {} out of order", rank);
        }
    }
}
