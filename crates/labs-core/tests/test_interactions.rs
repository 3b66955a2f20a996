//! Tests for G2/G4 interaction-set generation.

use std::collections::HashSet;

use proptest::prelude::*;

use labs_core::get_interactions;

#[test]
fn n5_reference_sets() {
    let g = get_interactions(5);
    assert!(g.n_pairs() > 0);
    assert_eq!(g.pairs(), &[[0, 1], [0, 2], [1, 2], [2, 3]]);
    assert_eq!(g.quads(), &[[0, 1, 2, 3], [0, 1, 3, 4], [1, 2, 3, 4]]);
}

#[test]
fn below_three_is_empty() {
    assert!(get_interactions(0).is_empty());
    assert!(get_interactions(1).is_empty());
    assert!(get_interactions(2).is_empty());
}

#[test]
fn counts_for_small_n() {
    // (N, |G2|, |G4|)
    let expected = [(3, 1, 0), (4, 2, 1), (5, 4, 3), (6, 6, 7), (7, 9, 13), (8, 12, 22)];
    for (n, pairs, quads) in expected {
        let g = get_interactions(n);
        assert_eq!(g.n_pairs(), pairs, "G2 size for N = {n}");
        assert_eq!(g.n_quads(), quads, "G4 size for N = {n}");
    }
}

#[test]
fn repeated_calls_are_identical() {
    for n in 0..=20 {
        assert_eq!(get_interactions(n), get_interactions(n));
    }
}

#[test]
fn quads_match_brute_force_monomials() {
    // Every a<b<c<d with b-a = d-c, enumerated independently.
    for n in 4..=12 {
        let mut brute = HashSet::new();
        for a in 0..n {
            for b in a + 1..n {
                for c in b + 1..n {
                    for d in c + 1..n {
                        if b - a == d - c {
                            brute.insert([a, b, c, d]);
                        }
                    }
                }
            }
        }
        let generated: HashSet<[usize; 4]> = get_interactions(n).quads().iter().copied().collect();
        assert_eq!(generated.len(), get_interactions(n).n_quads(), "duplicates for N = {n}");
        assert_eq!(generated, brute, "N = {n}");
    }
}

proptest! {
    #[test]
    fn prop_indices_in_range_and_distinct(n in 0_usize..=40) {
        let g = get_interactions(n);
        for &[i, j] in g.pairs() {
            prop_assert!(i < j && j < n);
            // Pair (i, i+k) only appears when i + 2k still fits.
            prop_assert!(2 * j - i < n);
        }
        for &[a, b, c, d] in g.quads() {
            prop_assert!(a < b && b < c && c < d && d < n);
            prop_assert_eq!(b - a, d - c);
        }
    }

    #[test]
    fn prop_order_is_sorted(n in 0_usize..=40) {
        let g = get_interactions(n);
        prop_assert!(g.pairs().windows(2).all(|w| w[0] < w[1]));
        prop_assert!(g.quads().windows(2).all(|w| w[0] < w[1]));
    }
}
