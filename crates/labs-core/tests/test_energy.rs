//! Tests for LABS energy evaluation.

use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

use labs_core::{SpinSequence, labs_energy, merit_factor};

fn seq(spins: &[i8]) -> SpinSequence {
    SpinSequence::from_slice(spins).unwrap()
}

// ---------------------------------------------------------------------------
// Known values
// ---------------------------------------------------------------------------

#[test]
fn energy_n3() {
    assert_eq!(labs_energy(&seq(&[1, 1, -1])), 1.0);
}

#[test]
fn energy_n4() {
    assert_eq!(labs_energy(&seq(&[1, 1, 1, -1])), 2.0);
}

#[test]
fn energy_n5_barker() {
    // Sidelobes are 0, 1, 0, 1 → E = 2, the optimum for N = 5.
    assert_eq!(labs_energy(&seq(&[1, 1, 1, -1, 1])), 2.0);
}

#[test]
fn energy_is_positive_beyond_one_spin() {
    let mut rng = StdRng::seed_from_u64(11);
    for n in 2..=16 {
        let s = SpinSequence::random(n, &mut rng).unwrap();
        assert!(labs_energy(&s) > 0.0, "N = {n}, S = {s}");
    }
}

// ---------------------------------------------------------------------------
// Symmetries on a random length-10 sequence
// ---------------------------------------------------------------------------

#[test]
fn symmetry_reversal() {
    let mut rng = StdRng::seed_from_u64(2024);
    let s = SpinSequence::random(10, &mut rng).unwrap();
    assert_eq!(labs_energy(&s), labs_energy(&s.reversed()));
}

#[test]
fn symmetry_inversion() {
    let mut rng = StdRng::seed_from_u64(2025);
    let s = SpinSequence::random(10, &mut rng).unwrap();
    assert_eq!(labs_energy(&s), labs_energy(&-s.clone()));
}

#[test]
fn merit_factor_n4() {
    // N² / (2E) = 16 / 4.
    assert_eq!(merit_factor(&seq(&[1, 1, 1, -1])), 4.0);
}

// ---------------------------------------------------------------------------
// Property-based symmetries
// ---------------------------------------------------------------------------

fn arb_sequence() -> impl Strategy<Value = SpinSequence> {
    prop::collection::vec(prop_oneof![Just(1_i8), Just(-1_i8)], 1..=48)
        .prop_map(|spins| SpinSequence::new(spins).unwrap())
}

proptest! {
    #[test]
    fn prop_reversal_preserves_energy(s in arb_sequence()) {
        prop_assert_eq!(labs_energy(&s), labs_energy(&s.reversed()));
    }

    #[test]
    fn prop_negation_preserves_energy(s in arb_sequence()) {
        prop_assert_eq!(labs_energy(&s), labs_energy(&s.negated()));
    }

    #[test]
    fn prop_energy_is_non_negative(s in arb_sequence()) {
        prop_assert!(labs_energy(&s) >= 0.0);
    }

    /// Alternating every other spin flips the sign of odd-lag correlations
    /// only, which leaves their squares unchanged.
    #[test]
    fn prop_alternation_preserves_energy(s in arb_sequence()) {
        let alternated: Vec<i8> = s
            .spins()
            .iter()
            .enumerate()
            .map(|(i, &v)| if i % 2 == 1 { -v } else { v })
            .collect();
        let alternated = SpinSequence::new(alternated).unwrap();
        prop_assert_eq!(labs_energy(&s), labs_energy(&alternated));
    }
}
