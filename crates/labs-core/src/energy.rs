//! LABS energy evaluation.
//!
//! For a spin sequence S of length N the aperiodic autocorrelation at lag k is
//!
//!   C_k(S) = Σ_{i=0}^{N-k-1} S[i]·S[i+k]
//!
//! and the LABS energy is the sum of the squared sidelobes:
//!
//!   E(S) = Σ_{k=1}^{N-1} C_k(S)²
//!
//! The sum is carried out in integers, so `E(S)` is exact and the reversal
//! and sign-flip symmetries hold bit for bit.

use crate::error::LabsResult;
use crate::spin::SpinSequence;

/// Aperiodic autocorrelations `C_1 … C_{N-1}` of `seq`.
pub fn autocorrelations(seq: &SpinSequence) -> Vec<i64> {
    let s = seq.spins();
    (1..s.len()).map(|k| lag_correlation(s, k)).collect()
}

/// LABS energy of `seq`.
pub fn labs_energy(seq: &SpinSequence) -> f64 {
    sidelobe_energy(seq.spins()) as f64
}

/// LABS energy of a raw slice, validating that it is a non-empty ±1 vector.
pub fn labs_energy_raw(spins: &[i8]) -> LabsResult<f64> {
    SpinSequence::from_slice(spins).map(|seq| labs_energy(&seq))
}

/// Merit factor `N² / (2E)`.
///
/// Infinite for N = 1, the only length with zero energy.
pub fn merit_factor(seq: &SpinSequence) -> f64 {
    let energy = labs_energy(seq);
    if energy == 0.0 {
        return f64::INFINITY;
    }
    let n = seq.len() as f64;
    n * n / (2.0 * energy)
}

/// Integer energy on an already validated slice.
pub(crate) fn sidelobe_energy(s: &[i8]) -> i64 {
    (1..s.len())
        .map(|k| {
            let c = lag_correlation(s, k);
            c * c
        })
        .sum()
}

#[inline]
fn lag_correlation(s: &[i8], k: usize) -> i64 {
    s[..s.len() - k]
        .iter()
        .zip(&s[k..])
        .map(|(&a, &b)| i64::from(a) * i64::from(b))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LabsError;

    fn seq(spins: &[i8]) -> SpinSequence {
        SpinSequence::from_slice(spins).unwrap()
    }

    #[test]
    fn test_autocorrelations_barker5() {
        assert_eq!(autocorrelations(&seq(&[1, 1, 1, -1, 1])), vec![0, 1, 0, 1]);
    }

    #[test]
    fn test_single_spin_has_no_sidelobes() {
        let s = seq(&[-1]);
        assert!(autocorrelations(&s).is_empty());
        assert_eq!(labs_energy(&s), 0.0);
        assert!(merit_factor(&s).is_infinite());
    }

    #[test]
    fn test_all_ones() {
        // C_k = N - k, so E = Σ_{k=1}^{3} (4-k)² = 9 + 4 + 1.
        assert_eq!(labs_energy(&seq(&[1, 1, 1, 1])), 14.0);
    }

    #[test]
    fn test_merit_factor_barker13() {
        let barker13 = seq(&[1, 1, 1, 1, 1, -1, -1, 1, 1, -1, 1, -1, 1]);
        assert_eq!(labs_energy(&barker13), 6.0);
        assert!((merit_factor(&barker13) - 169.0 / 12.0).abs() < 1e-12);
    }

    #[test]
    fn test_raw_rejects_bad_input() {
        assert_eq!(labs_energy_raw(&[]), Err(LabsError::EmptySequence));
        assert!(matches!(
            labs_energy_raw(&[1, 3]),
            Err(LabsError::InvalidSpin { index: 1, value: 3 })
        ));
        assert_eq!(labs_energy_raw(&[1, 1, -1]), Ok(1.0));
    }
}
