//! Exhaustive ground-state search and sample scoring.
//!
//! [`ground_state`] enumerates every sequence with the first spin fixed to +1
//! (the sign-flip symmetry makes the other half redundant) and reduces over a
//! rayon pool. [`best_sample`] scores measurement outcomes by LABS energy,
//! which is how a sampled histogram is turned into a candidate solution.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::energy::sidelobe_energy;
use crate::error::{LabsError, LabsResult};
use crate::spin::SpinSequence;

/// Largest N [`ground_state`] will enumerate (2^23 candidates).
pub const MAX_EXHAUSTIVE_N: usize = 24;

/// Optimal sequence found by exhaustive search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroundState {
    /// Minimum LABS energy for this length.
    pub energy: f64,
    /// One optimal sequence, with first spin +1.
    pub sequence: SpinSequence,
}

/// Find the minimum LABS energy for length `n` by enumeration.
///
/// Ties are broken towards the smallest bit pattern, so the result is the
/// same regardless of how rayon splits the work.
#[instrument]
pub fn ground_state(n: usize) -> LabsResult<GroundState> {
    if n == 0 {
        return Err(LabsError::EmptySequence);
    }
    if n > MAX_EXHAUSTIVE_N {
        return Err(LabsError::TooLargeForSearch {
            n,
            max: MAX_EXHAUSTIVE_N,
        });
    }

    let candidates = 1u64 << (n - 1);
    let (energy, pattern) = (0..candidates)
        .into_par_iter()
        .map(|pattern| {
            let seq = SpinSequence::from_pattern(n, pattern);
            (sidelobe_energy(seq.spins()), pattern)
        })
        .min()
        .unwrap_or((0, 0));

    debug!(energy, candidates, "exhaustive search finished");

    Ok(GroundState {
        energy: energy as f64,
        sequence: SpinSequence::from_pattern(n, pattern),
    })
}

/// A measurement outcome scored by LABS energy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredSample {
    /// The outcome bitstring.
    pub bitstring: String,
    /// The outcome as spins (`'0'` → +1, `'1'` → -1).
    pub sequence: SpinSequence,
    /// LABS energy of `sequence`.
    pub energy: f64,
    /// How many times the outcome was observed.
    pub count: u64,
}

/// Return the lowest-energy outcome among `(bitstring, count)` pairs.
///
/// Outcomes with a zero count are skipped. Ties go to the lexicographically
/// smallest bitstring. Fails on the first bitstring that is not a valid
/// spin encoding.
pub fn best_sample<'a, I>(outcomes: I) -> LabsResult<Option<ScoredSample>>
where
    I: IntoIterator<Item = (&'a str, u64)>,
{
    let mut best: Option<(i64, ScoredSample)> = None;

    for (bitstring, count) in outcomes {
        if count == 0 {
            continue;
        }
        let sequence = SpinSequence::from_bitstring(bitstring)?;
        let energy = sidelobe_energy(sequence.spins());

        let better = match &best {
            None => true,
            Some((e, s)) => energy < *e || (energy == *e && bitstring < s.bitstring.as_str()),
        };
        if better {
            best = Some((
                energy,
                ScoredSample {
                    bitstring: bitstring.to_string(),
                    sequence,
                    energy: energy as f64,
                    count,
                },
            ));
        }
    }

    Ok(best.map(|(_, sample)| sample))
}
