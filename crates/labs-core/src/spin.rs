//! Spin sequences.
//!
//! A [`SpinSequence`] is the ±1 vector the LABS energy is defined over. The
//! constructors reject anything else, so every function downstream can treat
//! the spins as well formed.
//!
//! Measurement outcomes map onto spins through the Z eigenvalue convention:
//! bit `'0'` is spin `+1` and bit `'1'` is spin `-1`.

use std::fmt;
use std::ops::Neg;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::energy::labs_energy;
use crate::error::{LabsError, LabsResult};

/// An ordered, non-empty sequence of ±1 spins.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<i8>", into = "Vec<i8>")]
pub struct SpinSequence {
    spins: Vec<i8>,
}

impl SpinSequence {
    /// Create a sequence, validating that it is non-empty and every entry is ±1.
    pub fn new(spins: Vec<i8>) -> LabsResult<Self> {
        if spins.is_empty() {
            return Err(LabsError::EmptySequence);
        }
        if let Some((index, &value)) = spins
            .iter()
            .enumerate()
            .find(|(_, s)| **s != 1 && **s != -1)
        {
            return Err(LabsError::InvalidSpin {
                index,
                value: i64::from(value),
            });
        }
        Ok(Self { spins })
    }

    /// Create a sequence from a borrowed slice.
    pub fn from_slice(spins: &[i8]) -> LabsResult<Self> {
        Self::new(spins.to_vec())
    }

    /// Draw `n` independent, uniformly random spins.
    pub fn random<R: Rng + ?Sized>(n: usize, rng: &mut R) -> LabsResult<Self> {
        if n == 0 {
            return Err(LabsError::EmptySequence);
        }
        let spins = (0..n)
            .map(|_| if rng.gen_bool(0.5) { 1 } else { -1 })
            .collect();
        Ok(Self { spins })
    }

    /// Parse a measurement bitstring: `'0'` → `+1`, `'1'` → `-1`.
    pub fn from_bitstring(bits: &str) -> LabsResult<Self> {
        let spins = bits
            .chars()
            .enumerate()
            .map(|(index, ch)| match ch {
                '0' => Ok(1),
                '1' => Ok(-1),
                _ => Err(LabsError::InvalidBit { index, ch }),
            })
            .collect::<LabsResult<Vec<i8>>>()?;
        Self::new(spins)
    }

    /// Build the sequence whose first spin is `+1` and whose spin `i + 1` is
    /// `-1` exactly when bit `i` of `pattern` is set.
    pub(crate) fn from_pattern(n: usize, pattern: u64) -> Self {
        let spins = (0..n)
            .map(|i| {
                if i > 0 && (pattern >> (i - 1)) & 1 == 1 {
                    -1
                } else {
                    1
                }
            })
            .collect();
        Self { spins }
    }

    /// Inverse of [`SpinSequence::from_bitstring`].
    pub fn to_bitstring(&self) -> String {
        self.spins
            .iter()
            .map(|&s| if s == 1 { '0' } else { '1' })
            .collect()
    }

    /// Number of spins.
    pub fn len(&self) -> usize {
        self.spins.len()
    }

    /// Always false for a constructed sequence.
    pub fn is_empty(&self) -> bool {
        self.spins.is_empty()
    }

    /// The spins in order.
    pub fn spins(&self) -> &[i8] {
        &self.spins
    }

    /// The sequence read back to front.
    #[must_use]
    pub fn reversed(&self) -> Self {
        let mut spins = self.spins.clone();
        spins.reverse();
        Self { spins }
    }

    /// The sequence with every spin flipped.
    #[must_use]
    pub fn negated(&self) -> Self {
        Self {
            spins: self.spins.iter().map(|&s| -s).collect(),
        }
    }

    /// LABS energy of this sequence.
    pub fn energy(&self) -> f64 {
        labs_energy(self)
    }
}

impl Neg for SpinSequence {
    type Output = SpinSequence;

    fn neg(mut self) -> Self::Output {
        for s in &mut self.spins {
            *s = -*s;
        }
        self
    }
}

impl TryFrom<Vec<i8>> for SpinSequence {
    type Error = LabsError;

    fn try_from(spins: Vec<i8>) -> LabsResult<Self> {
        Self::new(spins)
    }
}

impl From<SpinSequence> for Vec<i8> {
    fn from(seq: SpinSequence) -> Self {
        seq.spins
    }
}

impl fmt::Display for SpinSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &s in &self.spins {
            f.write_str(if s == 1 { "+" } else { "-" })?;
        }
        Ok(())
    }
}
