//! LABS cost Hamiltonian.
//!
//! The LABS energy is diagonal in the computational basis, so it is a sum of
//! weighted Z-strings:
//!
//!   H = Σ_k  c_k · Z_{q₁} Z_{q₂} ⋯
//!
//! Expanding `Σ_k C_k²` gives
//!
//!   H = N(N-1)/2 · I
//!     + 2 · Σ_{(i, i+k) ∈ G2} Z_i Z_{i+2k}
//!     + 4 · Σ_{(a, b, c, d) ∈ G4} Z_a Z_b Z_c Z_d
//!
//! so evaluating `H` on a spin configuration reproduces [`labs_energy`]
//! exactly.
//!
//! [`labs_energy`]: crate::energy::labs_energy
//!
//! # Example
//!
//! ```rust
//! use labs_core::hamiltonian::labs_hamiltonian;
//! use labs_core::SpinSequence;
//!
//! let h = labs_hamiltonian(5);
//! let s = SpinSequence::new(vec![1, 1, 1, -1, 1]).unwrap();
//! assert_eq!(h.evaluate(&s).unwrap(), s.energy());
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{LabsError, LabsResult};
use crate::interactions::{Interactions, get_interactions};
use crate::spin::SpinSequence;

/// A tensor product of Pauli-Z operators on the listed qubits.
///
/// Qubits not listed are implicitly I. An empty string is the identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ZString {
    /// Qubits carrying Z, sorted ascending.
    qubits: Vec<usize>,
}

impl ZString {
    /// Construct a Z⊗Z⊗...⊗Z string spanning the given qubits.
    ///
    /// Z² = I, so a qubit listed twice drops out.
    pub fn from_qubits(qubits: impl IntoIterator<Item = usize>) -> Self {
        let mut v: Vec<usize> = qubits.into_iter().collect();
        v.sort_unstable();
        let mut out = Vec::with_capacity(v.len());
        let mut iter = v.into_iter().peekable();
        while let Some(q) = iter.next() {
            if iter.peek() == Some(&q) {
                iter.next();
            } else {
                out.push(q);
            }
        }
        Self { qubits: out }
    }

    /// The identity string.
    pub fn identity() -> Self {
        Self { qubits: Vec::new() }
    }

    /// Qubits carrying Z, sorted by index.
    pub fn qubits(&self) -> &[usize] {
        &self.qubits
    }

    /// True if no qubit carries Z (pure constant).
    pub fn is_identity(&self) -> bool {
        self.qubits.is_empty()
    }

    /// The highest qubit index referenced, or `None` for the identity.
    pub fn max_qubit(&self) -> Option<usize> {
        self.qubits.last().copied()
    }

    /// Eigenvalue of this string on a computational-basis state given as spins.
    ///
    /// Fails if the string reaches past the end of `spins`.
    pub fn eigenvalue(&self, spins: &SpinSequence) -> LabsResult<i64> {
        let s = spins.spins();
        if let Some(q) = self.max_qubit().filter(|&q| q >= s.len()) {
            return Err(LabsError::SequenceTooShort {
                required: q + 1,
                len: s.len(),
            });
        }
        Ok(self.qubits.iter().map(|&q| i64::from(s[q])).product())
    }
}

/// A single weighted term: `coeff · zstring`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HamiltonianTerm {
    /// Real coefficient.
    pub coeff: f64,
    /// The Z-string.
    pub zstring: ZString,
}

impl HamiltonianTerm {
    /// Create a new term.
    pub fn new(coeff: f64, zstring: ZString) -> Self {
        Self { coeff, zstring }
    }

    /// Shorthand: constant term.
    pub fn constant(coeff: f64) -> Self {
        Self::new(coeff, ZString::identity())
    }

    /// Shorthand: ZZ coupling.
    pub fn zz(q0: usize, q1: usize, coeff: f64) -> Self {
        Self::new(coeff, ZString::from_qubits([q0, q1]))
    }

    /// Shorthand: ZZZZ coupling.
    pub fn zzzz(q: [usize; 4], coeff: f64) -> Self {
        Self::new(coeff, ZString::from_qubits(q))
    }
}

/// A diagonal sum-of-Z-strings Hamiltonian.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hamiltonian {
    terms: Vec<HamiltonianTerm>,
}

impl Hamiltonian {
    /// Create from a list of terms.
    pub fn from_terms(terms: Vec<HamiltonianTerm>) -> Self {
        Self { terms }
    }

    /// Build the LABS cost Hamiltonian from pre-generated interaction sets.
    pub fn from_interactions(interactions: &Interactions) -> Self {
        let n = interactions.n();
        let mut terms =
            Vec::with_capacity(1 + interactions.n_pairs() + interactions.n_quads());

        let constant = n * n.saturating_sub(1) / 2;
        if constant > 0 {
            terms.push(HamiltonianTerm::constant(constant as f64));
        }
        for &[i, ik] in interactions.pairs() {
            let k = ik - i;
            terms.push(HamiltonianTerm::zz(i, i + 2 * k, 2.0));
        }
        for &quad in interactions.quads() {
            terms.push(HamiltonianTerm::zzzz(quad, 4.0));
        }

        Self { terms }
    }

    /// All terms.
    pub fn terms(&self) -> &[HamiltonianTerm] {
        &self.terms
    }

    /// Number of terms.
    pub fn n_terms(&self) -> usize {
        self.terms.len()
    }

    /// Σ |c_k|, an upper bound on the spectral norm.
    pub fn lambda(&self) -> f64 {
        self.terms.iter().map(|t| t.coeff.abs()).sum()
    }

    /// The minimum number of qubits required to represent this Hamiltonian.
    ///
    /// Returns 0 if the Hamiltonian is empty or purely constant.
    pub fn min_qubits(&self) -> usize {
        self.terms
            .iter()
            .filter_map(|t| t.zstring.max_qubit())
            .max()
            .map_or(0, |q| q + 1)
    }

    /// Diagonal matrix element `⟨s|H|s⟩` for the basis state encoded by `spins`.
    ///
    /// `spins` must cover every qubit the Hamiltonian acts on.
    pub fn evaluate(&self, spins: &SpinSequence) -> LabsResult<f64> {
        let required = self.min_qubits();
        if spins.len() < required {
            return Err(LabsError::SequenceTooShort {
                required,
                len: spins.len(),
            });
        }
        let mut total = 0.0;
        for term in &self.terms {
            total += term.coeff * term.zstring.eigenvalue(spins)? as f64;
        }
        Ok(total)
    }
}

impl FromIterator<HamiltonianTerm> for Hamiltonian {
    fn from_iter<T: IntoIterator<Item = HamiltonianTerm>>(iter: T) -> Self {
        Self {
            terms: iter.into_iter().collect(),
        }
    }
}

/// The LABS cost Hamiltonian for sequence length `n`.
pub fn labs_hamiltonian(n: usize) -> Hamiltonian {
    Hamiltonian::from_interactions(&get_interactions(n))
}
