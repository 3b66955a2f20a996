//! Interaction index sets for Trotterized LABS kernels.
//!
//! Expanding `E(S) = Σ_k C_k²` leaves two kinds of spin products:
//!
//! - **G2** pairs `(i, i+k)`, one per base index `i` and lag `k` with
//!   `i + 2k ≤ N-1`
//! - **G4** quadruples `(i, i+k, j, j+k)` with `j > i+k`, i.e. every 4-body
//!   monomial `S[a]S[b]S[c]S[d]` with `a<b<c<d` and `a+d = b+c`, once each
//!
//! Both sets come from a single traversal over `(i, k)`:
//!
//! ```text
//! for i in 0..=N-3:
//!     for k in 1..=⌊(N-1-i)/2⌋:
//!         G2 += (i, i+k)
//!         for j in i+k+1..=N-1-k:
//!             G4 += (i, i+k, j, j+k)
//! ```
//!
//! The output order is fixed (ascending `i`, then `k`, then `j`). The kernel
//! built from these tuples must be reproducible across runs.
//!
//! # Example
//!
//! ```rust
//! use labs_core::interactions::get_interactions;
//!
//! let g = get_interactions(5);
//! assert_eq!(g.pairs(), &[[0, 1], [0, 2], [1, 2], [2, 3]]);
//! assert_eq!(g.quads(), &[[0, 1, 2, 3], [0, 1, 3, 4], [1, 2, 3, 4]]);
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Pairwise interaction index.
pub type Pair = [usize; 2];

/// Quartic interaction index.
pub type Quad = [usize; 4];

/// The G2 and G4 interaction sets for one sequence length.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interactions {
    n: usize,
    pairs: Vec<Pair>,
    quads: Vec<Quad>,
}

impl Interactions {
    /// Sequence length these sets were generated for.
    pub fn n(&self) -> usize {
        self.n
    }

    /// The G2 pairs, in generation order.
    pub fn pairs(&self) -> &[Pair] {
        &self.pairs
    }

    /// The G4 quadruples, in generation order.
    pub fn quads(&self) -> &[Quad] {
        &self.quads
    }

    /// Number of pairs.
    pub fn n_pairs(&self) -> usize {
        self.pairs.len()
    }

    /// Number of quadruples.
    pub fn n_quads(&self) -> usize {
        self.quads.len()
    }

    /// True when neither set has any terms (N < 3).
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty() && self.quads.is_empty()
    }

    /// Highest spin index referenced by any term.
    pub fn max_index(&self) -> Option<usize> {
        let p = self.pairs.iter().flat_map(|t| t.iter().copied());
        let q = self.quads.iter().flat_map(|t| t.iter().copied());
        p.chain(q).max()
    }

    /// Split into `(G2, G4)`.
    pub fn into_parts(self) -> (Vec<Pair>, Vec<Quad>) {
        (self.pairs, self.quads)
    }
}

/// Generate the G2 and G4 interaction sets for sequence length `n`.
///
/// Lengths below 3 produce empty sets.
pub fn get_interactions(n: usize) -> Interactions {
    let mut pairs = Vec::new();
    let mut quads = Vec::new();

    for i in 0..n.saturating_sub(2) {
        for k in 1..=(n - 1 - i) / 2 {
            pairs.push([i, i + k]);
            for j in (i + k + 1)..(n - k) {
                quads.push([i, i + k, j, j + k]);
            }
        }
    }

    debug!(
        n,
        n_pairs = pairs.len(),
        n_quads = quads.len(),
        "generated LABS interaction sets"
    );

    Interactions { n, pairs, quads }
}
