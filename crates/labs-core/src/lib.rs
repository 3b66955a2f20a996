//! `labs-core`: classical pieces of a Trotterized LABS optimization kernel.
//!
//! The Low Autocorrelation Binary Sequence problem asks for a ±1 sequence
//! whose aperiodic autocorrelation sidelobes are as small as possible. This
//! crate provides:
//!
//! - **Energy evaluation**: `E(S) = Σ_k C_k(S)²`, plus autocorrelations and
//!   merit factor
//! - **Interaction sets**: the G2/G4 index tuples a Trotterized circuit uses
//!   to implement the 2- and 4-body terms of the problem Hamiltonian
//! - **Cost Hamiltonian**: the same energy written as weighted Z-strings
//! - **Search**: exhaustive ground states for small N and scoring of sampled
//!   bitstrings
//!
//! # Quick start
//!
//! ```rust
//! use labs_core::{SpinSequence, get_interactions, labs_energy};
//!
//! let s = SpinSequence::new(vec![1, 1, 1, -1]).unwrap();
//! assert_eq!(labs_energy(&s), 2.0);
//! assert_eq!(labs_energy(&s.reversed()), labs_energy(&s));
//!
//! let g = get_interactions(5);
//! assert_eq!(g.n_pairs(), 4);
//! ```

pub mod energy;
pub mod error;
pub mod hamiltonian;
pub mod interactions;
pub mod search;
pub mod spin;

pub use energy::{autocorrelations, labs_energy, labs_energy_raw, merit_factor};
pub use error::{LabsError, LabsResult};
pub use hamiltonian::{Hamiltonian, HamiltonianTerm, ZString, labs_hamiltonian};
pub use interactions::{Interactions, Pair, Quad, get_interactions};
pub use search::{GroundState, MAX_EXHAUSTIVE_N, ScoredSample, best_sample, ground_state};
pub use spin::SpinSequence;
