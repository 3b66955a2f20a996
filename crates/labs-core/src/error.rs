//! Error types for the core crate.

use thiserror::Error;

/// Errors produced while building or scoring LABS sequences.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum LabsError {
    /// A spin sequence must contain at least one spin.
    #[error("spin sequence is empty")]
    EmptySequence,

    /// A spin outside {-1, +1}.
    #[error("spin at index {index} is {value}, expected -1 or +1")]
    InvalidSpin {
        /// Position of the offending spin.
        index: usize,
        /// The value found there.
        value: i64,
    },

    /// A bitstring character outside {'0', '1'}.
    #[error("bitstring character at index {index} is {ch:?}, expected '0' or '1'")]
    InvalidBit {
        /// Position of the offending character.
        index: usize,
        /// The character found there.
        ch: char,
    },

    /// A sequence too short for the operator it is evaluated against.
    #[error("operator acts on {required} qubits but the sequence has {len} spins")]
    SequenceTooShort {
        /// Qubits the operator needs.
        required: usize,
        /// Length of the sequence supplied.
        len: usize,
    },

    /// Exhaustive search requested for a length it cannot enumerate.
    #[error("exhaustive search supports N <= {max}, got N = {n}")]
    TooLargeForSearch {
        /// Requested sequence length.
        n: usize,
        /// Largest supported length.
        max: usize,
    },
}

/// Result type for core LABS operations.
pub type LabsResult<T> = Result<T, LabsError>;
