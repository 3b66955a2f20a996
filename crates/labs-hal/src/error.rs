//! Error types for the HAL crate.

use thiserror::Error;

use labs_core::LabsError;

/// Errors that can occur at the sampler boundary.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum HalError {
    /// The kernel request is malformed.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Request needs more qubits than the sampler offers.
    #[error("Circuit exceeds sampler capabilities: {0}")]
    CircuitTooLarge(String),

    /// Invalid number of shots.
    #[error("Invalid shots: {0}")]
    InvalidShots(String),

    /// The sampler failed to execute the kernel.
    #[error("Execution failed: {0}")]
    Execution(String),

    /// The sampler returned a histogram that breaks the boundary contract.
    #[error("Malformed result: {0}")]
    MalformedResult(String),

    /// No sampler registered under the requested name.
    #[error("Sampler not found: {0}")]
    SamplerNotFound(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Outcome could not be interpreted as a spin sequence.
    #[error("Outcome error: {0}")]
    Outcome(#[from] LabsError),
}

/// Result type for HAL operations.
pub type HalResult<T> = Result<T, HalError>;
