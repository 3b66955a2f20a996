//! Sampler trait and configuration.
//!
//! A [`Sampler`] is the collaborator that builds the Trotterized LABS kernel
//! from a [`KernelRequest`], runs it, and returns a measurement histogram:
//!
//! ```text
//!   KernelRequest ──→ validate() ──→ Sampler::sample() ──→ check result ──→ ExecutionResult
//!                     (execute)       (collaborator)        (execute)
//! ```
//!
//! ## Contract
//!
//! - `sample()` is synchronous and blocking; there is no job handle.
//! - On success the histogram sums to `request.shots` and every key is a
//!   length-`request.n` bitstring over `{0, 1}`.
//! - Any failure is returned as `Err` and surfaces unchanged to the caller.
//!   [`crate::execute`] neither retries nor salvages partial results.
//!
//! Callers go through [`crate::execute`] rather than calling `sample()`
//! directly, so both sides of the contract are checked.

use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{HalError, HalResult};
use crate::request::KernelRequest;
use crate::result::ExecutionResult;

/// Configuration for a sampler instance.
#[derive(Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Name of the sampler.
    pub name: String,
    /// Service endpoint, for samplers that forward to a remote runtime.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    /// Authentication token.
    #[serde(skip_serializing)]
    pub token: Option<String>,
    /// Sampler-specific settings.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl BackendConfig {
    /// Create a new sampler configuration.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            endpoint: None,
            token: None,
            extra: serde_json::Map::new(),
        }
    }

    /// Set the endpoint URL.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Set the authentication token.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Add extra configuration.
    pub fn with_extra(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }

    /// Decode a setting from `extra`.
    ///
    /// Returns `Ok(None)` when the key is absent and
    /// [`HalError::Serialization`] when the value has the wrong shape.
    pub fn extra_as<T: DeserializeOwned>(&self, key: &str) -> HalResult<Option<T>> {
        self.extra
            .get(key)
            .map(|value| T::deserialize(value).map_err(HalError::from))
            .transpose()
    }
}

impl fmt::Debug for BackendConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BackendConfig")
            .field("name", &self.name)
            .field("endpoint", &self.endpoint)
            .field("token", &"[REDACTED]")
            .field("extra", &self.extra)
            .finish()
    }
}

/// A collaborator that executes the Trotterized LABS kernel.
pub trait Sampler: Send + Sync {
    /// Name of this sampler.
    fn name(&self) -> &str;

    /// Largest sequence length this sampler accepts.
    fn max_qubits(&self) -> usize;

    /// Execute the kernel described by `request` and measure `request.shots` times.
    fn sample(&self, request: &KernelRequest) -> HalResult<ExecutionResult>;
}

/// Trait for creating samplers from configuration.
pub trait SamplerFactory: Sampler + Sized {
    /// Create a sampler from configuration.
    fn from_config(config: BackendConfig) -> HalResult<Self>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_config() {
        let config = BackendConfig::new("remote")
            .with_endpoint("http://localhost:8080")
            .with_token("secret-token")
            .with_extra("max_qubits", serde_json::json!(24));

        assert_eq!(config.name, "remote");
        assert_eq!(config.endpoint.as_deref(), Some("http://localhost:8080"));
        assert_eq!(config.extra_as::<u64>("max_qubits").unwrap(), Some(24));
        assert_eq!(config.extra_as::<u64>("missing").unwrap(), None);
    }

    #[test]
    fn test_extra_wrong_type() {
        let config = BackendConfig::new("remote").with_extra("seed", serde_json::json!("seven"));
        let err = config.extra_as::<u64>("seed").unwrap_err();
        assert!(matches!(err, HalError::Serialization(_)));
    }

    #[test]
    fn test_debug_redacts_token() {
        let config = BackendConfig::new("remote").with_token("secret-token");
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("secret-token"));
        assert!(rendered.contains("[REDACTED]"));
    }

    #[test]
    fn test_token_not_serialized() {
        let config = BackendConfig::new("remote").with_token("secret-token");
        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("secret-token"));
    }
}
