//! Sampler registry.
//!
//! [`SamplerRegistry`] maps names to constructors so a caller can pick a
//! sampler from configuration instead of naming a concrete type.

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::backend::{BackendConfig, Sampler, SamplerFactory};
use crate::error::{HalError, HalResult};

type Constructor = Box<dyn Fn(BackendConfig) -> HalResult<Box<dyn Sampler>> + Send + Sync>;

/// Named sampler constructors.
pub struct SamplerRegistry {
    constructors: FxHashMap<String, Constructor>,
}

impl SamplerRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            constructors: FxHashMap::default(),
        }
    }

    /// Register a sampler type under `name`.
    pub fn register<S>(&mut self, name: impl Into<String>)
    where
        S: SamplerFactory + 'static,
    {
        let name = name.into();
        debug!(sampler = %name, "registering sampler");
        self.constructors.insert(
            name,
            Box::new(|config: BackendConfig| -> HalResult<Box<dyn Sampler>> {
                let sampler: Box<dyn Sampler> = Box::new(S::from_config(config)?);
                Ok(sampler)
            }),
        );
    }

    /// Register a sampler with a custom constructor.
    pub fn register_factory(
        &mut self,
        name: impl Into<String>,
        factory: impl Fn(BackendConfig) -> HalResult<Box<dyn Sampler>> + Send + Sync + 'static,
    ) {
        let name = name.into();
        debug!(sampler = %name, "registering sampler factory");
        self.constructors.insert(name, Box::new(factory));
    }

    /// Create the sampler registered under `config.name`.
    pub fn create(&self, config: BackendConfig) -> HalResult<Box<dyn Sampler>> {
        match self.constructors.get(&config.name) {
            Some(constructor) => constructor(config),
            None => Err(HalError::SamplerNotFound(format!(
                "no sampler registered with name '{}'",
                config.name
            ))),
        }
    }

    /// All registered names, sorted.
    pub fn available(&self) -> Vec<String> {
        let mut names: Vec<_> = self.constructors.keys().cloned().collect();
        names.sort();
        names
    }

    /// Check if a sampler is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.constructors.contains_key(name)
    }
}

impl Default for SamplerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_registry() {
        let registry = SamplerRegistry::new();
        assert!(registry.available().is_empty());
        assert!(!registry.contains("cpu"));
    }

    #[test]
    fn test_create_unknown_sampler() {
        let registry = SamplerRegistry::new();
        let result = registry.create(BackendConfig::new("nonexistent"));
        assert!(matches!(result, Err(HalError::SamplerNotFound(_))));
    }

    #[test]
    fn test_available_sorted() {
        let mut registry = SamplerRegistry::new();
        registry.register_factory("zebra", |_| Err(HalError::Configuration("test".into())));
        registry.register_factory("alpha", |_| Err(HalError::Configuration("test".into())));
        assert_eq!(registry.available(), vec!["alpha", "zebra"]);
        assert!(registry.contains("alpha"));
    }

    #[test]
    fn test_factory_error_propagates() {
        let mut registry = SamplerRegistry::new();
        registry.register_factory("broken", |_| {
            Err(HalError::Configuration("missing endpoint".into()))
        });
        let result = registry.create(BackendConfig::new("broken"));
        assert!(matches!(result, Err(HalError::Configuration(_))));
    }
}
