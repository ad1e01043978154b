//! # Backend Registry
//!
//! Maps each [`BackendKind`] to a factory producing its [`PackageBackend`].
//! The built-in apt/cargo/pip/brew backends are all [`GenericBackend`]s
//! configured by [`builtin_spec`]; anything registered later replaces the
//! factory for its kind (tests use this to plug in fakes).

use crate::core::types::BackendKind;
use crate::packages::generic::GenericBackend;
use crate::packages::spec::builtin_spec;
use crate::packages::traits::PackageBackend;
use crate::runner::CommandRunner;
use std::collections::BTreeMap;

/// Factory function for creating backend instances
pub type BackendFactory = Box<dyn Fn(&CommandRunner) -> Box<dyn PackageBackend> + Send + Sync>;

/// Backends keyed by kind, in `BackendKind` order
pub type BackendSet = BTreeMap<BackendKind, Box<dyn PackageBackend>>;

pub struct BackendRegistry {
    factories: BTreeMap<BackendKind, BackendFactory>,
}

impl BackendRegistry {
    /// Registry with the built-in backends
    pub fn new() -> Self {
        let mut registry = Self {
            factories: BTreeMap::new(),
        };
        registry.register_defaults();
        registry
    }

    fn register_defaults(&mut self) {
        for kind in BackendKind::ALL {
            self.register(
                kind,
                Box::new(move |runner| {
                    Box::new(GenericBackend::new(builtin_spec(kind), runner.clone()))
                }),
            );
        }
    }

    pub fn register(&mut self, kind: BackendKind, factory: BackendFactory) {
        self.factories.insert(kind, factory);
    }

    pub fn kinds(&self) -> Vec<BackendKind> {
        self.factories.keys().copied().collect()
    }

    pub fn create(&self, kind: BackendKind, runner: &CommandRunner) -> Option<Box<dyn PackageBackend>> {
        self.factories.get(&kind).map(|factory| factory(runner))
    }

    /// Instantiate every registered backend sharing one runner.
    pub fn create_all(&self, runner: &CommandRunner) -> BackendSet {
        self.factories
            .iter()
            .map(|(kind, factory)| (*kind, factory(runner)))
            .collect()
    }
}

impl Default for BackendRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests;
