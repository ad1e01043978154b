use super::*;
use crate::core::descriptor::PackageDescriptor;
use crate::error::Result;
use crate::testing::{FakeSpawner, Harness};

#[test]
fn test_registry_has_all_builtin_backends() {
    let registry = BackendRegistry::new();
    assert_eq!(registry.kinds(), BackendKind::ALL.to_vec());
}

#[test]
fn test_create_all_shares_runner() {
    let h = Harness::live(FakeSpawner::with_binaries(&["pip3"]));
    let backends = BackendRegistry::new().create_all(&h.runner);

    assert_eq!(backends.len(), 4);
    assert!(backends[&BackendKind::Pip].probe());
    assert!(!backends[&BackendKind::Brew].probe());
    assert_eq!(
        h.spawner.lookups(),
        vec!["pip3".to_string(), "brew".to_string()]
    );
}

struct AlwaysThere(BackendKind);

impl PackageBackend for AlwaysThere {
    fn kind(&self) -> BackendKind {
        self.0
    }

    fn probe(&self) -> bool {
        true
    }

    fn is_installed(&self, _pkg: &PackageDescriptor) -> Result<bool> {
        Ok(true)
    }

    fn install_batch(&self, _pkgs: &[&PackageDescriptor]) -> Result<bool> {
        Ok(true)
    }
}

#[test]
fn test_register_replaces_factory() {
    let h = Harness::live(FakeSpawner::default());
    let mut registry = BackendRegistry::new();
    registry.register(
        BackendKind::Brew,
        Box::new(|_| Box::new(AlwaysThere(BackendKind::Brew))),
    );

    let brew = registry.create(BackendKind::Brew, &h.runner).unwrap();
    assert!(brew.probe());
    assert!(h.spawner.lookups().is_empty());
}
