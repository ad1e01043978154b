use super::*;

#[test]
fn test_package_for_each_backend() {
    let desc = PackageDescriptor::new("ripgrep")
        .with_package(BackendKind::Apt, "ripgrep")
        .with_package(BackendKind::Cargo, "ripgrep")
        .with_package(BackendKind::Brew, "rg-formula");

    assert_eq!(desc.package_for(BackendKind::Apt), Some("ripgrep"));
    assert_eq!(desc.package_for(BackendKind::Brew), Some("rg-formula"));
    assert_eq!(desc.package_for(BackendKind::Pip), None);
    assert_eq!(
        desc.declared_backends(),
        vec![BackendKind::Apt, BackendKind::Cargo, BackendKind::Brew]
    );
}

#[test]
fn test_cmd_only_descriptor_is_valid() {
    let desc = PackageDescriptor::new("fakepkg").with_cmd("fakecmd");
    assert!(desc.validate().is_ok());
}

#[test]
fn test_descriptor_without_cmd_or_backend_is_unsatisfiable() {
    let desc = PackageDescriptor::new("nothing");
    match desc.validate() {
        Err(IshError::Unsatisfiable { package }) => assert_eq!(package, "nothing"),
        other => panic!("expected Unsatisfiable, got {:?}", other),
    }
}

#[test]
fn test_pref_alone_does_not_satisfy() {
    let desc = PackageDescriptor::new("prefs-only").with_pref(["apt"]);
    assert!(matches!(
        desc.validate(),
        Err(IshError::Unsatisfiable { .. })
    ));
}

#[test]
fn test_invalid_package_name_mentions_descriptor() {
    let desc = PackageDescriptor::new("evil").with_package(BackendKind::Apt, "--allow-downgrades");
    let err = desc.validate().unwrap_err();
    assert!(err.to_string().contains("package 'evil'"), "{}", err);
}

#[test]
fn test_preferred_backends_parse_in_order() {
    let desc = PackageDescriptor::new("fd").with_pref(["cargo", "apt"]);
    assert_eq!(
        desc.preferred_backends().unwrap(),
        vec![BackendKind::Cargo, BackendKind::Apt]
    );
}

#[test]
fn test_unknown_preference_is_reported_with_package() {
    let desc = PackageDescriptor::new("fd").with_pref(["cargo", "nix"]);
    match desc.preferred_backends() {
        Err(IshError::UnknownBackend { package, backend }) => {
            assert_eq!(package, "fd");
            assert_eq!(backend, "nix");
        }
        other => panic!("expected UnknownBackend, got {:?}", other),
    }
}

#[test]
fn test_deserialize_ignores_unknown_keys() {
    let json = r#"{"name": "bat", "cargo": "bat", "comment": "syntax highlighting cat"}"#;
    let desc: PackageDescriptor = serde_json::from_str(json).unwrap();
    assert_eq!(desc.cargo.as_deref(), Some("bat"));
    assert!(desc.pref.is_empty());
}
