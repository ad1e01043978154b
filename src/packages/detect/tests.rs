use super::*;

const DPKG_INSTALLED: &str = "\
Package: ripgrep
Status: install ok installed
Priority: optional
Version: 13.0.0-4
";

const DPKG_REMOVED: &str = "\
Package: ripgrep
Status: deinstall ok config-files
";

const CARGO_LIST: &str = "\
bat v0.24.0:
    bat
cargo-update v16.0.0:
    cargo-install-update
    cargo-install-update-config
fd-find v10.2.0 (/home/me/src/fd):
    fd
";

#[test]
fn test_dpkg_status_line() {
    assert!(reports_installed(Detection::DpkgStatus, DPKG_INSTALLED, "ripgrep").unwrap());
    assert!(!reports_installed(Detection::DpkgStatus, DPKG_REMOVED, "ripgrep").unwrap());
}

#[test]
fn test_cargo_list_matches_crate_not_binary() {
    assert!(reports_installed(Detection::CargoInstallList, CARGO_LIST, "cargo-update").unwrap());
    assert!(reports_installed(Detection::CargoInstallList, CARGO_LIST, "fd-find").unwrap());
    // binaries are indented and must not count as crates
    assert!(
        !reports_installed(Detection::CargoInstallList, CARGO_LIST, "cargo-install-update").unwrap()
    );
    // no substring matches
    assert!(!reports_installed(Detection::CargoInstallList, CARGO_LIST, "ba").unwrap());
}

#[test]
fn test_pip_json_normalizes_names() {
    let stdout = r#"[{"name": "Requests", "version": "2.31.0"}, {"name": "ruamel.yaml", "version": "0.18"}]"#;

    assert!(reports_installed(Detection::PipJsonList, stdout, "requests").unwrap());
    assert!(reports_installed(Detection::PipJsonList, stdout, "requests[socks]").unwrap());
    assert!(reports_installed(Detection::PipJsonList, stdout, "ruamel-yaml").unwrap());
    assert!(!reports_installed(Detection::PipJsonList, stdout, "httpx").unwrap());
}

#[test]
fn test_pip_empty_output_is_not_installed() {
    assert!(!reports_installed(Detection::PipJsonList, "", "requests").unwrap());
}

#[test]
fn test_pip_garbage_output_is_an_error() {
    assert!(reports_installed(Detection::PipJsonList, "Package Version\n---", "x").is_err());
}

#[test]
fn test_listing_matches_whole_names_and_taps() {
    let stdout = "git\tjq\ngh-dash\n";
    assert!(reports_installed(Detection::Listing, stdout, "jq").unwrap());
    assert!(reports_installed(Detection::Listing, stdout, "homebrew/core/jq").unwrap());
    assert!(reports_installed(Detection::Listing, stdout, "user/tap/gh-dash").unwrap());
    assert!(!reports_installed(Detection::Listing, stdout, "user/tap/wget").unwrap());
    assert!(!reports_installed(Detection::Listing, stdout, "gi").unwrap());
}
