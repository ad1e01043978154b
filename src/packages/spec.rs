use crate::core::types::BackendKind;
use crate::packages::detect::Detection;

/// Everything that distinguishes one backend from another.
///
/// Command templates are argument vectors. In `detect_cmd` the
/// `{package}` placeholder is replaced by the package name; `install_cmd`
/// gets the whole batch appended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendSpec {
    pub kind: BackendKind,

    /// Binary that must be on PATH for the backend to be usable
    pub binary: String,

    /// Query used by `is_installed`
    pub detect_cmd: Vec<String>,

    /// How to read the query's stdout
    pub detection: Detection,

    /// A failing query whose output contains this means "not installed"
    pub not_found_marker: Option<String>,

    /// Install prefix; package names are appended
    pub install_cmd: Vec<String>,

    /// Run installs through `run_privileged`
    pub needs_sudo: bool,
}

fn argv(parts: &[&str]) -> Vec<String> {
    parts.iter().map(|p| p.to_string()).collect()
}

/// Built-in configuration for each supported backend.
pub fn builtin_spec(kind: BackendKind) -> BackendSpec {
    match kind {
        BackendKind::Apt => BackendSpec {
            kind,
            binary: "apt".to_string(),
            detect_cmd: argv(&["dpkg", "-s", "{package}"]),
            detection: Detection::DpkgStatus,
            not_found_marker: Some("is not installed".to_string()),
            install_cmd: argv(&["apt", "install", "-y"]),
            needs_sudo: true,
        },
        BackendKind::Cargo => BackendSpec {
            kind,
            binary: "cargo".to_string(),
            detect_cmd: argv(&["cargo", "install", "--list"]),
            detection: Detection::CargoInstallList,
            not_found_marker: None,
            // --locked makes cargo use the versions in each crate's lockfile
            install_cmd: argv(&["cargo", "install", "--locked"]),
            needs_sudo: false,
        },
        BackendKind::Pip => BackendSpec {
            kind,
            binary: "pip3".to_string(),
            detect_cmd: argv(&["pip3", "list", "--format=json"]),
            detection: Detection::PipJsonList,
            not_found_marker: None,
            install_cmd: argv(&["pip3", "install", "--user"]),
            needs_sudo: false,
        },
        BackendKind::Brew => BackendSpec {
            kind,
            binary: "brew".to_string(),
            detect_cmd: argv(&["brew", "list", "--formula"]),
            detection: Detection::Listing,
            not_found_marker: None,
            install_cmd: argv(&["brew", "install"]),
            needs_sudo: false,
        },
    }
}
