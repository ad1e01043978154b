use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// Supported backends.
// To add a package manager, add a variant here and update:
// - BackendKind::ALL / as_str()
// - packages::spec::builtin_spec()
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    Apt,   // Debian/Ubuntu system packages (privileged)
    Cargo, // Rust crates
    Pip,   // Python packages (per-user)
    Brew,  // Homebrew formulae
}

impl BackendKind {
    pub const ALL: [BackendKind; 4] = [Self::Apt, Self::Cargo, Self::Pip, Self::Brew];

    /// Name used both for display and as the descriptor key.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Apt => "apt",
            Self::Cargo => "cargo",
            Self::Pip => "pip",
            Self::Brew => "brew",
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BackendKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "apt" => Ok(Self::Apt),
            "cargo" => Ok(Self::Cargo),
            "pip" => Ok(Self::Pip),
            "brew" => Ok(Self::Brew),
            other => Err(format!("unknown backend '{}'", other)),
        }
    }
}
