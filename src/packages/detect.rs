//! Readers for detection query output

use crate::error::{IshError, Result};
use serde::Deserialize;

/// Output format of a backend's detection query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Detection {
    /// `dpkg -s <pkg>`: look for the installed status line
    DpkgStatus,
    /// `cargo install --list`: unindented `name vX.Y.Z:` lines
    CargoInstallList,
    /// `pip list --format=json`: array of `{name, version}`
    PipJsonList,
    /// One or more short names per line, whitespace separated. A tapped
    /// `owner/tap/name` package matches its short name.
    Listing,
}

#[derive(Debug, Deserialize)]
struct PipEntry {
    name: String,
}

/// Whether `stdout` of a successful query reports `package` as installed.
pub fn reports_installed(detection: Detection, stdout: &str, package: &str) -> Result<bool> {
    let found = match detection {
        Detection::DpkgStatus => stdout
            .lines()
            .any(|line| line.trim() == "Status: install ok installed"),
        Detection::CargoInstallList => stdout
            .lines()
            .filter(|line| !line.starts_with(char::is_whitespace))
            .filter_map(|line| line.split_whitespace().next())
            .any(|name| name == package),
        Detection::PipJsonList => {
            if stdout.trim().is_empty() {
                return Ok(false);
            }
            let entries: Vec<PipEntry> = serde_json::from_str(stdout)
                .map_err(|e| IshError::Other(format!("Unreadable pip package list: {}", e)))?;
            let wanted = normalize_python_name(package);
            entries
                .iter()
                .any(|entry| normalize_python_name(&entry.name) == wanted)
        }
        Detection::Listing => stdout
            .split_whitespace()
            .any(|name| name == package || Some(name) == package.rsplit('/').next()),
    };

    Ok(found)
}

/// PEP 503 normalization; extras (`name[extra]`) are dropped.
fn normalize_python_name(name: &str) -> String {
    let base = name.split('[').next().unwrap_or(name);
    let mut out = String::with_capacity(base.len());
    let mut last_sep = false;
    for ch in base.trim().chars() {
        if matches!(ch, '-' | '_' | '.') {
            if !last_sep {
                out.push('-');
            }
            last_sep = true;
        } else {
            out.extend(ch.to_lowercase());
            last_sep = false;
        }
    }
    out
}

#[cfg(test)]
mod tests;
