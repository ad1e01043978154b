//! Input validation for names that end up in an argument vector
//!
//! Commands are never run through a shell, so the concern here is names
//! that would be read as options (`--force`) or that no package manager
//! accepts in the first place.

use crate::error::{IshError, Result};
use regex::Regex;
use std::sync::LazyLock;

/// Allows: alphanumeric, dash, underscore, dot, plus, at sign, slash (scoped
/// packages), colon (apt arch qualifiers) and square brackets (pip extras)
static SAFE_PACKAGE_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9@._+/:\[\]-]+$").expect("Invalid regex pattern"));

/// Binary names: no path separators, no whitespace
static SAFE_COMMAND_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9._+-]+$").expect("Invalid regex pattern"));

/// Validate a backend package name before it is appended to an install command
pub fn validate_package_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(IshError::ConfigError(
            "Package name cannot be empty".to_string(),
        ));
    }

    if name.len() > 256 {
        return Err(IshError::ConfigError(format!(
            "Package name too long (max 256 chars): {}...",
            name.chars().take(50).collect::<String>()
        )));
    }

    if name.starts_with('-') {
        return Err(IshError::ConfigError(format!(
            "Package name cannot start with '-': {}",
            name
        )));
    }

    if !SAFE_PACKAGE_NAME.is_match(name) {
        return Err(IshError::ConfigError(format!(
            "Package name contains invalid characters: {}",
            name
        )));
    }

    if name.contains("..") {
        return Err(IshError::ConfigError(format!(
            "Package name cannot contain path traversal: {}",
            name
        )));
    }

    Ok(())
}

/// Validate a `cmd` entry, which is looked up on PATH
pub fn validate_command_name(name: &str) -> Result<()> {
    if name.starts_with('-') || !SAFE_COMMAND_NAME.is_match(name) {
        return Err(IshError::ConfigError(format!(
            "Invalid command name: '{}'",
            name
        )));
    }
    Ok(())
}
