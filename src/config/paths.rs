use crate::error::{IshError, Result};
use directories::{ProjectDirs, UserDirs};
use std::path::{Path, PathBuf};

/// File name looked up in the config directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "packages.toml";

pub fn expand_home(path: &Path) -> Result<PathBuf> {
    let path_str = path.to_string_lossy();

    if !path_str.starts_with('~') {
        return Ok(path.to_path_buf());
    }

    let user_dirs = UserDirs::new()
        .ok_or_else(|| IshError::Other("Could not determine user home directory".to_string()))?;
    let home = user_dirs.home_dir();

    if path_str == "~" {
        return Ok(home.to_path_buf());
    }

    let stripped = path_str
        .strip_prefix("~/")
        .ok_or_else(|| IshError::ConfigError(format!("Invalid path format: {}", path_str)))?;

    Ok(home.join(stripped))
}

pub fn config_dir() -> Result<PathBuf> {
    let proj = ProjectDirs::from("", "", "ishlib")
        .ok_or_else(|| IshError::Other("Could not determine config directory".to_string()))?;
    Ok(proj.config_dir().to_path_buf())
}

pub fn default_config_file() -> Result<PathBuf> {
    Ok(config_dir()?.join(DEFAULT_CONFIG_FILE))
}

/// Explicit path (with `~` expanded) or the default descriptor file.
pub fn resolve_config_path(explicit: Option<&Path>) -> Result<PathBuf> {
    match explicit {
        Some(path) => expand_home(path),
        None => default_config_file(),
    }
}
