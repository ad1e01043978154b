use crate::core::descriptor::PackageDescriptor;
use crate::error::{IshError, Result};
use std::collections::BTreeMap;
use std::path::Path;

/// Descriptor file syntax, chosen by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Json,
    Yaml,
}

impl ConfigFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        match ext.as_deref() {
            Some("toml") => Ok(Self::Toml),
            Some("json") => Ok(Self::Json),
            Some("yaml") | Some("yml") => Ok(Self::Yaml),
            _ => Err(IshError::ConfigError(format!(
                "Unsupported descriptor file '{}' (expected .toml, .json, .yaml or .yml)",
                path.display()
            ))),
        }
    }
}

/// Load every descriptor from a file.
///
/// The file is a flat mapping keyed by package name; each key becomes the
/// descriptor's `name`. Descriptors come back sorted by name.
pub fn load_descriptors(path: &Path) -> Result<Vec<PackageDescriptor>> {
    let format = ConfigFormat::from_path(path)?;
    let content = std::fs::read_to_string(path).map_err(|e| IshError::IoError {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse_descriptors(&content, format, &path.display().to_string())
}

/// Parse descriptors from text; `origin` names the source in errors.
pub fn parse_descriptors(
    content: &str,
    format: ConfigFormat,
    origin: &str,
) -> Result<Vec<PackageDescriptor>> {
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }

    let parse_error = |message: String| IshError::ParseError {
        file: origin.to_string(),
        message,
    };

    let raw: BTreeMap<String, PackageDescriptor> = match format {
        ConfigFormat::Toml => toml::from_str(content).map_err(|e| parse_error(e.to_string()))?,
        ConfigFormat::Json => {
            serde_json::from_str(content).map_err(|e| parse_error(e.to_string()))?
        }
        ConfigFormat::Yaml => {
            serde_yml::from_str(content).map_err(|e| parse_error(e.to_string()))?
        }
    };

    Ok(raw
        .into_iter()
        .map(|(key, mut desc)| {
            desc.name = key;
            desc
        })
        .collect())
}

/// Keep only the named descriptors; unknown names are configuration errors.
pub fn select(descs: Vec<PackageDescriptor>, only: &[String]) -> Result<Vec<PackageDescriptor>> {
    if only.is_empty() {
        return Ok(descs);
    }

    if let Some(missing) = only.iter().find(|name| !descs.iter().any(|d| &d.name == *name)) {
        return Err(IshError::ConfigError(format!(
            "Package '{}' is not declared in the descriptor file",
            missing
        )));
    }

    Ok(descs
        .into_iter()
        .filter(|d| only.contains(&d.name))
        .collect())
}
