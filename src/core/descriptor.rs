use crate::core::types::BackendKind;
use crate::error::{IshError, Result};
use crate::utils::sanitize;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Declarative description of one wanted package.
///
/// `name` is the display identifier; when loaded from a file it is filled
/// in from the mapping key. Unknown keys in the source are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageDescriptor {
    #[serde(default)]
    pub name: String,

    /// Binary whose presence on PATH alone proves installation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cmd: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apt: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cargo: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pip: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brew: Option<String>,

    /// Preferred backends, most preferred first
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub pref: Vec<String>,
}

impl PackageDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_cmd(mut self, cmd: impl Into<String>) -> Self {
        self.cmd = Some(cmd.into());
        self
    }

    pub fn with_package(mut self, kind: BackendKind, package: impl Into<String>) -> Self {
        let package = Some(package.into());
        match kind {
            BackendKind::Apt => self.apt = package,
            BackendKind::Cargo => self.cargo = package,
            BackendKind::Pip => self.pip = package,
            BackendKind::Brew => self.brew = package,
        }
        self
    }

    pub fn with_pref<I, S>(mut self, pref: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.pref = pref.into_iter().map(Into::into).collect();
        self
    }

    /// Package name this descriptor declares for `kind`, if any.
    pub fn package_for(&self, kind: BackendKind) -> Option<&str> {
        match kind {
            BackendKind::Apt => self.apt.as_deref(),
            BackendKind::Cargo => self.cargo.as_deref(),
            BackendKind::Pip => self.pip.as_deref(),
            BackendKind::Brew => self.brew.as_deref(),
        }
    }

    /// Backends this descriptor declares a package key for.
    pub fn declared_backends(&self) -> Vec<BackendKind> {
        BackendKind::ALL
            .into_iter()
            .filter(|kind| self.package_for(*kind).is_some())
            .collect()
    }

    /// Runtime check independent of any installer: the descriptor must be
    /// satisfiable and every name must be usable in an argument vector.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(IshError::ConfigError(
                "Package descriptor has an empty name".to_string(),
            ));
        }

        if self.cmd.is_none() && self.declared_backends().is_empty() {
            return Err(IshError::Unsatisfiable {
                package: self.name.clone(),
            });
        }

        if let Some(cmd) = &self.cmd {
            sanitize::validate_command_name(cmd).map_err(|e| self.context(e))?;
        }

        for kind in self.declared_backends() {
            if let Some(package) = self.package_for(kind) {
                sanitize::validate_package_name(package).map_err(|e| self.context(e))?;
            }
        }

        Ok(())
    }

    /// Parse `pref` into backend kinds. Unknown names are configuration errors.
    pub fn preferred_backends(&self) -> Result<Vec<BackendKind>> {
        self.pref
            .iter()
            .map(|name| {
                name.parse::<BackendKind>()
                    .map_err(|_| IshError::UnknownBackend {
                        package: self.name.clone(),
                        backend: name.clone(),
                    })
            })
            .collect()
    }

    fn context(&self, err: IshError) -> IshError {
        match err {
            IshError::ConfigError(msg) => {
                IshError::ConfigError(format!("package '{}': {}", self.name, msg))
            }
            other => other,
        }
    }
}

impl fmt::Display for PackageDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests;
