use crate::core::descriptor::PackageDescriptor;
use crate::core::types::BackendKind;
use crate::error::IshError;
use std::collections::BTreeMap;

/// Routing decision for a set of descriptors, before anything is installed.
#[derive(Debug, Default)]
pub struct InstallPlan<'a> {
    /// Already installed (or `cmd` found on PATH)
    pub satisfied: Vec<&'a PackageDescriptor>,
    /// No registered backend can handle these
    pub unroutable: Vec<&'a PackageDescriptor>,
    /// Detection query failed hard
    pub errors: Vec<(&'a PackageDescriptor, IshError)>,
    /// Install batches in the order they will run
    pub groups: Vec<(BackendKind, Vec<&'a PackageDescriptor>)>,
}

impl InstallPlan<'_> {
    pub fn pending(&self) -> usize {
        self.groups.iter().map(|(_, pkgs)| pkgs.len()).sum()
    }

    /// Backend chosen for `name`, if it is scheduled for installation.
    pub fn route_of(&self, name: &str) -> Option<BackendKind> {
        self.groups
            .iter()
            .find(|(_, pkgs)| pkgs.iter().any(|p| p.name == name))
            .map(|(kind, _)| *kind)
    }
}

/// Outcome of `Installer::install_pkgs`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct InstallReport {
    pub satisfied: Vec<String>,
    pub unroutable: Vec<String>,
    /// Packages whose detection query failed
    pub errors: Vec<String>,
    /// Packages per backend whose batch exited zero
    pub installed: BTreeMap<BackendKind, Vec<String>>,
    /// Packages per backend whose batch failed
    pub failed: BTreeMap<BackendKind, Vec<String>>,
}

impl InstallReport {
    /// Every attempted batch succeeded.
    pub fn batches_ok(&self) -> bool {
        self.failed.is_empty()
    }

    /// Every descriptor ended up satisfied or installed.
    pub fn success(&self) -> bool {
        self.batches_ok() && self.unroutable.is_empty() && self.errors.is_empty()
    }

    pub fn installed_count(&self) -> usize {
        self.installed.values().map(Vec::len).sum()
    }

    pub fn failed_count(&self) -> usize {
        self.failed.values().map(Vec::len).sum()
    }
}

pub(crate) fn names(pkgs: &[&PackageDescriptor]) -> Vec<String> {
    pkgs.iter().map(|p| p.name.clone()).collect()
}
