//! Backend selection
//!
//! Routing is a pure decision over "can backend X handle this package";
//! the installer supplies that predicate from its live backends.

use crate::core::types::BackendKind;
use crate::error::{IshError, Result};
use std::fmt;
use std::str::FromStr;

/// Global fallback order for descriptors without a usable `pref`.
///
/// Backends missing from the list are only reachable through `pref`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendPriority {
    order: Vec<BackendKind>,
}

impl BackendPriority {
    /// Duplicates are dropped, first occurrence wins.
    pub fn new(order: impl IntoIterator<Item = BackendKind>) -> Self {
        let mut deduped = Vec::new();
        for kind in order {
            if !deduped.contains(&kind) {
                deduped.push(kind);
            }
        }
        Self { order: deduped }
    }

    pub fn iter(&self) -> impl Iterator<Item = BackendKind> + '_ {
        self.order.iter().copied()
    }

    pub fn contains(&self, kind: BackendKind) -> bool {
        self.order.contains(&kind)
    }

    /// Rank of `kind`, or `None` when it has no default priority.
    pub fn rank(&self, kind: BackendKind) -> Option<usize> {
        self.order.iter().position(|k| *k == kind)
    }
}

impl Default for BackendPriority {
    fn default() -> Self {
        Self::new([BackendKind::Apt, BackendKind::Cargo, BackendKind::Pip])
    }
}

impl FromStr for BackendPriority {
    type Err = IshError;

    /// Comma separated list, e.g. `apt,cargo,pip,brew`
    fn from_str(s: &str) -> Result<Self> {
        let kinds = s
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(|part| {
                part.parse::<BackendKind>()
                    .map_err(|e| IshError::ConfigError(format!("Invalid priority list: {}", e)))
            })
            .collect::<Result<Vec<_>>>()?;

        if kinds.is_empty() {
            return Err(IshError::ConfigError(
                "Priority list must name at least one backend".to_string(),
            ));
        }

        Ok(Self::new(kinds))
    }
}

impl fmt::Display for BackendPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.order.iter().map(|k| k.as_str()).collect();
        f.write_str(&names.join(","))
    }
}

/// Choose the backend for one package.
///
/// The first preferred backend that can handle the package wins; if none
/// can, the global priority order is tried. `None` means unroutable.
pub fn choose_backend(
    preferred: &[BackendKind],
    priority: &BackendPriority,
    mut can_handle: impl FnMut(BackendKind) -> bool,
) -> Option<BackendKind> {
    if let Some(kind) = preferred.iter().copied().find(|kind| can_handle(*kind)) {
        return Some(kind);
    }

    priority
        .iter()
        .filter(|kind| !preferred.contains(kind))
        .find(|kind| can_handle(*kind))
}

#[cfg(test)]
mod tests;
