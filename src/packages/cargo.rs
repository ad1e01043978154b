//! Cargo self-maintenance
//!
//! Only cargo has a notion of upgrading everything it installed, so this
//! lives beside the backends instead of on [`PackageBackend`].

use crate::core::descriptor::PackageDescriptor;
use crate::core::types::BackendKind;
use crate::error::{IshError, Result};
use crate::packages::traits::PackageBackend;
use crate::runner::{CommandRunner, RunOptions};

/// Crate providing `cargo install-update`
pub const CARGO_UPDATE_CRATE: &str = "cargo-update";

pub struct CargoMaintenance<'a> {
    backend: &'a dyn PackageBackend,
    runner: &'a CommandRunner,
}

impl<'a> CargoMaintenance<'a> {
    pub fn new(backend: &'a dyn PackageBackend, runner: &'a CommandRunner) -> Result<Self> {
        if backend.kind() != BackendKind::Cargo {
            return Err(IshError::Other(format!(
                "Cargo maintenance needs the cargo backend, got {}",
                backend.kind()
            )));
        }
        Ok(Self { backend, runner })
    }

    /// Upgrade every crate cargo has installed, installing `cargo-update`
    /// first when it is missing. Returns whether the upgrade succeeded.
    pub fn update_installed(&self) -> Result<bool> {
        if !self.backend.probe() {
            return Err(IshError::SystemCommandFailed {
                command: "cargo".to_string(),
                reason: "cargo is not installed".to_string(),
            });
        }

        let tool = PackageDescriptor::new(CARGO_UPDATE_CRATE)
            .with_package(BackendKind::Cargo, CARGO_UPDATE_CRATE);

        if !self.backend.is_installed(&tool)? {
            self.runner
                .policy()
                .info(&format!("{} is missing, installing it", CARGO_UPDATE_CRATE));
            if !self.backend.install_one(&tool)? {
                self.runner
                    .policy()
                    .error(&format!("Could not install {}", CARGO_UPDATE_CRATE));
                return Ok(false);
            }
        }

        let result = self.runner.run(
            &["cargo", "install-update", "-a", "-q"],
            &RunOptions::new().unchecked(),
        )?;
        Ok(result.success())
    }

    /// Make sure a stable toolchain is installed and the default.
    /// Without rustup there is nothing to do.
    pub fn ensure_stable_toolchain(&self) -> Result<bool> {
        if self.runner.locate("rustup").is_none() {
            self.runner
                .policy()
                .debug("rustup not found, skipping toolchain check");
            return Ok(false);
        }

        let listing = self.runner.run(
            &["rustup", "toolchain", "list"],
            &RunOptions::new().captured().quiet(),
        )?;
        if has_stable_default(listing.stdout_str()) {
            self.runner.policy().debug("Stable toolchain is already the default");
            return Ok(true);
        }

        self.runner
            .run(&["rustup", "install", "stable"], &RunOptions::new())?;
        self.runner
            .run(&["rustup", "default", "stable"], &RunOptions::new())?;
        Ok(true)
    }
}

fn has_stable_default(listing: &str) -> bool {
    listing
        .lines()
        .any(|line| line.starts_with("stable") && line.contains("(default)"))
}
