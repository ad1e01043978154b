//! Install Command
//!
//! Loads descriptors and installs whatever is missing.

use crate::config::{self, loader};
use crate::core::routing::BackendPriority;
use crate::error::{IshError, Result};
use crate::installer::{InstallReport, Installer};
use crate::runner::CommandRunner;
use std::path::PathBuf;

/// Options for the install command
#[derive(Debug, Default)]
pub struct InstallOptions {
    /// Descriptor file; `None` means the default location
    pub config: Option<PathBuf>,
    /// Only these packages (empty = all)
    pub only: Vec<String>,
    pub priority: BackendPriority,
}

pub fn run(runner: &CommandRunner, options: InstallOptions) -> Result<()> {
    let path = config::resolve_config_path(options.config.as_deref())?;
    runner
        .policy()
        .debug(&format!("Reading packages from {}", path.display()));

    let descs = loader::select(loader::load_descriptors(&path)?, &options.only)?;
    if descs.is_empty() {
        runner.policy().warning("No packages declared");
        return Ok(());
    }

    let installer = Installer::new(runner.clone()).with_priority(options.priority);
    let report = installer.install_pkgs(&descs)?;
    summarize(runner, &report);

    if !report.batches_ok() || !report.errors.is_empty() {
        return Err(IshError::Other(format!(
            "{} package(s) could not be installed",
            report.failed_count() + report.unroutable.len() + report.errors.len()
        )));
    }
    if !report.unroutable.is_empty() {
        return Err(IshError::NoBackend {
            packages: report.unroutable.clone(),
        });
    }
    Ok(())
}

fn summarize(runner: &CommandRunner, report: &InstallReport) {
    let policy = runner.policy();

    if !report.satisfied.is_empty() {
        policy.info(&format!(
            "Already installed: {}",
            report.satisfied.join(", ")
        ));
    }

    let installed = report.installed_count();
    if installed > 0 {
        let verb = if policy.dry_run() { "Would install" } else { "Installed" };
        policy.success(&format!("{} {} package(s)", verb, installed));
    } else if report.success() {
        policy.success("Everything is already installed");
    }
}
