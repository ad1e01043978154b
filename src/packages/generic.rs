use crate::core::descriptor::PackageDescriptor;
use crate::core::types::BackendKind;
use crate::error::{IshError, Result};
use crate::packages::detect;
use crate::packages::spec::BackendSpec;
use crate::packages::traits::PackageBackend;
use crate::runner::{CommandRunner, RunOptions};
use crate::utils::sanitize;
use std::sync::OnceLock;

/// Backend driven entirely by a [`BackendSpec`].
pub struct GenericBackend {
    spec: BackendSpec,
    runner: CommandRunner,
    probed: OnceLock<bool>,
}

impl GenericBackend {
    pub fn new(spec: BackendSpec, runner: CommandRunner) -> Self {
        Self {
            spec,
            runner,
            probed: OnceLock::new(),
        }
    }

    pub fn spec(&self) -> &BackendSpec {
        &self.spec
    }

    /// Forget the cached probe result, e.g. after installing the tool itself.
    pub fn invalidate_probe(&mut self) {
        self.probed.take();
    }

    fn detect_argv(&self, package: &str) -> Vec<String> {
        self.spec
            .detect_cmd
            .iter()
            .map(|part| part.replace("{package}", package))
            .collect()
    }

    fn install_argv(&self, packages: &[&str]) -> Vec<String> {
        let mut argv = self.spec.install_cmd.clone();
        argv.extend(packages.iter().map(|p| p.to_string()));
        argv
    }

    fn not_found(&self, output: &str) -> bool {
        self.spec
            .not_found_marker
            .as_deref()
            .is_some_and(|marker| output.contains(marker))
    }
}

impl PackageBackend for GenericBackend {
    fn kind(&self) -> BackendKind {
        self.spec.kind
    }

    fn probe(&self) -> bool {
        *self
            .probed
            .get_or_init(|| self.runner.locate(&self.spec.binary).is_some())
    }

    fn is_installed(&self, pkg: &PackageDescriptor) -> Result<bool> {
        let Some(package) = pkg.package_for(self.kind()) else {
            return Ok(false);
        };
        if !self.probe() {
            return Ok(false);
        }
        sanitize::validate_package_name(package)?;

        let argv = self.detect_argv(package);
        let result = self
            .runner
            .run(&argv, &RunOptions::new().captured().unchecked())?;

        if result.simulated {
            self.runner
                .policy()
                .debug(&format!("Dry run, assuming {} is not installed", package));
            return Ok(false);
        }

        if !result.success() {
            if self.not_found(result.stderr_str()) || self.not_found(result.stdout_str()) {
                return Ok(false);
            }
            return Err(IshError::CommandFailed {
                command: result.command_line(),
                code: result.exit_code,
                stderr: result.stderr_str().to_string(),
            });
        }

        detect::reports_installed(self.spec.detection, result.stdout_str(), package)
    }

    fn install_batch(&self, pkgs: &[&PackageDescriptor]) -> Result<bool> {
        let mut names = Vec::with_capacity(pkgs.len());
        for pkg in pkgs {
            match pkg.package_for(self.kind()) {
                Some(name) if self.probe() => {
                    sanitize::validate_package_name(name)?;
                    names.push(name);
                }
                _ => {
                    return Err(IshError::InvalidBatch {
                        backend: self.kind(),
                        package: pkg.name.clone(),
                    });
                }
            }
        }

        if names.is_empty() {
            return Ok(true);
        }

        self.runner.policy().info(&format!(
            "Installing {} package(s) with {}: {}",
            names.len(),
            self.kind(),
            names.join(", ")
        ));

        let argv = self.install_argv(&names);
        let opts = RunOptions::new().unchecked();
        let result = if self.spec.needs_sudo {
            self.runner.run_privileged(&argv, &opts)?
        } else {
            self.runner.run(&argv, &opts)?
        };

        Ok(result.success())
    }
}
