//! # Installer
//!
//! Drives a batch of descriptors through four steps:
//!
//! 1. **Filter** - `have_pkg`: `cmd` on PATH first, then each backend's
//!    detection query
//! 2. **Route** - `pref` entries first, then the global [`BackendPriority`]
//! 3. **Batch** - group routed descriptors per backend
//! 4. **Apply** - one `install_batch` per group; a failing group does not
//!    stop the others
//!
//! Configuration problems are reported by `validate` before anything runs.
//! A declined sudo prompt or Ctrl-C unwinds immediately.

mod report;

pub use report::{InstallPlan, InstallReport};

use crate::core::descriptor::PackageDescriptor;
use crate::core::routing::{self, BackendPriority};
use crate::core::types::BackendKind;
use crate::error::{IshError, Result};
use crate::packages::cargo::CargoMaintenance;
use crate::packages::registry::{BackendRegistry, BackendSet};
use crate::packages::traits::PackageBackend;
use crate::runner::CommandRunner;
use std::collections::HashSet;

pub struct Installer {
    runner: CommandRunner,
    backends: BackendSet,
    priority: BackendPriority,
}

impl Installer {
    /// Installer with the built-in backends and default priority.
    pub fn new(runner: CommandRunner) -> Self {
        let backends = BackendRegistry::new().create_all(&runner);
        Self::with_backends(runner, backends, BackendPriority::default())
    }

    pub fn with_backends(
        runner: CommandRunner,
        backends: BackendSet,
        priority: BackendPriority,
    ) -> Self {
        Self {
            runner,
            backends,
            priority,
        }
    }

    pub fn with_priority(mut self, priority: BackendPriority) -> Self {
        self.priority = priority;
        self
    }

    pub fn runner(&self) -> &CommandRunner {
        &self.runner
    }

    pub fn priority(&self) -> &BackendPriority {
        &self.priority
    }

    pub fn backend(&self, kind: BackendKind) -> Option<&dyn PackageBackend> {
        self.backends.get(&kind).map(|b| b.as_ref())
    }

    pub fn cargo_maintenance(&self) -> Result<CargoMaintenance<'_>> {
        let backend = self
            .backend(BackendKind::Cargo)
            .ok_or_else(|| IshError::Other("The cargo backend is not registered".to_string()))?;
        CargoMaintenance::new(backend, &self.runner)
    }

    /// Reject bad configuration before any command runs: unsatisfiable or
    /// unsafe descriptors, duplicate names, and `pref` entries naming a
    /// backend this installer does not have.
    pub fn validate(&self, descs: &[PackageDescriptor]) -> Result<()> {
        let mut seen = HashSet::new();
        for desc in descs {
            desc.validate()?;
            if !seen.insert(desc.name.as_str()) {
                return Err(IshError::ConfigError(format!(
                    "Package '{}' is declared more than once",
                    desc.name
                )));
            }
            self.check_pref(desc)?;
        }
        Ok(())
    }

    fn check_pref(&self, desc: &PackageDescriptor) -> Result<()> {
        for (kind, raw) in desc.preferred_backends()?.into_iter().zip(&desc.pref) {
            if !self.backends.contains_key(&kind) {
                return Err(IshError::UnknownBackend {
                    package: desc.name.clone(),
                    backend: raw.clone(),
                });
            }
        }
        Ok(())
    }

    /// Preferred backends, then the priority list, then everything else.
    fn candidate_order(&self, desc: &PackageDescriptor) -> Result<Vec<BackendKind>> {
        let mut order = desc.preferred_backends()?;
        for kind in self.priority.iter().chain(self.backends.keys().copied()) {
            if !order.contains(&kind) {
                order.push(kind);
            }
        }
        Ok(order)
    }

    fn can_handle(&self, kind: BackendKind, desc: &PackageDescriptor) -> bool {
        self.backends
            .get(&kind)
            .is_some_and(|backend| backend.can_handle(Some(desc)))
    }

    /// Whether the package is already present.
    ///
    /// A `cmd` found on PATH settles it without any detection query. When no
    /// backend can even check, the package counts as missing.
    pub fn have_pkg(&self, desc: &PackageDescriptor) -> Result<bool> {
        let policy = self.runner.policy();

        if let Some(cmd) = &desc.cmd {
            if self.runner.locate(cmd).is_some() {
                policy.debug(&format!("{}: '{}' found on PATH", desc.name, cmd));
                return Ok(true);
            }
        }

        let mut checked = false;
        for kind in self.candidate_order(desc)? {
            let Some(backend) = self.backends.get(&kind) else {
                continue;
            };
            if !backend.can_handle(Some(desc)) {
                continue;
            }
            checked = true;
            if backend.is_installed(desc)? {
                policy.debug(&format!("{}: installed via {}", desc.name, kind));
                return Ok(true);
            }
        }

        if !checked {
            policy.warning(&format!(
                "No available backend can check whether {} is installed",
                desc.name
            ));
        }
        Ok(false)
    }

    /// Backend that should install `desc`, or `None` when unroutable.
    pub fn choose_backend(&self, desc: &PackageDescriptor) -> Result<Option<BackendKind>> {
        let preferred = desc.preferred_backends()?;
        Ok(routing::choose_backend(&preferred, &self.priority, |kind| {
            self.can_handle(kind, desc)
        }))
    }

    /// Filter and route without installing anything.
    pub fn plan<'a>(&self, descs: &'a [PackageDescriptor]) -> Result<InstallPlan<'a>> {
        let policy = self.runner.policy();
        let mut plan = InstallPlan::default();

        for desc in descs {
            policy.check_interrupted()?;

            match self.have_pkg(desc) {
                Ok(true) => {
                    plan.satisfied.push(desc);
                    continue;
                }
                Ok(false) => {}
                Err(e) if e.is_abort() => return Err(e),
                Err(e) => {
                    plan.errors.push((desc, e));
                    continue;
                }
            }

            match self.choose_backend(desc)? {
                Some(kind) => match plan.groups.iter_mut().find(|(k, _)| *k == kind) {
                    Some((_, group)) => group.push(desc),
                    None => plan.groups.push((kind, vec![desc])),
                },
                None => plan.unroutable.push(desc),
            }
        }

        let priority = &self.priority;
        plan.groups
            .sort_by_key(|(kind, _)| (priority.rank(*kind).unwrap_or(usize::MAX), *kind));
        Ok(plan)
    }

    /// Install everything in `descs` that is missing.
    ///
    /// Unroutable packages and failed detection queries are logged and
    /// skipped; a failing batch is logged and the remaining batches still run.
    pub fn install_pkgs(&self, descs: &[PackageDescriptor]) -> Result<InstallReport> {
        self.validate(descs)?;

        let policy = self.runner.policy();
        let plan = self.plan(descs)?;
        let mut report = InstallReport {
            satisfied: report::names(&plan.satisfied),
            unroutable: report::names(&plan.unroutable),
            ..Default::default()
        };

        for desc in &plan.unroutable {
            policy.error(&format!("No available backend can install {}", desc.name));
        }
        for (desc, err) in &plan.errors {
            policy.error(&format!("Could not check {}: {}", desc.name, err));
            report.errors.push(desc.name.clone());
        }

        for (kind, group) in &plan.groups {
            policy.check_interrupted()?;

            let names = report::names(group);
            let Some(backend) = self.backends.get(kind) else {
                continue;
            };

            match backend.install_batch(group) {
                Ok(true) => {
                    policy.success(&format!("{}: {}", kind, names.join(", ")));
                    report.installed.insert(*kind, names);
                }
                Ok(false) => {
                    policy.error(&format!("{} failed to install {}", kind, names.join(", ")));
                    report.failed.insert(*kind, names);
                }
                Err(e) if e.is_abort() => return Err(e),
                Err(e) => {
                    policy.error(&format!("{}: {}", kind, e));
                    report.failed.insert(*kind, names);
                }
            }
        }

        Ok(report)
    }

    /// Install `desc` unless it is already present. Returns whether it is
    /// present afterwards.
    pub fn ensure(&self, desc: &PackageDescriptor) -> Result<bool> {
        self.validate(std::slice::from_ref(desc))?;

        if self.have_pkg(desc)? {
            return Ok(true);
        }

        let Some(kind) = self.choose_backend(desc)? else {
            self.runner
                .policy()
                .error(&format!("No available backend can install {}", desc.name));
            return Ok(false);
        };

        match self.backends.get(&kind) {
            Some(backend) => backend.install_one(desc),
            None => Ok(false),
        }
    }
}
