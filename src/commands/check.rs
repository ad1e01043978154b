//! Check Command
//!
//! Reports, per package, whether it is present and which backend would
//! install it. Nothing is installed.

use crate::config::{self, loader};
use crate::core::routing::BackendPriority;
use crate::error::{IshError, Result};
use crate::installer::Installer;
use crate::runner::CommandRunner;
use crate::ui;
use colored::Colorize;
use std::path::PathBuf;

#[derive(Debug, Default)]
pub struct CheckOptions {
    pub config: Option<PathBuf>,
    pub priority: BackendPriority,
}

pub fn run(runner: &CommandRunner, options: CheckOptions) -> Result<()> {
    let path = config::resolve_config_path(options.config.as_deref())?;
    let descs = loader::load_descriptors(&path)?;

    let installer = Installer::new(runner.clone()).with_priority(options.priority);
    installer.validate(&descs)?;
    let plan = installer.plan(&descs)?;

    ui::header(&format!("Packages in {}", path.display()));
    for desc in &plan.satisfied {
        ui::keyval(&desc.name, &"installed".green().to_string());
    }
    for (kind, group) in &plan.groups {
        for desc in group {
            ui::keyval(&desc.name, &format!("missing, via {}", kind).yellow().to_string());
        }
    }
    for (desc, err) in &plan.errors {
        ui::keyval(&desc.name, &format!("check failed: {}", err).red().to_string());
    }
    for desc in &plan.unroutable {
        ui::keyval(&desc.name, &"no usable backend".red().to_string());
    }

    if !plan.errors.is_empty() {
        return Err(IshError::Other(format!(
            "{} package(s) could not be checked",
            plan.errors.len()
        )));
    }
    if !plan.unroutable.is_empty() {
        return Err(IshError::NoBackend {
            packages: plan.unroutable.iter().map(|d| d.name.clone()).collect(),
        });
    }
    Ok(())
}
