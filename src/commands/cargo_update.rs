//! Cargo Update Command

use crate::error::{IshError, Result};
use crate::installer::Installer;
use crate::runner::CommandRunner;

pub fn run(runner: &CommandRunner, toolchain: bool) -> Result<()> {
    let installer = Installer::new(runner.clone());
    let maintenance = installer.cargo_maintenance()?;

    if toolchain {
        maintenance.ensure_stable_toolchain()?;
    }

    if !maintenance.update_installed()? {
        return Err(IshError::Other("Updating cargo packages failed".to_string()));
    }

    runner.policy().success("Cargo packages are up to date");
    Ok(())
}
