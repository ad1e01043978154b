//! Command dispatcher
//!
//! Routes CLI commands to their handlers and maps errors to exit codes.

use crate::cli::args::{Cli, Command};
use crate::commands;
use crate::core::routing::BackendPriority;
use crate::error::{IshError, Result};
use crate::runner::CommandRunner;

/// Exit code for configuration and descriptor errors
pub const EXIT_CONFIG: i32 = 2;
/// Exit code after a declined sudo prompt or Ctrl-C
pub const EXIT_ABORTED: i32 = 130;
/// Exit code when some packages have no usable backend and nothing else failed
pub const EXIT_NO_BACKEND: i32 = 3;
pub const EXIT_FAILURE: i32 = 1;

/// Dispatch the parsed CLI command to the appropriate handler
pub fn dispatch(args: &Cli, runner: &CommandRunner) -> Result<()> {
    match &args.command {
        Command::Install { config, only } => commands::install::run(
            runner,
            commands::install::InstallOptions {
                config: config.clone(),
                only: only.clone(),
                priority: priority(args)?,
            },
        ),

        Command::Check { config } => commands::check::run(
            runner,
            commands::check::CheckOptions {
                config: config.clone(),
                priority: priority(args)?,
            },
        ),

        Command::Run { sudo, argv } => commands::run::run(
            runner,
            commands::run::RunCommandOptions {
                argv: argv.clone(),
                sudo: *sudo,
            },
        ),

        Command::CargoUpdate { toolchain } => commands::cargo_update::run(runner, *toolchain),

        Command::Completions { shell } => commands::completions::run(*shell),
    }
}

fn priority(args: &Cli) -> Result<BackendPriority> {
    match &args.global.priority {
        Some(list) => list.parse(),
        None => Ok(BackendPriority::default()),
    }
}

pub fn exit_code(err: &IshError) -> i32 {
    if err.is_abort() {
        EXIT_ABORTED
    } else if err.is_config() {
        EXIT_CONFIG
    } else if matches!(err, IshError::NoBackend { .. }) {
        EXIT_NO_BACKEND
    } else {
        EXIT_FAILURE
    }
}
