//! Process spawning and PATH lookup
//!
//! `Spawner` is the only place that touches real processes, which keeps the
//! rest of the runner testable without a package manager on the host.

use super::CommandResult;
use crate::error::{IshError, Result};
use crate::ui::{self, Choice};
use std::path::PathBuf;
use std::process::{Command, ExitStatus, Stdio};

pub trait Spawner: Send + Sync {
    /// Run `argv` to completion. With `capture`, stdout/stderr are collected
    /// and stdin is closed; otherwise all streams are inherited.
    fn spawn(&self, argv: &[String], capture: bool) -> Result<CommandResult>;

    /// Resolve a binary on PATH. Absence is `None`, never an error.
    fn which(&self, binary: &str) -> Option<PathBuf>;
}

/// Asks the user before privileged commands.
pub trait Confirmer: Send + Sync {
    fn confirm(&self, question: &str) -> Choice;
}

/// Real processes via `std::process::Command`, PATH lookup via `which`.
pub struct SystemSpawner;

impl Spawner for SystemSpawner {
    fn spawn(&self, argv: &[String], capture: bool) -> Result<CommandResult> {
        let (program, args) = argv
            .split_first()
            .ok_or_else(|| IshError::SystemCommandFailed {
                command: String::new(),
                reason: "empty command".to_string(),
            })?;

        let line = argv.join(" ");
        let mut cmd = Command::new(program);
        cmd.args(args);

        if capture {
            let output = cmd
                .stdin(Stdio::null())
                .output()
                .map_err(|e| IshError::SystemCommandFailed {
                    command: line,
                    reason: e.to_string(),
                })?;

            return Ok(CommandResult {
                argv: argv.to_vec(),
                exit_code: exit_code(output.status),
                stdout: Some(String::from_utf8_lossy(&output.stdout).into_owned()),
                stderr: Some(String::from_utf8_lossy(&output.stderr).into_owned()),
                simulated: false,
            });
        }

        let status = cmd
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| IshError::SystemCommandFailed {
                command: line,
                reason: e.to_string(),
            })?;

        Ok(CommandResult {
            argv: argv.to_vec(),
            exit_code: exit_code(status),
            stdout: None,
            stderr: None,
            simulated: false,
        })
    }

    fn which(&self, binary: &str) -> Option<PathBuf> {
        which::which(binary).ok()
    }
}

/// Terminal prompt on stdin.
pub struct TerminalConfirmer;

impl Confirmer for TerminalConfirmer {
    fn confirm(&self, question: &str) -> Choice {
        ui::prompt_yes_no_always(question)
    }
}

/// Exit code, with signal deaths mapped to 128 + signal like a shell does.
fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    -1
}
