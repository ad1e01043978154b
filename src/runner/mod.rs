//! # Command Runner
//!
//! Runs external commands as argument vectors (never through a shell) under
//! the process-wide [`ExecutionPolicy`]:
//!
//! - every command is echoed as `argv.join(" ")` before it runs, dry-run or not
//! - dry-run returns a simulated success without spawning anything
//! - privileged commands are prefixed with `sudo` and confirmed once per run
//!   unless `always_sudo` is set
//! - nothing is spawned once Ctrl-C has been seen
//!
//! The directory helpers (`chdir`, `mkdir`, `remove`) live in [`fs_ops`].

pub mod exec;
pub mod fs_ops;

pub use exec::{Confirmer, Spawner, SystemSpawner, TerminalConfirmer};
pub use fs_ops::DirOptions;

use crate::core::policy::ExecutionPolicy;
use crate::error::{IshError, Result};
use std::path::PathBuf;
use std::sync::Arc;

/// Privilege escalation prefix for `run_privileged`
pub const SUDO: &str = "sudo";

/// Outcome of one external invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    pub argv: Vec<String>,
    pub exit_code: i32,
    /// Present only when output was captured
    pub stdout: Option<String>,
    pub stderr: Option<String>,
    /// True for dry-run results: exit 0, no output
    pub simulated: bool,
}

impl CommandResult {
    pub fn simulated(argv: Vec<String>) -> Self {
        Self {
            argv,
            exit_code: 0,
            stdout: None,
            stderr: None,
            simulated: true,
        }
    }

    pub fn success(&self) -> bool {
        self.exit_code == 0
    }

    pub fn command_line(&self) -> String {
        self.argv.join(" ")
    }

    pub fn stdout_str(&self) -> &str {
        self.stdout.as_deref().unwrap_or("")
    }

    pub fn stderr_str(&self) -> &str {
        self.stderr.as_deref().unwrap_or("")
    }
}

/// Per-call options for `run` / `run_privileged`.
#[derive(Debug, Clone, Copy)]
pub struct RunOptions {
    /// Collect stdout/stderr instead of inheriting them
    pub capture: bool,
    /// Turn a non-zero exit into `IshError::CommandFailed`
    pub check: bool,
    /// Skip the sudo confirmation for this call
    pub force_sudo: bool,
    /// Do not echo this command
    pub quiet: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            capture: false,
            check: true,
            force_sudo: false,
            quiet: false,
        }
    }
}

impl RunOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn captured(mut self) -> Self {
        self.capture = true;
        self
    }

    pub fn unchecked(mut self) -> Self {
        self.check = false;
        self
    }

    pub fn force_sudo(mut self) -> Self {
        self.force_sudo = true;
        self
    }

    pub fn quiet(mut self) -> Self {
        self.quiet = true;
        self
    }
}

#[derive(Clone)]
pub struct CommandRunner {
    policy: Arc<ExecutionPolicy>,
    spawner: Arc<dyn Spawner>,
    confirmer: Arc<dyn Confirmer>,
}

impl CommandRunner {
    /// Runner backed by real processes and a terminal prompt.
    pub fn new(policy: Arc<ExecutionPolicy>) -> Self {
        Self::with_parts(policy, Arc::new(SystemSpawner), Arc::new(TerminalConfirmer))
    }

    pub fn with_parts(
        policy: Arc<ExecutionPolicy>,
        spawner: Arc<dyn Spawner>,
        confirmer: Arc<dyn Confirmer>,
    ) -> Self {
        Self {
            policy,
            spawner,
            confirmer,
        }
    }

    pub fn policy(&self) -> &ExecutionPolicy {
        &self.policy
    }

    pub fn shared_policy(&self) -> Arc<ExecutionPolicy> {
        Arc::clone(&self.policy)
    }

    /// Run a command unprivileged.
    pub fn run<S: AsRef<str>>(&self, argv: &[S], opts: &RunOptions) -> Result<CommandResult> {
        let argv = stringify(argv);
        self.execute(argv, opts)
    }

    /// Run a command behind the privilege escalation prefix.
    ///
    /// Declining the confirmation returns `IshError::UserAborted`.
    pub fn run_privileged<S: AsRef<str>>(
        &self,
        argv: &[S],
        opts: &RunOptions,
    ) -> Result<CommandResult> {
        let mut full = Vec::with_capacity(argv.len() + 1);
        full.push(SUDO.to_string());
        full.extend(stringify(argv));

        self.authorize(&full, opts.force_sudo)?;
        self.execute(full, opts)
    }

    /// PATH lookup; `None` when the binary is absent.
    pub fn locate(&self, binary: &str) -> Option<PathBuf> {
        let found = self.spawner.which(binary);
        self.policy
            .debug(&format!("which {}: {}", binary, display_lookup(&found)));
        found
    }

    fn execute(&self, argv: Vec<String>, opts: &RunOptions) -> Result<CommandResult> {
        if argv.is_empty() {
            return Err(IshError::SystemCommandFailed {
                command: String::new(),
                reason: "empty command".to_string(),
            });
        }

        self.policy.check_interrupted()?;

        let line = argv.join(" ");
        if !opts.quiet {
            self.policy.echo(&line);
        }

        if self.policy.dry_run() {
            return Ok(CommandResult::simulated(argv));
        }

        let result = self.spawner.spawn(&argv, opts.capture)?;
        self.policy
            .debug(&format!("'{}' exited with {}", line, result.exit_code));

        if opts.check && !result.success() {
            return Err(IshError::CommandFailed {
                command: line,
                code: result.exit_code,
                stderr: result.stderr_str().to_string(),
            });
        }

        Ok(result)
    }

    /// One-time sudo gate: `always_sudo`, a forced call or dry-run skip the
    /// prompt; an "always" answer latches for the rest of the process.
    fn authorize(&self, argv: &[String], force: bool) -> Result<()> {
        if self.policy.always_sudo() || force {
            return Ok(());
        }

        if self.policy.dry_run() {
            self.policy.info("Dry run, skipping sudo check");
            return Ok(());
        }

        let choice = self
            .confirmer
            .confirm(&format!("Going to run {}", argv.join(" ")));

        // Ctrl-C does not unblock the prompt, so it only shows up here.
        self.policy.check_interrupted()?;

        if choice.is_always() && self.policy.latch_always_sudo() {
            self.policy
                .debug("Privileged commands will run without asking for the rest of this run");
        }

        if choice.is_yes() {
            Ok(())
        } else {
            Err(IshError::UserAborted)
        }
    }
}

fn stringify<S: AsRef<str>>(argv: &[S]) -> Vec<String> {
    argv.iter().map(|a| a.as_ref().to_string()).collect()
}

fn display_lookup(found: &Option<PathBuf>) -> String {
    match found {
        Some(path) => path.display().to_string(),
        None => "not found".to_string(),
    }
}
