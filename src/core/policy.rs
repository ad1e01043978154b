//! Process-wide execution policy
//!
//! One `ExecutionPolicy` is built at startup and shared (`Arc`) by every
//! component. Flags are atomics and are read on every call, so a setter
//! (or the sudo "always" answer) is visible to all holders immediately.

use crate::error::{IshError, Result};
use crate::ui::{ConsoleSink, Level, OutputSink};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};

/// Logging severity threshold. Levels are mutually exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
    Debug,
}

impl Verbosity {
    /// Resolve CLI flags; the most verbose flag wins if several are set.
    pub fn from_flags(quiet: bool, verbose: bool, debug: bool) -> Self {
        if debug {
            Self::Debug
        } else if verbose {
            Self::Verbose
        } else if quiet {
            Self::Quiet
        } else {
            Self::Normal
        }
    }

    fn from_u8(raw: u8) -> Self {
        match raw {
            0 => Self::Quiet,
            2 => Self::Verbose,
            3 => Self::Debug,
            _ => Self::Normal,
        }
    }

    fn as_u8(self) -> u8 {
        match self {
            Self::Quiet => 0,
            Self::Normal => 1,
            Self::Verbose => 2,
            Self::Debug => 3,
        }
    }

    /// Whether a message of `level` passes this threshold.
    pub fn allows(self, level: Level) -> bool {
        match level {
            Level::Error => true,
            Level::Warning | Level::Success => self >= Self::Normal,
            Level::Info => self >= Self::Verbose,
            Level::Debug => self >= Self::Debug,
        }
    }
}

/// Initial flag values, usually straight from the command line.
#[derive(Debug, Clone, Copy, Default)]
pub struct PolicyFlags {
    pub dry_run: bool,
    pub verbosity: Verbosity,
    pub always_sudo: bool,
}

pub struct ExecutionPolicy {
    dry_run: AtomicBool,
    verbosity: AtomicU8,
    always_sudo: AtomicBool,
    interrupted: AtomicBool,
    sink: Arc<dyn OutputSink>,
}

impl ExecutionPolicy {
    pub fn new(flags: PolicyFlags) -> Self {
        Self::with_sink(flags, Arc::new(ConsoleSink))
    }

    pub fn with_sink(flags: PolicyFlags, sink: Arc<dyn OutputSink>) -> Self {
        Self {
            dry_run: AtomicBool::new(flags.dry_run),
            verbosity: AtomicU8::new(flags.verbosity.as_u8()),
            always_sudo: AtomicBool::new(flags.always_sudo),
            interrupted: AtomicBool::new(false),
            sink,
        }
    }

    pub fn shared(self) -> Arc<Self> {
        Arc::new(self)
    }

    pub fn dry_run(&self) -> bool {
        self.dry_run.load(Ordering::SeqCst)
    }

    pub fn set_dry_run(&self, dry_run: bool) {
        self.dry_run.store(dry_run, Ordering::SeqCst);
    }

    pub fn verbosity(&self) -> Verbosity {
        Verbosity::from_u8(self.verbosity.load(Ordering::SeqCst))
    }

    pub fn set_verbosity(&self, verbosity: Verbosity) {
        self.verbosity.store(verbosity.as_u8(), Ordering::SeqCst);
    }

    pub fn quiet(&self) -> bool {
        self.verbosity() == Verbosity::Quiet
    }

    pub fn always_sudo(&self) -> bool {
        self.always_sudo.load(Ordering::SeqCst)
    }

    pub fn set_always_sudo(&self, always: bool) {
        self.always_sudo.store(always, Ordering::SeqCst);
    }

    /// Record an "always" answer. Returns true if this call flipped the latch.
    pub fn latch_always_sudo(&self) -> bool {
        !self.always_sudo.swap(true, Ordering::SeqCst)
    }

    /// Called from the Ctrl-C handler.
    pub fn mark_interrupted(&self) {
        self.interrupted.store(true, Ordering::SeqCst);
    }

    pub fn is_interrupted(&self) -> bool {
        self.interrupted.load(Ordering::SeqCst)
    }

    /// Bail out with `UserAborted` once Ctrl-C has been seen.
    pub fn check_interrupted(&self) -> Result<()> {
        if self.is_interrupted() {
            return Err(IshError::UserAborted);
        }
        Ok(())
    }

    pub fn log(&self, level: Level, msg: &str) {
        if self.verbosity().allows(level) {
            self.sink.message(level, msg);
        }
    }

    pub fn debug(&self, msg: &str) {
        self.log(Level::Debug, msg);
    }

    pub fn info(&self, msg: &str) {
        self.log(Level::Info, msg);
    }

    pub fn success(&self, msg: &str) {
        self.log(Level::Success, msg);
    }

    pub fn warning(&self, msg: &str) {
        self.log(Level::Warning, msg);
    }

    pub fn error(&self, msg: &str) {
        self.log(Level::Error, msg);
    }

    /// Echo a command line that is about to run (or would run, in dry-run).
    pub fn echo(&self, line: &str) {
        if !self.quiet() {
            self.sink.command(line);
        }
    }
}

impl Default for ExecutionPolicy {
    fn default() -> Self {
        Self::new(PolicyFlags::default())
    }
}

#[cfg(test)]
mod tests;
