//! Idempotent directory helpers
//!
//! Each helper checks the current state first and returns early when there
//! is nothing to do. Otherwise it echoes the equivalent shell command, then
//! acts unless in dry-run. Failures come back as `Ok(false)` after an error
//! message, or as `Err` when `fatal` is set.

use super::CommandRunner;
use crate::error::{IshError, Result};
use std::io;
use std::path::Path;

#[derive(Debug, Clone, Copy, Default)]
pub struct DirOptions {
    /// `chdir`: create the directory when missing
    pub create: bool,
    /// `mkdir` (and `chdir` with `create`): create missing parents
    pub parents: bool,
    /// `remove`: delete directories with their contents
    pub recursive: bool,
    /// Return an error instead of `Ok(false)`
    pub fatal: bool,
}

impl DirOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create(mut self) -> Self {
        self.create = true;
        self
    }

    pub fn parents(mut self) -> Self {
        self.parents = true;
        self
    }

    pub fn recursive(mut self) -> Self {
        self.recursive = true;
        self
    }

    pub fn fatal(mut self) -> Self {
        self.fatal = true;
        self
    }
}

impl CommandRunner {
    /// Change the process working directory.
    pub fn chdir(&self, path: &Path, opts: DirOptions) -> Result<bool> {
        if is_current_dir(path) {
            self.policy()
                .debug(&format!("Already in directory {}, skipping chdir", path.display()));
            return Ok(true);
        }

        if !path.exists() {
            if !opts.create {
                let err = io::Error::new(
                    io::ErrorKind::NotFound,
                    "path does not exist, cannot change directory",
                );
                return self.fail(path, err, opts.fatal);
            }
            if !self.mkdir(path, opts)? {
                return Ok(false);
            }
        }

        self.policy().echo(&format!("cd {}", path.display()));
        if self.policy().dry_run() {
            return Ok(true);
        }

        match std::env::set_current_dir(path) {
            Ok(()) => Ok(true),
            Err(e) => self.fail(path, e, opts.fatal),
        }
    }

    /// Create a directory, optionally with parents.
    pub fn mkdir(&self, path: &Path, opts: DirOptions) -> Result<bool> {
        if path.exists() {
            self.policy()
                .debug(&format!("Path {} already exists, skipping mkdir", path.display()));
            return Ok(true);
        }

        let line = if opts.parents {
            format!("mkdir -p {}", path.display())
        } else {
            format!("mkdir {}", path.display())
        };
        self.policy().echo(&line);
        if self.policy().dry_run() {
            return Ok(true);
        }

        let created = if opts.parents {
            std::fs::create_dir_all(path)
        } else {
            std::fs::create_dir(path)
        };

        match created {
            Ok(()) => Ok(true),
            Err(e) => self.fail(path, e, opts.fatal),
        }
    }

    /// Remove a file, or a directory when `recursive` is set.
    pub fn remove(&self, path: &Path, opts: DirOptions) -> Result<bool> {
        let Ok(meta) = std::fs::symlink_metadata(path) else {
            self.policy()
                .debug(&format!("Path {} does not exist, skipping delete", path.display()));
            return Ok(true);
        };

        let line = if opts.recursive {
            format!("rm -rf {}", path.display())
        } else {
            format!("rm -f {}", path.display())
        };
        self.policy().echo(&line);
        if self.policy().dry_run() {
            return Ok(true);
        }

        let removed = if meta.is_dir() {
            if opts.recursive {
                std::fs::remove_dir_all(path)
            } else {
                std::fs::remove_dir(path)
            }
        } else {
            std::fs::remove_file(path)
        };

        match removed {
            Ok(()) => Ok(true),
            Err(e) => self.fail(path, e, opts.fatal),
        }
    }

    fn fail(&self, path: &Path, source: io::Error, fatal: bool) -> Result<bool> {
        if fatal {
            return Err(IshError::IoError {
                path: path.to_path_buf(),
                source,
            });
        }
        self.policy()
            .error(&format!("{}: {}", path.display(), source));
        Ok(false)
    }
}

fn is_current_dir(path: &Path) -> bool {
    let Ok(cwd) = std::env::current_dir() else {
        return false;
    };
    match (cwd.canonicalize(), path.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => cwd == path,
    }
}
