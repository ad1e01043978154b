use crate::core::types::BackendKind;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IshError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Descriptor declares neither `cmd` nor any backend key
    #[error("Package '{package}' has no 'cmd' and no backend key (apt, cargo, pip, brew)")]
    Unsatisfiable { package: String },

    /// `pref` names a backend the installer does not know
    #[error("Package '{package}' prefers unknown backend '{backend}'")]
    UnknownBackend { package: String, backend: String },

    #[error("Parsing error in '{file}': {message}")]
    ParseError { file: String, message: String },

    #[error("IO error at '{path}': {source}")]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    StdIoError(#[from] std::io::Error),

    /// Tool was found and invoked, but exited non-zero
    #[error("Command '{command}' failed with exit code {code}{}", stderr_suffix(.stderr))]
    CommandFailed {
        command: String,
        code: i32,
        stderr: String,
    },

    #[error("System command '{command}' failed: {reason}")]
    SystemCommandFailed { command: String, reason: String },

    /// `install_batch` was handed a package the backend cannot handle
    #[error("Package '{package}' cannot be installed with {backend}")]
    InvalidBatch {
        backend: BackendKind,
        package: String,
    },

    /// Packages that no registered backend can install on this machine
    #[error("No available backend can install: {}", .packages.join(", "))]
    NoBackend { packages: Vec<String> },

    #[error("Operation aborted by user")]
    UserAborted,

    #[error(transparent)]
    JsonError(#[from] serde_json::Error),

    #[error(transparent)]
    TomlError(#[from] toml::de::Error),

    #[error(transparent)]
    YamlError(#[from] serde_yml::Error),

    #[error("{0}")]
    Other(String),
}

fn stderr_suffix(stderr: &str) -> String {
    let trimmed = stderr.trim();
    if trimmed.is_empty() {
        String::new()
    } else {
        format!(": {}", trimmed)
    }
}

impl IshError {
    /// True for declined privilege escalation and Ctrl-C.
    pub fn is_abort(&self) -> bool {
        matches!(self, Self::UserAborted)
    }

    /// True for errors raised while validating configuration, before any execution.
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            Self::ConfigError(_)
                | Self::Unsatisfiable { .. }
                | Self::UnknownBackend { .. }
                | Self::ParseError { .. }
                | Self::JsonError(_)
                | Self::TomlError(_)
                | Self::YamlError(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, IshError>;
