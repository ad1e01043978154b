use crate::core::policy::{PolicyFlags, Verbosity};
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "ish",
    about = "Install packages with whichever backend this machine has",
    long_about = "Installs missing packages through apt, cargo, pip or brew",
    version,
    next_line_help = false,
    term_width = 80
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalFlags,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Parser, Debug)]
pub struct GlobalFlags {
    /// Print commands instead of running them
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Only print errors
    #[arg(short = 'q', long, global = true, conflicts_with_all = ["verbose", "debug"])]
    pub quiet: bool,

    /// Also print informational messages
    #[arg(short = 'v', long, global = true, conflicts_with = "debug")]
    pub verbose: bool,

    /// Print everything, including PATH lookups and exit codes
    #[arg(long, global = true)]
    pub debug: bool,

    /// Run privileged commands without asking
    #[arg(short = 'y', long, global = true)]
    pub always_sudo: bool,

    /// Backend order used when a package has no preference (e.g. "apt,cargo,pip,brew")
    #[arg(long, value_name = "LIST", global = true)]
    pub priority: Option<String>,
}

impl GlobalFlags {
    pub fn verbosity(&self) -> Verbosity {
        Verbosity::from_flags(self.quiet, self.verbose, self.debug)
    }

    pub fn policy_flags(&self) -> PolicyFlags {
        PolicyFlags {
            dry_run: self.dry_run,
            verbosity: self.verbosity(),
            always_sudo: self.always_sudo,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Install every missing package from a descriptor file
    Install {
        /// Descriptor file (.toml, .json, .yaml); defaults to the config directory
        config: Option<PathBuf>,

        /// Limit to these packages
        #[arg(long, value_name = "NAME", value_delimiter = ',')]
        only: Vec<String>,
    },

    /// Show which packages are present and how the rest would be installed
    Check {
        /// Descriptor file (.toml, .json, .yaml); defaults to the config directory
        config: Option<PathBuf>,
    },

    /// Run a command with dry-run, echo and sudo handling
    Run {
        /// Prefix the command with sudo
        #[arg(long)]
        sudo: bool,

        /// Command and its arguments
        #[arg(
            value_name = "ARGV",
            required = true,
            trailing_var_arg = true,
            allow_hyphen_values = true
        )]
        argv: Vec<String>,
    },

    /// Upgrade every crate installed with cargo
    CargoUpdate {
        /// Also make sure the stable toolchain is installed and the default
        #[arg(long)]
        toolchain: bool,
    },

    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}
