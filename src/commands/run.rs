//! Run Command
//!
//! Runs one command through the runner: echoed, simulated under
//! `--dry-run`, optionally behind the sudo prompt.

use crate::error::Result;
use crate::runner::{CommandRunner, RunOptions};

#[derive(Debug)]
pub struct RunCommandOptions {
    pub argv: Vec<String>,
    pub sudo: bool,
}

pub fn run(runner: &CommandRunner, options: RunCommandOptions) -> Result<()> {
    let opts = RunOptions::new();
    let result = if options.sudo {
        runner.run_privileged(&options.argv, &opts)?
    } else {
        runner.run(&options.argv, &opts)?
    };

    runner
        .policy()
        .debug(&format!("'{}' finished", result.command_line()));
    Ok(())
}
