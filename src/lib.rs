pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod error;
pub mod installer;
pub mod packages;
pub mod runner;
pub mod ui;
pub mod utils;

#[cfg(test)]
mod testing;

use crate::core::policy::ExecutionPolicy;
use crate::runner::CommandRunner;
use clap::Parser;
use std::process::exit;
use std::sync::Arc;

/// Run ish CLI entrypoint.
pub fn run_cli() {
    // 0. Initialize color settings (must be first)
    ui::init_colors();

    // 1. Parse flags into the shared policy
    let args = cli::args::Cli::parse();
    let policy = ExecutionPolicy::new(args.global.policy_flags()).shared();

    // 2. Signal Handling (mark cancellation; the installer stops before the next batch)
    let handler_policy = Arc::clone(&policy);
    if let Err(e) = ctrlc::set_handler(move || {
        eprintln!();
        handler_policy.mark_interrupted();
        handler_policy.warning("Operation cancelled by user.");
    }) {
        policy.warning(&format!("Could not install Ctrl-C handler: {}", e));
    }

    // 3. Run
    let runner = CommandRunner::new(Arc::clone(&policy));
    if let Err(e) = cli::dispatcher::dispatch(&args, &runner) {
        policy.error(&e.to_string());
        exit(cli::dispatcher::exit_code(&e));
    }
}
