pub mod args;
pub mod dispatcher;

pub use args::{Cli, Command, GlobalFlags};
pub use dispatcher::{dispatch, exit_code};
