pub mod cargo_update;
pub mod check;
pub mod completions;
pub mod install;
pub mod run;
