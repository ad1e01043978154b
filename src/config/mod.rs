//! Descriptor files and their default location.

pub mod loader;
pub mod paths;

pub use loader::{ConfigFormat, load_descriptors, parse_descriptors, select};
pub use paths::{default_config_file, resolve_config_path};
