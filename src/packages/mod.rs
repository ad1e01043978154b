//! # Package Backends
//!
//! apt, cargo, pip and brew share one implementation: [`GenericBackend`],
//! configured per tool by a [`BackendSpec`] (binary, detection query, install
//! prefix, privilege). Adding a backend means adding a spec, not a new type.
//!
//! All backends implement [`PackageBackend`]:
//! - `probe()` - is the tool on PATH (looked up once)
//! - `can_handle()` - does the descriptor declare a package for this tool
//! - `is_installed()` - read-only detection query
//! - `install_batch()` - one install invocation for many packages
//!
//! Cargo's self-upgrade lives in [`cargo::CargoMaintenance`].
//!
//! ## Usage
//!
//! ```rust,no_run
//! use ishlib::core::{BackendKind, ExecutionPolicy, PackageDescriptor, PolicyFlags};
//! use ishlib::packages::{BackendRegistry, PackageBackend};
//! use ishlib::runner::CommandRunner;
//!
//! let runner = CommandRunner::new(ExecutionPolicy::new(PolicyFlags::default()).shared());
//! let backends = BackendRegistry::new().create_all(&runner);
//! let jq = PackageDescriptor::new("jq").with_package(BackendKind::Apt, "jq");
//! if !backends[&BackendKind::Apt].is_installed(&jq)? {
//!     backends[&BackendKind::Apt].install_one(&jq)?;
//! }
//! # Ok::<(), ishlib::error::IshError>(())
//! ```

pub mod cargo;
pub mod detect;
pub mod generic;
pub mod registry;
pub mod spec;
pub mod traits;

pub use generic::GenericBackend;
pub use registry::{BackendRegistry, BackendSet};
pub use spec::{BackendSpec, builtin_spec};
pub use traits::PackageBackend;
