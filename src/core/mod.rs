pub mod descriptor;
pub mod policy;
pub mod routing;
pub mod types;

pub use descriptor::PackageDescriptor;
pub use policy::{ExecutionPolicy, PolicyFlags, Verbosity};
pub use routing::BackendPriority;
pub use types::BackendKind;
