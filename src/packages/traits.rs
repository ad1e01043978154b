use crate::core::descriptor::PackageDescriptor;
use crate::core::types::BackendKind;
use crate::error::Result;

/// Capability set shared by every backend.
pub trait PackageBackend: Send + Sync {
    fn kind(&self) -> BackendKind;

    /// Whether the backend's binary is usable on this machine.
    /// Implementations look it up at most once.
    fn probe(&self) -> bool;

    /// `None` asks whether the backend is usable at all; `Some` additionally
    /// requires the descriptor to declare a package for this backend.
    fn can_handle(&self, pkg: Option<&PackageDescriptor>) -> bool {
        match pkg {
            None => self.probe(),
            Some(desc) => desc.package_for(self.kind()).is_some() && self.probe(),
        }
    }

    /// Read-only query; `false` when the backend cannot handle the package.
    fn is_installed(&self, pkg: &PackageDescriptor) -> Result<bool>;

    /// Install every package in one invocation.
    ///
    /// Every element must satisfy `can_handle`, otherwise
    /// `IshError::InvalidBatch` is returned before anything runs. An empty
    /// batch is a no-op. Returns whether the tool exited successfully.
    fn install_batch(&self, pkgs: &[&PackageDescriptor]) -> Result<bool>;

    fn install_one(&self, pkg: &PackageDescriptor) -> Result<bool> {
        self.install_batch(&[pkg])
    }
}
