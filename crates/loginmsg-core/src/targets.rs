//! Resolution of selectors to banner files

use loginmsg_fs::NormalizedPath;

use crate::When;

/// Maps selectors to concrete banner files under a filesystem root.
///
/// The root is `/` in production; tests and image builders point it at a
/// sandbox or a mounted system image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BannerTargets {
    root: NormalizedPath,
}

impl BannerTargets {
    pub fn new(root: impl Into<NormalizedPath>) -> Self {
        Self { root: root.into() }
    }

    /// Targets on the running system.
    pub fn system() -> Self {
        Self::new("/")
    }

    /// The file managed for `when`.
    pub fn resolve(&self, when: When) -> NormalizedPath {
        when.banner().from_root(&self.root)
    }
}
