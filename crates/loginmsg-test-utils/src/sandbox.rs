//! [`BannerSandbox`] fixture for banner reconciliation tests.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Pre-login banner, relative to the sandbox root.
pub const ISSUE: &str = "etc/issue";
/// Post-login banner, relative to the sandbox root.
pub const MOTD: &str = "etc/motd";

/// A temporary filesystem root with an `etc/` directory.
///
/// # Example
///
/// ```rust,no_run
/// use loginmsg_test_utils::{BannerSandbox, MOTD};
///
/// let sandbox = BannerSandbox::new();
/// sandbox.write(MOTD, "old news\n");
/// sandbox.assert_content(MOTD, "old news\n");
/// ```
pub struct BannerSandbox {
    temp_dir: TempDir,
}

impl Default for BannerSandbox {
    fn default() -> Self {
        Self::new()
    }
}

impl BannerSandbox {
    /// Create a sandbox root containing an empty `etc/` directory.
    ///
    /// # Panics
    /// Panics if the temporary directory cannot be created.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("etc"))
            .unwrap_or_else(|e| panic!("BannerSandbox::new: failed to create etc/: {e}"));
        Self { temp_dir }
    }

    /// Create a sandbox root with no `etc/` directory at all.
    pub fn bare() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Root of the sandbox, standing in for `/`.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Absolute path of `rel` inside the sandbox.
    pub fn path(&self, rel: &str) -> PathBuf {
        self.root().join(rel)
    }

    /// Write `content` to `rel`.
    pub fn write(&self, rel: &str, content: &str) {
        let path = self.path(rel);
        fs::write(&path, content)
            .unwrap_or_else(|e| panic!("BannerSandbox::write: {}: {e}", path.display()));
    }

    /// Read `rel` as text.
    pub fn read(&self, rel: &str) -> String {
        let path = self.path(rel);
        fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("BannerSandbox::read: {}: {e}", path.display()))
    }

    /// Every file under `etc/` with its raw bytes.
    ///
    /// Compare two snapshots to prove an operation left the sandbox untouched.
    pub fn snapshot(&self) -> BTreeMap<String, Vec<u8>> {
        let etc = self.path("etc");
        let Ok(entries) = fs::read_dir(&etc) else {
            return BTreeMap::new();
        };
        entries
            .filter_map(|e| e.ok())
            .filter(|e| e.path().is_file())
            .map(|e| {
                let bytes = fs::read(e.path()).unwrap();
                (e.file_name().to_string_lossy().into_owned(), bytes)
            })
            .collect()
    }

    /// # Panics
    /// Panics if `rel` does not exist.
    pub fn assert_exists(&self, rel: &str) {
        let path = self.path(rel);
        assert!(path.exists(), "Expected file to exist: {}", path.display());
    }

    /// # Panics
    /// Panics if `rel` exists.
    pub fn assert_missing(&self, rel: &str) {
        let path = self.path(rel);
        assert!(!path.exists(), "Expected file NOT to exist: {}", path.display());
    }

    /// # Panics
    /// Panics unless `rel` holds exactly `expected`.
    pub fn assert_content(&self, rel: &str, expected: &str) {
        let actual = self.read(rel);
        assert_eq!(
            actual,
            expected,
            "Unexpected content in {}",
            self.path(rel).display()
        );
    }
}
