//! Scoped banner I/O
//!
//! Every write acquires the file handle for the duration of a single call and
//! releases it on all exit paths, error paths included.

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::{Error, NormalizedPath, Result};

/// How a banner write reaches the disk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WriteStrategy {
    /// Truncate and rewrite the existing file, keeping its inode, owner and mode.
    #[default]
    InPlace,
    /// Write a sibling temp file and rename it over the target.
    Atomic,
}

/// Options controlling [`write_text`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WriteOptions {
    pub strategy: WriteStrategy,
    /// Flush file data to disk before returning. Always done for atomic writes.
    pub fsync: bool,
}

impl WriteOptions {
    pub fn atomic() -> Self {
        Self {
            strategy: WriteStrategy::Atomic,
            fsync: true,
        }
    }
}

/// Replace the full content of `path` with `content`.
///
/// The parent directory must already exist.
pub fn write_text(path: &NormalizedPath, content: &str, options: WriteOptions) -> Result<()> {
    let native_path = path.to_native();
    tracing::debug!(path = %path, strategy = ?options.strategy, bytes = content.len(), "writing banner");

    match options.strategy {
        WriteStrategy::InPlace => write_in_place(&native_path, content.as_bytes(), options.fsync),
        WriteStrategy::Atomic => write_atomic(&native_path, content.as_bytes()),
    }
}

fn write_in_place(path: &Path, content: &[u8], fsync: bool) -> Result<()> {
    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
        .map_err(|e| Error::io(path, e))?;

    file.write_all(content).map_err(|e| Error::io(path, e))?;

    if fsync {
        file.sync_all().map_err(|e| Error::io(path, e))?;
    }

    Ok(())
}

/// Removes the temp file on drop unless it was renamed into place.
struct TempFile {
    path: PathBuf,
    persisted: bool,
}

impl Drop for TempFile {
    fn drop(&mut self) {
        if !self.persisted {
            let _ = fs::remove_file(&self.path);
        }
    }
}

fn write_atomic(path: &Path, content: &[u8]) -> Result<()> {
    // Temp file lives in the same directory so the rename stays on one filesystem
    let temp_name = format!(
        ".{}.{}.tmp",
        path.file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default(),
        std::process::id()
    );
    let mut temp = TempFile {
        path: path.with_file_name(&temp_name),
        persisted: false,
    };

    {
        let mut file: File = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp.path)
            .map_err(|e| Error::io(&temp.path, e))?;

        file.write_all(content).map_err(|e| Error::io(&temp.path, e))?;
        file.sync_all().map_err(|e| Error::io(&temp.path, e))?;
    }

    fs::rename(&temp.path, path).map_err(|e| Error::io(path, e))?;
    temp.persisted = true;

    Ok(())
}

/// Remove the file at `path`.
///
/// A missing file is reported as [`Error::NotFound`], never treated as success.
pub fn remove_file(path: &NormalizedPath) -> Result<()> {
    let native_path = path.to_native();
    tracing::debug!(path = %path, "removing banner");
    fs::remove_file(&native_path).map_err(|e| Error::from_io(&native_path, e))
}

/// Read text content from a file.
pub fn read_text(path: &NormalizedPath) -> Result<String> {
    let native_path = path.to_native();
    fs::read_to_string(&native_path).map_err(|e| Error::from_io(&native_path, e))
}
