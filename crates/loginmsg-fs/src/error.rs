//! Error types for loginmsg-fs

use std::path::PathBuf;

/// Result type for loginmsg-fs operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in loginmsg-fs operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No such file: {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to parse {format} arguments at {path}: {message}")]
    ArgsParse {
        path: PathBuf,
        format: String,
        message: String,
    },

    #[error("Unsupported argument document format: {extension}")]
    UnsupportedFormat { extension: String },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Like [`Error::io`], but a `NotFound` source becomes [`Error::NotFound`].
    pub fn from_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::NotFound { path }
        } else {
            Self::Io { path, source }
        }
    }
}
