//! Error types for loginmsg-core

use std::path::PathBuf;

/// Result type for loginmsg-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reconciling a banner
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// `when` was not one of the known selectors
    #[error("Invalid value for 'when': {value:?} (expected 'before' or 'after')")]
    InvalidSelector { value: String },

    /// `state` was not one of the known presence values
    #[error("Invalid value for 'state': {value:?} (expected 'present' or 'absent')")]
    InvalidPresence { value: String },

    /// Removal was requested for a banner that does not exist
    #[error("Target not found: {path}")]
    TargetNotFound { path: PathBuf },

    /// Filesystem error from loginmsg-fs
    #[error(transparent)]
    Fs(#[from] loginmsg_fs::Error),

    /// JSON serialization error
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// True for errors raised before any side effect was attempted.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidSelector { .. } | Self::InvalidPresence { .. })
    }
}
