//! Command implementations for loginmsg-cli

pub mod apply;
pub mod targets;

use std::path::PathBuf;

use crate::cli::OutputFormat;
use crate::error::{CliError, Result};

pub use apply::{run_apply, run_args_file};
pub use targets::run_targets;

/// Settings shared by all commands, taken from global flags.
#[derive(Debug, Clone)]
pub struct Settings {
    pub root: PathBuf,
    pub format: OutputFormat,
}

impl Settings {
    /// Build settings, rejecting a root that is not a directory.
    ///
    /// Banner paths are carried as UTF-8 with `/` separators, so a root that
    /// is not valid UTF-8, or that holds a literal backslash on Unix, would
    /// silently resolve elsewhere and is refused.
    pub fn new(root: PathBuf, format: OutputFormat) -> Result<Self> {
        let Some(text) = root.to_str() else {
            return Err(CliError::user(format!(
                "Root {} is not valid UTF-8",
                root.display()
            )));
        };
        if cfg!(unix) && text.contains('\\') {
            return Err(CliError::user(format!(
                "Root {text} contains a backslash"
            )));
        }
        if !root.is_dir() {
            return Err(CliError::user(format!(
                "Root {} is not a directory",
                root.display()
            )));
        }
        Ok(Self { root, format })
    }
}
