//! Filesystem layer for loginmsg
//!
//! Provides the well-known banner locations, scoped write/remove primitives
//! and loading of argument documents.

pub mod args;
pub mod checksum;
pub mod constants;
pub mod error;
pub mod io;
pub mod path;

pub use args::ArgsStore;
pub use constants::BannerFile;
pub use error::{Error, Result};
pub use io::{WriteOptions, WriteStrategy};
pub use path::NormalizedPath;
