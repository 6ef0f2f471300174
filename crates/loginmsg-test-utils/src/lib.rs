//! Shared test utilities for the loginmsg workspace.
//!
//! Dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`sandbox`]: [`sandbox::BannerSandbox`], a throwaway filesystem root
//!   holding `etc/issue` and `etc/motd`

pub mod sandbox;

pub use sandbox::{BannerSandbox, ISSUE, MOTD};
