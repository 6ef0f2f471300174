//! Login banner reconciliation
//!
//! This crate turns a declared banner state into at most one filesystem
//! mutation and reports whether anything changed:
//!
//! - **Arguments**: the raw record an orchestrator supplies ([`ModuleArgs`])
//! - **Desired state**: the validated form of that record ([`DesiredState`])
//! - **Host identity**: injectable FQDN lookup ([`HostIdentityResolver`])
//! - **Reconciler**: resolves the target, composes the message and applies or
//!   simulates the effect ([`Reconciler`])
//!
//! # Architecture
//!
//! ```text
//!                 loginmsg-cli
//!                      |
//!                loginmsg-core
//!                      |
//!                 loginmsg-fs
//! ```
//!
//! # Example
//!
//! ```no_run
//! use loginmsg_core::{BannerTargets, ModuleArgs, Reconciler};
//!
//! fn example() -> loginmsg_core::Result<()> {
//!     let reconciler = Reconciler::new(BannerTargets::system());
//!     let args = ModuleArgs::new("Authorized use only", "before");
//!     let outcome = reconciler.run(&args, false)?;
//!     assert!(outcome.changed);
//!     Ok(())
//! }
//! ```

pub mod args;
pub mod compose;
pub mod error;
pub mod identity;
pub mod outcome;
pub mod reconcile;
pub mod state;
pub mod targets;

pub use args::ModuleArgs;
pub use compose::{HOST_LABEL, compose_message};
pub use error::{Error, Result};
pub use identity::{HostIdentityResolver, StaticHostIdentity, SystemHostIdentity};
pub use outcome::{Failure, Outcome};
pub use reconcile::{ReconcileOptions, Reconciler};
pub use state::{DesiredState, State, When};
pub use targets::BannerTargets;
