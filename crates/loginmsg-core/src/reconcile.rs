//! Reconciler implementation
//!
//! The Reconciler moves one banner file from whatever state it is in to the
//! declared state with at most one filesystem mutation.

use loginmsg_fs::checksum::{compute_content_checksum, compute_file_checksum};
use loginmsg_fs::{NormalizedPath, WriteOptions, WriteStrategy, io};

use crate::identity::{HostIdentityResolver, SystemHostIdentity};
use crate::{
    BannerTargets, DesiredState, Error, ModuleArgs, Outcome, Result, State, compose_message,
};

/// Options for [`Reconciler`]. The defaults reproduce the plain behaviour:
/// every `present` run is a change and writes go to the existing file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReconcileOptions {
    /// Skip the write and report no change when the file already holds the
    /// composed content.
    pub compare_existing: bool,
    pub write_strategy: WriteStrategy,
    /// Flush in-place writes to disk. Atomic writes always flush.
    pub fsync: bool,
}

impl ReconcileOptions {
    fn write_options(&self) -> WriteOptions {
        WriteOptions {
            strategy: self.write_strategy,
            fsync: self.fsync || self.write_strategy == WriteStrategy::Atomic,
        }
    }
}

/// Applies a [`DesiredState`] to the banner files.
pub struct Reconciler {
    targets: BannerTargets,
    resolver: Box<dyn HostIdentityResolver>,
    options: ReconcileOptions,
}

impl Reconciler {
    /// Create a Reconciler that resolves the host name from the system.
    pub fn new(targets: BannerTargets) -> Self {
        Self {
            targets,
            resolver: Box::new(SystemHostIdentity),
            options: ReconcileOptions::default(),
        }
    }

    /// Replace the host identity resolver.
    pub fn with_resolver(mut self, resolver: impl HostIdentityResolver + 'static) -> Self {
        self.resolver = Box::new(resolver);
        self
    }

    pub fn with_options(mut self, options: ReconcileOptions) -> Self {
        self.options = options;
        self
    }

    /// Validate raw arguments and reconcile.
    ///
    /// `check_mode` comes from the execution context; the argument record may
    /// also carry its own marker. Either one enables dry-run.
    pub fn run(&self, args: &ModuleArgs, check_mode: bool) -> Result<Outcome> {
        let desired = DesiredState::from_args(args, check_mode)?;
        self.reconcile(&desired)
    }

    /// Bring the selected banner to the desired state.
    ///
    /// # Errors
    ///
    /// - [`Error::TargetNotFound`] when removing a banner that does not exist
    /// - [`Error::Fs`] for any other I/O failure during the write or removal
    pub fn reconcile(&self, desired: &DesiredState) -> Result<Outcome> {
        let path = self.targets.resolve(desired.selector);
        tracing::debug!(
            when = %desired.selector,
            state = %desired.presence,
            banner = %path,
            dry_run = desired.dry_run,
            "reconciling banner"
        );

        match desired.presence {
            State::Present => self.ensure_present(desired, path),
            State::Absent => self.ensure_absent(desired, path),
        }
    }

    fn ensure_present(&self, desired: &DesiredState, path: NormalizedPath) -> Result<Outcome> {
        let fqdn = desired
            .include_host_identity
            .then(|| self.resolver.fqdn());
        let content = compose_message(&desired.content, fqdn.as_deref());
        let checksum = compute_content_checksum(&content);

        let changed = if self.options.compare_existing {
            !self.holds_checksum(&path, &checksum)?
        } else {
            true
        };

        if !changed {
            tracing::debug!(banner = %path, "banner already up to date");
        } else if desired.dry_run {
            tracing::info!(banner = %path, "check mode: would write banner");
        } else {
            io::write_text(&path, &content, self.options.write_options())?;
            tracing::info!(banner = %path, %checksum, "wrote banner");
        }

        Ok(Outcome {
            changed,
            path: path.to_string(),
            state: State::Present,
            checksum: Some(checksum),
        })
    }

    fn ensure_absent(&self, desired: &DesiredState, path: NormalizedPath) -> Result<Outcome> {
        if desired.dry_run {
            tracing::info!(banner = %path, "check mode: would remove banner");
        } else {
            io::remove_file(&path).map_err(|e| match e {
                loginmsg_fs::Error::NotFound { path } => Error::TargetNotFound { path },
                other => Error::Fs(other),
            })?;
            tracing::info!(banner = %path, "removed banner");
        }

        Ok(Outcome {
            changed: true,
            path: path.to_string(),
            state: State::Absent,
            checksum: None,
        })
    }

    fn holds_checksum(&self, path: &NormalizedPath, checksum: &str) -> Result<bool> {
        match compute_file_checksum(path) {
            Ok(existing) => Ok(existing == checksum),
            Err(loginmsg_fs::Error::NotFound { .. }) => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}
