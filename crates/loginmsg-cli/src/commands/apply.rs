//! Apply and run command implementations
//!
//! Both commands end in a single reconciliation; they differ only in where
//! the argument record comes from.

use std::path::Path;

use colored::Colorize;

use loginmsg_core::{
    BannerTargets, DesiredState, ModuleArgs, Outcome, ReconcileOptions, Reconciler, StaticHostIdentity,
};
use loginmsg_fs::{ArgsStore, NormalizedPath, WriteStrategy};

use super::Settings;
use crate::cli::{OutputFormat, ReconcileFlags};
use crate::error::Result;

/// Reconcile the banner described by `args`.
pub fn run_apply(settings: &Settings, args: &ModuleArgs, flags: &ReconcileFlags) -> Result<()> {
    let desired = DesiredState::from_args(args, flags.check)?;
    let outcome = build_reconciler(settings, flags).reconcile(&desired)?;
    println!("{}", render_outcome(&outcome, settings.format, desired.dry_run)?);
    Ok(())
}

/// Load an argument document and reconcile it.
pub fn run_args_file(settings: &Settings, path: &Path, flags: &ReconcileFlags) -> Result<()> {
    let args: ModuleArgs = ArgsStore::new().load(&NormalizedPath::new(path))?;
    tracing::debug!(when = %args.when, state = %args.state, "loaded arguments");
    run_apply(settings, &args, flags)
}

fn build_reconciler(settings: &Settings, flags: &ReconcileFlags) -> Reconciler {
    let options = ReconcileOptions {
        compare_existing: flags.compare,
        write_strategy: if flags.atomic {
            WriteStrategy::Atomic
        } else {
            WriteStrategy::InPlace
        },
        fsync: flags.fsync,
    };

    let reconciler =
        Reconciler::new(BannerTargets::new(settings.root.as_path())).with_options(options);

    match &flags.fqdn_name {
        Some(name) => reconciler.with_resolver(StaticHostIdentity::new(name.clone())),
        None => reconciler,
    }
}

/// Format an outcome for stdout.
pub fn render_outcome(outcome: &Outcome, format: OutputFormat, check: bool) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(outcome.to_json()?),
        OutputFormat::Text => {
            let status = if outcome.changed {
                "changed".yellow().bold()
            } else {
                "ok".green().bold()
            };
            let suffix = if check { " (check mode)" } else { "" };
            Ok(format!(
                "{}: {} is {}{}",
                status,
                outcome.path.cyan(),
                outcome.state,
                suffix
            ))
        }
    }
}
