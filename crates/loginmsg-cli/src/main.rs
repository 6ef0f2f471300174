//! loginmsg CLI
//!
//! Sets or removes the system login banners and reports the result as JSON.

mod cli;
mod commands;
mod error;

use std::path::PathBuf;

use clap::{CommandFactory, Parser};
use colored::Colorize;
use loginmsg_core::{Failure, ModuleArgs};
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands, OutputFormat};
use commands::Settings;
use error::{CliError, Result};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let format = cli.format;
    if let Err(e) = run(cli) {
        report_failure(&e, format);
        std::process::exit(1);
    }
}

/// Logs go to stderr so stdout carries nothing but the result.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off"))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();
    tracing::debug!("Verbose mode enabled");
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Some(cmd) => execute_command(cmd, cli.root, cli.format),
        None => {
            println!("{} login banner manager", "loginmsg".green().bold());
            println!();
            println!("Run {} for available commands.", "loginmsg --help".cyan());
            Ok(())
        }
    }
}

fn execute_command(cmd: Commands, root: PathBuf, format: OutputFormat) -> Result<()> {
    match cmd {
        Commands::Apply {
            text,
            when,
            state,
            fqdn,
            flags,
        } => {
            let args = ModuleArgs {
                state,
                fqdn,
                ..ModuleArgs::new(text, when)
            };
            commands::run_apply(&Settings::new(root, format)?, &args, &flags)
        }
        Commands::Run { args_file, flags } => {
            commands::run_args_file(&Settings::new(root, format)?, &args_file, &flags)
        }
        Commands::Targets => commands::run_targets(&Settings::new(root, format)?),
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "loginmsg", &mut std::io::stdout());
            Ok(())
        }
    }
}

/// Failures are reported on stdout as a JSON record and on stderr for humans.
fn report_failure(error: &CliError, format: OutputFormat) {
    if format == OutputFormat::Json {
        match Failure::new(error.to_string()).to_json() {
            Ok(json) => println!("{json}"),
            Err(e) => tracing::error!(error = %e, "could not serialize failure"),
        }
    }
    eprintln!("{}: {}", "error".red().bold(), error);
}
