//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

/// loginmsg - Set or remove the pre-login and post-login banners
#[derive(Parser, Debug)]
#[command(name = "loginmsg")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Filesystem root the banner files are resolved under
    #[arg(long, global = true, env = "LOGINMSG_ROOT", default_value = "/")]
    pub root: PathBuf,

    /// Output format for results
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// How results are printed on stdout
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// One JSON object per invocation
    #[default]
    Json,
    /// Coloured one-line summary
    Text,
}

/// Flags shared by every reconciling command
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct ReconcileFlags {
    /// Predict the change without modifying any file
    #[arg(long)]
    pub check: bool,

    /// Report no change when the banner already holds the same content
    #[arg(long)]
    pub compare: bool,

    /// Write through a temp file and rename instead of rewriting in place
    #[arg(long)]
    pub atomic: bool,

    /// Flush the banner to disk before exiting
    #[arg(long)]
    pub fsync: bool,

    /// Use this name instead of resolving the host's FQDN
    #[arg(long, value_name = "NAME")]
    pub fqdn_name: Option<String>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Set or remove a banner from command-line arguments
    ///
    /// Examples:
    ///   loginmsg apply --text "Authorized use only" --when before --fqdn
    ///   loginmsg apply --text unused --when after --state absent
    ///   loginmsg apply --text "Maintenance tonight" --when after --check
    Apply {
        /// Banner text
        #[arg(long, allow_hyphen_values = true)]
        text: String,

        /// Which banner: before (pre-login) or after (post-login)
        #[arg(long)]
        when: String,

        /// present or absent
        #[arg(long, default_value = "present")]
        state: String,

        /// Append a "Server: <fqdn>" line
        #[arg(long)]
        fqdn: bool,

        #[command(flatten)]
        flags: ReconcileFlags,
    },

    /// Set or remove a banner from an argument document (JSON, YAML or TOML)
    Run {
        /// Path to the argument document
        args_file: PathBuf,

        #[command(flatten)]
        flags: ReconcileFlags,
    },

    /// Show the banner files managed under the root
    Targets,

    /// Generate shell completions
    ///
    /// Examples:
    ///   loginmsg completions bash > ~/.local/share/bash-completion/completions/loginmsg
    ///   loginmsg completions zsh > ~/.zfunc/_loginmsg
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_apply_defaults() {
        let cli = Cli::parse_from(["loginmsg", "apply", "--text", "Hi", "--when", "before"]);
        match cli.command {
            Some(Commands::Apply {
                text,
                when,
                state,
                fqdn,
                flags,
            }) => {
                assert_eq!(text, "Hi");
                assert_eq!(when, "before");
                assert_eq!(state, "present");
                assert!(!fqdn);
                assert_eq!(flags, ReconcileFlags::default());
            }
            _ => panic!("Expected Apply command"),
        }
        assert_eq!(cli.format, OutputFormat::Json);
    }

    #[test]
    fn parse_apply_accepts_out_of_domain_values() {
        let cli = Cli::parse_from([
            "loginmsg", "apply", "--text", "x", "--when", "during", "--state", "gone",
        ]);
        assert!(matches!(
            cli.command,
            Some(Commands::Apply { ref when, ref state, .. }) if when == "during" && state == "gone"
        ));
    }

    #[test]
    fn parse_apply_text_starting_with_dash() {
        let cli = Cli::parse_from(["loginmsg", "apply", "--text", "-- notice --", "--when", "after"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Apply { ref text, .. }) if text == "-- notice --"
        ));
    }

    #[test]
    fn parse_run_with_flags() {
        let cli = Cli::parse_from([
            "loginmsg", "--root", "/mnt/image", "run", "args.yml", "--check", "--atomic",
        ]);
        assert_eq!(cli.root, PathBuf::from("/mnt/image"));
        match cli.command {
            Some(Commands::Run { args_file, flags }) => {
                assert_eq!(args_file, PathBuf::from("args.yml"));
                assert!(flags.check);
                assert!(flags.atomic);
                assert!(!flags.compare);
            }
            _ => panic!("Expected Run command"),
        }
    }

    #[test]
    fn parse_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["loginmsg", "targets", "--format", "text", "-v"]);
        assert!(cli.verbose);
        assert_eq!(cli.format, OutputFormat::Text);
        assert!(matches!(cli.command, Some(Commands::Targets)));
    }

    #[test]
    fn parse_completions_command() {
        let cli = Cli::parse_from(["loginmsg", "completions", "bash"]);
        assert!(matches!(cli.command, Some(Commands::Completions { .. })));
    }
}
