//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::DEFAULT_CONFIG_FILE;
use crate::report::OutputFormat;

/// hostcheck - Declarative host assertions.
#[derive(Debug, Parser)]
#[command(name = "hostcheck")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the check file
    #[arg(
        short,
        long,
        global = true,
        env = "HOSTCHECK_CONFIG",
        default_value = DEFAULT_CONFIG_FILE
    )]
    pub config: PathBuf,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Evaluate every check in the check file (default if no command specified)
    Run(RunArgs),

    /// List registered check types
    List(ListArgs),
}

/// Arguments for the `run` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct RunArgs {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,

    /// Stop after the first check that does not pass
    #[arg(long)]
    pub fail_fast: bool,
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ListArgs {
    /// Also list the resource-limit names `ulimit` accepts
    #[arg(long)]
    pub limits: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_subcommand_parses() {
        let cli = Cli::try_parse_from(["hostcheck"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.debug);
    }

    #[test]
    fn run_with_options() {
        let cli = Cli::try_parse_from([
            "hostcheck",
            "run",
            "--format",
            "json",
            "--fail-fast",
            "-c",
            "/etc/hostcheck.yml",
        ])
        .unwrap();
        assert_eq!(cli.config, PathBuf::from("/etc/hostcheck.yml"));
        match cli.command {
            Some(Commands::Run(args)) => {
                assert_eq!(args.format, OutputFormat::Json);
                assert!(args.fail_fast);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn list_with_limits() {
        let cli = Cli::try_parse_from(["hostcheck", "list", "--limits"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::List(ListArgs { limits: true }))));
    }

    #[test]
    fn rejects_unknown_format() {
        assert!(Cli::try_parse_from(["hostcheck", "run", "--format", "xml"]).is_err());
    }
}
