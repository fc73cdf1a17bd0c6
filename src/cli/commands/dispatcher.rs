//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::io::Write;
use std::path::PathBuf;

use crate::cli::args::{Cli, Commands, RunArgs};
use crate::error::Result;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command, writing its output to `out`.
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    config_path: PathBuf,
    use_color: bool,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given check file.
    pub fn new(config_path: PathBuf, use_color: bool) -> Self {
        Self {
            config_path,
            use_color,
        }
    }

    /// Dispatch and execute a command.
    pub fn dispatch(&self, cli: &Cli, out: &mut dyn Write) -> Result<CommandResult> {
        match &cli.command {
            Some(Commands::Run(args)) => {
                let cmd =
                    super::run::RunCommand::new(&self.config_path, args.clone(), self.use_color);
                cmd.execute(out)
            }
            Some(Commands::List(args)) => {
                let cmd = super::list::ListCommand::new(args.clone());
                cmd.execute(out)
            }
            None => {
                // Default to run command with default args
                let cmd = super::run::RunCommand::new(
                    &self.config_path,
                    RunArgs::default(),
                    self.use_color,
                );
                cmd.execute(out)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn command_result_success() {
        let result = CommandResult::success();
        assert!(result.success);
        assert_eq!(result.exit_code, 0);
    }

    #[test]
    fn command_result_failure() {
        let result = CommandResult::failure(1);
        assert!(!result.success);
        assert_eq!(result.exit_code, 1);
    }

    fn dispatch(args: &[&str], config_path: PathBuf) -> (Result<CommandResult>, String) {
        let cli = Cli::try_parse_from(args).unwrap();
        let mut out = Vec::new();
        let result = CommandDispatcher::new(config_path, false).dispatch(&cli, &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn dispatches_list() {
        let (result, output) = dispatch(&["hostcheck", "list"], PathBuf::from("unused.yml"));
        assert!(result.unwrap().success);
        assert!(output.contains("Check types:"));
    }

    #[test]
    fn no_subcommand_runs_the_configured_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("host.yml");
        fs::write(
            &path,
            "checks:\n  - type: file-exists\n    args: { name: /definitely/missing/path }\n",
        )
        .unwrap();

        let (result, output) = dispatch(&["hostcheck"], path);
        let result = result.unwrap();
        assert!(!result.success);
        assert_eq!(result.exit_code, 1);
        assert!(output.contains("0 passed, 1 failed, 0 errored"));
    }
}
