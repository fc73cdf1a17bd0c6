//! Run command implementation.
//!
//! The `hostcheck run` command loads the check file, evaluates every check
//! with the process-wide registry, and prints the report.

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::checks::registry;
use crate::cli::args::RunArgs;
use crate::config::load_config_file;
use crate::error::Result;
use crate::report::{HumanFormatter, JsonFormatter, OutputFormat, ReportFormatter};
use crate::runner::{CheckRunner, RunOptions};

use super::dispatcher::{Command, CommandResult};

/// The run command implementation.
pub struct RunCommand {
    config_path: PathBuf,
    args: RunArgs,
    use_color: bool,
}

impl RunCommand {
    /// Create a new run command.
    pub fn new(config_path: &Path, args: RunArgs, use_color: bool) -> Self {
        Self {
            config_path: config_path.to_path_buf(),
            args,
            use_color,
        }
    }
}

impl Command for RunCommand {
    fn execute(&self, mut out: &mut dyn Write) -> Result<CommandResult> {
        let config = load_config_file(&self.config_path)?;
        tracing::debug!(
            "Running {} checks from {}",
            config.checks.len(),
            self.config_path.display()
        );

        let runner = CheckRunner::new(
            registry::global(),
            RunOptions {
                fail_fast: self.args.fail_fast,
            },
        );
        let report = runner.run(&config.checks);

        match self.args.format {
            OutputFormat::Human => HumanFormatter::new(self.use_color).format(&report, &mut out)?,
            OutputFormat::Json => JsonFormatter::new().format(&report, &mut out)?,
        }

        Ok(match report.exit_code() {
            0 => CommandResult::success(),
            code => CommandResult::failure(code),
        })
    }
}
