//! List command implementation.
//!
//! The `hostcheck list` command prints the registered check types.

use std::io::Write;

use crate::checks::registry;
use crate::cli::args::ListArgs;
use crate::error::Result;
use crate::sys;

use super::dispatcher::{Command, CommandResult};

/// The list command implementation.
pub struct ListCommand {
    args: ListArgs,
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(args: ListArgs) -> Self {
        Self { args }
    }
}

impl Command for ListCommand {
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult> {
        writeln!(out, "Check types:")?;
        for name in registry::global().type_names() {
            writeln!(out, "  {}", name)?;
        }

        if self.args.limits {
            writeln!(out)?;
            let names = sys::limit_names();
            if names.is_empty() {
                writeln!(out, "Resource limits are not supported on this platform")?;
            } else {
                writeln!(out, "Resource limit items:")?;
                for name in names {
                    writeln!(out, "  {}", name)?;
                }
            }
        }

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(limits: bool) -> String {
        let mut out = Vec::new();
        let result = ListCommand::new(ListArgs { limits })
            .execute(&mut out)
            .unwrap();
        assert!(result.success);
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn lists_builtin_types() {
        let output = list(false);
        assert!(output.contains("  file-exists\n"));
        assert!(output.contains("  file-does-not-exist\n"));
        assert!(output.contains("  ulimit\n"));
        assert!(!output.contains("Resource limit items"));
    }

    #[cfg(unix)]
    #[test]
    fn lists_limit_items_on_request() {
        let output = list(true);
        assert!(output.contains("Resource limit items:"));
        assert!(output.contains("  nofile\n"));
    }
}
