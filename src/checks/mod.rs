//! Checkers and the registry that builds them.
//!
//! A check definition names a check type and carries a loose argument map.
//! The [`CheckerRegistry`] maps the type name to a constructor, the
//! constructor decodes the arguments through [`ArgDecoder`], and the
//! resulting [`Checker`] evaluates itself against the live host.
//!
//! # Modules
//!
//! - [`args`] - Argument values and the field-by-field decoder
//! - [`file`] - `file-exists` / `file-does-not-exist`
//! - [`ulimit`] - Process resource-limit thresholds
//! - [`registry`] - Type name to constructor table
//!
//! # Example
//!
//! ```
//! use hostcheck::checks::{ArgValue, Args, CheckerRegistry};
//!
//! let registry = CheckerRegistry::with_builtins();
//! let ctor = registry.lookup("file-does-not-exist").unwrap();
//!
//! let mut args = Args::new();
//! args.insert("name".to_string(), ArgValue::from("/definitely/missing/path"));
//! let checker = ctor(&args).unwrap();
//! assert!(checker.check().is_ok());
//! ```

pub mod args;
pub mod file;
pub mod registry;
pub mod ulimit;

pub use args::{required_args, ArgDecoder, ArgValue, Args};
pub use file::FileChecker;
pub use registry::{CheckerRegistry, Constructor};
pub use ulimit::{Limit, ResourceLimitChecker};

use crate::error::Result;

/// A parsed, immutable assertion about the host.
///
/// Implementations hold only the fields set at construction. `check` reads
/// OS state and never mutates the checker, so one instance can be checked
/// repeatedly or from several threads.
pub trait Checker: Send + Sync + std::fmt::Debug {
    /// Build a fully populated checker from raw arguments.
    ///
    /// Fails with the first missing or invalid argument. Unrecognized keys
    /// are ignored.
    fn from_args(args: &Args) -> Result<Self>
    where
        Self: Sized;

    /// Evaluate the assertion.
    ///
    /// `Ok(())` means the host satisfies it. A violated expectation is
    /// reported as [`HostcheckError::AssertionFailed`](crate::HostcheckError::AssertionFailed);
    /// any other error means the check could not be evaluated.
    fn check(&self) -> Result<()>;

    /// Short label for reports, e.g. `file-exists /etc/hosts`.
    fn describe(&self) -> String;
}
