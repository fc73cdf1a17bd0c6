//! hostcheck - Declarative host assertions.
//!
//! A check file lists named checks (file presence, process resource
//! limits), each described by a check type and a loose argument map. Every
//! check type registers a constructor in a [`CheckerRegistry`]; the
//! constructor validates and decodes the arguments into a typed checker,
//! and the checker evaluates itself against the live host.
//!
//! # Modules
//!
//! - [`checks`] - Checker trait, argument decoding, built-in checkers, registry
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Check file schema and loading
//! - [`error`] - Error types and result aliases
//! - [`report`] - Human and JSON report formatters
//! - [`runner`] - Sequential evaluation and outcome aggregation
//! - [`sys`] - Platform resource-limit access
//!
//! # Example
//!
//! ```
//! use hostcheck::checks::{Checker, FileChecker};
//!
//! let missing = FileChecker::exists("/definitely/missing/path");
//! let err = missing.check().unwrap_err();
//! assert!(err.is_assertion_failure());
//! assert!(err.to_string().contains("doesn't exist"));
//! ```

pub mod checks;
pub mod cli;
pub mod config;
pub mod error;
pub mod report;
pub mod runner;
pub mod sys;

pub use checks::{Checker, CheckerRegistry};
pub use error::{HostcheckError, Result};
