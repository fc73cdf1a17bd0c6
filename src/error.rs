//! Error types for hostcheck operations.
//!
//! This module defines [`HostcheckError`], the error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Configuration and platform errors surface when a checker is built and
//!   stop that one check definition
//! - [`HostcheckError::AssertionFailed`] is the normal "check failed" outcome
//!   returned from [`Checker::check`](crate::checks::Checker::check)

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for hostcheck operations.
#[derive(Debug, Error)]
pub enum HostcheckError {
    /// A required argument key is absent from the check definition.
    #[error("Missing required argument: {field}")]
    MissingArgument { field: String },

    /// An argument value cannot be coerced to the field's type.
    #[error("Argument '{field}' must be {expected}, got {found}")]
    TypeMismatch {
        field: String,
        expected: &'static str,
        found: &'static str,
    },

    /// An argument has the right type but an unusable value.
    #[error("Invalid value for argument '{field}': {message}")]
    InvalidArgument { field: String, message: String },

    /// Resource-limit name not present in the platform name table.
    #[error("Unknown resource limit item: \"{item}\"")]
    UnknownResourceItem { item: String },

    /// The current platform lacks the capability a checker needs.
    #[error("{capability} is not supported on this platform")]
    UnsupportedPlatform { capability: String },

    /// The check ran, but the observed state violates the expectation.
    #[error("{message}")]
    AssertionFailed { subject: String, message: String },

    /// A path could not be inspected for a reason other than absence.
    #[error("Cannot inspect {}: {source}", path.display())]
    PathInaccessible {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No checker is registered under the given type name.
    #[error("Unknown check type: {name}")]
    UnknownCheckType { name: String },

    /// The process-wide registry was installed more than once.
    #[error("Checker registry is already initialized")]
    RegistryAlreadyInitialized,

    /// Check file not found at the given location.
    #[error("Configuration not found: {}", path.display())]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse the check file.
    #[error("Failed to parse config at {}: {message}", path.display())]
    ConfigParseError { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl HostcheckError {
    /// Whether this is an expected check failure rather than a fault.
    pub fn is_assertion_failure(&self) -> bool {
        matches!(self, HostcheckError::AssertionFailed { .. })
    }
}

/// Result type alias for hostcheck operations.
pub type Result<T> = std::result::Result<T, HostcheckError>;
