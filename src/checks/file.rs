//! File presence checks.
//!
//! Registered as two check types sharing one implementation:
//!
//! - `file-exists` - `exists` defaults to `true` and may be overridden
//! - `file-does-not-exist` - `exists` is always `false`, whatever the args say
//!
//! Paths are used exactly as written. There is no `~` expansion, and on
//! Windows the path must use Windows syntax.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::args::{ArgDecoder, Args};
use super::Checker;
use crate::error::{HostcheckError, Result};

const KNOWN_ARGS: &[&str] = &["name", "exists"];

/// Asserts that a path exists, or that it does not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileChecker {
    /// Path to inspect.
    pub name: PathBuf,
    /// Whether the path is expected to exist.
    pub exists: bool,
}

impl FileChecker {
    /// Expect `name` to exist.
    pub fn exists(name: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            exists: true,
        }
    }

    /// Expect `name` to be absent.
    pub fn absent(name: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            exists: false,
        }
    }

    /// Constructor registered as `file-exists`.
    pub fn build_exists(args: &Args) -> Result<Box<dyn Checker>> {
        Ok(Box::new(Self::from_args(args)?))
    }

    /// Constructor registered as `file-does-not-exist`.
    ///
    /// The check type decides the expectation. A config-provided `exists`
    /// is never decoded, whatever its type.
    pub fn build_does_not_exist(args: &Args) -> Result<Box<dyn Checker>> {
        Ok(Box::new(Self::decode(args, Some(false))?))
    }

    /// Decode `args`, taking `exists` from `forced` when it is set.
    fn decode(args: &Args, forced: Option<bool>) -> Result<Self> {
        let decoder = ArgDecoder::new(args);
        decoder.require(&["name"])?;

        let name = decoder
            .string("name")?
            .ok_or_else(|| HostcheckError::MissingArgument {
                field: "name".to_string(),
            })?;
        let exists = match forced {
            Some(exists) => exists,
            None => decoder.boolean("exists")?.unwrap_or(true),
        };
        decoder.note_unrecognized(KNOWN_ARGS);

        Ok(Self {
            name: PathBuf::from(name),
            exists,
        })
    }

    fn path(&self) -> &Path {
        &self.name
    }
}

impl Checker for FileChecker {
    fn from_args(args: &Args) -> Result<Self> {
        Self::decode(args, None)
    }

    fn check(&self) -> Result<()> {
        let path = self.path();
        let present = match std::fs::metadata(path) {
            Ok(_) => true,
            Err(e) if e.kind() == ErrorKind::NotFound => false,
            Err(e) => {
                return Err(HostcheckError::PathInaccessible {
                    path: path.to_path_buf(),
                    source: e,
                })
            }
        };

        match (present, self.exists) {
            (false, true) => Err(HostcheckError::AssertionFailed {
                subject: path.display().to_string(),
                message: format!("{} doesn't exist and should", path.display()),
            }),
            (true, false) => Err(HostcheckError::AssertionFailed {
                subject: path.display().to_string(),
                message: format!("{} exists and shouldn't", path.display()),
            }),
            _ => Ok(()),
        }
    }

    fn describe(&self) -> String {
        if self.exists {
            format!("file-exists {}", self.name.display())
        } else {
            format!("file-does-not-exist {}", self.name.display())
        }
    }
}
