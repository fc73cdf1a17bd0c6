//! Argument decoding for check definitions.
//!
//! Check definitions carry a loosely-typed map of arguments straight from
//! YAML. [`ArgDecoder`] turns those values into the typed fields of a
//! checker one field at a time, reporting the first missing or mistyped
//! field as a structured error.
//!
//! Key lookup is case-insensitive: an exact key wins, otherwise the first
//! key whose lowercase form matches is used. A `null` value is treated the
//! same as an absent key.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

use crate::error::{HostcheckError, Result};

/// Raw arguments of a check definition.
pub type Args = HashMap<String, ArgValue>;

/// A loosely-typed argument value as read from configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ArgValue {
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
    List(Vec<ArgValue>),
    Map(BTreeMap<String, ArgValue>),
}

impl ArgValue {
    /// Name of the value's type, used in mismatch messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            ArgValue::Null => "null",
            ArgValue::Bool(_) => "boolean",
            ArgValue::Integer(_) => "integer",
            ArgValue::Float(_) => "float",
            ArgValue::String(_) => "string",
            ArgValue::List(_) => "list",
            ArgValue::Map(_) => "map",
        }
    }
}

impl From<&str> for ArgValue {
    fn from(value: &str) -> Self {
        ArgValue::String(value.to_string())
    }
}

impl From<String> for ArgValue {
    fn from(value: String) -> Self {
        ArgValue::String(value)
    }
}

impl From<bool> for ArgValue {
    fn from(value: bool) -> Self {
        ArgValue::Bool(value)
    }
}

impl From<i64> for ArgValue {
    fn from(value: i64) -> Self {
        ArgValue::Integer(value)
    }
}

/// Check that every listed key is present.
///
/// All keys are checked in the order given; the error names the first one
/// that is absent (or `null`).
pub fn required_args(args: &Args, keys: &[&str]) -> Result<()> {
    let decoder = ArgDecoder::new(args);
    match keys.iter().find(|key| decoder.lookup(key).is_none()) {
        Some(key) => Err(HostcheckError::MissingArgument {
            field: key.to_string(),
        }),
        None => Ok(()),
    }
}

/// Field-by-field decoder over a borrowed argument map.
#[derive(Debug, Clone, Copy)]
pub struct ArgDecoder<'a> {
    args: &'a Args,
}

impl<'a> ArgDecoder<'a> {
    pub fn new(args: &'a Args) -> Self {
        Self { args }
    }

    /// Fail with `MissingArgument` unless all `keys` are present.
    pub fn require(&self, keys: &[&str]) -> Result<()> {
        required_args(self.args, keys)
    }

    /// Find a non-null value for `key`.
    ///
    /// An exact key wins. Otherwise the case-folded matches are considered
    /// and the lexically smallest key is taken, so the result does not
    /// depend on map iteration order.
    fn lookup(&self, key: &str) -> Option<&'a ArgValue> {
        match self.args.get(key) {
            None | Some(ArgValue::Null) => {}
            Some(value) => return Some(value),
        }

        let wanted = key.to_lowercase();
        self.args
            .iter()
            .filter(|(k, v)| !matches!(v, ArgValue::Null) && k.to_lowercase() == wanted)
            .min_by(|(a, _), (b, _)| a.cmp(b))
            .map(|(_, v)| v)
    }

    /// Decode a string field.
    pub fn string(&self, key: &str) -> Result<Option<String>> {
        match self.lookup(key) {
            None => Ok(None),
            Some(ArgValue::String(s)) => Ok(Some(s.clone())),
            Some(other) => Err(mismatch(key, "a string", other.type_name())),
        }
    }

    /// Decode a boolean field.
    ///
    /// Accepts YAML booleans and the strings `true`/`false`/`yes`/`no`.
    pub fn boolean(&self, key: &str) -> Result<Option<bool>> {
        match self.lookup(key) {
            None => Ok(None),
            Some(ArgValue::Bool(b)) => Ok(Some(*b)),
            Some(ArgValue::String(s)) => match s.to_lowercase().as_str() {
                "true" | "yes" => Ok(Some(true)),
                "false" | "no" => Ok(Some(false)),
                _ => Err(mismatch(key, "a boolean", "string")),
            },
            Some(other) => Err(mismatch(key, "a boolean", other.type_name())),
        }
    }

    /// Decode a signed integer field.
    ///
    /// Accepts YAML integers and strings holding a decimal integer.
    pub fn integer(&self, key: &str) -> Result<Option<i64>> {
        match self.lookup(key) {
            None => Ok(None),
            Some(ArgValue::Integer(n)) => Ok(Some(*n)),
            Some(ArgValue::String(s)) => s
                .trim()
                .parse::<i64>()
                .map(Some)
                .map_err(|_| mismatch(key, "an integer", "string")),
            Some(other) => Err(mismatch(key, "an integer", other.type_name())),
        }
    }

    /// Decode an unsigned integer field, rejecting negative values.
    pub fn unsigned(&self, key: &str) -> Result<Option<u64>> {
        match self.integer(key)? {
            None => Ok(None),
            Some(n) => u64::try_from(n).map(Some).map_err(|_| {
                HostcheckError::InvalidArgument {
                    field: key.to_string(),
                    message: format!("expected a non-negative integer, got {}", n),
                }
            }),
        }
    }

    /// Log keys that no field consumed. They are not an error.
    pub fn note_unrecognized(&self, known: &[&str]) {
        for key in self.args.keys() {
            let lowered = key.to_lowercase();
            if !known.contains(&lowered.as_str()) {
                tracing::trace!("Ignoring unrecognized argument '{}'", key);
            }
        }
    }
}

fn mismatch(field: &str, expected: &'static str, found: &'static str) -> HostcheckError {
    HostcheckError::TypeMismatch {
        field: field.to_string(),
        expected,
        found,
    }
}
