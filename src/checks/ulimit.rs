//! Process resource-limit checks.
//!
//! Type: `ulimit`
//!
//! Arguments:
//! - `item` (required): symbolic limit name, see [`crate::sys::limit_names`]
//! - `limit` (required): minimum value; `-1` requires the limit to be unlimited
//! - `type` (optional): `"hard"` (default) or `"soft"`
//!
//! Only unix platforms expose resource limits. Elsewhere construction fails
//! with `UnsupportedPlatform`.

use std::fmt;

use super::args::{ArgDecoder, Args};
use super::Checker;
use crate::error::{HostcheckError, Result};
use crate::sys::{self, LimitPair};

const KNOWN_ARGS: &[&str] = &["item", "limit", "type"];

/// Required minimum for a resource limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Limit {
    /// The limit must be `RLIM_INFINITY`.
    Unlimited,
    /// The limit must be at least this value.
    AtLeast(u64),
}

impl Limit {
    /// Interpret a configured integer, where `-1` means unlimited.
    pub fn from_config(value: i64) -> Result<Self> {
        match value {
            -1 => Ok(Limit::Unlimited),
            n if n < -1 => Err(HostcheckError::InvalidArgument {
                field: "limit".to_string(),
                message: format!("expected -1 (unlimited) or a non-negative integer, got {}", n),
            }),
            n => Ok(Limit::AtLeast(n as u64)),
        }
    }

    fn satisfied_by(self, observed: u64) -> bool {
        match self {
            Limit::Unlimited => observed == LimitPair::UNLIMITED,
            Limit::AtLeast(_) if observed == LimitPair::UNLIMITED => true,
            Limit::AtLeast(min) => observed >= min,
        }
    }
}

impl fmt::Display for Limit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Limit::Unlimited => write!(f, "unlimited"),
            Limit::AtLeast(n) => write!(f, "{}", n),
        }
    }
}

/// Asserts that a process resource limit is at least a given value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceLimitChecker {
    /// Symbolic limit name, e.g. `nofile`.
    pub item: String,
    /// Required minimum.
    pub limit: Limit,
    /// Check the hard limit when `true`, the soft limit otherwise.
    pub hard: bool,
}

impl ResourceLimitChecker {
    /// Constructor registered as `ulimit`.
    pub fn build(args: &Args) -> Result<Box<dyn Checker>> {
        Ok(Box::new(Self::from_args(args)?))
    }

    fn kind(&self) -> &'static str {
        if self.hard {
            "hard"
        } else {
            "soft"
        }
    }
}

impl Checker for ResourceLimitChecker {
    fn from_args(args: &Args) -> Result<Self> {
        let decoder = ArgDecoder::new(args);
        decoder.require(&["item", "limit"])?;

        let item = decoder
            .string("item")?
            .ok_or_else(|| HostcheckError::MissingArgument {
                field: "item".to_string(),
            })?;
        let limit = decoder
            .integer("limit")?
            .ok_or_else(|| HostcheckError::MissingArgument {
                field: "limit".to_string(),
            })?;
        let limit = Limit::from_config(limit)?;

        let hard = match decoder.string("type")? {
            None => true,
            Some(kind) => match kind.to_lowercase().as_str() {
                "hard" => true,
                "soft" => false,
                _ => {
                    return Err(HostcheckError::InvalidArgument {
                        field: "type".to_string(),
                        message: format!("expected \"hard\" or \"soft\", got \"{}\"", kind),
                    })
                }
            },
        };
        decoder.note_unrecognized(KNOWN_ARGS);

        sys::validate_limit_name(&item)?;

        Ok(Self { item, limit, hard })
    }

    fn check(&self) -> Result<()> {
        let pair = sys::read_limit(&self.item)?;
        let observed = if self.hard { pair.hard } else { pair.soft };

        if self.limit.satisfied_by(observed) {
            return Ok(());
        }

        Err(HostcheckError::AssertionFailed {
            subject: self.item.clone(),
            message: format!(
                "process {} limit for \"{}\" is {}, lower than required ({})",
                self.kind(),
                self.item,
                render(observed),
                self.limit
            ),
        })
    }

    fn describe(&self) -> String {
        format!("ulimit {} {} >= {}", self.kind(), self.item, self.limit)
    }
}

fn render(value: u64) -> String {
    if value == LimitPair::UNLIMITED {
        "unlimited".to_string()
    } else {
        value.to_string()
    }
}
