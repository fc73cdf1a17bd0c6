//! Check file schema.

use serde::{Deserialize, Serialize};

use crate::checks::Args;

/// Root of a check file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChecksConfig {
    /// Checks in evaluation order.
    #[serde(default)]
    pub checks: Vec<CheckDefinition>,
}

/// One declarative check: a type name plus its raw arguments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CheckDefinition {
    /// Optional display name used in reports.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Registered check type, e.g. `file-exists`.
    #[serde(rename = "type")]
    pub check_type: String,

    /// Arguments handed to the checker's constructor.
    #[serde(default)]
    pub args: Args,
}

impl CheckDefinition {
    /// Name shown in reports: the explicit name, else the type.
    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.check_type)
    }
}
