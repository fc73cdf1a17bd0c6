//! Check file loading.

use crate::config::schema::ChecksConfig;
use crate::error::{HostcheckError, Result};
use std::fs;
use std::path::Path;

/// Default check file name, resolved against the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "checks.yml";

/// Load a check file and parse it into [`ChecksConfig`].
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<ChecksConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            HostcheckError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            HostcheckError::Io(e)
        }
    })?;

    tracing::debug!("Loaded check file {}", path.display());
    parse_config(&content, path)
}

/// Parse YAML content into [`ChecksConfig`].
///
/// An empty document yields an empty check list.
///
/// # Arguments
///
/// * `content` - The YAML content to parse
/// * `source_path` - Path for error reporting
pub fn parse_config(content: &str, source_path: &Path) -> Result<ChecksConfig> {
    if content.trim().is_empty() {
        return Ok(ChecksConfig::default());
    }
    serde_yaml::from_str(content).map_err(|e| HostcheckError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}
