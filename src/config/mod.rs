//! Check file loading and schema.
//!
//! - Schema definitions in [`schema`]
//! - File loading in [`loader`]
//!
//! # Example
//!
//! ```
//! use hostcheck::config::parse_config;
//! use std::path::Path;
//!
//! let config = parse_config(
//!     "checks:\n  - type: file-exists\n    args: { name: /etc/hosts }\n",
//!     Path::new("checks.yml"),
//! )
//! .unwrap();
//! assert_eq!(config.checks[0].check_type, "file-exists");
//! ```

pub mod loader;
pub mod schema;

pub use loader::{load_config_file, parse_config, DEFAULT_CONFIG_FILE};
pub use schema::{CheckDefinition, ChecksConfig};
