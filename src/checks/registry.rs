//! Checker registry.
//!
//! The [`CheckerRegistry`] maps check-type names (`file-exists`, `ulimit`,
//! ...) to constructor functions. A registry is assembled during startup,
//! then installed once as the process-wide instance with [`init`]. After
//! that only lookups are possible.

use std::collections::HashMap;
use std::sync::OnceLock;

use super::args::Args;
use super::file::FileChecker;
use super::ulimit::ResourceLimitChecker;
use super::Checker;
use crate::config::CheckDefinition;
use crate::error::{HostcheckError, Result};

/// Builds a checker from raw arguments.
pub type Constructor = fn(&Args) -> Result<Box<dyn Checker>>;

static GLOBAL: OnceLock<CheckerRegistry> = OnceLock::new();

/// Table of available check types.
#[derive(Clone)]
pub struct CheckerRegistry {
    constructors: HashMap<String, Constructor>,
}

impl CheckerRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            constructors: HashMap::new(),
        }
    }

    /// Create a registry with all built-in check types.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register("file-exists", FileChecker::build_exists);
        registry.register("file-does-not-exist", FileChecker::build_does_not_exist);
        registry.register("ulimit", ResourceLimitChecker::build);
        registry
    }

    /// Register a constructor under `name`.
    ///
    /// Registering a name twice is a programming error: the later
    /// constructor wins, a warning is logged, and the replaced constructor
    /// is returned.
    pub fn register(&mut self, name: impl Into<String>, ctor: Constructor) -> Option<Constructor> {
        let name = name.into();
        let previous = self.constructors.insert(name.clone(), ctor);
        if previous.is_some() {
            tracing::warn!("Check type '{}' registered more than once", name);
        } else {
            tracing::debug!("Registered check type '{}'", name);
        }
        previous
    }

    /// Look up the constructor for a check type.
    pub fn lookup(&self, name: &str) -> Result<Constructor> {
        self.constructors
            .get(name)
            .copied()
            .ok_or_else(|| HostcheckError::UnknownCheckType {
                name: name.to_string(),
            })
    }

    /// Build the checker a definition describes.
    pub fn build(&self, definition: &CheckDefinition) -> Result<Box<dyn Checker>> {
        let ctor = self.lookup(&definition.check_type)?;
        ctor(&definition.args)
    }

    /// Registered type names, sorted.
    pub fn type_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.constructors.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }

    /// Get the number of registered check types.
    pub fn len(&self) -> usize {
        self.constructors.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.constructors.is_empty()
    }
}

impl Default for CheckerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for CheckerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CheckerRegistry")
            .field("types", &self.type_names())
            .finish()
    }
}

/// Install `registry` as the process-wide registry.
///
/// Fails with `RegistryAlreadyInitialized` if a registry is already
/// installed, including one installed implicitly by [`global`].
pub fn init(registry: CheckerRegistry) -> Result<()> {
    GLOBAL
        .set(registry)
        .map_err(|_| HostcheckError::RegistryAlreadyInitialized)
}

/// The process-wide registry.
///
/// Falls back to [`CheckerRegistry::with_builtins`] when [`init`] was never
/// called.
pub fn global() -> &'static CheckerRegistry {
    GLOBAL.get_or_init(CheckerRegistry::with_builtins)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::ArgValue;

    #[derive(Debug)]
    struct AlwaysPasses;

    impl Checker for AlwaysPasses {
        fn from_args(_args: &Args) -> Result<Self> {
            Ok(AlwaysPasses)
        }
        fn check(&self) -> Result<()> {
            Ok(())
        }
        fn describe(&self) -> String {
            "always".to_string()
        }
    }

    fn build_always(args: &Args) -> Result<Box<dyn Checker>> {
        Ok(Box::new(AlwaysPasses::from_args(args)?))
    }

    fn name_args(path: &str) -> Args {
        let mut args = Args::new();
        args.insert("name".to_string(), ArgValue::from(path));
        args
    }

    #[test]
    fn registry_new_is_empty() {
        let registry = CheckerRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
    }

    #[test]
    fn registry_with_builtins_has_types() {
        let registry = CheckerRegistry::with_builtins();
        assert_eq!(
            registry.type_names(),
            vec!["file-does-not-exist", "file-exists", "ulimit"]
        );
    }

    #[test]
    fn lookup_unknown_fails() {
        let registry = CheckerRegistry::with_builtins();
        let err = registry.lookup("port-open").unwrap_err();
        assert!(matches!(err, HostcheckError::UnknownCheckType { name } if name == "port-open"));
    }

    #[test]
    fn file_exists_defaults_to_expecting_presence() {
        let registry = CheckerRegistry::with_builtins();
        let ctor = registry.lookup("file-exists").unwrap();
        let checker = ctor(&name_args("/etc/hosts")).unwrap();
        assert_eq!(checker.describe(), "file-exists /etc/hosts");
        assert!(format!("{:?}", checker).contains("exists: true"));
    }

    #[test]
    fn file_types_disagree_on_missing_path() {
        let registry = CheckerRegistry::with_builtins();
        let args = name_args("/definitely/missing/path");
        let exists = registry.lookup("file-exists").unwrap()(&args).unwrap();
        let absent = registry.lookup("file-does-not-exist").unwrap()(&args).unwrap();
        assert!(exists.check().is_err());
        assert!(absent.check().is_ok());
    }

    #[test]
    fn register_custom_type() {
        let mut registry = CheckerRegistry::with_builtins();
        assert!(registry.register("always", build_always).is_none());
        let checker = registry.lookup("always").unwrap()(&Args::new()).unwrap();
        assert!(checker.check().is_ok());
    }

    #[test]
    fn duplicate_registration_returns_replaced() {
        let mut registry = CheckerRegistry::new();
        registry.register("file-exists", FileChecker::build_exists);
        let replaced = registry.register("file-exists", build_always);
        assert!(replaced.is_some());
        assert_eq!(registry.len(), 1);
        let checker = registry.lookup("file-exists").unwrap()(&Args::new()).unwrap();
        assert_eq!(checker.describe(), "always");
    }

    #[test]
    fn build_uses_definition_type() {
        let registry = CheckerRegistry::with_builtins();
        let definition = CheckDefinition {
            name: None,
            check_type: "file-does-not-exist".to_string(),
            args: name_args("/definitely/missing/path"),
        };
        assert!(registry.build(&definition).unwrap().check().is_ok());
    }

    #[test]
    fn build_propagates_missing_argument() {
        let registry = CheckerRegistry::with_builtins();
        let definition = CheckDefinition {
            name: None,
            check_type: "file-exists".to_string(),
            args: Args::new(),
        };
        assert!(matches!(
            registry.build(&definition),
            Err(HostcheckError::MissingArgument { .. })
        ));
    }

    #[test]
    fn global_is_installed_once() {
        let registry = global();
        assert!(registry.lookup("ulimit").is_ok());
        assert!(matches!(
            init(CheckerRegistry::new()),
            Err(HostcheckError::RegistryAlreadyInitialized)
        ));
        assert!(std::ptr::eq(registry, global()));
    }
}
