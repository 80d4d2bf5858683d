//! Required style library resolution.
//!
//! Source stylesheets invoke mixins from helper libraries named in
//! `require`. The host compiler must resolve every name before
//! compilation begins; an unresolved library is fatal because the mixins
//! it provides would otherwise be undefined.

use rustc_hash::FxHashSet;
use std::path::PathBuf;

/// Resolves a style library name to its on-disk location.
///
/// Implemented by the host tool's extension loading mechanism.
pub trait LibraryResolver {
    /// Resolve `name`, returning the library root if it is available.
    fn resolve(&self, name: &str) -> Option<PathBuf>;
}

/// Resolver backed by a fixed set of known library names.
///
/// Useful when the host registers its bundled libraries up front. The
/// resolved location is the bare library name; the host maps it to its
/// own load path.
#[derive(Debug, Clone, Default)]
pub struct StaticResolver {
    available: FxHashSet<String>,
}

impl StaticResolver {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            available: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Register an available library.
    pub fn register(&mut self, name: impl Into<String>) {
        self.available.insert(name.into());
    }
}

impl LibraryResolver for StaticResolver {
    fn resolve(&self, name: &str) -> Option<PathBuf> {
        self.available.contains(name).then(|| PathBuf::from(name))
    }
}

/// Resolver that probes search roots for a directory named after the
/// library (e.g. `<root>/bootstrap-sass/`).
///
/// Roots are probed in order; the first hit wins.
#[derive(Debug, Clone)]
pub struct DirResolver {
    search_roots: Vec<PathBuf>,
}

impl DirResolver {
    pub fn new(search_roots: impl IntoIterator<Item = PathBuf>) -> Self {
        Self {
            search_roots: search_roots.into_iter().collect(),
        }
    }
}

impl LibraryResolver for DirResolver {
    fn resolve(&self, name: &str) -> Option<PathBuf> {
        self.search_roots
            .iter()
            .map(|root| root.join(name))
            .find(|candidate| candidate.is_dir())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BuildConfig, ConfigError};
    use std::fs;

    #[test]
    fn test_static_resolver() {
        let resolver = StaticResolver::new(["bootstrap-sass", "susy"]);
        assert_eq!(
            resolver.resolve("bootstrap-sass"),
            Some(PathBuf::from("bootstrap-sass"))
        );
        assert_eq!(resolver.resolve("compass-mixins"), None);
    }

    #[test]
    fn test_static_resolver_register() {
        let mut resolver = StaticResolver::default();
        assert_eq!(resolver.resolve("susy"), None);
        resolver.register("susy");
        assert_eq!(resolver.resolve("susy"), Some(PathBuf::from("susy")));
    }

    #[test]
    fn test_dir_resolver() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("bootstrap-sass")).unwrap();

        let resolver = DirResolver::new([dir.path().to_path_buf()]);
        assert_eq!(
            resolver.resolve("bootstrap-sass"),
            Some(dir.path().join("bootstrap-sass"))
        );
        assert_eq!(resolver.resolve("susy"), None);
    }

    #[test]
    fn test_dir_resolver_probes_roots_in_order() {
        let first = tempfile::tempdir().unwrap();
        let second = tempfile::tempdir().unwrap();
        fs::create_dir(second.path().join("susy")).unwrap();

        let resolver = DirResolver::new([first.path().to_path_buf(), second.path().to_path_buf()]);
        assert_eq!(resolver.resolve("susy"), Some(second.path().join("susy")));
    }

    #[test]
    fn test_resolve_libraries() {
        let config = BuildConfig::load().unwrap();
        let resolver = StaticResolver::new(["bootstrap-sass"]);
        let resolved = config.resolve_libraries(&resolver).unwrap();
        assert_eq!(resolved, vec![PathBuf::from("bootstrap-sass")]);
    }

    #[test]
    fn test_resolve_libraries_missing_is_fatal() {
        let config = BuildConfig::load().unwrap();
        let resolver = StaticResolver::new(["susy"]);
        let err = config.resolve_libraries(&resolver).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::MissingDependency(name) if name == "bootstrap-sass"
        ));
    }
}
