//! Build configuration for stylesheet compilation.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── library    # Required style library resolution
//! ├── syntax     # Stylesheet source dialect
//! ├── types/     # Utility types
//! │   ├── error  # ConfigError, ConfigDiagnostics
//! │   ├── field  # FieldPath
//! │   └── handle # Global config handle
//! ├── util       # Config file discovery, path normalization
//! └── mod.rs     # BuildConfig (this file)
//! ```
//!
//! The configuration is a single flat record. It can be produced from the
//! built-in literals ([`BuildConfig::load`]) or read from a TOML file
//! ([`BuildConfig::from_path`]):
//!
//! ```toml
//! project_root = "argus/static/argus"
//! css_output_dir = "css"
//! source_dir = "sass"
//! images_dir = "images"
//! scripts_dir = "js"
//! use_relative_asset_urls = true
//! emit_line_comments = false
//! preferred_syntax = "indented"
//! require = ["bootstrap-sass"]
//! ```

mod library;
mod syntax;
pub mod types;
mod util;

pub use library::{DirResolver, LibraryResolver, StaticResolver};
pub use syntax::SyntaxDialect;
pub use types::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath, cfg, init_config};
pub use util::{find_config_file, normalize_path};

use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Build configuration handed to the stylesheet compiler host.
///
/// Created once at host startup and never mutated afterwards. All
/// directory fields except [`project_root`](Self::project_root) are
/// relative to the project root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Absolute path to the config file, when loaded from disk
    /// (internal use only).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,

    /// Base directory for all relative paths below.
    pub project_root: PathBuf,

    /// Where compiled stylesheets are written.
    pub css_output_dir: PathBuf,

    /// Where source stylesheets are read from.
    pub source_dir: PathBuf,

    /// Where image assets referenced by stylesheets live.
    pub images_dir: PathBuf,

    /// Where JavaScript assets live.
    pub scripts_dir: PathBuf,

    /// Generate asset URLs relative to the output stylesheet instead of
    /// absolute paths.
    pub use_relative_asset_urls: bool,

    /// Annotate compiled output with source line comments.
    pub emit_line_comments: bool,

    /// Source dialect preferred when a stylesheet exists in both.
    pub preferred_syntax: SyntaxDialect,

    /// Style libraries the host must load before compilation begins.
    pub require: Vec<String>,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            config_path: None,
            project_root: "argus/static/argus".into(),
            css_output_dir: "css".into(),
            source_dir: "sass".into(),
            images_dir: "images".into(),
            scripts_dir: "js".into(),
            use_relative_asset_urls: true,
            emit_line_comments: false,
            preferred_syntax: SyntaxDialect::Indented,
            require: vec!["bootstrap-sass".into()],
        }
    }
}

/// Field paths used in diagnostics.
struct BuildConfigFields {
    project_root: FieldPath,
    css_output_dir: FieldPath,
    source_dir: FieldPath,
    images_dir: FieldPath,
    scripts_dir: FieldPath,
    require: FieldPath,
}

impl BuildConfig {
    const FIELDS: BuildConfigFields = BuildConfigFields {
        project_root: FieldPath::new("project_root"),
        css_output_dir: FieldPath::new("css_output_dir"),
        source_dir: FieldPath::new("source_dir"),
        images_dir: FieldPath::new("images_dir"),
        scripts_dir: FieldPath::new("scripts_dir"),
        require: FieldPath::new("require"),
    };

    /// Produce the built-in configuration.
    ///
    /// Deterministic and free of I/O: repeated calls return
    /// field-for-field identical records.
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default();
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let (config, _) = Self::parse_with_ignored(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a file path with unknown field detection.
    ///
    /// The file handle is released as soon as parsing finishes; unknown
    /// fields are warned about and skipped rather than rejected.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (mut config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        config.config_path = Some(normalize_path(path));
        config.validate()?;
        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        crate::log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {field}");
        }
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate the configuration.
    ///
    /// Collects all violations and returns them at once. A wrong path or
    /// dialect would silently corrupt build output, so nothing here is
    /// recovered silently.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut diag = ConfigDiagnostics::new();

        if self.project_root.as_os_str().is_empty() {
            diag.error(Self::FIELDS.project_root, "path must not be empty");
        }

        // Directory fields are joined onto project_root; absolute values
        // would escape the project tree.
        for (field, dir) in [
            (Self::FIELDS.css_output_dir, &self.css_output_dir),
            (Self::FIELDS.source_dir, &self.source_dir),
            (Self::FIELDS.images_dir, &self.images_dir),
            (Self::FIELDS.scripts_dir, &self.scripts_dir),
        ] {
            if dir.as_os_str().is_empty() {
                diag.error(field, "path must not be empty");
            } else if dir.is_absolute() {
                diag.error_with_hint(
                    field,
                    format!("`{}` is absolute", dir.display()),
                    "use a path relative to project_root",
                );
            }
        }

        for name in &self.require {
            if name.trim().is_empty() {
                diag.error(Self::FIELDS.require, "library name must not be empty");
            }
        }

        diag.into_result().map_err(ConfigError::Invalid)
    }

    // ========================================================================
    // path resolution
    // ========================================================================

    /// Get the project root directory.
    pub fn root(&self) -> &Path {
        &self.project_root
    }

    /// Join a path with the project root.
    pub fn root_join(&self, path: impl AsRef<Path>) -> PathBuf {
        self.project_root.join(path)
    }

    /// Directory compiled stylesheets are written to.
    pub fn css_output_path(&self) -> PathBuf {
        self.root_join(&self.css_output_dir)
    }

    /// Directory source stylesheets are read from.
    pub fn source_path(&self) -> PathBuf {
        self.root_join(&self.source_dir)
    }

    /// Directory image assets are read from.
    pub fn images_path(&self) -> PathBuf {
        self.root_join(&self.images_dir)
    }

    /// Directory JavaScript assets are read from.
    pub fn scripts_path(&self) -> PathBuf {
        self.root_join(&self.scripts_dir)
    }

    /// Absolute project root with tilde expansion.
    ///
    /// The stored record keeps the literal value; only the returned path
    /// is expanded and normalized.
    pub fn absolute_root(&self) -> PathBuf {
        match self.project_root.to_str() {
            Some(root) => {
                let expanded = shellexpand::tilde(root).into_owned();
                normalize_path(Path::new(&expanded))
            }
            // Non-UTF-8 roots cannot be tilde-expanded; normalize as-is
            None => normalize_path(&self.project_root),
        }
    }

    // ========================================================================
    // library resolution
    // ========================================================================

    /// Resolve every required style library, in declaration order.
    ///
    /// Fails on the first unresolved name: mixins the source stylesheets
    /// invoke would otherwise be undefined, so this is fatal.
    pub fn resolve_libraries(
        &self,
        resolver: &impl LibraryResolver,
    ) -> Result<Vec<PathBuf>, ConfigError> {
        self.require
            .iter()
            .map(|name| {
                resolver
                    .resolve(name)
                    .ok_or_else(|| ConfigError::MissingDependency(name.clone()))
            })
            .collect()
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config from a TOML snippet.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(content: &str) -> BuildConfig {
    let (parsed, ignored) = BuildConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================
