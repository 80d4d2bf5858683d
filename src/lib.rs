//! Build configuration for a Sass/Compass-style stylesheet compiler.
//!
//! Produces one immutable [`BuildConfig`] record covering project paths,
//! build options, the preferred source dialect and the style libraries
//! the host must load. The record comes from built-in literals
//! ([`BuildConfig::load`]) or a TOML file ([`BuildConfig::from_path`]),
//! is validated up front, and is handed to the host through a global
//! read-only handle.
//!
//! ```no_run
//! use compass_config::{BuildConfig, init_config};
//!
//! let config = init_config(BuildConfig::load()?);
//! assert_eq!(config.css_output_path(), config.root_join("css"));
//! # Ok::<(), compass_config::ConfigError>(())
//! ```

pub mod config;
pub mod logger;

pub use config::{
    BuildConfig, ConfigDiagnostic, ConfigDiagnostics, ConfigError, DirResolver, FieldPath,
    LibraryResolver, StaticResolver, SyntaxDialect, cfg, find_config_file, init_config,
    normalize_path,
};
