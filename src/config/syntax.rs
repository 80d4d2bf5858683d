//! Stylesheet source dialect.

use crate::config::{ConfigDiagnostics, ConfigError, FieldPath};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Source dialect preferred when a stylesheet exists in both forms.
///
/// A closed set of two interchangeable dialects. Any other token fails
/// configuration loading.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SyntaxDialect {
    /// Whitespace-significant form (`.sass` files). `sass` is accepted
    /// as an alias for the token.
    #[default]
    #[serde(alias = "sass")]
    Indented,
    /// Brace-delimited form (`.scss` files).
    Scss,
}

impl SyntaxDialect {
    /// Get the file extension for the dialect.
    pub const fn file_extension(&self) -> &'static str {
        match self {
            Self::Indented => "sass",
            Self::Scss => "scss",
        }
    }

    /// Get the canonical token.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Indented => "indented",
            Self::Scss => "scss",
        }
    }
}

impl fmt::Display for SyntaxDialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SyntaxDialect {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "indented" | "sass" => Ok(Self::Indented),
            "scss" => Ok(Self::Scss),
            other => {
                let mut diag = ConfigDiagnostics::new();
                diag.error_with_hint(
                    FieldPath::new("preferred_syntax"),
                    format!("unsupported dialect `{other}`"),
                    "expected `indented` or `scss`",
                );
                Err(ConfigError::Invalid(diag))
            }
        }
    }
}
