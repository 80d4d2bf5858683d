//! Configuration utility functions.

use std::path::{Path, PathBuf};

/// Find a config file by searching upward from the current directory
///
/// Starts from cwd and walks up parent directories until finding
/// `config_name`. Returns the absolute path to the config file if found
///
/// # Example
/// ```text
/// /home/user/project/static/sass/  ← cwd
/// /home/user/project/compass.toml  ← found!
/// ```
pub fn find_config_file(config_name: &Path) -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;

    // Absolute paths are taken as-is when they exist
    if config_name.is_absolute() && config_name.exists() {
        return Some(config_name.to_path_buf());
    }

    let mut current = cwd.as_path();
    loop {
        let candidate = current.join(config_name);
        if candidate.exists() {
            return Some(candidate);
        }

        match current.parent() {
            Some(parent) => current = parent,
            None => return None, // Reached filesystem root
        }
    }
}

/// Normalize a file system path to absolute form.
///
/// Tries `canonicalize()` first (resolves symlinks, `.`, `..`).
/// Falls back to:
/// - Return as-is if already absolute
/// - Join with current directory if relative
#[inline]
pub fn normalize_path(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir().map_or_else(|_| path.to_path_buf(), |cwd| cwd.join(path))
        }
    })
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_normalize_path_absolute() {
        let path = Path::new("/absolute/path/compass.toml");
        let normalized = normalize_path(path);
        assert!(normalized.is_absolute());
    }

    #[test]
    fn test_normalize_path_relative() {
        let path = Path::new("static/sass/screen.sass");
        let normalized = normalize_path(path);
        assert!(normalized.is_absolute());
    }

    #[test]
    fn test_find_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("compass.toml");
        fs::write(&config, "source_dir = \"sass\"\n").unwrap();
        let nested = dir.path().join("static").join("sass");
        fs::create_dir_all(&nested).unwrap();

        // Both lookups run under the same held cwd to avoid racing other
        // threads on the process-wide working directory.
        let original = std::env::current_dir().unwrap();
        std::env::set_current_dir(&nested).unwrap();
        let found = find_config_file(Path::new("compass.toml"));
        let missing = find_config_file(Path::new("no-such-config-file-here.toml"));
        std::env::set_current_dir(original).unwrap();

        // Found two levels up, in the ancestor directory
        let found = found.expect("ancestor config should be found");
        assert_eq!(
            found.canonicalize().unwrap(),
            config.canonicalize().unwrap()
        );

        // A name that exists in no ancestor directory
        assert_eq!(missing, None);
    }
}
