//! Path utilities for roster.
//!
//! Configuration lives under `~/.roster/`:
//! - `~/.roster/config.toml` - main configuration
//!
//! The database defaults to `students.db` in the working directory.

use std::path::{Path, PathBuf};

/// Returns the roster home directory (`~/.roster/`).
pub fn home_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".roster")
}

/// Returns the default config file path (`~/.roster/config.toml`).
pub fn default_config() -> PathBuf {
    home_dir().join("config.toml")
}

/// Ensures the directory holding `path` exists.
pub fn ensure_parent_dir(path: &Path) -> std::io::Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => std::fs::create_dir_all(parent),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_is_under_roster_home() {
        assert!(default_config().to_string_lossy().contains(".roster"));
        assert!(default_config().ends_with("config.toml"));
    }

    #[test]
    fn ensure_parent_dir_creates_missing_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b").join("students.db");

        ensure_parent_dir(&nested).unwrap();
        assert!(nested.parent().unwrap().is_dir());
    }

    #[test]
    fn ensure_parent_dir_accepts_bare_file_name() {
        assert!(ensure_parent_dir(Path::new("students.db")).is_ok());
    }
}
