//! Path management for housesplit
//!
//! Everything lives under one base directory:
//!
//! ```text
//! <base>/config.json          settings
//! <base>/audit.log            append-only audit log (JSONL)
//! <base>/data/households.json
//! <base>/data/members.json
//! <base>/data/expenses.json
//! ```
//!
//! The base directory is `HOUSESPLIT_DATA_DIR` if set, otherwise
//! `$XDG_CONFIG_HOME/housesplit` or `~/.config/housesplit` on Unix and
//! `%APPDATA%\housesplit` on Windows.

use std::path::{Path, PathBuf};

use crate::error::HousesplitError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "HOUSESPLIT_DATA_DIR";

/// Resolves every file housesplit reads or writes
#[derive(Debug, Clone)]
pub struct HousesplitPaths {
    base_dir: PathBuf,
}

impl HousesplitPaths {
    /// Resolve paths from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, HousesplitError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.trim().is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Use an explicit base directory (tests, `--data-dir`)
    pub fn with_base_dir(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    pub fn households_file(&self) -> PathBuf {
        self.data_dir().join("households.json")
    }

    pub fn members_file(&self) -> PathBuf {
        self.data_dir().join("members.json")
    }

    pub fn expenses_file(&self) -> PathBuf {
        self.data_dir().join("expenses.json")
    }

    /// Create the base and data directories if missing
    pub fn ensure_directories(&self) -> Result<(), HousesplitError> {
        std::fs::create_dir_all(self.data_dir()).map_err(|e| {
            HousesplitError::Io(format!(
                "Failed to create data directory {}: {}",
                self.data_dir().display(),
                e
            ))
        })
    }

    /// Whether `housesplit init` has been run here
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, HousesplitError> {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        if !xdg.is_empty() {
            return Ok(PathBuf::from(xdg).join("housesplit"));
        }
    }
    let home = std::env::var("HOME")
        .map_err(|_| HousesplitError::Config("Could not determine HOME directory".into()))?;
    Ok(PathBuf::from(home).join(".config").join("housesplit"))
}

#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, HousesplitError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| HousesplitError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("housesplit"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = HousesplitPaths::with_base_dir(temp_dir.path());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.data_dir(), temp_dir.path().join("data"));
        assert_eq!(paths.audit_log(), temp_dir.path().join("audit.log"));
    }

    #[test]
    fn test_env_var_override() {
        let temp_dir = TempDir::new().unwrap();
        std::env::set_var(DATA_DIR_ENV, temp_dir.path());

        let paths = HousesplitPaths::new().unwrap();
        assert_eq!(paths.base_dir(), temp_dir.path());

        std::env::remove_var(DATA_DIR_ENV);
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = HousesplitPaths::with_base_dir(temp_dir.path().join("nested"));

        paths.ensure_directories().unwrap();
        assert!(paths.data_dir().is_dir());
        assert!(!paths.is_initialized());
    }

    #[test]
    fn test_file_paths() {
        let temp_dir = TempDir::new().unwrap();
        let paths = HousesplitPaths::with_base_dir(temp_dir.path());

        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(
            paths.expenses_file(),
            temp_dir.path().join("data").join("expenses.json")
        );
    }
}
