//! Path management for libris
//!
//! Provides XDG-compliant path resolution for configuration and catalog data.
//!
//! ## Path Resolution Order
//!
//! 1. `LIBRIS_CLI_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/libris-cli` or `~/.config/libris-cli`
//! 3. Windows: `%APPDATA%\libris-cli`

use std::path::PathBuf;

use crate::error::LibrisError;

/// Manages all paths used by libris
#[derive(Debug, Clone)]
pub struct LibrisPaths {
    /// Base directory for all libris data
    base_dir: PathBuf,
}

impl LibrisPaths {
    /// Create a new LibrisPaths instance
    ///
    /// Path resolution:
    /// 1. `LIBRIS_CLI_DATA_DIR` env var (explicit override)
    /// 2. Unix: `$XDG_CONFIG_HOME/libris-cli` or `~/.config/libris-cli`
    /// 3. Windows: `%APPDATA%\libris-cli`
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, LibrisError> {
        let base_dir = if let Ok(custom) = std::env::var("LIBRIS_CLI_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create LibrisPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/libris-cli/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (~/.config/libris-cli/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to books.csv
    pub fn books_file(&self) -> PathBuf {
        self.data_dir().join("books.csv")
    }

    /// Get the path to members.csv
    pub fn members_file(&self) -> PathBuf {
        self.data_dir().join("members.csv")
    }

    /// Get the path to loans.csv
    pub fn loans_file(&self) -> PathBuf {
        self.data_dir().join("loans.csv")
    }

    /// Ensure all required directories exist
    ///
    /// Creates:
    /// - Base directory (~/.config/libris-cli/)
    /// - Data directory (~/.config/libris-cli/data/)
    pub fn ensure_directories(&self) -> Result<(), LibrisError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| LibrisError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| LibrisError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }

    /// Check if libris has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, LibrisError> {
    // Unix (Linux/macOS): Use XDG_CONFIG_HOME if set, otherwise ~/.config
    let config_base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").expect("HOME environment variable not set");
            PathBuf::from(home).join(".config")
        });
    Ok(config_base.join("libris-cli"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, LibrisError> {
    // Windows: Use APPDATA
    let appdata = std::env::var("APPDATA")
        .map_err(|_| LibrisError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("libris-cli"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LibrisPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.data_dir(), temp_dir.path().join("data"));
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LibrisPaths::with_base_dir(temp_dir.path().to_path_buf());

        paths.ensure_directories().unwrap();

        assert!(paths.data_dir().exists());
    }

    #[test]
    fn test_file_paths() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LibrisPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(
            paths.books_file(),
            temp_dir.path().join("data").join("books.csv")
        );
        assert_eq!(
            paths.members_file(),
            temp_dir.path().join("data").join("members.csv")
        );
        assert_eq!(
            paths.loans_file(),
            temp_dir.path().join("data").join("loans.csv")
        );
    }
}
