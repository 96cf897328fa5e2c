//! User settings for libris
//!
//! Manages operator preferences: the loan period and whether duplicate
//! identifiers are rejected.

use serde::{Deserialize, Serialize};

use super::paths::LibrisPaths;
use crate::error::LibrisError;

/// User settings for libris
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Number of days a loan runs before it is due
    #[serde(default = "default_loan_period_days")]
    pub loan_period_days: i64,

    /// Reject duplicate ISBNs and MemberIDs, and require the member to
    /// exist when issuing a loan. Off by default: the catalog format
    /// predates uniqueness enforcement and existing data may carry
    /// duplicates.
    #[serde(default)]
    pub strict_identifiers: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_loan_period_days() -> i64 {
    14
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            loan_period_days: default_loan_period_days(),
            strict_identifiers: false,
        }
    }
}

impl Settings {
    /// Load settings from disk, or return defaults if no settings file exists
    ///
    /// Does not write the defaults back; that happens explicitly on `init`.
    pub fn load_or_create(paths: &LibrisPaths) -> Result<Self, LibrisError> {
        let path = paths.settings_file();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path).map_err(|e| {
            LibrisError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;

        serde_json::from_str(&content).map_err(|e| {
            LibrisError::Config(format!("Failed to parse {}: {}", path.display(), e))
        })
    }

    /// Save settings to disk
    pub fn save(&self, paths: &LibrisPaths) -> Result<(), LibrisError> {
        paths.ensure_directories()?;

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(paths.settings_file(), content).map_err(|e| {
            LibrisError::Config(format!("Failed to write settings: {}", e))
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.schema_version, 1);
        assert_eq!(settings.loan_period_days, 14);
        assert!(!settings.strict_identifiers);
    }

    #[test]
    fn test_load_or_create_returns_defaults_when_missing() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LibrisPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings::load_or_create(&paths).unwrap();
        assert_eq!(settings.loan_period_days, 14);
        assert!(!paths.settings_file().exists());
    }

    #[test]
    fn test_save_and_reload() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LibrisPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.loan_period_days = 21;
        settings.strict_identifiers = true;
        settings.save(&paths).unwrap();

        let reloaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(reloaded.loan_period_days, 21);
        assert!(reloaded.strict_identifiers);
    }

    #[test]
    fn test_unknown_settings_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LibrisPaths::with_base_dir(temp_dir.path().to_path_buf());
        paths.ensure_directories().unwrap();
        std::fs::write(paths.settings_file(), "not json").unwrap();

        assert!(Settings::load_or_create(&paths).is_err());
    }
}
