//! Application configuration.
//!
//! The researcher profile shown in the dashboard header is the only
//! persisted setting. A missing or unreadable file falls back to the
//! default profile.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::{fs, io};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("config is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("could not determine the home directory")]
    NoHomeDir,
}

/// Researcher profile shown in the dashboard header.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub researcher_name: String,
    pub researcher_role: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            researcher_name: "Dr. Pesquisador".to_string(),
            researcher_role: "Geneticista".to_string(),
        }
    }
}

impl Config {
    #[allow(unused)]
    pub fn new(researcher_name: String, researcher_role: String) -> Self {
        Config {
            researcher_name,
            researcher_role,
        }
    }

    /// Loads the profile from a JSON file at the given path.
    ///
    /// # Errors
    /// Returns a [`ConfigError`] if reading fails or the JSON is invalid.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let buf = fs::read(path)?;
        let config: Config = serde_json::from_slice(&buf)?;
        Ok(config)
    }

    /// Saves the profile to a JSON file at the given path.
    ///
    /// Directories are created if they don't exist; existing files are
    /// overwritten.
    #[allow(unused)]
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Loads the profile, falling back to the default when the file is
    /// missing or invalid.
    pub fn load_or_default(path: &Path) -> Self {
        Config::load_from_file(path).unwrap_or_default()
    }

    /// Two-letter avatar initials derived from the researcher name.
    pub fn initials(&self) -> String {
        self.researcher_name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }
}

/// Path of the profile file: `~/.plantgen/config.json`.
pub fn get_config_path() -> Result<PathBuf, ConfigError> {
    let home = home::home_dir().ok_or(ConfigError::NoHomeDir)?;
    Ok(home.join(".plantgen").join("config.json"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    // Loading a saved profile should return the same profile.
    fn test_load_recovers_saved_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");

        let config = Config::new("Dra. Lima".to_string(), "Botânica".to_string());
        config.save(&path).unwrap();

        let loaded = Config::load_from_file(&path).unwrap();
        assert_eq!(config, loaded);
    }

    #[test]
    // Saving should create missing parent directories.
    fn test_save_creates_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let result = Config::default().save(&path);

        assert!(result.is_ok(), "failed to save config");
        assert!(path.parent().unwrap().exists());
    }

    #[test]
    // Saving should overwrite an existing file.
    fn test_save_overwrites_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");

        let first = Config::new("Dr. Costa".to_string(), "Agrônomo".to_string());
        first.save(&path).unwrap();

        let second = Config::new("Dra. Santos".to_string(), "Geneticista".to_string());
        second.save(&path).unwrap();

        let loaded = Config::load_from_file(&path).unwrap();
        assert_eq!(second, loaded);
    }

    #[test]
    // Loading an invalid JSON file should return an error.
    fn test_load_rejects_invalid_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("invalid_config.json");

        let mut file = File::create(&path).unwrap();
        writeln!(file, "invalid json").unwrap();

        assert!(Config::load_from_file(&path).is_err());
    }

    #[test]
    // A missing file falls back to the default profile.
    fn test_load_or_default_on_missing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nonexistent.json");

        let config = Config::load_or_default(&path);
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_initials() {
        assert_eq!(Config::default().initials(), "DP");
        let config = Config::new("ana".to_string(), "Bióloga".to_string());
        assert_eq!(config.initials(), "A");
    }
}
