//! User game settings
//!
//! This module handles reading and writing the game settings stored in
//! `~/.codebreaker/config.toml`: the window title, the default pool and code
//! length, and the display name and style class of each pool symbol.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Game settings stored in ~/.codebreaker/config.toml
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    /// Banner printed above the board
    pub title: String,
    /// Symbols a new game draws its code from
    pub pool: String,
    /// Length of the code of a new game
    pub length: i32,
    /// Display name of each pool symbol, in pool order
    pub pool_names: Vec<String>,
    /// Style class of each pool symbol, in pool order
    pub pool_classes: Vec<String>,
}

impl Default for GameSettings {
    fn default() -> Self {
        let names = ["Red", "Orange", "Yellow", "Green", "Blue", "Indigo", "Violet"];
        Self {
            title: "Codebreaker".to_string(),
            pool: "ROYGBIV".to_string(),
            length: 4,
            pool_names: names.iter().map(|name| (*name).to_string()).collect(),
            pool_classes: names.iter().map(|name| name.to_lowercase()).collect(),
        }
    }
}

impl GameSettings {
    /// Load settings from the default location, falling back to defaults
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load settings from `path`; a missing file yields the defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("No settings at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings from {}", path.display()))?;

        let settings: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse settings from {}", path.display()))?;

        settings
            .validate()
            .with_context(|| format!("Invalid settings in {}", path.display()))?;

        Ok(settings)
    }

    /// Save settings to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure the directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create settings directory {}", parent.display())
            })?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize settings")?;

        fs::write(path, content)
            .with_context(|| format!("Failed to write settings to {}", path.display()))?;

        Ok(())
    }

    /// Get the path to the settings file
    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir().context("Could not determine home directory")?;
        Ok(home.join(".codebreaker").join("config.toml"))
    }

    /// Reject settings no game could be started from
    pub fn validate(&self) -> Result<()> {
        if self.pool.is_empty() {
            anyhow::bail!("pool must not be empty");
        }

        if self.length < 1 {
            anyhow::bail!("length must be at least 1, got {}", self.length);
        }

        let mut seen = HashSet::new();
        if let Some(duplicate) = self.pool.chars().find(|symbol| !seen.insert(*symbol)) {
            anyhow::bail!("pool contains '{duplicate}' more than once");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = GameSettings::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(settings, GameSettings::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let settings = GameSettings {
            title: "Colours".to_string(),
            pool: "RGB".to_string(),
            length: 2,
            pool_names: vec!["Red".to_string(), "Green".to_string(), "Blue".to_string()],
            pool_classes: vec!["red".to_string(), "green".to_string(), "blue".to_string()],
        };

        settings.save_to(&path).unwrap();
        let loaded = GameSettings::load_from(&path).unwrap();

        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "pool = \"ABCDEF\"\nlength = 5\n").unwrap();

        let settings = GameSettings::load_from(&path).unwrap();

        assert_eq!(settings.pool, "ABCDEF");
        assert_eq!(settings.length, 5);
        assert_eq!(settings.title, "Codebreaker");
        assert_eq!(settings.pool_names.len(), 7);
    }

    #[test]
    fn test_invalid_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "pool = \"ABA\"\n").unwrap();

        let error = GameSettings::load_from(&path).unwrap_err();

        assert!(format!("{error:#}").contains("pool contains 'A' more than once"));
    }

    #[test]
    fn test_validate() {
        let mut settings = GameSettings::default();
        assert!(settings.validate().is_ok());

        settings.length = 0;
        assert!(settings.validate().is_err());

        settings.length = 4;
        settings.pool.clear();
        assert!(settings.validate().is_err());
    }
}
