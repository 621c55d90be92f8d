//! Settings loaded from TOML
//!
//! Read from ~/.config/tetrs-reserve/settings.toml (or platform equivalent).
//! The file is optional and never written.

use directories::ProjectDirs;
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

/// Session settings
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Piece generation settings
    pub session: SessionSettings,
    /// Visual settings
    pub visual: VisualSettings,
}

/// Piece generation settings
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SessionSettings {
    /// Fixed RNG seed; a time-derived seed is used when absent
    pub seed: Option<u64>,
}

/// Visual settings
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct VisualSettings {
    /// Colour piece labels
    pub color: bool,
    /// Shown in place of an empty queue or stack
    pub empty_marker: String,
}

impl Default for VisualSettings {
    fn default() -> Self {
        Self {
            color: true,
            empty_marker: "[empty]".to_string(),
        }
    }
}

impl Settings {
    /// Get the config directory path
    fn config_dir() -> Option<PathBuf> {
        ProjectDirs::from("com", "tetrs", "tetrs-reserve").map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Get the settings file path
    pub fn settings_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("settings.toml"))
    }

    /// Load settings from file, or fall back to defaults
    pub fn load() -> Self {
        let Some(path) = Self::settings_path() else {
            return Self::default();
        };

        match fs::read_to_string(&path) {
            Ok(contents) => Self::from_toml(&contents).unwrap_or_else(|e| {
                tracing::warn!("Ignoring malformed {}: {}", path.display(), e);
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    pub fn from_toml(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    /// Seed from settings, or from the clock
    pub fn seed(&self) -> u64 {
        self.session.seed.unwrap_or_else(clock_seed)
    }
}

/// Time-derived seed
fn clock_seed() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    let duration = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    duration.as_nanos() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_gives_defaults() {
        let settings = Settings::from_toml("").unwrap();
        assert_eq!(settings, Settings::default());
        assert!(settings.visual.color);
        assert_eq!(settings.visual.empty_marker, "[empty]");
        assert_eq!(settings.session.seed, None);
    }

    #[test]
    fn test_partial_sections() {
        let settings = Settings::from_toml(
            r#"
            [session]
            seed = 1234

            [visual]
            color = false
            "#,
        )
        .unwrap();
        assert_eq!(settings.seed(), 1234);
        assert!(!settings.visual.color);
        assert_eq!(settings.visual.empty_marker, "[empty]");
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        assert!(Settings::from_toml("[session]\nseed = \"soon\"").is_err());
    }
}
