//! Persisted UI preferences.
//!
//! The UI keeps its own delay preference with a narrower range than the
//! engine accepts. The two ranges are deliberately independent: a stored
//! preference is applied with [`crate::games::kalah::KalahGame::set_delay`],
//! which enforces the engine's bound on its own.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Storage key for the settings, used as the default file stem.
pub const SETTINGS_KEY: &str = "mancala_settings";

/// Smallest delay the UI offers, in milliseconds.
pub const DELAY_MIN: u64 = 100;

/// Largest delay the UI offers, in milliseconds.
pub const DELAY_MAX: u64 = 1000;

/// Delay used when nothing is stored.
pub const DELAY_DEFAULT: u64 = 400;

/// Errors that can occur while saving preferences.
#[derive(Debug, thiserror::Error)]
pub enum PreferencesError {
    #[error("failed to write preferences to {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to encode preferences: {0}")]
    Json(#[from] serde_json::Error),
}

/// User-chosen settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    /// Pause between marble placements, in milliseconds.
    pub delay: u64,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            delay: DELAY_DEFAULT,
        }
    }
}

impl Preferences {
    /// Default settings file name in `dir`.
    #[must_use]
    pub fn default_path(dir: &Path) -> PathBuf {
        dir.join(format!("{SETTINGS_KEY}.json"))
    }

    /// Load settings, falling back to defaults when the file is missing or
    /// cannot be parsed.
    #[must_use]
    pub fn load(path: &Path) -> Self {
        let Ok(content) = std::fs::read_to_string(path) else {
            return Self::default();
        };
        Self::parse(&content).unwrap_or_default()
    }

    /// Parse settings from JSON.
    pub fn parse(content: &str) -> Result<Self, PreferencesError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Write settings as JSON.
    pub fn save(&self, path: &Path) -> Result<(), PreferencesError> {
        let content = serde_json::to_string(self)?;
        std::fs::write(path, content).map_err(|e| PreferencesError::Write {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Check if the delay lies within the UI's offered range.
    #[must_use]
    pub fn delay_in_range(&self) -> bool {
        (DELAY_MIN..=DELAY_MAX).contains(&self.delay)
    }
}
