//! Local key-value flags that outlive a session: the vibration toggle, the
//! best score and the last difficulty picked.
//!
//! Stored as JSON in the user's data directory.  None of this feeds back
//! into the simulation.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::entities::Difficulty;
use crate::error::SettingsError;

const APP_DIR: &str = "galaga_shooter";
const FILE_NAME: &str = "settings.json";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub vibration_enabled: bool,
    pub high_score: u32,
    pub difficulty: Difficulty,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            vibration_enabled: true,
            high_score: 0,
            difficulty: Difficulty::Normal,
        }
    }
}

impl Settings {
    /// `<data_local_dir>/galaga_shooter/settings.json`
    pub fn default_path() -> Result<PathBuf, SettingsError> {
        dirs::data_local_dir()
            .map(|dir| dir.join(APP_DIR).join(FILE_NAME))
            .ok_or(SettingsError::NoDataDir)
    }

    /// Missing file → defaults.  Unreadable or malformed file → error.
    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        if !path.exists() {
            info!("No settings file at {:?}, starting fresh", path);
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&contents).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn save_to(&self, path: &Path) -> Result<(), SettingsError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| SettingsError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        let json = serde_json::to_string_pretty(self).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        fs::write(path, json).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load from the default location, falling back to defaults on any
    /// failure.
    pub fn load_or_default() -> Self {
        match Self::default_path().and_then(|path| Self::load_from(&path)) {
            Ok(settings) => settings,
            Err(e) => {
                warn!("Failed to load settings: {}", e);
                Self::default()
            }
        }
    }

    /// Save to the default location; failures are logged, never fatal.
    pub fn save(&self) {
        if let Err(e) = Self::default_path().and_then(|path| self.save_to(&path)) {
            warn!("Failed to save settings: {}", e);
        }
    }

    /// Flip the vibration flag and return the new value.
    pub fn toggle_vibration(&mut self) -> bool {
        self.vibration_enabled = !self.vibration_enabled;
        self.vibration_enabled
    }

    /// Keep `score` if it beats the stored best.  Returns true when it did.
    pub fn record_score(&mut self, score: u32) -> bool {
        if score > self.high_score {
            self.high_score = score;
            true
        } else {
            false
        }
    }
}
