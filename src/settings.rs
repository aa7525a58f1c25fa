//! Match settings
//!
//! Read from a JSON file; every field is optional and falls back to its
//! default.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{Error, Result};

/// Match configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Table ===
    /// Playing surface width (walls are inset a tenth of this)
    pub table_width: i32,
    /// Playing surface height
    pub table_height: i32,

    // === Rules ===
    /// Goals needed to win
    pub score_to_win: u32,

    // === Controls ===
    /// Swap clockwise and counter-clockwise for the rotate commands
    pub invert_rotation: bool,

    // === Player ===
    /// Name recorded on the high score board
    pub player_name: String,

    // === Simulation ===
    /// RNG seed; a random one is picked when absent
    pub seed: Option<u64>,
    /// Driver tick period
    pub tick_interval_ms: u64,
    /// Sleep between ticks instead of running flat out
    pub realtime: bool,
    /// Let an AI play the human side too
    pub demo_mode: bool,
    /// Driver stops after this many ticks even without a winner
    pub max_ticks: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            table_width: DEFAULT_TABLE_WIDTH,
            table_height: DEFAULT_TABLE_HEIGHT,

            score_to_win: SCORE_TO_WIN,

            invert_rotation: false,

            player_name: "Player".to_string(),

            seed: None,
            tick_interval_ms: TICK_INTERVAL_MS,
            realtime: false,
            demo_mode: false,
            max_ticks: 72_000, // one hour at 20 Hz
        }
    }
}

impl Settings {
    /// Reject settings the table layout cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.table_width < MIN_TABLE_SIZE || self.table_height < MIN_TABLE_SIZE {
            return Err(Error::InvalidSettings(format!(
                "table must be at least {MIN_TABLE_SIZE}x{MIN_TABLE_SIZE}, got {}x{}",
                self.table_width, self.table_height
            )));
        }
        if self.score_to_win == 0 {
            return Err(Error::InvalidSettings(
                "score_to_win must be at least 1".to_string(),
            ));
        }
        if self.player_name.trim().is_empty() {
            return Err(Error::InvalidSettings(
                "player_name must not be blank".to_string(),
            ));
        }
        if self.tick_interval_ms == 0 {
            return Err(Error::InvalidSettings(
                "tick_interval_ms must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn from_json(json: &str, path: &Path) -> Result<Self> {
        let settings: Self = serde_json::from_str(json).map_err(|source| Error::Json {
            path: path.to_path_buf(),
            source,
        })?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load and validate settings from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_json(&json, path)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load settings, falling back to defaults on any problem
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("{e}; using default settings");
                Self::default()
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(|source| Error::Json {
            path: path.to_path_buf(),
            source,
        })?;
        fs::write(path, json).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}
