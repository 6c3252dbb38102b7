// SPDX-License-Identifier: GPL-3.0-only

//! User preferences
//!
//! Stored as JSON at `<config dir>/camera-exposure/config.json`. The exposure
//! setting itself is never persisted; only limits and UI preferences are.

use crate::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME, zoom};
use crate::controls::FlashMode;
use crate::errors::{AppError, AppResult};
use crate::exposure::ExposureBounds;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// ISO and shutter limits used until a device reports its own
    pub exposure_bounds: ExposureBounds,
    /// Flash mode selected at startup
    pub flash_mode: FlashMode,
    /// Largest zoom factor the device supports
    pub device_max_zoom: f64,
    /// Open the manual controls panel on startup
    pub show_manual_controls: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            exposure_bounds: ExposureBounds::default(),
            flash_mode: FlashMode::default(), // Off
            device_max_zoom: zoom::MAX_FACTOR,
            show_manual_controls: true,
        }
    }
}

impl Config {
    /// Default config file location, if the platform has a config dir
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load from the default location, falling back to defaults when absent
    pub fn load() -> AppResult<Self> {
        match Self::default_path() {
            Some(path) => Self::load_from(&path),
            None => {
                debug!("No config directory available, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load from a specific file; a missing file yields defaults
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "Config file not found, using defaults");
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_json(&contents)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))?;
        info!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    /// Parse and validate JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> AppResult<Self> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Write to a specific file, creating parent directories
    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        info!(path = %path.display(), "Saved config");
        Ok(())
    }

    /// Reject values the exposure and zoom code cannot work with
    pub fn validate(&self) -> AppResult<()> {
        self.exposure_bounds
            .validate()
            .map_err(|e| AppError::Config(e.to_string()))?;

        if !self.device_max_zoom.is_finite() || self.device_max_zoom < zoom::MIN_FACTOR {
            return Err(AppError::Config(format!(
                "device_max_zoom must be at least {}, got {}",
                zoom::MIN_FACTOR,
                self.device_max_zoom
            )));
        }

        Ok(())
    }
}
