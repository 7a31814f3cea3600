//! Game settings and preferences
//!
//! Persisted as a JSON document on disk. Partial or stale documents merge onto
//! the defaults so a missing field never blocks a session from starting.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::consts::{DEFAULT_HEIGHT, DEFAULT_WIDTH, PLAYER_RADIUS};
use crate::error::LaserDodgeError;
use crate::input::KeyBindings;

/// Default settings file name (next to the executable's working directory)
pub const SETTINGS_FILE: &str = "user_settings.json";

/// Smallest field side that still fits the player
pub const MIN_SCREEN_SIZE: u32 = (2.0 * PLAYER_RADIUS) as u32;

/// Game settings/preferences
///
/// Deserializes field by field: a value of the wrong type falls back to its
/// default and the rest of the document still applies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Value")]
pub struct Settings {
    /// Master volume (0.0 - 1.0)
    pub volume: f32,
    /// Play field width in pixels
    pub screen_width: u32,
    /// Play field height in pixels
    pub screen_height: u32,
    pub fullscreen: bool,
    /// Logical action -> key name
    pub key_bindings: KeyBindings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            volume: 0.5,
            screen_width: DEFAULT_WIDTH as u32,
            screen_height: DEFAULT_HEIGHT as u32,
            fullscreen: false,
            key_bindings: KeyBindings::default(),
        }
    }
}

impl From<Value> for Settings {
    fn from(value: Value) -> Self {
        let mut settings = Self::default();
        let Value::Object(fields) = value else {
            log::warn!("Settings document is not an object, using defaults");
            return settings;
        };
        for (name, value) in fields {
            match name.as_str() {
                "volume" => merge_field(&name, value, &mut settings.volume),
                "screen_width" => merge_field(&name, value, &mut settings.screen_width),
                "screen_height" => merge_field(&name, value, &mut settings.screen_height),
                "fullscreen" => merge_field(&name, value, &mut settings.fullscreen),
                "key_bindings" => merge_field(&name, value, &mut settings.key_bindings),
                _ => log::warn!("Ignoring unknown setting {name:?}"),
            }
        }
        settings.sanitized()
    }
}

/// Overwrite `slot` when `value` parses, otherwise keep what is there
fn merge_field<T: DeserializeOwned>(name: &str, value: Value, slot: &mut T) {
    match serde_json::from_value(value) {
        Ok(parsed) => *slot = parsed,
        Err(e) => log::warn!("Ignoring setting {name:?}: {e}"),
    }
}

impl Settings {
    /// Set volume, clamped to 0.0 - 1.0
    pub fn set_volume(&mut self, volume: f32) {
        self.volume = if volume.is_finite() {
            volume.clamp(0.0, 1.0)
        } else {
            Self::default().volume
        };
    }

    /// Repair values a hand-edited file may have broken
    fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        self.set_volume(self.volume);
        if self.screen_width < MIN_SCREEN_SIZE || self.screen_height < MIN_SCREEN_SIZE {
            log::warn!(
                "Invalid screen size {}x{}, using {}x{}",
                self.screen_width,
                self.screen_height,
                defaults.screen_width,
                defaults.screen_height
            );
            self.screen_width = defaults.screen_width;
            self.screen_height = defaults.screen_height;
        }
        self
    }

    /// Parse a settings document, merging it onto the defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load settings, surfacing any i/o or parse failure
    pub fn try_load_from(path: &Path) -> Result<Self, LaserDodgeError> {
        let json = fs::read_to_string(path).map_err(|e| LaserDodgeError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_json(&json).map_err(|e| LaserDodgeError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Load settings, falling back to defaults when the file is missing or bad
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            log::info!("No settings at {}, using defaults", path.display());
            return Self::default();
        }

        match Self::try_load_from(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("{e}; using default settings");
                Self::default()
            }
        }
    }

    /// Save settings as pretty-printed JSON
    pub fn save_to(&self, path: &Path) -> Result<(), LaserDodgeError> {
        let json = serde_json::to_string_pretty(self).map_err(|e| LaserDodgeError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        fs::write(path, json).map_err(|e| LaserDodgeError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}
