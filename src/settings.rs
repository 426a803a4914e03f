//! Game settings and tunables
//!
//! Loaded from an optional JSON file; missing fields fall back to the
//! defaults in [`crate::consts`].

use std::path::Path;

use glam::IVec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Why a settings file could not be used
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid settings: {0}")]
    Invalid(String),
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Screen ===
    pub screen_width: i32,
    pub screen_height: i32,
    /// Frame-rate cap
    pub target_fps: u32,

    // === Gameplay ===
    /// Laser speed (pixels/s, upward)
    pub laser_speed: f32,
    /// Meteor speed (pixels/s, downward)
    pub meteor_speed: f32,
    /// One meteor expected every N frames
    pub meteor_frequency: u32,
    /// Minimum time between shots (ms)
    pub fire_cooldown_ms: u64,
    /// Laser x offset from the ship origin
    pub laser_offset_x: i32,
    /// Ship origin = pointer - pivot
    pub ship_pivot: IVec2,

    // === Sprites (width, height) ===
    pub ship_size: IVec2,
    pub laser_size: IVec2,
    pub meteor_size: IVec2,

    /// Fixed RNG seed (random per run when absent)
    pub seed: Option<u64>,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    pub muted: bool,

    // === Demo ===
    /// Frames the autopilot plays before quitting
    pub demo_frames: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            target_fps: TARGET_FPS,

            laser_speed: LASER_SPEED,
            meteor_speed: METEOR_SPEED,
            meteor_frequency: METEOR_FREQUENCY,
            fire_cooldown_ms: FIRE_COOLDOWN_MS,
            laser_offset_x: LASER_OFFSET_X,
            ship_pivot: IVec2::new(SHIP_PIVOT_X, SHIP_PIVOT_Y),

            ship_size: IVec2::from(SHIP_SIZE),
            laser_size: IVec2::from(LASER_SIZE),
            meteor_size: IVec2::from(METEOR_SIZE),

            seed: None,

            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,

            demo_frames: 120 * 60,
        }
    }
}

impl Settings {
    /// Parse and validate settings from JSON text
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read, parse and validate a settings file
    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load settings, falling back to defaults on any problem
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            log::info!("Using default settings");
            return Self::default();
        };

        match Self::load_from(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("{} ({}), using defaults", e, path.display());
                Self::default()
            }
        }
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values the frame update cannot work with
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.screen_width <= 0 || self.screen_height <= 0 {
            return Err(SettingsError::Invalid(format!(
                "screen size {}x{} must be positive",
                self.screen_width, self.screen_height
            )));
        }
        if self.target_fps == 0 {
            return Err(SettingsError::Invalid("target_fps must be > 0".into()));
        }
        if self.meteor_frequency == 0 {
            return Err(SettingsError::Invalid("meteor_frequency must be > 0".into()));
        }
        if !(self.laser_speed >= 0.0 && self.meteor_speed >= 0.0) {
            return Err(SettingsError::Invalid("speeds must be >= 0".into()));
        }
        for (name, size) in [
            ("ship_size", self.ship_size),
            ("laser_size", self.laser_size),
            ("meteor_size", self.meteor_size),
        ] {
            if size.x <= 0 || size.y <= 0 {
                return Err(SettingsError::Invalid(format!(
                    "{name} {}x{} must be positive",
                    size.x, size.y
                )));
            }
        }
        for (name, vol) in [
            ("master_volume", self.master_volume),
            ("sfx_volume", self.sfx_volume),
        ] {
            if !(0.0..=1.0).contains(&vol) {
                return Err(SettingsError::Invalid(format!("{name} {vol} outside 0..=1")));
            }
        }
        Ok(())
    }
}
