//! Game settings
//!
//! Loaded from `dasher_settings.json` in the working directory when present.
//! Every field has a default, so a settings file only needs the values it
//! changes.

use std::fs;
use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::sim::character::Tuning;
use crate::sim::hazard::HazardConfig;

/// Failure to read or parse a settings file
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Window surface
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    pub width: f32,
    pub height: f32,
    pub title: String,
    pub target_fps: u32,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            width: SCREEN_WIDTH,
            height: SCREEN_HEIGHT,
            title: WINDOW_TITLE.to_string(),
            target_fps: TARGET_FPS,
        }
    }
}

/// The player character
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CharacterSettings {
    /// Hitbox width; also the horizontal extent of the sprite
    pub width: f32,
    /// Hitbox height; the floor line is `window.height - height`
    pub height: f32,
    /// Spawn x (spawns standing on the floor)
    pub start_x: f32,
}

impl Default for CharacterSettings {
    fn default() -> Self {
        Self {
            width: CHARACTER_WIDTH,
            height: CHARACTER_HEIGHT,
            start_x: 0.0,
        }
    }
}

/// Movement and animation balance
///
/// Everything scales from `speed`, so speeding the game up keeps jumps
/// and animation in proportion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TuningSettings {
    pub speed: f32,
    pub gravity_factor: f32,
    pub jump_factor: f32,
    pub flight_control_factor: f32,
    pub air_decay: f32,
    pub animation_cadence_divisor: f32,
    pub walk_frames: u32,
    pub idle_frame: u32,
    pub flight_frame: u32,
}

impl Default for TuningSettings {
    fn default() -> Self {
        Self {
            speed: SPEED,
            gravity_factor: GRAVITY_FACTOR,
            jump_factor: JUMP_FACTOR,
            flight_control_factor: FLIGHT_CONTROL_FACTOR,
            air_decay: AIR_DECAY,
            animation_cadence_divisor: ANIMATION_CADENCE_DIVISOR,
            walk_frames: WALK_FRAMES,
            idle_frame: IDLE_FRAME,
            flight_frame: FLIGHT_FRAME,
        }
    }
}

/// Sprite sheet locations and layouts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetSettings {
    pub character_sheet: String,
    pub character_frames: u32,
    pub nebula_sheet: String,
    pub nebula_frames: u32,
    pub nebula_rows: u32,
}

impl Default for AssetSettings {
    fn default() -> Self {
        Self {
            character_sheet: CHARACTER_SHEET_PATH.to_string(),
            character_frames: WALK_FRAMES,
            nebula_sheet: NEBULA_SHEET_PATH.to_string(),
            nebula_frames: NEBULA_FRAMES,
            nebula_rows: NEBULA_ROWS,
        }
    }
}

/// The scrolling nebula hazard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HazardSettings {
    pub enabled: bool,
    pub radius: f32,
    /// Leftward scroll speed (pixels/s)
    pub speed: f32,
    /// Seed for respawn heights
    pub seed: u64,
    /// Respawn center y is drawn from `[spawn_top, spawn_bottom]`
    pub spawn_top: f32,
    pub spawn_bottom: f32,
    pub animation_fps: f32,
}

impl Default for HazardSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            radius: NEBULA_RADIUS,
            speed: NEBULA_SPEED,
            seed: 0x0da5_4e12,
            spawn_top: SCREEN_HEIGHT - 2.0 * CHARACTER_HEIGHT,
            spawn_bottom: SCREEN_HEIGHT - NEBULA_RADIUS,
            animation_fps: NEBULA_ANIMATION_FPS,
        }
    }
}

/// All settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub window: WindowSettings,
    pub character: CharacterSettings,
    pub tuning: TuningSettings,
    pub assets: AssetSettings,
    pub hazard: HazardSettings,
}

impl Settings {
    /// File looked up by `load`
    pub const FILE_NAME: &'static str = "dasher_settings.json";

    /// Load settings from a JSON file
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let json = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }

    /// Load `dasher_settings.json`, falling back to defaults
    pub fn load() -> Self {
        let path = Path::new(Self::FILE_NAME);
        if !path.exists() {
            log::info!("Using default settings");
            return Self::default();
        }

        match Self::load_from(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Ignoring {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Window size as a dimension pair
    pub fn screen(&self) -> Vec2 {
        Vec2::new(self.window.width, self.window.height)
    }

    /// Character hitbox size
    pub fn character_size(&self) -> Vec2 {
        Vec2::new(self.character.width, self.character.height)
    }

    /// Concrete controller values derived from the tuning factors
    pub fn tuning(&self) -> Tuning {
        let t = &self.tuning;
        let animation_fps = t.speed / t.animation_cadence_divisor;
        Tuning {
            max_speed: t.speed,
            gravity: t.speed * t.gravity_factor,
            jump_force: t.speed * t.jump_factor,
            air_accel: t.speed * t.flight_control_factor,
            air_decay: t.air_decay,
            animation_period: 1.0 / animation_fps,
            walk_frames: t.walk_frames,
            idle_frame: t.idle_frame,
            flight_frame: t.flight_frame,
        }
    }

    /// Hazard parameters, `None` when the hazard is switched off
    pub fn hazard(&self) -> Option<HazardConfig> {
        let h = &self.hazard;
        h.enabled.then(|| HazardConfig {
            radius: h.radius,
            speed: h.speed,
            spawn_top: h.spawn_top,
            spawn_bottom: h.spawn_bottom,
            animation_period: 1.0 / h.animation_fps,
            frames: self.assets.nebula_frames,
        })
    }
}
