//! Dasher - a side-scrolling jump-and-dodge prototype
//!
//! Core modules:
//! - `sim`: Simulation (hitboxes, collision classification, progress, physics, character)
//! - `platform`: Ports to the windowing/input/render backend, plus a headless backend
//! - `renderer`: Sprite sheet slicing for the draw port
//! - `settings`: Data-driven window, tuning, asset and hazard configuration
//! - `app`: The frame loop driver

pub mod app;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use app::{Game, RunSummary};
pub use settings::{Settings, SettingsError};

/// Game configuration constants
///
/// These are the defaults `Settings` starts from.
pub mod consts {
    /// Window dimensions (pixels)
    pub const SCREEN_WIDTH: f32 = 900.0;
    pub const SCREEN_HEIGHT: f32 = 500.0;
    pub const WINDOW_TITLE: &str = "Dasher";
    pub const TARGET_FPS: u32 = 60;

    /// Character hitbox (pixels)
    pub const CHARACTER_WIDTH: f32 = 80.0;
    pub const CHARACTER_HEIGHT: f32 = 120.0;

    /// Base speed every other tuning value scales from (pixels/s)
    pub const SPEED: f32 = 600.0;
    /// Gravity = SPEED * GRAVITY_FACTOR (pixels/s²)
    pub const GRAVITY_FACTOR: f32 = 15.0;
    /// Jump impulse = SPEED * JUMP_FACTOR (pixels/s, upward)
    pub const JUMP_FACTOR: f32 = 3.2;
    /// Air control step = SPEED * FLIGHT_CONTROL_FACTOR, applied per frame
    pub const FLIGHT_CONTROL_FACTOR: f32 = 0.1;
    /// Horizontal decay per frame while airborne with no directional intent
    pub const AIR_DECAY: f32 = 0.0001;
    /// Walk animation runs at SPEED / ANIMATION_CADENCE_DIVISOR frames per second
    pub const ANIMATION_CADENCE_DIVISOR: f32 = 37.0;

    /// Character sprite sheet layout
    pub const WALK_FRAMES: u32 = 6;
    pub const IDLE_FRAME: u32 = 2;
    pub const FLIGHT_FRAME: u32 = 5;

    /// Nebula sprite sheet layout (an 8x8 grid; the hazard cycles the first row)
    pub const NEBULA_FRAMES: u32 = 8;
    pub const NEBULA_ROWS: u32 = 8;
    /// Nebula hazard defaults
    pub const NEBULA_RADIUS: f32 = 30.0;
    pub const NEBULA_SPEED: f32 = 300.0;
    pub const NEBULA_ANIMATION_FPS: f32 = 12.0;

    /// Default asset paths
    pub const CHARACTER_SHEET_PATH: &str = "textures/scarfy.png";
    pub const NEBULA_SHEET_PATH: &str = "textures/12_nebula_spritesheet.png";
}
