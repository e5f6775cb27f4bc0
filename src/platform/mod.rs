//! Platform abstraction layer
//!
//! The game only talks to its windowing/input/render backend through these
//! ports:
//! - Time: one frame-delta query per frame
//! - Input: key-down and key-just-pressed queries
//! - Surface: loop-continue query, frame bracketing, sprite-region drawing
//! - Assets: image load at startup, release at shutdown
//!
//! `HeadlessPlatform` implements all of them without a window.

pub mod headless;

pub use headless::{DrawCall, HeadlessPlatform};

use glam::Vec2;
use thiserror::Error;

use crate::sim::TickInput;

/// Image load failure; fatal at startup
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AssetError {
    #[error("image not found: {0}")]
    NotFound(String),
    #[error("invalid image {path}: {reason}")]
    InvalidImage { path: String, reason: String },
}

/// Logical keys the game reads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    Jump,
}

bitflags::bitflags! {
    /// Set of keys held during one frame
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Keys: u8 {
        const LEFT  = 1 << 0;
        const RIGHT = 1 << 1;
        const JUMP  = 1 << 2;
    }
}

impl From<Key> for Keys {
    fn from(key: Key) -> Self {
        match key {
            Key::Left => Keys::LEFT,
            Key::Right => Keys::RIGHT,
            Key::Jump => Keys::JUMP,
        }
    }
}

/// A loaded image owned by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageHandle {
    pub id: u32,
    pub width: u32,
    pub height: u32,
}

/// Region of an image, in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SourceRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Elapsed time source
pub trait FrameClock {
    /// Seconds since the previous frame (never negative)
    fn frame_time(&mut self) -> f32;
}

/// Keyboard state for the current frame
pub trait InputSource {
    fn is_key_down(&self, key: Key) -> bool;
    /// Down this frame but not the previous one
    fn is_key_pressed(&self, key: Key) -> bool;
}

/// Window/render surface
pub trait Surface {
    /// False once the window has been asked to close
    fn should_continue(&mut self) -> bool;
    fn begin_frame(&mut self);
    fn end_frame(&mut self);
    fn draw_sprite_region(&mut self, image: &ImageHandle, source: SourceRect, position: Vec2);
}

/// Image lifecycle
pub trait AssetLoader {
    fn load_image(&mut self, path: &str) -> Result<ImageHandle, AssetError>;
    fn release_image(&mut self, image: ImageHandle);
}

/// Everything the frame loop needs from a backend
pub trait Platform: FrameClock + InputSource + Surface + AssetLoader {}

impl<T: FrameClock + InputSource + Surface + AssetLoader> Platform for T {}

/// Poll the keys the simulation cares about
pub fn read_input(input: &impl InputSource) -> TickInput {
    TickInput {
        left: input.is_key_down(Key::Left),
        right: input.is_key_down(Key::Right),
        jump_pressed: input.is_key_pressed(Key::Jump),
    }
}
