//! Rendering helpers
//!
//! Drawing itself goes through the platform's draw port; this module only
//! works out which part of a sprite sheet to draw.

pub mod sprite;

pub use sprite::SpriteSheet;
