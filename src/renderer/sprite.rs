//! Sprite sheet slicing

use glam::Vec2;

use crate::platform::{ImageHandle, SourceRect};

/// An image laid out as a grid of equally sized frames
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteSheet {
    pub image: ImageHandle,
    pub columns: u32,
    pub rows: u32,
}

impl SpriteSheet {
    pub fn new(image: ImageHandle, columns: u32, rows: u32) -> Self {
        Self {
            image,
            columns: columns.max(1),
            rows: rows.max(1),
        }
    }

    pub fn frame_width(&self) -> f32 {
        self.image.width as f32 / self.columns as f32
    }

    pub fn frame_height(&self) -> f32 {
        self.image.height as f32 / self.rows as f32
    }

    /// Source rectangle of frame `index`, counting left to right then down
    pub fn frame_rect(&self, index: u32) -> SourceRect {
        let column = index % self.columns;
        let row = (index / self.columns) % self.rows;
        SourceRect {
            x: self.frame_width() * column as f32,
            y: self.frame_height() * row as f32,
            width: self.frame_width(),
            height: self.frame_height(),
        }
    }

    /// Top-left position that centers one frame on `center`
    pub fn centered_at(&self, center: Vec2) -> Vec2 {
        center - Vec2::new(self.frame_width(), self.frame_height()) / 2.0
    }
}
