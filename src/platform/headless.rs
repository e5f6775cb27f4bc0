//! Windowless backend
//!
//! Runs the game with a fixed frame time and a scripted key sequence, and
//! records every draw call instead of rendering it.

use std::collections::HashMap;

use glam::Vec2;

use super::{
    AssetError, AssetLoader, FrameClock, ImageHandle, InputSource, Key, Keys, SourceRect, Surface,
};

/// One recorded `draw_sprite_region` call
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawCall {
    /// Frame number (1-based) the draw happened in
    pub frame: u64,
    pub image: ImageHandle,
    pub source: SourceRect,
    pub position: Vec2,
}

/// Scripted, windowless platform
#[derive(Debug, Clone)]
pub struct HeadlessPlatform {
    frame_time: f32,
    frame_budget: u64,
    frames_started: u64,
    /// Keys held on each frame; frames past the end hold nothing
    script: Vec<Keys>,
    current: Keys,
    previous: Keys,
    /// Known images by path: (width, height)
    images: HashMap<String, (u32, u32)>,
    next_image_id: u32,
    loaded: Vec<ImageHandle>,
    released: Vec<ImageHandle>,
    draws: Vec<DrawCall>,
}

impl HeadlessPlatform {
    /// Run `frame_budget` frames of `frame_time` seconds each
    pub fn new(frame_time: f32, frame_budget: u64) -> Self {
        Self {
            frame_time,
            frame_budget,
            frames_started: 0,
            script: Vec::new(),
            current: Keys::empty(),
            previous: Keys::empty(),
            images: HashMap::new(),
            next_image_id: 1,
            loaded: Vec::new(),
            released: Vec::new(),
            draws: Vec::new(),
        }
    }

    /// Make an image loadable at `path`
    pub fn with_image(mut self, path: impl Into<String>, width: u32, height: u32) -> Self {
        self.images.insert(path.into(), (width, height));
        self
    }

    /// Hold `keys` for the next `frames` scripted frames
    pub fn hold(mut self, keys: Keys, frames: usize) -> Self {
        self.script.extend(std::iter::repeat_n(keys, frames));
        self
    }

    /// Frames started so far
    pub fn frames_run(&self) -> u64 {
        self.frames_started
    }

    pub fn draws(&self) -> &[DrawCall] {
        &self.draws
    }

    pub fn loaded(&self) -> &[ImageHandle] {
        &self.loaded
    }

    pub fn released(&self) -> &[ImageHandle] {
        &self.released
    }
}

impl FrameClock for HeadlessPlatform {
    fn frame_time(&mut self) -> f32 {
        self.frame_time
    }
}

impl InputSource for HeadlessPlatform {
    fn is_key_down(&self, key: Key) -> bool {
        self.current.contains(key.into())
    }

    fn is_key_pressed(&self, key: Key) -> bool {
        let key = Keys::from(key);
        self.current.contains(key) && !self.previous.contains(key)
    }
}

impl Surface for HeadlessPlatform {
    fn should_continue(&mut self) -> bool {
        self.frames_started < self.frame_budget
    }

    fn begin_frame(&mut self) {
        let index = self.frames_started as usize;
        self.previous = self.current;
        self.current = self.script.get(index).copied().unwrap_or_default();
        self.frames_started += 1;
    }

    fn end_frame(&mut self) {}

    fn draw_sprite_region(&mut self, image: &ImageHandle, source: SourceRect, position: Vec2) {
        self.draws.push(DrawCall {
            frame: self.frames_started,
            image: *image,
            source,
            position,
        });
    }
}

impl AssetLoader for HeadlessPlatform {
    fn load_image(&mut self, path: &str) -> Result<ImageHandle, AssetError> {
        let (width, height) = *self
            .images
            .get(path)
            .ok_or_else(|| AssetError::NotFound(path.to_string()))?;

        if width == 0 || height == 0 {
            return Err(AssetError::InvalidImage {
                path: path.to_string(),
                reason: format!("empty image ({width}x{height})"),
            });
        }

        let handle = ImageHandle {
            id: self.next_image_id,
            width,
            height,
        };
        self.next_image_id += 1;
        self.loaded.push(handle);
        log::debug!("Loaded {path} as image {} ({width}x{height})", handle.id);
        Ok(handle)
    }

    fn release_image(&mut self, image: ImageHandle) {
        log::debug!("Released image {}", image.id);
        self.released.push(image);
    }
}
