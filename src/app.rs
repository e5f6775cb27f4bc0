//! Frame loop driver
//!
//! Owns the simulation state and a platform backend. Loads the sprite sheets,
//! then once per frame: reads elapsed time and input, ticks the simulation,
//! and draws. Images are released in load order when the platform stops the
//! loop.

use glam::Vec2;

use crate::platform::{AssetError, ImageHandle, Platform, read_input};
use crate::renderer::SpriteSheet;
use crate::settings::Settings;
use crate::sim::{SimulationState, tick};

/// End-of-run report
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunSummary {
    pub frames: u64,
    /// Seconds simulated
    pub elapsed: f32,
    pub progress: i32,
    /// Nebula passes recorded against progress
    pub collisions: u32,
    pub final_position: Vec2,
}

/// A game session bound to a platform
pub struct Game<P: Platform> {
    platform: P,
    settings: Settings,
    state: SimulationState,
}

impl<P: Platform> Game<P> {
    pub fn new(platform: P, settings: Settings) -> Self {
        let state = SimulationState::new(&settings);
        Self {
            platform,
            settings,
            state,
        }
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    pub fn into_platform(self) -> P {
        self.platform
    }

    /// Load both sprite sheets; nothing stays loaded on failure
    fn load_sheets(&mut self) -> Result<(SpriteSheet, SpriteSheet), AssetError> {
        let assets = &self.settings.assets;

        let character = self.platform.load_image(&assets.character_sheet)?;
        let nebula = match self.platform.load_image(&assets.nebula_sheet) {
            Ok(image) => image,
            Err(e) => {
                self.platform.release_image(character);
                return Err(e);
            }
        };

        Ok((
            SpriteSheet::new(character, assets.character_frames, 1),
            SpriteSheet::new(nebula, assets.nebula_frames, assets.nebula_rows),
        ))
    }

    /// Run until the platform asks to stop
    ///
    /// An image that fails to load aborts startup with the error.
    pub fn run(&mut self) -> Result<RunSummary, AssetError> {
        let (character_sheet, nebula_sheet) = self.load_sheets()?;
        log::info!(
            "{} started ({}x{})",
            self.settings.window.title,
            self.settings.window.width,
            self.settings.window.height
        );

        let mut collisions = 0;
        while self.platform.should_continue() {
            let dt = self.platform.frame_time();
            self.platform.begin_frame();

            let input = read_input(&self.platform);
            let outcome = tick(&mut self.state, &input, dt);
            if outcome.collision.is_some() {
                collisions += 1;
            }

            self.draw(&character_sheet, &nebula_sheet);
            self.platform.end_frame();
        }

        self.release(character_sheet.image, nebula_sheet.image);

        let summary = RunSummary {
            frames: self.state.time_ticks,
            elapsed: self.state.elapsed,
            progress: self.state.progress.value(),
            collisions,
            final_position: self.state.character_position(),
        };
        log::info!(
            "Stopped after {} frames ({:.2}s), {}",
            summary.frames,
            summary.elapsed,
            self.state.progress.label()
        );
        Ok(summary)
    }

    /// Nebula behind, character in front
    fn draw(&mut self, character_sheet: &SpriteSheet, nebula_sheet: &SpriteSheet) {
        if let Some(nebula) = &self.state.nebula {
            self.platform.draw_sprite_region(
                &nebula_sheet.image,
                nebula_sheet.frame_rect(nebula.frame),
                nebula_sheet.centered_at(nebula.hitbox.center),
            );
        }

        let character = &self.state.character;
        self.platform.draw_sprite_region(
            &character_sheet.image,
            character_sheet.frame_rect(character.frame),
            character.position,
        );
    }

    fn release(&mut self, character: ImageHandle, nebula: ImageHandle) {
        self.platform.release_image(character);
        self.platform.release_image(nebula);
        log::info!("Released sprite sheets");
    }
}
