//! The nebula: a scrolling circular hazard
//!
//! The nebula drifts right to left. Each pass across the screen is
//! classified against the character exactly once: when it crosses the
//! character's horizontal center, or on the way out if it never did. The
//! result feeds the progress counter. Off the left edge it respawns past the
//! right edge at a random height.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::geometry::{CircleHitbox, RectangleHitbox};

/// Hazard parameters (see `Settings::hazard`)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HazardConfig {
    pub radius: f32,
    /// Leftward scroll speed (pixels/s)
    pub speed: f32,
    pub spawn_top: f32,
    pub spawn_bottom: f32,
    /// Seconds per sprite frame
    pub animation_period: f32,
    pub frames: u32,
}

/// Uniform float in `[min, max]`; returns `min` for an empty range
pub fn random_float(rng: &mut Pcg32, min: f32, max: f32) -> f32 {
    if max <= min {
        return min;
    }
    rng.random_range(min..=max)
}

/// The nebula hazard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Nebula {
    pub hitbox: CircleHitbox,
    pub frame: u32,
    pub animation_timer: f32,
    /// Completed passes across the screen
    pub passes: u32,
    /// This pass has already been classified
    pub scored: bool,
}

impl Nebula {
    /// Spawn just past the right edge
    pub fn spawn(config: &HazardConfig, screen_width: f32, rng: &mut Pcg32) -> Self {
        let mut nebula = Self {
            hitbox: CircleHitbox::new(Vec2::ZERO, config.radius),
            frame: 0,
            animation_timer: 0.0,
            passes: 0,
            scored: false,
        };
        nebula.place(config, screen_width, rng);
        nebula
    }

    fn place(&mut self, config: &HazardConfig, screen_width: f32, rng: &mut Pcg32) {
        let y = random_float(rng, config.spawn_top, config.spawn_bottom);
        self.hitbox.center = Vec2::new(screen_width + config.radius, y);
        self.scored = false;
        log::debug!("Nebula spawned at y={y:.1}");
    }

    /// Scroll left and animate
    pub fn advance(&mut self, dt: f32, config: &HazardConfig) {
        self.hitbox.center.x -= config.speed * dt;

        self.animation_timer += dt;
        if self.animation_timer > config.animation_period {
            self.frame = (self.frame + 1) % config.frames.max(1);
            self.animation_timer = 0.0;
        }
    }

    /// Entirely past the left edge
    pub fn is_off_screen(&self) -> bool {
        self.hitbox.center.x + self.hitbox.radius < 0.0
    }

    /// Finish the current pass and start a new one past the right edge
    pub fn respawn(&mut self, config: &HazardConfig, screen_width: f32, rng: &mut Pcg32) {
        self.passes += 1;
        self.place(config, screen_width, rng);
    }

    /// Signed horizontal offset from the target's center line
    pub fn offset_from(&self, target: &RectangleHitbox) -> f32 {
        self.hitbox.center.x - target.center_x()
    }
}

/// Whether an offset went from at-or-right-of the center line to left of it
#[inline]
pub fn crossed_center(before: f32, after: f32) -> bool {
    before >= 0.0 && after < 0.0
}
