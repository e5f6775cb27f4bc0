//! Player character controller
//!
//! The character is either on the floor or in the air. That state is never
//! stored: it is re-derived every frame from the vertical position, so it can
//! not drift out of sync with where the character actually is.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::{Dimensions2D, Point2D, RectangleHitbox, Velocity2D};
use super::physics::integrate;
use super::tick::TickInput;
use crate::consts::*;

/// Motion state for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MotionState {
    /// Standing on the floor line
    Grounded,
    /// Above the floor line
    Airborne,
}

/// Airborne iff the character's top edge is above the floor line
#[inline]
pub fn derive_state(position_y: f32, floor_y: f32) -> MotionState {
    if position_y < floor_y {
        MotionState::Airborne
    } else {
        MotionState::Grounded
    }
}

/// Concrete controller values (see `Settings::tuning`)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tuning {
    /// Horizontal speed cap (pixels/s)
    pub max_speed: f32,
    /// Downward acceleration while airborne (pixels/s²)
    pub gravity: f32,
    /// Upward velocity set by a jump (pixels/s)
    pub jump_force: f32,
    /// Air control velocity step, per frame
    pub air_accel: f32,
    /// Air drift decay toward zero, per frame
    pub air_decay: f32,
    /// Seconds per walk animation frame
    pub animation_period: f32,
    pub walk_frames: u32,
    pub idle_frame: u32,
    pub flight_frame: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            max_speed: SPEED,
            gravity: SPEED * GRAVITY_FACTOR,
            jump_force: SPEED * JUMP_FACTOR,
            air_accel: SPEED * FLIGHT_CONTROL_FACTOR,
            air_decay: AIR_DECAY,
            animation_period: ANIMATION_CADENCE_DIVISOR / SPEED,
            walk_frames: WALK_FRAMES,
            idle_frame: IDLE_FRAME,
            flight_frame: FLIGHT_FRAME,
        }
    }
}

/// Direction the player is asking for: +1 right, -1 left, `None` for
/// neither or both
fn horizontal_intent(input: &TickInput) -> Option<f32> {
    match (input.left, input.right) {
        (false, true) => Some(1.0),
        (true, false) => Some(-1.0),
        _ => None,
    }
}

/// The player character
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    /// Top-left corner of the hitbox
    pub position: Point2D,
    pub velocity: Velocity2D,
    pub size: Dimensions2D,
    /// Sprite frame to draw this frame
    pub frame: u32,
    /// Walk cycle position, advanced by the animation timer
    pub walk_frame: u32,
    pub animation_timer: f32,
}

impl Character {
    /// Spawn standing on the floor at `x`, showing the idle frame
    pub fn new(x: f32, size: Dimensions2D, screen_height: f32, tuning: &Tuning) -> Self {
        Self {
            position: Vec2::new(x, screen_height - size.y),
            velocity: Vec2::ZERO,
            size,
            frame: tuning.idle_frame,
            walk_frame: 0,
            animation_timer: 0.0,
        }
    }

    /// Hitbox in window coordinates
    pub fn hitbox(&self) -> RectangleHitbox {
        RectangleHitbox::new(self.position, self.size)
    }

    /// y of the top edge when standing on the floor
    pub fn floor_y(&self, screen_height: f32) -> f32 {
        screen_height - self.size.y
    }

    /// Advance one frame: velocity, animation, then position
    ///
    /// Returns the motion state the frame ran under.
    pub fn update(
        &mut self,
        input: &TickInput,
        dt: f32,
        tuning: &Tuning,
        floor_y: f32,
    ) -> MotionState {
        let state = derive_state(self.position.y, floor_y);
        let intent = horizontal_intent(input);

        match state {
            MotionState::Airborne => {
                self.velocity.y += tuning.gravity * dt;
                self.apply_air_control(intent, tuning);
            }
            MotionState::Grounded => {
                self.position.y = floor_y;
                self.velocity.y = 0.0;
                self.velocity.x = intent.map_or(0.0, |dir| dir * tuning.max_speed);

                if input.jump_pressed {
                    self.velocity.y = -tuning.jump_force;
                    log::debug!("Jump from x={:.1}", self.position.x);
                }
            }
        }

        self.advance_animation(state, dt, tuning);
        integrate(&mut self.position, self.velocity, dt);

        state
    }

    /// Limited steering while airborne
    fn apply_air_control(&mut self, intent: Option<f32>, tuning: &Tuning) {
        let max = tuning.max_speed;
        let vx = &mut self.velocity.x;

        match intent {
            Some(dir) if dir > 0.0 => {
                if *vx < max {
                    *vx = (*vx + tuning.air_accel).min(max);
                }
            }
            Some(_) => {
                if *vx > -max {
                    *vx = (*vx - tuning.air_accel).max(-max);
                }
            }
            None => {
                // Drift toward zero without crossing it
                if *vx > 0.0 {
                    *vx = (*vx - tuning.air_decay).max(0.0);
                } else if *vx < 0.0 {
                    *vx = (*vx + tuning.air_decay).min(0.0);
                }
            }
        }
    }

    /// Step the walk cycle and pick the frame to draw
    fn advance_animation(&mut self, state: MotionState, dt: f32, tuning: &Tuning) {
        self.animation_timer += dt;
        if self.animation_timer > tuning.animation_period {
            self.walk_frame += 1;
            self.animation_timer = 0.0;
        }
        if self.walk_frame >= tuning.walk_frames {
            self.walk_frame = 0;
        }

        self.frame = match state {
            MotionState::Airborne => tuning.flight_frame,
            MotionState::Grounded if self.velocity.x == 0.0 => tuning.idle_frame,
            MotionState::Grounded => self.walk_frame,
        };
    }
}
