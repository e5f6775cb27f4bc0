//! Simulation module
//!
//! All gameplay logic lives here. This module has no rendering or platform
//! dependencies:
//! - Elapsed time comes in as a plain `dt`
//! - Input comes in as a `TickInput`
//! - Randomness comes from the state's seeded RNG

pub mod character;
pub mod collision;
pub mod geometry;
pub mod hazard;
pub mod physics;
pub mod progress;
pub mod state;
pub mod tick;

pub use character::{Character, MotionState, Tuning, derive_state};
pub use collision::{CollisionState, classify};
pub use geometry::{
    CircleHitbox, Dimensions2D, Point2D, RectangleHitbox, Velocity2D, circle_hitbox,
    rectangle_hitbox,
};
pub use hazard::{HazardConfig, Nebula};
pub use physics::{integrate, integrate_axis, invert_velocity_axis};
pub use progress::{Progress, accumulate};
pub use state::SimulationState;
pub use tick::{TickInput, TickOutcome, tick};
