//! Velocity integration
//!
//! Plain explicit Euler: position moves by velocity scaled by elapsed time.
//! `dt` is expected to be >= 0 but is not checked.

use super::geometry::{Point2D, Velocity2D};

/// `position + velocity * dt` for one axis
#[inline]
pub fn integrate_axis(position: f32, velocity: f32, dt: f32) -> f32 {
    position + velocity * dt
}

/// Move `position` by `velocity * dt`, y axis first then x
pub fn integrate(position: &mut Point2D, velocity: Velocity2D, dt: f32) {
    position.y = integrate_axis(position.y, velocity.y, dt);
    position.x = integrate_axis(position.x, velocity.x, dt);
}

/// Negate one velocity component
#[inline]
pub fn invert_velocity_axis(velocity: f32) -> f32 {
    -velocity
}

/// Bounce horizontally
pub fn invert_x_velocity(velocity: &mut Velocity2D) {
    velocity.x = invert_velocity_axis(velocity.x);
}

/// Bounce vertically
pub fn invert_y_velocity(velocity: &mut Velocity2D) {
    velocity.y = invert_velocity_axis(velocity.y);
}
