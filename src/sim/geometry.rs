//! Hitbox geometry
//!
//! Window coordinates: origin top-left, y grows downward. Points, velocities
//! and dimension pairs are all plain `Vec2` values copied between functions.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A location in window coordinates
pub type Point2D = Vec2;
/// Signed rate of change of position (pixels/s)
pub type Velocity2D = Vec2;
/// Width (x) and height (y)
pub type Dimensions2D = Vec2;

/// Width of a dimension pair
#[inline]
pub fn width(dims: Dimensions2D) -> f32 {
    dims.x
}

/// Height of a dimension pair
#[inline]
pub fn height(dims: Dimensions2D) -> f32 {
    dims.y
}

/// Axis-aligned rectangle stored as its four corners
///
/// Corners always satisfy `top_right.x == bottom_right.x`,
/// `top_left.y == top_right.y` and `bottom_left.y == bottom_right.y`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectangleHitbox {
    pub top_left: Point2D,
    pub top_right: Point2D,
    pub bottom_left: Point2D,
    pub bottom_right: Point2D,
}

impl RectangleHitbox {
    /// Build the corners from a top-left origin and a size.
    ///
    /// Negative dimensions are not rejected; they give an inverted rectangle
    /// whose corners are still consistent with each other.
    pub fn new(origin: Point2D, dims: Dimensions2D) -> Self {
        let top_left = origin;
        let bottom_right = origin + dims;
        Self {
            top_left,
            top_right: Vec2::new(bottom_right.x, top_left.y),
            bottom_left: Vec2::new(top_left.x, bottom_right.y),
            bottom_right,
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.top_left.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.bottom_right.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.top_left.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.bottom_right.y
    }

    /// Corners in (top-left, top-right, bottom-left, bottom-right) order
    pub fn corners(&self) -> [Point2D; 4] {
        [
            self.top_left,
            self.top_right,
            self.bottom_left,
            self.bottom_right,
        ]
    }

    /// Horizontal center line
    pub fn center_x(&self) -> f32 {
        (self.left() + self.right()) / 2.0
    }
}

/// Circle hitbox
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CircleHitbox {
    pub center: Point2D,
    /// Expected to be >= 0; not validated
    pub radius: f32,
}

impl CircleHitbox {
    pub fn new(center: Point2D, radius: f32) -> Self {
        Self { center, radius }
    }
}

/// Rectangle hitbox from origin + size
#[inline]
pub fn rectangle_hitbox(origin: Point2D, dims: Dimensions2D) -> RectangleHitbox {
    RectangleHitbox::new(origin, dims)
}

/// Circle hitbox from center + radius
#[inline]
pub fn circle_hitbox(center: Point2D, radius: f32) -> CircleHitbox {
    CircleHitbox::new(center, radius)
}
