//! Circle vs rectangle collision classification
//!
//! The only shape pair the game needs: a circular hitbox against an
//! axis-aligned rectangle. All comparisons use squared distances and `<=`,
//! so touching the boundary counts as a collision.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::{CircleHitbox, Point2D, RectangleHitbox};

/// How a circle and a rectangle relate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollisionState {
    /// Disjoint
    None,
    /// Boundaries overlap, neither shape contains the other
    Partial,
    /// One shape fully contains the other (either direction)
    Full,
}

/// Whether `point` lies within the circle (boundary included)
#[inline]
pub fn is_point_inside_circle(point: Point2D, circle: &CircleHitbox) -> bool {
    point.distance_squared(circle.center) <= circle.radius * circle.radius
}

/// Whether all four rectangle corners lie within the circle
pub fn is_rectangle_inside_circle(rect: &RectangleHitbox, circle: &CircleHitbox) -> bool {
    rect.corners()
        .iter()
        .all(|&corner| is_point_inside_circle(corner, circle))
}

/// Whether the circle's bounding square lies within the rectangle
///
/// Only the top-left and bottom-right corners are consulted.
pub fn is_circle_inside_rectangle(circle: &CircleHitbox, rect: &RectangleHitbox) -> bool {
    let c = circle.center;
    let r = circle.radius;

    c.x - r >= rect.left()
        && c.x + r <= rect.right()
        && c.y - r >= rect.top()
        && c.y + r <= rect.bottom()
}

/// Closest point on or in the rectangle to `point`
#[inline]
pub fn closest_point(point: Point2D, rect: &RectangleHitbox) -> Point2D {
    // max(lo, min(p, hi)) rather than clamp: clamp panics when lo > hi,
    // which an inverted rectangle would hit.
    Vec2::new(
        rect.left().max(point.x.min(rect.right())),
        rect.top().max(point.y.min(rect.bottom())),
    )
}

/// Whether the circle reaches the rectangle at all
pub fn is_partial_collision(circle: &CircleHitbox, rect: &RectangleHitbox) -> bool {
    let closest = closest_point(circle.center, rect);
    is_point_inside_circle(closest, circle)
}

/// Classify the circle against the rectangle
///
/// Checks run in priority order: rectangle-in-circle, circle-in-rectangle,
/// overlap. The first match wins.
pub fn classify(circle: &CircleHitbox, rect: &RectangleHitbox) -> CollisionState {
    if is_rectangle_inside_circle(rect, circle) {
        return CollisionState::Full;
    }
    if is_circle_inside_rectangle(circle, rect) {
        return CollisionState::Full;
    }
    if is_partial_collision(circle, rect) {
        return CollisionState::Partial;
    }
    CollisionState::None
}
