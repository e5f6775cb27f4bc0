//! Property tests for the classifier, progress and integrator

use dasher::sim::collision::{
    CollisionState, classify, closest_point, is_circle_inside_rectangle,
    is_rectangle_inside_circle,
};
use dasher::sim::geometry::{circle_hitbox, rectangle_hitbox};
use dasher::sim::{accumulate, integrate_axis};
use glam::Vec2;
use proptest::prelude::*;

/// Finite coordinates in a window-sized range
fn coord() -> impl Strategy<Value = f32> {
    -1000.0f32..1000.0
}

fn extent() -> impl Strategy<Value = f32> {
    0.0f32..500.0
}

fn radius() -> impl Strategy<Value = f32> {
    0.0f32..500.0
}

fn collision_state() -> impl Strategy<Value = CollisionState> {
    prop_oneof![
        Just(CollisionState::None),
        Just(CollisionState::Partial),
        Just(CollisionState::Full),
    ]
}

proptest! {
    #[test]
    fn containment_is_full(
        ox in coord(), oy in coord(), w in extent(), h in extent(),
        cx in coord(), cy in coord(), r in radius(),
    ) {
        let rect = rectangle_hitbox(Vec2::new(ox, oy), Vec2::new(w, h));
        let circle = circle_hitbox(Vec2::new(cx, cy), r);
        if is_rectangle_inside_circle(&rect, &circle) || is_circle_inside_rectangle(&circle, &rect) {
            prop_assert_eq!(classify(&circle, &rect), CollisionState::Full);
        }
    }

    #[test]
    fn closest_point_decides_overlap(
        ox in coord(), oy in coord(), w in extent(), h in extent(),
        cx in coord(), cy in coord(), r in radius(),
    ) {
        let rect = rectangle_hitbox(Vec2::new(ox, oy), Vec2::new(w, h));
        let circle = circle_hitbox(Vec2::new(cx, cy), r);
        let d2 = closest_point(circle.center, &rect).distance_squared(circle.center);
        let state = classify(&circle, &rect);

        let contained = is_rectangle_inside_circle(&rect, &circle)
            || is_circle_inside_rectangle(&circle, &rect);

        if contained {
            prop_assert_eq!(state, CollisionState::Full);
        } else if d2 > r * r {
            prop_assert_eq!(state, CollisionState::None);
        } else {
            prop_assert_eq!(state, CollisionState::Partial);
        }
    }

    #[test]
    fn tangent_circle_is_never_none(
        ox in coord(), oy in coord(), w in extent(), h in extent(),
        gap in 0u8..=100, side in 0u8..4,
    ) {
        // Integer gaps keep the tangency distance exact
        let gap = f32::from(gap);
        let (ox, oy, w, h) = (ox.round(), oy.round(), w.round(), h.round());
        let rect = rectangle_hitbox(Vec2::new(ox, oy), Vec2::new(w, h));
        let mid = Vec2::new(ox + (w / 2.0).floor(), oy + (h / 2.0).floor());
        let center = match side {
            0 => Vec2::new(ox - gap, mid.y),
            1 => Vec2::new(ox + w + gap, mid.y),
            2 => Vec2::new(mid.x, oy - gap),
            _ => Vec2::new(mid.x, oy + h + gap),
        };
        let circle = circle_hitbox(center, gap);
        prop_assert_ne!(classify(&circle, &rect), CollisionState::None);
    }

    #[test]
    fn accumulate_applies_fixed_deltas(p in -1_000_000i32..1_000_000, state in collision_state()) {
        let expected = match state {
            CollisionState::Full => p + 3,
            CollisionState::Partial => p - 1,
            CollisionState::None => p - 3,
        };
        prop_assert_eq!(accumulate(p, state), expected);
    }

    #[test]
    fn integration_is_identity_at_zero_dt(pos in coord(), v in -5000.0f32..5000.0) {
        prop_assert_eq!(integrate_axis(pos, v, 0.0), pos);
    }

    #[test]
    fn integration_steps_compose(
        pos in coord(), v in -5000.0f32..5000.0, dt1 in 0.0f32..0.1, dt2 in 0.0f32..0.1,
    ) {
        let whole = integrate_axis(pos, v, dt1 + dt2);
        let split = integrate_axis(integrate_axis(pos, v, dt1), v, dt2);
        // Equal up to f32 rounding
        prop_assert!((whole - split).abs() <= 1e-3 * (1.0 + pos.abs() + v.abs()));
    }
}

#[test]
fn concrete_scenarios() {
    let rect = rectangle_hitbox(Vec2::ZERO, Vec2::new(10.0, 10.0));
    let cases = [
        (Vec2::new(5.0, 5.0), 20.0, CollisionState::Full),
        (Vec2::new(5.0, 5.0), 1.0, CollisionState::Full),
        (Vec2::new(15.0, 5.0), 3.0, CollisionState::None),
        (Vec2::new(12.0, 5.0), 3.0, CollisionState::Partial),
    ];
    for (center, r, expected) in cases {
        assert_eq!(classify(&circle_hitbox(center, r), &rect), expected, "center {center} r {r}");
    }
}
