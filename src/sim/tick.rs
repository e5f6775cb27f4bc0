//! Per-frame simulation step
//!
//! Advances the whole simulation by one frame of elapsed time.

use serde::{Deserialize, Serialize};

use super::character::MotionState;
use super::collision::{CollisionState, classify};
use super::hazard::crossed_center;
use super::state::SimulationState;

/// Input commands for a single frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    /// Left held
    pub left: bool,
    /// Right held
    pub right: bool,
    /// Jump went down this frame (rising edge only)
    pub jump_pressed: bool,
}

/// What happened during one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickOutcome {
    /// State the character's frame ran under
    pub motion: MotionState,
    /// Classification recorded if the nebula passed the character
    pub collision: Option<CollisionState>,
}

/// Advance the simulation by `dt` seconds
pub fn tick(state: &mut SimulationState, input: &TickInput, dt: f32) -> TickOutcome {
    let floor_y = state.floor_y();
    let offset_before = state
        .nebula
        .as_ref()
        .map(|n| n.offset_from(&state.character.hitbox()));

    let motion = state.character.update(input, dt, &state.tuning, floor_y);

    let mut collision = None;
    if let (Some(nebula), Some(cfg)) = (state.nebula.as_mut(), state.hazard.as_ref()) {
        nebula.advance(dt, cfg);

        // Classify before respawning so a pass that crosses and exits in one
        // frame still counts
        let hitbox = state.character.hitbox();
        let offset_after = nebula.offset_from(&hitbox);
        let crossed = offset_before.is_some_and(|before| crossed_center(before, offset_after));
        let leaving = nebula.is_off_screen();
        if !nebula.scored && (crossed || leaving) {
            let result = classify(&nebula.hitbox, &hitbox);
            nebula.scored = true;
            state.progress.apply(result);
            log::debug!("Nebula pass: {:?} -> {}", result, state.progress.label());
            collision = Some(result);
        }

        if leaving {
            nebula.respawn(cfg, state.screen.x, &mut state.rng);
        }
    }

    state.time_ticks += 1;
    state.elapsed += dt;

    TickOutcome { motion, collision }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use glam::Vec2;

    const DT: f32 = 1.0 / 60.0;

    fn quiet_settings() -> Settings {
        let mut settings = Settings::default();
        settings.hazard.enabled = false;
        settings
    }

    #[test]
    fn test_tick_counts_time() {
        let mut state = SimulationState::new(&quiet_settings());
        for _ in 0..3 {
            tick(&mut state, &TickInput::default(), DT);
        }
        assert_eq!(state.time_ticks, 3);
        assert!((state.elapsed - 3.0 * DT).abs() < 1e-6);
    }

    #[test]
    fn test_idle_scenario() {
        let mut state = SimulationState::new(&quiet_settings());
        let outcome = tick(&mut state, &TickInput::default(), DT);
        assert_eq!(outcome.motion, MotionState::Grounded);
        assert_eq!(outcome.collision, None);
        assert_eq!(state.character.frame, state.tuning.idle_frame);
        assert_eq!(state.character.velocity.y, 0.0);
    }

    #[test]
    fn test_jump_then_airborne() {
        let mut state = SimulationState::new(&quiet_settings());
        let jump = TickInput {
            jump_pressed: true,
            ..Default::default()
        };
        assert_eq!(tick(&mut state, &jump, DT).motion, MotionState::Grounded);
        let outcome = tick(&mut state, &TickInput::default(), DT);
        assert_eq!(outcome.motion, MotionState::Airborne);
        assert_eq!(state.character.frame, state.tuning.flight_frame);
    }

    #[test]
    fn test_nebula_pass_through_body_gains_progress() {
        let mut state = SimulationState::new(&Settings::default());
        let body = state.character.hitbox();
        // Line the nebula up with the middle of the body, just right of center
        let nebula = state.nebula.as_mut().unwrap();
        nebula.hitbox.center = Vec2::new(body.center_x() + 1.0, (body.top() + body.bottom()) / 2.0);

        let outcome = tick(&mut state, &TickInput::default(), DT);
        assert_eq!(outcome.collision, Some(CollisionState::Full));
        assert_eq!(state.progress.value(), 3);
    }

    #[test]
    fn test_nebula_pass_overhead_loses_progress() {
        let mut state = SimulationState::new(&Settings::default());
        let body = state.character.hitbox();
        let nebula = state.nebula.as_mut().unwrap();
        nebula.hitbox.center = Vec2::new(body.center_x() + 1.0, body.top() - 100.0);

        let outcome = tick(&mut state, &TickInput::default(), DT);
        assert_eq!(outcome.collision, Some(CollisionState::None));
        assert_eq!(state.progress.value(), -3);

        // Already past: no second event
        let outcome = tick(&mut state, &TickInput::default(), DT);
        assert_eq!(outcome.collision, None);
        assert_eq!(state.progress.value(), -3);
    }

    #[test]
    fn test_nebula_grazing_head() {
        let mut state = SimulationState::new(&Settings::default());
        let body = state.character.hitbox();
        let nebula = state.nebula.as_mut().unwrap();
        nebula.hitbox.center = Vec2::new(body.center_x() + 1.0, body.top() - 10.0);

        let outcome = tick(&mut state, &TickInput::default(), DT);
        assert_eq!(outcome.collision, Some(CollisionState::Partial));
        assert_eq!(state.progress.value(), -1);
    }

    #[test]
    fn test_walking_back_across_nebula_scores_once() {
        let mut settings = Settings::default();
        settings.character.start_x = 400.0;
        let mut state = SimulationState::new(&settings);
        let body = state.character.hitbox();
        let nebula = state.nebula.as_mut().unwrap();
        nebula.hitbox.center = Vec2::new(body.center_x() + 1.0, body.top() - 100.0);

        let mut events = Vec::new();
        events.extend(tick(&mut state, &TickInput::default(), DT).collision);

        // Run left past the nebula, then let it drift across again and exit
        let left = TickInput {
            left: true,
            ..Default::default()
        };
        for _ in 0..20 {
            events.extend(tick(&mut state, &left, DT).collision);
        }
        assert!(state.nebula.as_ref().unwrap().offset_from(&state.character.hitbox()) > 0.0);
        for _ in 0..120 {
            events.extend(tick(&mut state, &TickInput::default(), DT).collision);
        }

        assert_eq!(state.nebula.as_ref().unwrap().passes, 1);
        assert_eq!(events, vec![CollisionState::None]);
        assert_eq!(state.progress.value(), -3);
    }

    #[test]
    fn test_cross_and_exit_in_one_frame_still_scores() {
        let mut state = SimulationState::new(&Settings::default());
        let body = state.character.hitbox();
        let nebula = state.nebula.as_mut().unwrap();
        nebula.hitbox.center = Vec2::new(body.center_x() + 5.0, (body.top() + body.bottom()) / 2.0);

        // A long frame: 90 px carries the nebula across the center and off screen
        let outcome = tick(&mut state, &TickInput::default(), 0.3);
        assert_eq!(outcome.collision, Some(CollisionState::None));
        assert_eq!(state.progress.value(), -3);

        let nebula = state.nebula.as_ref().unwrap();
        assert_eq!(nebula.passes, 1);
        assert!(!nebula.scored);
        assert_eq!(nebula.hitbox.center.x, 930.0);
    }

    #[test]
    fn test_pass_never_crossing_center_scores_on_exit() {
        let mut settings = Settings::default();
        settings.character.start_x = -500.0;
        let mut state = SimulationState::new(&settings);
        let nebula = state.nebula.as_mut().unwrap();
        nebula.hitbox.center.x = -29.0;

        let outcome = tick(&mut state, &TickInput::default(), DT);
        assert_eq!(outcome.collision, Some(CollisionState::None));
        assert_eq!(state.nebula.as_ref().unwrap().passes, 1);
    }

    #[test]
    fn test_determinism() {
        let settings = Settings::default();
        let mut state1 = SimulationState::new(&settings);
        let mut state2 = SimulationState::new(&settings);

        let inputs = [
            TickInput {
                right: true,
                ..Default::default()
            },
            TickInput {
                right: true,
                jump_pressed: true,
                ..Default::default()
            },
            TickInput {
                left: true,
                ..Default::default()
            },
            TickInput::default(),
        ];

        for i in 0..600 {
            let input = &inputs[(i / 20) % inputs.len()];
            tick(&mut state1, input, DT);
            tick(&mut state2, input, DT);
        }

        assert_eq!(state1.character, state2.character);
        assert_eq!(state1.nebula, state2.nebula);
        assert_eq!(state1.progress, state2.progress);
    }
}
