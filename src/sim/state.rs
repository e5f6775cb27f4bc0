//! Simulation state
//!
//! Everything that changes from frame to frame lives in `SimulationState`,
//! owned by the frame loop and handed to `tick` by mutable reference.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::character::{Character, Tuning};
use super::geometry::Dimensions2D;
use super::hazard::{HazardConfig, Nebula};
use super::progress::Progress;
use crate::settings::Settings;

/// Complete per-run state
#[derive(Debug, Clone)]
pub struct SimulationState {
    pub character: Character,
    /// `None` when the hazard is disabled
    pub nebula: Option<Nebula>,
    pub progress: Progress,
    /// Frames simulated
    pub time_ticks: u64,
    /// Seconds simulated
    pub elapsed: f32,
    /// Window size
    pub screen: Dimensions2D,
    pub tuning: Tuning,
    pub hazard: Option<HazardConfig>,
    pub(crate) rng: Pcg32,
}

impl SimulationState {
    /// Fresh run: character on the floor, progress at zero
    pub fn new(settings: &Settings) -> Self {
        let screen = settings.screen();
        let hazard = settings.hazard();
        let mut rng = Pcg32::seed_from_u64(settings.hazard.seed);
        let nebula = hazard
            .as_ref()
            .map(|cfg| Nebula::spawn(cfg, screen.x, &mut rng));

        let tuning = settings.tuning();

        Self {
            character: Character::new(
                settings.character.start_x,
                settings.character_size(),
                screen.y,
                &tuning,
            ),
            nebula,
            progress: Progress::new(),
            time_ticks: 0,
            elapsed: 0.0,
            screen,
            tuning,
            hazard,
            rng,
        }
    }

    /// Floor line for the character's top edge
    pub fn floor_y(&self) -> f32 {
        self.character.floor_y(self.screen.y)
    }

    /// Character position snapshot
    pub fn character_position(&self) -> Vec2 {
        self.character.position
    }
}
