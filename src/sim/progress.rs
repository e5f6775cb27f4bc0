//! Progress counter driven by collision outcomes

use serde::{Deserialize, Serialize};

use super::collision::CollisionState;

/// Progress gained for a full overlap
pub const FULL_REWARD: i32 = 3;
/// Progress lost for a partial overlap
pub const PARTIAL_PENALTY: i32 = 1;
/// Progress lost for a miss
pub const MISS_PENALTY: i32 = 3;

impl CollisionState {
    /// Signed progress delta for this outcome
    pub fn progress_delta(self) -> i32 {
        match self {
            CollisionState::Full => FULL_REWARD,
            CollisionState::Partial => -PARTIAL_PENALTY,
            CollisionState::None => -MISS_PENALTY,
        }
    }
}

/// Apply one classification to a progress value
///
/// Unbounded in both directions. Never clamped; wraps at the `i32` limits
/// instead of panicking.
#[inline]
pub fn accumulate(progress: i32, state: CollisionState) -> i32 {
    progress.wrapping_add(state.progress_delta())
}

/// Running progress for one play session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress(i32);

impl Progress {
    pub fn new() -> Self {
        Self(0)
    }

    pub fn value(self) -> i32 {
        self.0
    }

    /// Record one classification event
    pub fn apply(&mut self, state: CollisionState) {
        self.0 = accumulate(self.0, state);
    }

    /// HUD label, e.g. "Progress: 12"
    pub fn label(self) -> String {
        format_progress(self.0)
    }
}

/// Format a progress value for display
pub fn format_progress(value: i32) -> String {
    format!("Progress: {value}")
}
