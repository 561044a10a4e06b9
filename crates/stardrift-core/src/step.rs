//! Star angle stepping policy.

use serde::{Deserialize, Serialize};

/// Seconds assumed per frame by the fixed-step policy (a 60Hz display).
pub const FIXED_FRAME_SECONDS: f64 = 0.016;

/// How far a star's angle advances on each frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AngleStep {
    /// Advance by a fixed 16ms worth of rotation per frame, whatever the
    /// real frame interval. Angular speed scales with the frame rate.
    Fixed,
    /// Advance by the real time elapsed since the previous frame.
    #[default]
    Elapsed,
}

impl AngleStep {
    /// Seconds of rotation to apply for a frame that arrived `delta_ms`
    /// after the previous one.
    pub fn step_seconds(self, delta_ms: f64) -> f64 {
        match self {
            AngleStep::Fixed => FIXED_FRAME_SECONDS,
            AngleStep::Elapsed => delta_ms.max(0.0) / 1000.0,
        }
    }
}
