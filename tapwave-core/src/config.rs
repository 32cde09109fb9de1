//! Gameplay configuration.
use crate::{judgement::HitWindows, score::ScoreValues};

/// Configuration of a judgement session.
///
/// Passed into [`JudgmentEngine::new()`](crate::state::JudgmentEngine::new) and fixed for the
/// lifetime of the session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// Timing windows used to classify hits.
    pub hit_windows: HitWindows,
    /// Points awarded for every judgement.
    pub score_values: ScoreValues,
    /// Radius of a circle in playfield coordinates.
    pub circle_radius: f32,
    /// Extra distance around a circle that still counts as clicking it.
    pub hit_margin: f32,
}

impl Config {
    /// Returns the largest distance from an object's center at which a click reaches it.
    #[inline]
    pub fn hit_zone_radius(&self) -> f32 {
        self.circle_radius + self.hit_margin
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            hit_windows: HitWindows::default(),
            score_values: ScoreValues::default(),
            circle_radius: 30.,
            hit_margin: 20.,
        }
    }
}
