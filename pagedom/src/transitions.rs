use std::f32::consts::PI;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Duration of a slide when none is configured.
pub const DEFAULT_SLIDE_DURATION: Duration = Duration::from_millis(400);

/// Configuration for a single slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionConfig {
    pub duration: Duration,
    pub easing: Easing,
}

impl TransitionConfig {
    pub fn new(duration: Duration, easing: Easing) -> Self {
        Self { duration, easing }
    }
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SLIDE_DURATION, Easing::Swing)
    }
}

/// Easing function for transitions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    #[default]
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
    /// Half cosine wave, the classic web slide curve.
    Swing,
}

impl Easing {
    /// Apply easing to progress (0.0 to 1.0).
    pub fn apply(self, t: f32) -> f32 {
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t,
            Easing::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Easing::Swing => {
                // Snap the endpoints so cos rounding never leaves a sliver.
                if t <= 0.0 {
                    0.0
                } else if t >= 1.0 {
                    1.0
                } else {
                    0.5 - (t * PI).cos() / 2.0
                }
            }
        }
    }
}

/// Direction of a vertical slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlideDirection {
    /// Reveal: the element grows from nothing to its full height.
    Down,
    /// Collapse: the element shrinks to nothing and is then hidden.
    Up,
}
