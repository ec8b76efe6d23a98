//! Timing curves and the explicit-clock translation tween.
//!
//! Nothing in here reads the wall clock: callers pass the `Instant` they are
//! rendering for, the same way frame-synchronised motion is driven elsewhere
//! in the stack.

mod animator;

pub use animator::TranslationAnimator;

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::constants;

/// Easing function type for animations
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum EasingKind {
    /// Constant speed.
    Linear,
    /// Quadratic, slow start.
    EaseIn,
    /// Quadratic, slow finish.
    EaseOut,
    /// Quadratic at both ends.
    #[default]
    EaseInOut,
}

impl EasingKind {
    /// Every curve, in declaration order.
    pub const ALL: [Self; 4] =
        [Self::Linear, Self::EaseIn, Self::EaseOut, Self::EaseInOut];

    /// Map linear progress to eased progress. Input is clamped to `[0, 1]`.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseIn => t * t,
            Self::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Self::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - 2.0 * (1.0 - t) * (1.0 - t)
                }
            }
        }
    }
}

impl std::fmt::Display for EasingKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Linear => write!(f, "Linear"),
            Self::EaseIn => write!(f, "Ease In"),
            Self::EaseOut => write!(f, "Ease Out"),
            Self::EaseInOut => write!(f, "Ease In/Out"),
        }
    }
}

/// A timing curve: how long a change takes and how it eases.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Animation {
    /// Time from start to settled.
    pub duration: Duration,
    /// Shape of the progress curve.
    pub easing: EasingKind,
}

impl Default for Animation {
    fn default() -> Self {
        Self::new(
            Duration::from_millis(constants::animation::DURATION_MS),
            constants::animation::EASING,
        )
    }
}

impl Animation {
    /// Curve of the given length and easing.
    pub const fn new(duration: Duration, easing: EasingKind) -> Self {
        Self { duration, easing }
    }

    /// Eased progress in `[0, 1]` for an animation started at `started`.
    pub fn progress_at(&self, started: Instant, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(started);
        if elapsed >= self.duration {
            return 1.0;
        }
        let t = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        self.easing.apply(t)
    }

    /// Instant at which an animation started at `started` settles, or
    /// `None` if that lies beyond what `Instant` can represent.
    pub fn finishes_at(&self, started: Instant) -> Option<Instant> {
        started.checked_add(self.duration)
    }
}
