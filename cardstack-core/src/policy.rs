//! Drag direction policy: axis projection and commit thresholds.

use cardstack_model::{Translation, ViewportSize};
use serde::{Deserialize, Serialize};

/// Which components of a drag the stack responds to.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum DragAxis {
    /// Only the x-component counts.
    #[default]
    Horizontal,
    /// Only the y-component counts.
    Vertical,
    /// Both components pass through.
    All,
}

impl DragAxis {
    /// Project a raw drag vector onto this axis.
    pub fn normalize(self, raw: Translation) -> Translation {
        match self {
            Self::Horizontal => Translation::new(raw.width, 0.0),
            Self::Vertical => Translation::new(0.0, raw.height),
            Self::All => raw,
        }
    }

    /// Distance a drag has to exceed to count as a committed swipe.
    pub fn threshold(self, viewport: ViewportSize, fraction: f32) -> f32 {
        match self {
            Self::Horizontal => viewport.width * fraction,
            Self::Vertical => viewport.height * fraction,
            Self::All => viewport.min_dimension() * fraction,
        }
    }
}
