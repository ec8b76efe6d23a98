//! Runtime overrides for the compiled defaults.
//!
//! Every field is optional; accessors fall back to [`crate::constants`] when
//! a field is unset. Hosts typically deserialize this from their own settings
//! (TOML is supported directly) and call [`ConfigOverrides::resolve`].

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::CardStackConfig;
use crate::animation::{Animation, EasingKind};
use crate::constants::{animation, gesture, layout};
use crate::error::Result;
use crate::policy::DragAxis;

/// Optional replacements for each compiled default.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigOverrides {
    // ========== LAYOUT ==========
    /// Cards drawn at once
    pub max_visible_cards: Option<usize>,
    /// Vertical offset per layer
    pub card_offset: Option<f32>,
    /// Scale decrement per layer
    pub card_scale: Option<f32>,

    // ========== GESTURE ==========
    /// Commit threshold as a fraction of the viewport
    pub swipe_threshold: Option<f32>,
    /// Axis the drag is projected onto
    pub drag_axis: Option<DragAxis>,

    // ========== ANIMATION ==========
    /// Animation duration (ms)
    pub animation_duration_ms: Option<u64>,
    /// Animation easing function
    pub animation_easing: Option<EasingKind>,
    /// Delay before a revealed card's index change (ms)
    pub reveal_delay_ms: Option<u64>,
}

impl ConfigOverrides {
    /// Overrides with every field unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse overrides from TOML. Unknown keys are rejected.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Visible card count, or its default.
    pub fn max_visible_cards(&self) -> usize {
        self.max_visible_cards.unwrap_or(layout::MAX_VISIBLE_CARDS)
    }

    /// Per-layer offset, or its default.
    pub fn card_offset(&self) -> f32 {
        self.card_offset.unwrap_or(layout::CARD_OFFSET)
    }

    /// Per-layer scale step, or its default.
    pub fn card_scale(&self) -> f32 {
        self.card_scale.unwrap_or(layout::CARD_SCALE)
    }

    /// Commit fraction, or its default.
    pub fn swipe_threshold(&self) -> f32 {
        self.swipe_threshold.unwrap_or(gesture::SWIPE_THRESHOLD)
    }

    /// Drag axis, or its default.
    pub fn drag_axis(&self) -> DragAxis {
        self.drag_axis.unwrap_or_default()
    }

    /// Tween length in milliseconds, or its default.
    pub fn animation_duration_ms(&self) -> u64 {
        self.animation_duration_ms.unwrap_or(animation::DURATION_MS)
    }

    /// Tween curve, or its default.
    pub fn animation_easing(&self) -> EasingKind {
        self.animation_easing.unwrap_or(animation::EASING)
    }

    /// Reveal delay in milliseconds, or its default.
    pub fn reveal_delay_ms(&self) -> u64 {
        self.reveal_delay_ms.unwrap_or(animation::REVEAL_DELAY_MS)
    }

    /// True when no field overrides a default.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Build a validated configuration from the overrides and defaults.
    pub fn resolve(&self) -> Result<CardStackConfig> {
        let config = CardStackConfig::new(
            self.max_visible_cards(),
            self.swipe_threshold(),
            self.card_offset(),
            self.card_scale(),
            Animation::new(
                Duration::from_millis(self.animation_duration_ms()),
                self.animation_easing(),
            ),
            Duration::from_millis(self.reveal_delay_ms()),
            self.drag_axis(),
        )?;
        Ok(config)
    }
}
