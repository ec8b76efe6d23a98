//! Immutable tunables for a card stack, plus the process-wide default.
//!
//! A [`CardStackConfig`] is built once and handed to an engine; the engine
//! never mutates it. Engines created without an explicit config snapshot
//! [`CardStackConfig::global`] at construction time, so changing the global
//! later only affects engines created afterwards.

mod overrides;

pub use overrides::ConfigOverrides;

use std::sync::RwLock;
use std::time::Duration;

use once_cell::sync::Lazy;

use crate::animation::Animation;
use crate::constants;
use crate::error::ConfigError;
use crate::policy::DragAxis;

static GLOBAL_DEFAULT: Lazy<RwLock<CardStackConfig>> =
    Lazy::new(|| RwLock::new(CardStackConfig::default()));

/// Validated tunables for one card stack.
#[derive(Debug, Clone, PartialEq)]
pub struct CardStackConfig {
    max_visible_cards: usize,
    swipe_threshold: f32,
    card_offset: f32,
    card_scale: f32,
    animation: Animation,
    reveal_delay: Duration,
    drag_axis: DragAxis,
}

impl Default for CardStackConfig {
    fn default() -> Self {
        Self {
            max_visible_cards: constants::layout::MAX_VISIBLE_CARDS,
            swipe_threshold: constants::gesture::SWIPE_THRESHOLD,
            card_offset: constants::layout::CARD_OFFSET,
            card_scale: constants::layout::CARD_SCALE,
            animation: Animation::default(),
            reveal_delay: Duration::from_millis(
                constants::animation::REVEAL_DELAY_MS,
            ),
            drag_axis: DragAxis::default(),
        }
    }
}

impl CardStackConfig {
    /// Build and validate a configuration from every tunable.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        max_visible_cards: usize,
        swipe_threshold: f32,
        card_offset: f32,
        card_scale: f32,
        animation: Animation,
        reveal_delay: Duration,
        drag_axis: DragAxis,
    ) -> Result<Self, ConfigError> {
        Self {
            max_visible_cards,
            swipe_threshold,
            card_offset,
            card_scale,
            animation,
            reveal_delay,
            drag_axis,
        }
        .validate()
    }

    /// Snapshot of the process-wide default.
    pub fn global() -> Self {
        match GLOBAL_DEFAULT.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Replace the process-wide default for engines created from now on.
    pub fn set_global(config: CardStackConfig) {
        tracing::debug!(?config, "replacing global card stack configuration");
        match GLOBAL_DEFAULT.write() {
            Ok(mut guard) => *guard = config,
            Err(poisoned) => *poisoned.into_inner() = config,
        }
    }

    /// Check every invariant, returning the config unchanged when it holds.
    pub fn validate(self) -> Result<Self, ConfigError> {
        if self.max_visible_cards < 1 {
            return Err(ConfigError::NoVisibleCards(self.max_visible_cards));
        }
        if !(self.swipe_threshold > 0.0 && self.swipe_threshold < 1.0) {
            return Err(ConfigError::ThresholdOutOfRange(self.swipe_threshold));
        }
        if !(self.card_scale >= 0.0 && self.card_scale < 1.0) {
            return Err(ConfigError::ScaleOutOfRange(self.card_scale));
        }
        if !self.card_offset.is_finite() {
            return Err(ConfigError::NonFiniteOffset(self.card_offset));
        }
        check_duration("animation_duration", self.animation.duration)?;
        check_duration("reveal_delay", self.reveal_delay)?;
        Ok(self)
    }

    /// Cards drawn at once, including the top card.
    pub fn max_visible_cards(&self) -> usize {
        self.max_visible_cards
    }

    /// Commit distance as a fraction of the relevant viewport dimension.
    pub fn swipe_threshold(&self) -> f32 {
        self.swipe_threshold
    }

    /// Vertical offset per layer behind the top card.
    pub fn card_offset(&self) -> f32 {
        self.card_offset
    }

    /// Scale removed per layer behind the top card.
    pub fn card_scale(&self) -> f32 {
        self.card_scale
    }

    /// Curve for commit, cancel and undo tweens.
    pub fn animation(&self) -> Animation {
        self.animation
    }

    /// Wait between an exit tween and the cursor change it reveals.
    pub fn reveal_delay(&self) -> Duration {
        self.reveal_delay
    }

    /// Axis drags are projected onto.
    pub fn drag_axis(&self) -> DragAxis {
        self.drag_axis
    }

    /// Copy with a different visible card count.
    pub fn with_max_visible_cards(
        self,
        max_visible_cards: usize,
    ) -> Result<Self, ConfigError> {
        Self {
            max_visible_cards,
            ..self
        }
        .validate()
    }

    /// Copy with a different commit fraction.
    pub fn with_swipe_threshold(
        self,
        swipe_threshold: f32,
    ) -> Result<Self, ConfigError> {
        Self {
            swipe_threshold,
            ..self
        }
        .validate()
    }

    /// Copy with a different per-layer offset.
    pub fn with_card_offset(self, card_offset: f32) -> Result<Self, ConfigError> {
        Self {
            card_offset,
            ..self
        }
        .validate()
    }

    /// Copy with a different per-layer scale step.
    pub fn with_card_scale(self, card_scale: f32) -> Result<Self, ConfigError> {
        Self { card_scale, ..self }.validate()
    }

    /// Copy with a different tween curve.
    pub fn with_animation(
        self,
        animation: Animation,
    ) -> Result<Self, ConfigError> {
        Self { animation, ..self }.validate()
    }

    /// Copy with a different reveal delay.
    pub fn with_reveal_delay(
        self,
        reveal_delay: Duration,
    ) -> Result<Self, ConfigError> {
        Self {
            reveal_delay,
            ..self
        }
        .validate()
    }

    /// Copy with a different drag axis. Every axis is valid.
    pub fn with_drag_axis(self, drag_axis: DragAxis) -> Self {
        Self { drag_axis, ..self }
    }
}

fn check_duration(
    field: &'static str,
    value: Duration,
) -> Result<(), ConfigError> {
    let max = Duration::from_millis(constants::animation::MAX_DURATION_MS);
    if value > max {
        return Err(ConfigError::DurationTooLong { field, value, max });
    }
    Ok(())
}
