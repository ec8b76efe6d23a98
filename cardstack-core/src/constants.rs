//! Compiled defaults for every tunable.
//!
//! [`ConfigOverrides`](crate::config::ConfigOverrides) falls back to these
//! when a field is unset.

/// Stack geometry.
pub mod layout {
    /// Number of cards drawn at once, including the top card.
    pub const MAX_VISIBLE_CARDS: usize = 3;
    /// Vertical offset added per layer behind the top card.
    pub const CARD_OFFSET: f32 = 10.0;
    /// Scale removed per layer behind the top card.
    pub const CARD_SCALE: f32 = 0.1;
}

/// Drag recognition.
pub mod gesture {
    /// Fraction of the relevant viewport dimension a drag must exceed to
    /// commit.
    pub const SWIPE_THRESHOLD: f32 = 0.5;
    /// Extra distance past the left viewport edge when an undo finishes.
    pub const UNDO_OVERSHOOT: f32 = 44.0;
}

/// Timing.
pub mod animation {
    use crate::animation::EasingKind;

    /// Length of commit, cancel and undo tweens.
    pub const DURATION_MS: u64 = 350;
    /// Curve of commit, cancel and undo tweens.
    pub const EASING: EasingKind = EasingKind::EaseInOut;
    /// Gap between an exit animation and the index change it reveals.
    pub const REVEAL_DELAY_MS: u64 = 150;
    /// Upper bound accepted for any configured duration.
    pub const MAX_DURATION_MS: u64 = 60_000;
}
