//! Error types for configuration and host-side cursor writes.

use std::time::Duration;

use cardstack_model::ModelError;
use thiserror::Error;

/// Reasons a [`CardStackConfig`](crate::config::CardStackConfig) is rejected.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// No card would be drawn.
    #[error("max_visible_cards must be at least 1, got {0}")]
    NoVisibleCards(usize),

    /// Commit fraction outside `(0, 1)` or NaN.
    #[error("swipe_threshold must lie strictly between 0 and 1, got {0}")]
    ThresholdOutOfRange(f32),

    /// Per-layer scale outside `[0, 1)` or NaN.
    #[error("card_scale must lie in [0, 1), got {0}")]
    ScaleOutOfRange(f32),

    /// Per-layer offset is infinite or NaN.
    #[error("card_offset must be finite, got {0}")]
    NonFiniteOffset(f32),

    /// A duration beyond the accepted maximum.
    #[error("{field} must not exceed {max:?}, got {value:?}")]
    DurationTooLong {
        /// Name of the offending field.
        field: &'static str,
        /// Rejected value.
        value: Duration,
        /// Largest accepted value.
        max: Duration,
    },
}

/// Errors surfaced by the fallible public API.
#[derive(Error, Debug)]
pub enum CardStackError {
    /// Configuration failed validation.
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// Override source is not valid TOML for
    /// [`ConfigOverrides`](crate::config::ConfigOverrides).
    #[error("Configuration parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// Cursor write outside the deck.
    #[error("Model error: {0}")]
    Model(#[from] ModelError),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, CardStackError>;
