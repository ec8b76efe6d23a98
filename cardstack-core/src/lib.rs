//! # Card Stack Core
//!
//! Gesture-to-state engine for a stack of swipeable cards: the top card
//! follows the pointer, a drag past the threshold swipes it away, anything
//! shorter snaps it back, and dragging the other way pulls the previous card
//! back onto the stack.
//!
//! ## Architecture
//!
//! - [`policy`]: projects raw drags onto the configured [`DragAxis`] and
//!   computes commit thresholds
//! - [`config`]: immutable tunables, the process-wide default and runtime
//!   overrides
//! - [`animation`]: easing curves and the explicit-clock translation tween
//! - [`engine`]: the [`CardInteractionEngine`] state machine and its reveal
//!   scheduler
//! - [`renderer`]: pure stack layout plus composition with host views
//!
//! The crate draws nothing itself. Hosts feed pointer samples and frame
//! timestamps in, and read layouts and swipe callbacks out.
//!
//! ## Examples
//!
//! ```
//! use std::time::{Duration, Instant};
//!
//! use cardstack_core::prelude::*;
//!
//! let deck: Vec<u32> = vec![10, 20, 30];
//! let config = CardStackConfig::default();
//! let mut engine = CardInteractionEngine::with_config(
//!     config.clone(),
//!     |angle: f64| (angle > 225.0 && angle < 315.0).then_some("like"),
//!     |item: &u32, direction: &'static str| println!("{item} -> {direction}"),
//! );
//!
//! let viewport = ViewportSize::new(300.0, 500.0);
//! let now = Instant::now();
//! let drag = Translation::new(-200.0, 0.0);
//! engine.drag_changed(&deck, drag, viewport, now);
//! let resolution = engine.drag_ended(&deck, drag, viewport, now);
//! assert!(resolution.is_commit());
//!
//! engine.tick(&deck, now + config.reveal_delay() + Duration::from_millis(1));
//! assert_eq!(engine.current_index(), 1);
//!
//! let layout = StackRenderer::layout(&engine.snapshot(now), &config, deck.len());
//! assert_eq!(layout.top_card().map(|card| card.index), Some(1));
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod animation;
pub mod config;
pub mod constants;
pub mod engine;
pub mod error;
pub mod policy;
pub mod prelude;
pub mod renderer;

pub use cardstack_model as model;

pub use animation::{Animation, EasingKind, TranslationAnimator};
pub use config::{CardStackConfig, ConfigOverrides};
pub use engine::{
    CardInteractionEngine, DragResolution, InteractionPhase,
    InteractionSnapshot,
};
pub use error::{CardStackError, ConfigError, Result};
pub use policy::DragAxis;
pub use renderer::{
    CardLayout, PlaceholderLayout, RenderedCard, RenderedStack, StackLayout,
    StackRenderer,
};
