//! Shared fixtures for card stack integration tests.
#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use cardstack_core::prelude::*;

pub const VIEWPORT: ViewportSize = ViewportSize::new(300.0, 500.0);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Vote {
    Like,
    Pass,
}

pub type Engine = CardInteractionEngine<char, Vote>;
pub type SwipeLog = Rc<RefCell<Vec<(char, Vote)>>>;

/// Leftward drags are likes, rightward ones passes; purely vertical drags
/// classify as nothing.
pub fn classify(angle: f64) -> Option<Vote> {
    if angle > 180.0 && angle < 360.0 {
        Some(Vote::Like)
    } else if angle > 0.0 && angle < 180.0 {
        Some(Vote::Pass)
    } else {
        None
    }
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cardstack_core=debug".into()),
        )
        .with_test_writer()
        .try_init();
}

/// `max_visible_cards = 3`, threshold 0.5, horizontal axis.
pub fn config() -> CardStackConfig {
    CardStackConfig::default()
}

pub fn engine_with(config: CardStackConfig) -> (Engine, SwipeLog) {
    init_tracing();
    let log: SwipeLog = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&log);
    let engine = Engine::with_config(config, classify, move |item: &char, vote| {
        sink.borrow_mut().push((*item, vote));
    });
    (engine, log)
}

pub fn engine() -> (Engine, SwipeLog) {
    engine_with(config())
}

pub fn deck() -> Vec<char> {
    vec!['A', 'B', 'C']
}

pub fn horizontal(width: f32) -> Translation {
    Translation::new(width, 0.0)
}

/// A full gesture: one move sample at the final position, then the end.
pub fn drag(
    engine: &mut Engine,
    deck: &[char],
    to: Translation,
    now: Instant,
) -> DragResolution<Vote> {
    engine.drag_changed(deck, to, VIEWPORT, now);
    engine.drag_ended(deck, to, VIEWPORT, now)
}

/// An instant safely past the reveal delay of `config`.
pub fn after_reveal(config: &CardStackConfig, now: Instant) -> Instant {
    now + config.reveal_delay() + Duration::from_millis(1)
}

/// An instant after every animation started at `now` has finished.
pub fn settled(config: &CardStackConfig, now: Instant) -> Instant {
    let animation = config.animation();
    now + config.reveal_delay() + animation.duration + Duration::from_millis(1)
}
