//! Forward drags: commits, cancels and the guards around them.

mod support;

use std::time::{Duration, Instant};

use cardstack_core::constants::animation::MAX_DURATION_MS;
use cardstack_core::prelude::*;
use support::{
    VIEWPORT, Vote, after_reveal, config, deck, drag, engine, engine_with,
    horizontal, settled,
};

#[test]
fn committed_swipe_fires_once_and_advances_after_delay() {
    let (mut engine, log) = engine();
    let deck = deck();
    let now = Instant::now();

    let resolution = drag(&mut engine, &deck, horizontal(-200.0), now);

    assert_eq!(
        resolution,
        DragResolution::Committed {
            index: 0,
            direction: Vote::Like
        }
    );
    assert_eq!(*log.borrow(), vec![('A', Vote::Like)]);
    assert_eq!(engine.translation(), Translation::ZERO);
    // The cursor only moves once the reveal delay has passed.
    assert_eq!(engine.current_index(), 0);
    assert!(!engine.tick(&deck, now));
    assert_eq!(engine.current_index(), 0);

    assert!(engine.tick(&deck, after_reveal(&config(), now)));
    assert_eq!(engine.current_index(), 1);
    assert_eq!(log.borrow().len(), 1);
}

#[test]
fn short_drag_snaps_back_without_callback() {
    let (mut engine, log) = engine();
    let deck = deck();
    let now = Instant::now();

    let resolution = drag(&mut engine, &deck, horizontal(-100.0), now);

    assert_eq!(resolution, DragResolution::Cancelled);
    assert!(log.borrow().is_empty());
    assert_eq!(engine.current_index(), 0);
    assert_eq!(engine.translation(), Translation::ZERO);
    engine.tick(&deck, settled(&config(), now));
    assert_eq!(engine.current_index(), 0);
    assert_eq!(
        engine.displayed_translation(settled(&config(), now)),
        Translation::ZERO
    );
}

#[test]
fn drag_exactly_at_threshold_does_not_commit() {
    let (mut engine, log) = engine();
    let deck = deck();

    let resolution =
        drag(&mut engine, &deck, horizontal(-150.0), Instant::now());

    assert_eq!(resolution, DragResolution::Cancelled);
    assert!(log.borrow().is_empty());
}

#[test]
fn unclassified_direction_never_commits() {
    let log = std::rc::Rc::new(std::cell::RefCell::new(0usize));
    let sink = std::rc::Rc::clone(&log);
    let mut engine: CardInteractionEngine<char, Vote> =
        CardInteractionEngine::with_config(
            config(),
            |_angle: f64| None,
            move |_item: &char, _vote: Vote| *sink.borrow_mut() += 1,
        );
    let deck = deck();
    let now = Instant::now();

    let resolution = drag(&mut engine, &deck, horizontal(-290.0), now);

    assert_eq!(resolution, DragResolution::Cancelled);
    assert_eq!(*log.borrow(), 0);
    engine.tick(&deck, settled(&config(), now));
    assert_eq!(engine.current_index(), 0);
}

#[test]
fn live_translation_tracks_every_sample() {
    let (mut engine, _log) = engine();
    let deck = deck();
    let now = Instant::now();

    engine.drag_changed(&deck, Translation::new(-20.0, 35.0), VIEWPORT, now);
    assert_eq!(engine.translation(), horizontal(-20.0));
    assert_eq!(engine.displayed_translation(now), horizontal(-20.0));
    assert_eq!(engine.phase(now), InteractionPhase::ForwardDragging);
    assert_eq!(engine.live_direction(now), Some(Vote::Like));

    engine.drag_changed(&deck, horizontal(-80.0), VIEWPORT, now);
    assert_eq!(engine.translation(), horizontal(-80.0));
    assert_eq!(engine.interacting_index(), None);
}

#[test]
fn exhausted_deck_tracks_but_never_commits() {
    let (mut engine, log) = engine();
    let deck = deck();
    let now = Instant::now();
    engine
        .set_current_index(&deck, deck.len())
        .expect("end sentinel is a valid cursor");

    engine.drag_changed(&deck, horizontal(-250.0), VIEWPORT, now);
    assert_eq!(engine.translation(), horizontal(-250.0));
    let resolution =
        engine.drag_ended(&deck, horizontal(-250.0), VIEWPORT, now);

    assert_eq!(resolution, DragResolution::Cancelled);
    assert!(log.borrow().is_empty());
    assert_eq!(engine.current_index(), 3);
    assert_eq!(engine.translation(), Translation::ZERO);
}

#[test]
fn empty_deck_stays_idle() {
    let (mut engine, log) = engine();
    let deck: Vec<char> = Vec::new();
    let now = Instant::now();

    let resolution = drag(&mut engine, &deck, horizontal(-250.0), now);

    assert_eq!(resolution, DragResolution::Cancelled);
    assert!(log.borrow().is_empty());
    assert_eq!(engine.current_index(), 0);
    let later = settled(&config(), now);
    engine.tick(&deck, later);
    assert_eq!(engine.phase(later), InteractionPhase::Idle);
}

#[test]
fn swiping_through_the_whole_deck() {
    let (mut engine, log) = engine();
    let deck = deck();
    let mut now = Instant::now();

    for _ in 0..deck.len() {
        let resolution = drag(&mut engine, &deck, horizontal(-220.0), now);
        assert!(resolution.is_commit());
        now = after_reveal(&config(), now);
        engine.tick(&deck, now);
    }

    assert_eq!(engine.current_index(), deck.len());
    assert_eq!(
        *log.borrow(),
        vec![('A', Vote::Like), ('B', Vote::Like), ('C', Vote::Like)]
    );
    assert_eq!(
        drag(&mut engine, &deck, horizontal(-220.0), now),
        DragResolution::Cancelled
    );
    assert_eq!(log.borrow().len(), 3);
}

#[test]
fn new_gesture_flushes_pending_advance() {
    let (mut engine, log) = engine();
    let deck = deck();
    let now = Instant::now();

    drag(&mut engine, &deck, horizontal(-200.0), now);
    assert_eq!(engine.current_index(), 0);

    // Next gesture starts before the reveal delay elapsed.
    let resolution = drag(&mut engine, &deck, horizontal(-200.0), now);
    assert_eq!(
        resolution,
        DragResolution::Committed {
            index: 1,
            direction: Vote::Like
        }
    );
    assert_eq!(*log.borrow(), vec![('A', Vote::Like), ('B', Vote::Like)]);
    engine.tick(&deck, after_reveal(&config(), now));
    assert_eq!(engine.current_index(), 2);
}

#[test]
fn phase_moves_through_resolving_back_to_idle() {
    let (mut engine, _log) = engine();
    let deck = deck();
    let now = Instant::now();
    assert_eq!(engine.phase(now), InteractionPhase::Idle);

    drag(&mut engine, &deck, horizontal(-200.0), now);
    assert_eq!(engine.phase(now), InteractionPhase::Resolving);
    assert_eq!(
        engine.next_deadline(),
        Some(now + config().reveal_delay())
    );

    let later = settled(&config(), now);
    engine.tick(&deck, later);
    assert_eq!(engine.phase(later), InteractionPhase::Idle);
    assert_eq!(engine.next_deadline(), None);
}

#[test]
fn vertical_axis_ignores_horizontal_motion() {
    let config = config().with_drag_axis(DragAxis::Vertical);
    let (mut engine, log) = engine_with(config);
    let deck = deck();
    let now = Instant::now();

    engine.drag_changed(&deck, Translation::new(-250.0, 10.0), VIEWPORT, now);

    // Width is projected away, so the sample takes the reverse path and
    // there is nothing before the first card to reveal.
    assert_eq!(engine.translation(), Translation::ZERO);
    assert_eq!(engine.interacting_index(), None);
    let resolution =
        engine.drag_ended(&deck, Translation::new(-250.0, 10.0), VIEWPORT, now);
    assert_eq!(resolution, DragResolution::Ignored);
    assert!(log.borrow().is_empty());
}

#[test]
fn programmatic_swipe_advances_immediately() {
    let (mut engine, log) = engine();
    let deck = deck();

    assert!(engine.swipe(&deck, Vote::Pass));
    assert_eq!(engine.current_index(), 1);
    assert_eq!(*log.borrow(), vec![('A', Vote::Pass)]);

    engine.set_current_index(&deck, 3).expect("valid cursor");
    assert!(!engine.swipe(&deck, Vote::Pass));
    assert_eq!(log.borrow().len(), 1);
}

#[test]
fn host_cursor_write_is_validated_and_wins_over_pending() {
    let (mut engine, _log) = engine();
    let deck = deck();
    let now = Instant::now();

    drag(&mut engine, &deck, horizontal(-200.0), now);
    engine.set_current_index(&deck, 2).expect("valid cursor");
    engine.tick(&deck, after_reveal(&config(), now));
    assert_eq!(engine.current_index(), 2);

    let err = engine
        .set_current_index(&deck, 4)
        .expect_err("past the end sentinel");
    assert!(matches!(err, CardStackError::Model(_)));
    assert_eq!(engine.current_index(), 2);
}

#[test]
fn shrunken_deck_clamps_cursor_on_next_gesture() {
    let (mut engine, log) = engine();
    let deck = vec!['A', 'B', 'C', 'D', 'E'];
    engine.set_current_index(&deck, 4).expect("valid cursor");

    let shorter = vec!['A', 'B'];
    let resolution =
        drag(&mut engine, &shorter, horizontal(-200.0), Instant::now());

    assert_eq!(resolution, DragResolution::Cancelled);
    assert_eq!(engine.current_index(), 2);
    assert!(log.borrow().is_empty());
}

#[test]
fn unbounded_durations_are_rejected_before_reaching_a_gesture() {
    assert!(matches!(
        config().with_reveal_delay(Duration::MAX),
        Err(ConfigError::DurationTooLong { .. })
    ));
    assert!(matches!(
        config()
            .with_animation(Animation::new(Duration::MAX, EasingKind::Linear)),
        Err(ConfigError::DurationTooLong { .. })
    ));
}

#[test]
fn longest_accepted_durations_resolve_gestures() {
    let max = Duration::from_millis(MAX_DURATION_MS);
    let config = config()
        .with_reveal_delay(max)
        .and_then(|config| {
            config.with_animation(Animation::new(max, EasingKind::Linear))
        })
        .expect("durations at the bound are valid");
    let (mut engine, log) = engine_with(config.clone());
    let deck = deck();
    let now = Instant::now();

    let resolution = drag(&mut engine, &deck, horizontal(-200.0), now);
    assert!(resolution.is_commit());
    assert_eq!(engine.next_deadline(), Some(now + max));
    assert_eq!(engine.phase(now), InteractionPhase::Resolving);

    let resolution = drag(&mut engine, &deck, horizontal(-100.0), now);
    assert_eq!(resolution, DragResolution::Cancelled);
    assert_eq!(engine.phase(now), InteractionPhase::Resolving);

    let later = settled(&config, now);
    engine.tick(&deck, later);
    assert_eq!(engine.phase(later), InteractionPhase::Idle);
    assert_eq!(engine.current_index(), 1);
    assert_eq!(*log.borrow(), vec![('A', Vote::Like)]);
}
