//! Card interaction engine: turns drag samples into stack state.
//!
//! The engine owns three observables: the cursor (`current_index`), the top
//! card's `translation`, and the `interacting_index` of a card revealed by a
//! reverse drag. Every other state (see [`InteractionPhase`]) is derived from
//! those plus the in-flight animation and pending reveal actions.
//!
//! Gestures arrive as a sequence of [`drag_changed`] calls closed by exactly
//! one [`drag_ended`]. Delayed cursor moves are queued on the
//! [`RevealScheduler`] and applied by [`tick`], which the host calls whenever
//! [`next_deadline`] passes or on every frame.
//!
//! [`drag_changed`]: CardInteractionEngine::drag_changed
//! [`drag_ended`]: CardInteractionEngine::drag_ended
//! [`tick`]: CardInteractionEngine::tick
//! [`next_deadline`]: CardInteractionEngine::next_deadline

mod scheduler;
mod state;

pub use scheduler::{RevealScheduler, ScheduledAction};
pub use state::{DragResolution, InteractionPhase, InteractionSnapshot};

use std::fmt;
use std::time::Instant;

use cardstack_model::{Deck, Translation, ViewportSize};
use tracing::{debug, trace, warn};

use crate::animation::TranslationAnimator;
use crate::config::CardStackConfig;
use crate::constants::gesture::UNDO_OVERSHOOT;
use crate::error::Result;

type Classifier<D> = Box<dyn Fn(f64) -> Option<D>>;
type SwipeHandler<T, D> = Box<dyn FnMut(&T, D)>;

/// Drag-driven state machine for one card stack.
///
/// `T` is the deck item type and `D` the host's swipe direction.
pub struct CardInteractionEngine<T, D> {
    config: CardStackConfig,
    classifier: Classifier<D>,
    on_swipe: SwipeHandler<T, D>,

    current_index: usize,
    translation: Translation,
    interacting_index: Option<usize>,

    gesture_active: bool,
    animator: TranslationAnimator,
    scheduler: RevealScheduler,
}

impl<T, D> fmt::Debug for CardInteractionEngine<T, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CardInteractionEngine")
            .field("config", &self.config)
            .field("current_index", &self.current_index)
            .field("translation", &self.translation)
            .field("interacting_index", &self.interacting_index)
            .field("gesture_active", &self.gesture_active)
            .field("pending_actions", &self.scheduler.len())
            .finish_non_exhaustive()
    }
}

impl<T, D: Clone> CardInteractionEngine<T, D> {
    /// Engine using the process-wide default configuration.
    ///
    /// `classifier` maps a drag angle in degrees (see
    /// [`Translation::angle_degrees`]) to a swipe direction, or `None` when
    /// a drag ending at that angle should not commit. `on_swipe` fires once
    /// per committed swipe, before the cursor advances.
    pub fn new(
        classifier: impl Fn(f64) -> Option<D> + 'static,
        on_swipe: impl FnMut(&T, D) + 'static,
    ) -> Self {
        Self::with_config(CardStackConfig::global(), classifier, on_swipe)
    }

    /// Engine using an explicit configuration. See [`Self::new`].
    pub fn with_config(
        config: CardStackConfig,
        classifier: impl Fn(f64) -> Option<D> + 'static,
        on_swipe: impl FnMut(&T, D) + 'static,
    ) -> Self {
        Self {
            config,
            classifier: Box::new(classifier),
            on_swipe: Box::new(on_swipe),
            current_index: 0,
            translation: Translation::ZERO,
            interacting_index: None,
            gesture_active: false,
            animator: TranslationAnimator::new(),
            scheduler: RevealScheduler::new(),
        }
    }

    /// Configuration the engine was built with.
    pub fn config(&self) -> &CardStackConfig {
        &self.config
    }

    /// Cursor of the top card; equals the deck end once exhausted.
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Target translation of the top card. Animations converge on this.
    pub fn translation(&self) -> Translation {
        self.translation
    }

    /// Translation as drawn at `now`, including in-flight animation.
    pub fn displayed_translation(&self, now: Instant) -> Translation {
        self.animator.value_at(now)
    }

    /// Card revealed by the ongoing reverse drag, if any.
    pub fn interacting_index(&self) -> Option<usize> {
        self.interacting_index
    }

    /// True between the first sample of a gesture and its end.
    pub fn is_gesture_active(&self) -> bool {
        self.gesture_active
    }

    /// When the next scheduled cursor change is due.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.scheduler.next_deadline()
    }

    /// Phase derived from the observables at `now`.
    pub fn phase(&self, now: Instant) -> InteractionPhase {
        if self.gesture_active {
            if self.interacting_index.is_some() {
                return InteractionPhase::ReverseDragging;
            }
            if self.translation.width < 0.0 {
                return InteractionPhase::ForwardDragging;
            }
        }
        if self.scheduler.has_pending() || self.animator.is_active(now) {
            return InteractionPhase::Resolving;
        }
        InteractionPhase::Idle
    }

    /// Classification of the displayed drag, for direction-dependent
    /// overlays on the top card. `None` while the card is at rest.
    pub fn live_direction(&self, now: Instant) -> Option<D> {
        let displayed = self.animator.value_at(now);
        if displayed.is_zero() {
            return None;
        }
        (self.classifier)(displayed.angle_degrees())
    }

    /// Frame state at `now`, as consumed by
    /// [`crate::renderer::StackRenderer::layout`].
    pub fn snapshot(&self, now: Instant) -> InteractionSnapshot<D> {
        InteractionSnapshot {
            current_index: self.current_index,
            interacting_index: self.interacting_index,
            translation: self.animator.value_at(now),
            direction: self.live_direction(now),
            phase: self.phase(now),
        }
    }

    /// Host-side cursor write. Pending reveal actions are discarded so the
    /// host value is not overwritten by a stale delayed advance.
    pub fn set_current_index<K>(&mut self, deck: &K, index: usize) -> Result<()>
    where
        K: Deck<Item = T> + ?Sized,
    {
        let index = deck.check_index(index)?;
        let dropped = self.scheduler.clear();
        if dropped > 0 {
            debug!(dropped, "host cursor write discarded pending reveals");
        }
        debug!(from = self.current_index, to = index, "host set cursor");
        self.current_index = index;
        self.interacting_index = None;
        self.translation = Translation::ZERO;
        self.animator.jump_to(Translation::ZERO);
        Ok(())
    }

    /// Pointer-move sample of the current gesture. `raw` is the drag vector
    /// from the gesture origin.
    pub fn drag_changed<K>(
        &mut self,
        deck: &K,
        raw: Translation,
        viewport: ViewportSize,
        now: Instant,
    ) where
        K: Deck<Item = T> + ?Sized,
    {
        if !self.gesture_active {
            self.begin_gesture(deck, now);
        }

        let normalized = self.config.drag_axis().normalize(raw);
        if normalized.width < 0.0 {
            self.track(normalized);
            return;
        }

        if self.interacting_index.is_none()
            && let Some(previous) = deck.predecessor(self.current_index)
        {
            debug!(
                from = self.current_index,
                to = previous,
                "reverse drag revealed previous card"
            );
            self.current_index = previous;
            self.interacting_index = Some(previous);
        }

        if self.interacting_index.is_none() {
            trace!("reverse drag at start of deck ignored");
            return;
        }

        self.track(Translation::new(
            normalized.width - viewport.width,
            normalized.height,
        ));
    }

    /// End of the current gesture. `raw` is the final drag vector.
    pub fn drag_ended<K>(
        &mut self,
        deck: &K,
        raw: Translation,
        viewport: ViewportSize,
        now: Instant,
    ) -> DragResolution<D>
    where
        K: Deck<Item = T> + ?Sized,
    {
        if !self.gesture_active {
            self.begin_gesture(deck, now);
        }

        let normalized = self.config.drag_axis().normalize(raw);
        let resolution = if normalized.width < 0.0 {
            self.end_forward(deck, normalized, viewport, now)
        } else {
            self.end_reverse(viewport, now)
        };

        self.interacting_index = None;
        self.gesture_active = false;
        debug!(
            resolution = resolution_name(&resolution),
            current = self.current_index,
            "drag resolved"
        );
        resolution
    }

    /// Apply every scheduled cursor change due at `now`. Returns whether
    /// any state changed.
    pub fn tick<K>(&mut self, deck: &K, now: Instant) -> bool
    where
        K: Deck<Item = T> + ?Sized,
    {
        let due = self.scheduler.take_due(now);
        let changed = !due.is_empty();
        for action in due {
            self.apply(deck, action);
        }
        self.animator.settle(now);
        changed
    }

    /// Swipe the top card away without a drag, e.g. from a button. Fires
    /// `on_swipe` and advances immediately. Returns `false` when the deck is
    /// exhausted.
    pub fn swipe<K>(&mut self, deck: &K, direction: D) -> bool
    where
        K: Deck<Item = T> + ?Sized,
    {
        self.flush_pending(deck);
        self.current_index = self.reconcile_index(deck);

        let index = self.current_index;
        let Some(item) = deck.item(index) else {
            debug!(index, "programmatic swipe on exhausted deck ignored");
            return false;
        };
        (self.on_swipe)(item, direction);
        self.current_index = deck.successor(index);
        self.interacting_index = None;
        self.translation = Translation::ZERO;
        self.animator.jump_to(Translation::ZERO);
        debug!(index, "programmatic swipe committed");
        true
    }

    fn begin_gesture<K>(&mut self, deck: &K, now: Instant)
    where
        K: Deck<Item = T> + ?Sized,
    {
        self.flush_pending(deck);
        self.current_index = self.reconcile_index(deck);
        self.animator.settle(now);
        self.gesture_active = true;
        trace!(current = self.current_index, "gesture started");
    }

    fn flush_pending<K>(&mut self, deck: &K)
    where
        K: Deck<Item = T> + ?Sized,
    {
        for action in self.scheduler.take_all() {
            trace!(?action, "flushing pending reveal");
            self.apply(deck, action);
        }
    }

    fn reconcile_index<K>(&self, deck: &K) -> usize
    where
        K: Deck<Item = T> + ?Sized,
    {
        let clamped = deck.clamp_index(self.current_index);
        if clamped != self.current_index {
            warn!(
                index = self.current_index,
                end = deck.end_index(),
                "cursor outside deck, clamping"
            );
        }
        clamped
    }

    fn apply<K>(&mut self, deck: &K, action: ScheduledAction)
    where
        K: Deck<Item = T> + ?Sized,
    {
        match action {
            ScheduledAction::Advance { from } => {
                self.current_index = deck.successor(from);
                debug!(from, to = self.current_index, "cursor advanced");
            }
            ScheduledAction::SettleReveal { interacting } => {
                self.current_index = deck.successor(interacting);
                self.translation = Translation::ZERO;
                self.animator.jump_to(Translation::ZERO);
                debug!(
                    interacting,
                    to = self.current_index,
                    "withdrawn card settled"
                );
            }
        }
    }

    fn reveal_due(&self, now: Instant) -> Instant {
        now.checked_add(self.config.reveal_delay()).unwrap_or(now)
    }

    fn track(&mut self, translation: Translation) {
        trace!(?translation, "drag sample");
        self.translation = translation;
        self.animator.jump_to(translation);
    }

    fn animate_to(&mut self, translation: Translation, now: Instant) {
        self.translation = translation;
        self.animator
            .animate_to(translation, self.config.animation(), now);
    }

    /// Direction of the stored translation if its distance clears the
    /// threshold. With `reversed`, the distance left to the far edge is
    /// measured instead.
    fn classify(&self, viewport: ViewportSize, reversed: bool) -> Option<D> {
        let direction = (self.classifier)(self.translation.angle_degrees())?;
        let threshold = self
            .config
            .drag_axis()
            .threshold(viewport, self.config.swipe_threshold());
        let mut distance = self.translation.magnitude();
        if reversed {
            distance = viewport.width - distance;
        }
        (distance > threshold).then_some(direction)
    }

    fn end_forward<K>(
        &mut self,
        deck: &K,
        normalized: Translation,
        viewport: ViewportSize,
        now: Instant,
    ) -> DragResolution<D>
    where
        K: Deck<Item = T> + ?Sized,
    {
        self.animate_to(normalized, now);

        let index = self.current_index;
        // `item` is None once the cursor sits on the end sentinel.
        let (Some(direction), Some(item)) =
            (self.classify(viewport, false), deck.item(index))
        else {
            self.animate_to(Translation::ZERO, now);
            return DragResolution::Cancelled;
        };

        (self.on_swipe)(item, direction.clone());
        self.animate_to(Translation::ZERO, now);
        self.scheduler.schedule(
            self.reveal_due(now),
            ScheduledAction::Advance { from: index },
        );
        DragResolution::Committed { index, direction }
    }

    fn end_reverse(
        &mut self,
        viewport: ViewportSize,
        now: Instant,
    ) -> DragResolution<D> {
        let Some(interacting) = self.interacting_index else {
            self.animate_to(Translation::ZERO, now);
            return DragResolution::Ignored;
        };

        if self.classify(viewport, true).is_some() {
            self.animate_to(Translation::ZERO, now);
            return DragResolution::RevealKept {
                index: self.current_index,
            };
        }

        self.animate_to(
            Translation::new(-viewport.width - UNDO_OVERSHOOT, 0.0),
            now,
        );
        self.scheduler.schedule(
            self.reveal_due(now),
            ScheduledAction::SettleReveal { interacting },
        );
        DragResolution::RevealWithdrawn { index: interacting }
    }
}

fn resolution_name<D>(resolution: &DragResolution<D>) -> &'static str {
    match resolution {
        DragResolution::Committed { .. } => "committed",
        DragResolution::Cancelled => "cancelled",
        DragResolution::RevealKept { .. } => "reveal_kept",
        DragResolution::RevealWithdrawn { .. } => "reveal_withdrawn",
        DragResolution::Ignored => "ignored",
    }
}
