//! Observable engine state handed to renderers and hosts.

use cardstack_model::Translation;

/// Interaction phase, derived from the engine's observables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InteractionPhase {
    /// No gesture, nothing animating, nothing scheduled.
    Idle,
    /// The top card follows a drag towards the commit side.
    ForwardDragging,
    /// A previous card has been revealed and follows the drag.
    ReverseDragging,
    /// A gesture ended and its animation or scheduled index change is still
    /// playing out.
    Resolving,
}

/// How a finished drag was resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragResolution<D> {
    /// The top card at `index` was swiped away in `direction`.
    Committed {
        /// Position of the swiped card.
        index: usize,
        /// Direction reported to the swipe callback.
        direction: D,
    },
    /// The forward drag fell short and the card snaps back.
    Cancelled,
    /// The revealed card at `index` stays on top of the stack.
    RevealKept {
        /// Position of the revealed card, now the cursor.
        index: usize,
    },
    /// The revealed card at `index` slides away again; the cursor returns
    /// past it once the reveal delay has passed.
    RevealWithdrawn {
        /// Position of the withdrawn card.
        index: usize,
    },
    /// The drag had nothing to act on.
    Ignored,
}

impl<D> DragResolution<D> {
    /// True for [`DragResolution::Committed`].
    pub fn is_commit(&self) -> bool {
        matches!(self, Self::Committed { .. })
    }
}

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct InteractionSnapshot<D> {
    /// Cursor of the top card.
    pub current_index: usize,
    /// Card revealed by an ongoing reverse drag.
    pub interacting_index: Option<usize>,
    /// Displayed translation of the top card at the snapshot instant.
    pub translation: Translation,
    /// In-progress classification of the top card's drag.
    pub direction: Option<D>,
    /// Phase at the snapshot instant.
    pub phase: InteractionPhase,
}

impl<D> InteractionSnapshot<D> {
    /// Resting snapshot at `current_index`.
    pub fn at_rest(current_index: usize) -> Self {
        Self {
            current_index,
            interacting_index: None,
            translation: Translation::ZERO,
            direction: None,
            phase: InteractionPhase::Idle,
        }
    }
}
