//! Time-based tween animator for a card translation.

use std::time::Instant;

use cardstack_model::Translation;

use super::Animation;

/// Tweens the displayed translation towards the engine's target.
///
/// Retargeting mid-flight starts the new tween from wherever the old one
/// currently is, so there is never a visual jump.
#[derive(Debug, Clone)]
pub struct TranslationAnimator {
    from: Translation,
    to: Translation,
    started_at: Option<Instant>,
    animation: Animation,
}

impl Default for TranslationAnimator {
    fn default() -> Self {
        Self {
            from: Translation::ZERO,
            to: Translation::ZERO,
            started_at: None,
            animation: Animation::default(),
        }
    }
}

impl TranslationAnimator {
    /// Animator resting at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Where the tween ends.
    pub fn target(&self) -> Translation {
        self.to
    }

    /// Start tweening to `target`, beginning at the value displayed at `now`.
    pub fn animate_to(
        &mut self,
        target: Translation,
        animation: Animation,
        now: Instant,
    ) {
        self.from = self.value_at(now);
        self.to = target;
        self.animation = animation;
        self.started_at = Some(now);
    }

    /// Set the displayed value without animating. Used for live drag
    /// tracking, where the card follows the pointer exactly.
    pub fn jump_to(&mut self, target: Translation) {
        self.from = target;
        self.to = target;
        self.started_at = None;
    }

    /// Displayed translation at `now`.
    pub fn value_at(&self, now: Instant) -> Translation {
        match self.started_at {
            Some(started) => {
                let t = self.animation.progress_at(started, now);
                self.from.lerp(self.to, t)
            }
            None => self.to,
        }
    }

    /// Whether a tween is still moving at `now`.
    pub fn is_active(&self, now: Instant) -> bool {
        self.started_at.is_some_and(|started| {
            self.animation
                .finishes_at(started)
                .is_none_or(|end| now < end)
        })
    }

    /// Drop a finished tween so later reads skip the easing math.
    pub fn settle(&mut self, now: Instant) {
        if self.started_at.is_some() && !self.is_active(now) {
            self.jump_to(self.to);
        }
    }
}
