//! Deferred index mutations.
//!
//! Exit animations play before the cursor moves: the engine queues the
//! mutation with a due time and applies it from `tick`. Nothing here sleeps
//! or spawns; the host decides when to call back, using
//! [`RevealScheduler::next_deadline`] to arm its timer.

use std::time::Instant;

/// A cursor change waiting for its reveal delay to pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduledAction {
    /// Move the cursor to the successor of `from` after a committed swipe.
    Advance {
        /// Cursor at the time of the swipe.
        from: usize,
    },
    /// Move the cursor past the withdrawn card and reset the translation.
    SettleReveal {
        /// The card that was revealed and withdrawn.
        interacting: usize,
    },
}

#[derive(Debug, Clone, Copy)]
struct Entry {
    due: Instant,
    seq: u64,
    action: ScheduledAction,
}

/// Pending cursor changes ordered by due time, then scheduling order.
#[derive(Debug, Default)]
pub struct RevealScheduler {
    entries: Vec<Entry>,
    next_seq: u64,
}

impl RevealScheduler {
    /// Empty scheduler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `action` to run once `due` has passed.
    pub fn schedule(&mut self, due: Instant, action: ScheduledAction) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.entries.push(Entry { due, seq, action });
    }

    /// True while any action is queued.
    pub fn has_pending(&self) -> bool {
        !self.entries.is_empty()
    }

    /// Number of queued actions.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing is queued.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Earliest due time among pending actions.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.entries.iter().map(|entry| entry.due).min()
    }

    /// Remove and return every action due at `now`, earliest first. Actions
    /// with the same due time keep their scheduling order.
    pub fn take_due(&mut self, now: Instant) -> Vec<ScheduledAction> {
        let (mut due, pending): (Vec<Entry>, Vec<Entry>) =
            self.entries.drain(..).partition(|entry| entry.due <= now);
        self.entries = pending;
        due.sort_by_key(|entry| (entry.due, entry.seq));
        due.into_iter().map(|entry| entry.action).collect()
    }

    /// Remove and return everything, regardless of due time.
    pub fn take_all(&mut self) -> Vec<ScheduledAction> {
        let mut all: Vec<Entry> = self.entries.drain(..).collect();
        all.sort_by_key(|entry| (entry.due, entry.seq));
        all.into_iter().map(|entry| entry.action).collect()
    }

    /// Drop every pending action, returning how many were discarded.
    pub fn clear(&mut self) -> usize {
        let dropped = self.entries.len();
        self.entries.clear();
        dropped
    }
}
