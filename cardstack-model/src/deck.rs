//! Integer-cursor view over an ordered, randomly indexable card sequence.
//!
//! Positions are 0-based. `end_index()` (== `len()`) is the "deck exhausted"
//! sentinel, so a valid cursor always lies in `start_index()..=end_index()`.

use std::collections::VecDeque;

use crate::error::{ModelError, Result};

/// Ordered, randomly indexable cards addressed by a 0-based cursor.
pub trait Deck {
    /// Card payload.
    type Item;

    /// Number of cards.
    fn len(&self) -> usize;

    /// Card at `index`, or `None` at or past the end sentinel.
    fn item(&self, index: usize) -> Option<&Self::Item>;

    /// True when the deck holds no cards.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// First position.
    fn start_index(&self) -> usize {
        0
    }

    /// Position one past the last card.
    fn end_index(&self) -> usize {
        self.len()
    }

    /// True when `index` no longer addresses a card.
    fn is_exhausted(&self, index: usize) -> bool {
        index >= self.end_index()
    }

    /// Signed number of steps from `from` to `to`.
    fn distance(&self, from: usize, to: usize) -> isize {
        to as isize - from as isize
    }

    /// Next position, saturating at the end sentinel.
    fn successor(&self, index: usize) -> usize {
        (index + 1).min(self.end_index())
    }

    /// Previous position, or `None` at the start of the deck.
    fn predecessor(&self, index: usize) -> Option<usize> {
        if index <= self.start_index() {
            None
        } else {
            Some(index - 1)
        }
    }

    /// Pull `index` back into `start_index()..=end_index()`.
    fn clamp_index(&self, index: usize) -> usize {
        index.min(self.end_index())
    }

    /// Rejects cursors past the end sentinel.
    fn check_index(&self, index: usize) -> Result<usize> {
        let end = self.end_index();
        if index > end {
            return Err(ModelError::IndexOutOfBounds { index, end });
        }
        Ok(index)
    }
}

impl<T> Deck for [T] {
    type Item = T;

    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn item(&self, index: usize) -> Option<&T> {
        self.get(index)
    }
}

impl<T, const N: usize> Deck for [T; N] {
    type Item = T;

    fn len(&self) -> usize {
        N
    }

    fn item(&self, index: usize) -> Option<&T> {
        self.get(index)
    }
}

impl<T> Deck for Vec<T> {
    type Item = T;

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn item(&self, index: usize) -> Option<&T> {
        self.get(index)
    }
}

impl<T> Deck for VecDeque<T> {
    type Item = T;

    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    fn item(&self, index: usize) -> Option<&T> {
        self.get(index)
    }
}
