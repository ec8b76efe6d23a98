//! Errors raised by the data model.

use std::fmt::{self, Display};

/// Errors produced by deck cursor validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelError {
    /// A cursor pointed past the end sentinel of a deck.
    IndexOutOfBounds {
        /// Rejected cursor.
        index: usize,
        /// End sentinel of the deck it was checked against.
        end: usize,
    },
}

impl Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::IndexOutOfBounds { index, end } => {
                write!(f, "index {index} is outside the deck range 0..={end}")
            }
        }
    }
}

impl std::error::Error for ModelError {}

/// Result alias for model operations.
pub type Result<T> = std::result::Result<T, ModelError>;
