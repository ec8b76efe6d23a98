//! Core data model definitions shared across the card stack crates.
//!
//! Everything here is plain data: the 2D value types used for drag
//! translations and viewports, and the integer-cursor [`Deck`] contract the
//! interaction engine reads through.

pub mod deck;
pub mod error;
pub mod geometry;

pub use deck::Deck;
pub use error::{ModelError, Result as ModelResult};
pub use geometry::{Translation, ViewportSize};
