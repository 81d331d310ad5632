//! Card index system.
//!
//! Every card dealt in a round is addressed by its position in the
//! round's `Deck`. The presentation layer owns the visual objects and
//! correlates them with engine state only through a `CardIndex`.
//!
//! ## Index Layout
//!
//! A round with `pair_count` pairs has indices `0..2 * pair_count`.
//! Indices are only meaningful for the round that produced them; starting
//! a new round invalidates every index handed out before.
//!
//! ```
//! use rust_pairs::core::CardIndex;
//!
//! let deck_len = 4;
//!
//! assert!(CardIndex(3).in_bounds(deck_len));
//! assert!(!CardIndex(4).in_bounds(deck_len));
//! ```

use serde::{Deserialize, Serialize};

use super::error::EngineError;

/// Position of a card in the current round's deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardIndex(pub usize);

impl CardIndex {
    /// Create a new card index.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Get the raw index value.
    #[must_use]
    pub const fn raw(self) -> usize {
        self.0
    }

    /// Check if this index addresses a card in a deck of `len` cards.
    #[must_use]
    pub const fn in_bounds(self, len: usize) -> bool {
        self.0 < len
    }

    /// Validate this index against a deck of `len` cards.
    ///
    /// ```
    /// use rust_pairs::core::{CardIndex, EngineError};
    ///
    /// assert!(CardIndex(1).check(2).is_ok());
    /// assert_eq!(
    ///     CardIndex(2).check(2),
    ///     Err(EngineError::IndexOutOfRange { index: 2, len: 2 })
    /// );
    /// ```
    pub fn check(self, len: usize) -> Result<Self, EngineError> {
        if self.in_bounds(len) {
            Ok(self)
        } else {
            Err(EngineError::IndexOutOfRange { index: self.0, len })
        }
    }

    /// Iterate over every index of a deck with `len` cards.
    pub fn all(len: usize) -> impl Iterator<Item = CardIndex> {
        (0..len).map(CardIndex)
    }
}

impl From<usize> for CardIndex {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

impl std::fmt::Display for CardIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card#{}", self.0)
    }
}
