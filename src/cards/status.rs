//! Per-round card status.
//!
//! The presentation layer owns every visual card object. The engine only
//! keeps an index-keyed table of what state each card is in, so the two
//! sides never share a mutable reference.

use serde::{Deserialize, Serialize};

use crate::core::{CardIndex, EngineError};

/// Visibility state of one dealt card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardStatus {
    /// Dealt and hidden. The only state that accepts a tap.
    #[default]
    FaceDown,
    /// Revealed and waiting for resolution.
    FaceUp,
    /// Matched and taken off the board.
    Removed,
}

impl CardStatus {
    /// Is this card still on the board?
    #[must_use]
    pub const fn on_board(self) -> bool {
        !matches!(self, CardStatus::Removed)
    }
}

/// Status of every card in the current round, keyed by `CardIndex`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusTable {
    statuses: Vec<CardStatus>,
}

impl StatusTable {
    /// Create a table with `len` face-down cards.
    #[must_use]
    pub fn face_down(len: usize) -> Self {
        Self {
            statuses: vec![CardStatus::FaceDown; len],
        }
    }

    /// Number of cards dealt this round (including removed ones).
    #[must_use]
    pub fn len(&self) -> usize {
        self.statuses.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.statuses.is_empty()
    }

    /// Get a card's status.
    pub fn get(&self, index: CardIndex) -> Result<CardStatus, EngineError> {
        index.check(self.len())?;
        Ok(self.statuses[index.0])
    }

    /// Set a card's status.
    pub fn set(&mut self, index: CardIndex, status: CardStatus) -> Result<(), EngineError> {
        index.check(self.len())?;
        self.statuses[index.0] = status;
        Ok(())
    }

    /// Count cards with the given status.
    #[must_use]
    pub fn count(&self, status: CardStatus) -> usize {
        self.statuses.iter().filter(|&&s| s == status).count()
    }

    /// Indices of cards still on the board.
    pub fn on_board(&self) -> impl Iterator<Item = CardIndex> + '_ {
        self.statuses
            .iter()
            .enumerate()
            .filter(|(_, s)| s.on_board())
            .map(|(i, _)| CardIndex(i))
    }

    /// True once every card has been removed.
    ///
    /// An empty table counts as cleared.
    #[must_use]
    pub fn all_removed(&self) -> bool {
        self.statuses.iter().all(|&s| s == CardStatus::Removed)
    }

    /// Iterate over all statuses in index order.
    pub fn iter(&self) -> impl Iterator<Item = (CardIndex, CardStatus)> + '_ {
        self.statuses
            .iter()
            .enumerate()
            .map(|(i, &s)| (CardIndex(i), s))
    }
}
