//! Session checkpoints.
//!
//! A `SessionSnapshot` captures everything needed to resume a round
//! exactly: the deck, every card's status, the pending selection, the
//! counters and the RNG position. Snapshots are plain serde data and can
//! be encoded compactly with bincode.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::cards::{CardStatus, StatusTable};
use crate::core::{CardIndex, EngineError, GameRng, GameRngState, SessionConfig};
use crate::deck::Deck;
use crate::selection::{SelectionMachine, SelectionState};

use super::board::BoardSession;
use super::stats::RoundStats;

/// Serializable capture of a `BoardSession`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub deck: Deck,
    pub statuses: StatusTable,
    /// Card waiting for a partner, if any.
    pub selected: Option<CardIndex>,
    pub stats: RoundStats,
    pub rng: GameRngState,
}

impl SessionSnapshot {
    /// Encode with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>, EngineError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode from bincode. The result is not yet validated; see
    /// `BoardSession::restore`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, EngineError> {
        Ok(bincode::deserialize(bytes)?)
    }

    /// Check that the parts agree with each other.
    pub fn validate(&self) -> Result<(), EngineError> {
        let corrupt = |msg: String| Err(EngineError::CorruptSnapshot(msg));

        if self.deck.len() != self.statuses.len() {
            return corrupt(format!(
                "deck has {} cards but status table has {}",
                self.deck.len(),
                self.statuses.len()
            ));
        }

        if self.deck.len() % 2 != 0 || !self.deck.is_fully_paired() {
            return corrupt("deck contains an unpaired card".to_string());
        }

        if self.stats.pairs != self.deck.pair_count() {
            return corrupt(format!(
                "stats record {} pairs for a deck of {}",
                self.stats.pairs,
                self.deck.pair_count()
            ));
        }

        let face_up: Vec<CardIndex> = self
            .statuses
            .iter()
            .filter(|&(_, s)| s == CardStatus::FaceUp)
            .map(|(i, _)| i)
            .collect();

        if face_up != self.selected.into_iter().collect::<Vec<_>>() {
            return corrupt(format!(
                "face-up cards {:?} disagree with selection {:?}",
                face_up, self.selected
            ));
        }

        let removed = self.statuses.count(CardStatus::Removed);
        if removed != self.stats.matches as usize * 2 {
            return corrupt(format!(
                "{} removed cards for {} recorded matches",
                removed, self.stats.matches
            ));
        }

        // Cards left on the board must still pair up among themselves,
        // otherwise the round can never be cleared.
        let mut on_board: FxHashMap<_, usize> = FxHashMap::default();
        for index in self.statuses.on_board() {
            *on_board.entry(self.deck.get(index)?).or_insert(0) += 1;
        }
        if let Some((card, count)) = on_board.into_iter().find(|(_, n)| n % 2 != 0) {
            return corrupt(format!(
                "{} copies of {} left on the board cannot be paired",
                count, card
            ));
        }

        Ok(())
    }
}

impl BoardSession<GameRng> {
    /// Capture the current session.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        let selected = match self.selection.state() {
            SelectionState::OneSelected(index) => Some(index),
            SelectionState::Empty => None,
        };

        SessionSnapshot {
            deck: self.deck.clone(),
            statuses: self.statuses.clone(),
            selected,
            stats: self.stats,
            rng: self.rng.state(),
        }
    }

    /// Resume a session from a snapshot.
    ///
    /// ## Errors
    ///
    /// `CorruptSnapshot` if the snapshot's parts are inconsistent.
    pub fn restore(config: SessionConfig, snapshot: SessionSnapshot) -> Result<Self, EngineError> {
        snapshot.validate()?;

        if snapshot.stats.pairs > config.max_pairs {
            return Err(EngineError::invalid_config(format!(
                "snapshot has {} pairs, maximum is {}",
                snapshot.stats.pairs, config.max_pairs
            )));
        }

        log::debug!(
            "Restored session with {} of {} pairs remaining",
            snapshot.stats.remaining_pairs(),
            snapshot.stats.pairs
        );

        Ok(Self {
            config,
            rng: GameRng::from_state(&snapshot.rng),
            deck: snapshot.deck,
            statuses: snapshot.statuses,
            selection: SelectionMachine::with_selected(snapshot.selected),
            stats: snapshot.stats,
        })
    }
}
