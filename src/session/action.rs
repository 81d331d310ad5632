//! Board actions and the presentation contract.
//!
//! The session never calls into a view hierarchy. Each operation returns
//! the `BoardAction`s the presentation layer must carry out, in order.
//! Frontends that prefer callbacks implement `Presentation` and let
//! `BoardAction::dispatch` route the actions.

use serde::{Deserialize, Serialize};

use crate::core::CardIndex;
use crate::deck::Deck;

/// One instruction for the presentation layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoardAction {
    /// A tapped card turned over.
    Flipped { index: CardIndex, face_up: bool },
    /// Both cards matched; take them off the board (after any fade-out).
    RemoveCards(CardIndex, CardIndex),
    /// Cards did not match; turn both face-down again.
    FlipBackCards(CardIndex, CardIndex),
    /// The last pair was removed.
    RoundCompleted,
}

impl BoardAction {
    /// Route this action to the matching `Presentation` method.
    pub fn dispatch<P: Presentation + ?Sized>(&self, presentation: &mut P) {
        match *self {
            BoardAction::Flipped { index, face_up } => presentation.flip(index, face_up),
            BoardAction::RemoveCards(a, b) => presentation.remove_cards(a, b),
            BoardAction::FlipBackCards(a, b) => presentation.flip_back_cards(a, b),
            BoardAction::RoundCompleted => presentation.round_completed(),
        }
    }

    /// Route a batch of actions in order.
    pub fn dispatch_all<P: Presentation + ?Sized>(actions: &[BoardAction], presentation: &mut P) {
        for action in actions {
            action.dispatch(presentation);
        }
    }
}

/// Callbacks a frontend provides to realize the board.
///
/// Positions, animation and fade timing are entirely the implementor's
/// business; the engine only speaks in card indices.
pub trait Presentation {
    /// A new round was dealt. Discard every previous card view and place
    /// one face-down view per deck index.
    fn render(&mut self, deck: &Deck);

    /// Turn a single card over.
    fn flip(&mut self, _index: CardIndex, _face_up: bool) {}

    /// Remove both cards of a matched pair.
    fn remove_cards(&mut self, first: CardIndex, second: CardIndex);

    /// Turn both cards of a mismatched pair face-down.
    fn flip_back_cards(&mut self, first: CardIndex, second: CardIndex);

    /// Every pair has been removed.
    fn round_completed(&mut self) {}
}
