//! Decks and deck generation.
//!
//! A round is dealt from a `Deck`: `2 * pair_count` cards in which every
//! card has a partner with identical shape and color. Decks are replaced
//! wholesale between rounds, never mutated.

mod generator;

pub use generator::{Deck, DeckGenerator};
