//! Match resolution.
//!
//! Pure comparison of two face-up cards. The resolver never touches
//! session state: the caller turns the `Outcome` into board actions.

use serde::{Deserialize, Serialize};

use crate::core::{CardIndex, EngineError};
use crate::deck::Deck;

/// Result of comparing two distinct cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Same shape and color; both cards leave the board.
    Matched,
    /// Different cards; both turn face-down again.
    Mismatched,
}

impl Outcome {
    #[must_use]
    pub const fn is_match(self) -> bool {
        matches!(self, Outcome::Matched)
    }
}

/// Compares two cards of a deck.
#[derive(Clone, Copy, Debug, Default)]
pub struct MatchResolver;

impl MatchResolver {
    /// Compare the cards at `first` and `second`.
    ///
    /// Returns `Ok(None)` when both indices are the same card: a card is
    /// never matched against itself.
    ///
    /// ## Errors
    ///
    /// `IndexOutOfRange` if either index is outside the deck.
    ///
    /// ## Example
    ///
    /// ```
    /// use rust_pairs::cards::{Card, CardColor, Shape};
    /// use rust_pairs::core::CardIndex;
    /// use rust_pairs::deck::Deck;
    /// use rust_pairs::rules::{MatchResolver, Outcome};
    ///
    /// let a = Card::new(Shape::Circle, CardColor::Red);
    /// let b = Card::new(Shape::Square, CardColor::Blue);
    /// let deck = Deck::from_cards(vec![a, a, b, b]).unwrap();
    ///
    /// assert_eq!(
    ///     MatchResolver::resolve(&deck, CardIndex(0), CardIndex(1)),
    ///     Ok(Some(Outcome::Matched))
    /// );
    /// assert_eq!(
    ///     MatchResolver::resolve(&deck, CardIndex(0), CardIndex(2)),
    ///     Ok(Some(Outcome::Mismatched))
    /// );
    /// ```
    pub fn resolve(
        deck: &Deck,
        first: CardIndex,
        second: CardIndex,
    ) -> Result<Option<Outcome>, EngineError> {
        let a = deck.get(first)?;
        let b = deck.get(second)?;

        if first == second {
            return Ok(None);
        }

        let outcome = if a.pairs_with(b) {
            Outcome::Matched
        } else {
            Outcome::Mismatched
        };

        Ok(Some(outcome))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, CardColor, Shape};

    fn sample_deck() -> Deck {
        let a = Card::new(Shape::Circle, CardColor::Red);
        let b = Card::new(Shape::Square, CardColor::Blue);
        Deck::from_cards(vec![a, a, b, b]).unwrap()
    }

    #[test]
    fn test_match() {
        let deck = sample_deck();
        assert_eq!(
            MatchResolver::resolve(&deck, CardIndex(2), CardIndex(3)),
            Ok(Some(Outcome::Matched))
        );
    }

    #[test]
    fn test_mismatch() {
        let deck = sample_deck();
        assert_eq!(
            MatchResolver::resolve(&deck, CardIndex(1), CardIndex(3)),
            Ok(Some(Outcome::Mismatched))
        );
    }

    #[test]
    fn test_order_does_not_matter() {
        let deck = sample_deck();
        for i in CardIndex::all(4) {
            for j in CardIndex::all(4) {
                assert_eq!(
                    MatchResolver::resolve(&deck, i, j),
                    MatchResolver::resolve(&deck, j, i)
                );
            }
        }
    }

    #[test]
    fn test_self_comparison_is_noop() {
        let deck = sample_deck();
        assert_eq!(MatchResolver::resolve(&deck, CardIndex(1), CardIndex(1)), Ok(None));
    }

    #[test]
    fn test_out_of_range() {
        let deck = sample_deck();
        assert_eq!(
            MatchResolver::resolve(&deck, CardIndex(0), CardIndex(4)),
            Err(EngineError::IndexOutOfRange { index: 4, len: 4 })
        );
        assert!(MatchResolver::resolve(&Deck::empty(), CardIndex(0), CardIndex(1)).is_err());
    }

    #[test]
    fn test_outcome_is_match() {
        assert!(Outcome::Matched.is_match());
        assert!(!Outcome::Mismatched.is_match());
    }
}
