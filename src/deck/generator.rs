//! Deck type and generator.

use im::Vector;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardColor, Shape};
use crate::core::{CardIndex, EngineError, RandomSource};

/// The cards dealt for one round.
///
/// Backed by an `im::Vector` so sessions can be snapshotted without
/// copying the deck.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vector<Card>,
}

impl Deck {
    /// An empty deck (zero pairs).
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a deck from explicit cards.
    ///
    /// Every card must have a partner: the length must be even and each
    /// (shape, color) must appear an even number of times.
    ///
    /// ```
    /// use rust_pairs::cards::{Card, CardColor, Shape};
    /// use rust_pairs::deck::Deck;
    ///
    /// let a = Card::new(Shape::Circle, CardColor::Red);
    /// let b = Card::new(Shape::Square, CardColor::Blue);
    ///
    /// assert!(Deck::from_cards(vec![a, a, b, b]).is_ok());
    /// assert!(Deck::from_cards(vec![a, b]).is_err());
    /// ```
    pub fn from_cards(cards: Vec<Card>) -> Result<Self, EngineError> {
        let deck = Self {
            cards: cards.into_iter().collect(),
        };

        if deck.len() % 2 != 0 {
            return Err(EngineError::InvalidDeck(format!(
                "deck has odd length {}",
                deck.len()
            )));
        }

        if let Some((card, count)) = deck.pair_counts().into_iter().find(|(_, n)| n % 2 != 0) {
            return Err(EngineError::InvalidDeck(format!(
                "{card} appears {count} times"
            )));
        }

        Ok(deck)
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of pairs (half the card count).
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.cards.len() / 2
    }

    /// Get the card at an index.
    pub fn get(&self, index: CardIndex) -> Result<&Card, EngineError> {
        index.check(self.len())?;
        Ok(&self.cards[index.0])
    }

    /// Iterate over cards with their indices.
    pub fn iter(&self) -> impl Iterator<Item = (CardIndex, &Card)> + '_ {
        self.cards.iter().enumerate().map(|(i, c)| (CardIndex(i), c))
    }

    /// Occurrences of each distinct card.
    #[must_use]
    pub fn pair_counts(&self) -> FxHashMap<Card, usize> {
        let mut counts = FxHashMap::default();
        for card in &self.cards {
            *counts.entry(*card).or_insert(0) += 1;
        }
        counts
    }

    /// Check that every card has a partner.
    #[must_use]
    pub fn is_fully_paired(&self) -> bool {
        self.pair_counts().values().all(|n| n % 2 == 0)
    }

    /// Copy the cards out as a plain `Vec`.
    #[must_use]
    pub fn to_vec(&self) -> Vec<Card> {
        self.cards.iter().copied().collect()
    }
}

/// Deals fresh decks.
///
/// For each pair, draws a shape and then a color uniformly from the fixed
/// sets and appends two copies of the card. Draws are independent, so two
/// pairs may happen to share the same card.
///
/// ## Example
///
/// ```
/// use rust_pairs::core::GameRng;
/// use rust_pairs::deck::DeckGenerator;
///
/// let mut rng = GameRng::new(42);
/// let deck = DeckGenerator::generate(8, &mut rng);
///
/// assert_eq!(deck.len(), 16);
/// assert!(deck.is_fully_paired());
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct DeckGenerator;

impl DeckGenerator {
    /// Generate a deck of `pair_count` pairs.
    ///
    /// Partners are emitted next to each other: indices `2k` and `2k + 1`
    /// always hold the same card.
    pub fn generate(pair_count: usize, mut source: impl RandomSource) -> Deck {
        let mut cards = Vector::new();

        for _ in 0..pair_count {
            let card = Self::draw_card(&mut source);
            cards.push_back(card);
            cards.push_back(card);
        }

        log::trace!("Dealt {} pairs", pair_count);

        Deck { cards }
    }

    /// Draw a single random card.
    ///
    /// Draws are reduced modulo the table size, so a source that strays
    /// outside its bound still yields a valid card.
    pub fn draw_card(mut source: impl RandomSource) -> Card {
        let shape = Shape::ALL[source.next_index(Shape::ALL.len()) % Shape::ALL.len()];
        let color = CardColor::ALL[source.next_index(CardColor::ALL.len()) % CardColor::ALL.len()];
        Card::new(shape, color)
    }
}
