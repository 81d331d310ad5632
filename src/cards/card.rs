//! Card model - the immutable identity of a card.
//!
//! A `Card` is nothing more than a (shape, color) tag. Two cards form a
//! pair exactly when both tags match; there is no other identity, so two
//! different pairs in the same deck may share the same tags.

use serde::{Deserialize, Serialize};

/// Shape printed on a card's face.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Shape {
    Circle,
    Cross,
    Fill,
    Square,
}

impl Shape {
    /// Every shape, in draw order.
    pub const ALL: [Shape; 4] = [Shape::Circle, Shape::Cross, Shape::Fill, Shape::Square];

    /// Lowercase display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Shape::Circle => "circle",
            Shape::Cross => "cross",
            Shape::Fill => "fill",
            Shape::Square => "square",
        }
    }
}

impl std::fmt::Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Color of the shape on a card's face.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CardColor {
    Black,
    Brown,
    Green,
    Gray,
    Yellow,
    Purple,
    Orange,
    Red,
    Blue,
}

impl CardColor {
    /// The full palette, in draw order.
    pub const ALL: [CardColor; 9] = [
        CardColor::Black,
        CardColor::Brown,
        CardColor::Green,
        CardColor::Gray,
        CardColor::Yellow,
        CardColor::Purple,
        CardColor::Orange,
        CardColor::Red,
        CardColor::Blue,
    ];

    /// Lowercase display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            CardColor::Black => "black",
            CardColor::Brown => "brown",
            CardColor::Green => "green",
            CardColor::Gray => "gray",
            CardColor::Yellow => "yellow",
            CardColor::Purple => "purple",
            CardColor::Orange => "orange",
            CardColor::Red => "red",
            CardColor::Blue => "blue",
        }
    }
}

impl std::fmt::Display for CardColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A card's identity: shape plus color.
///
/// Equality is structural, which is exactly the pairing rule.
///
/// ## Example
///
/// ```
/// use rust_pairs::cards::{Card, CardColor, Shape};
///
/// let a = Card::new(Shape::Circle, CardColor::Red);
/// let b = Card::new(Shape::Circle, CardColor::Red);
/// let c = Card::new(Shape::Circle, CardColor::Blue);
///
/// assert!(a.pairs_with(&b));
/// assert!(!a.pairs_with(&c));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub shape: Shape,
    pub color: CardColor,
}

impl Card {
    /// Create a card.
    #[must_use]
    pub const fn new(shape: Shape, color: CardColor) -> Self {
        Self { shape, color }
    }

    /// Check whether two cards form a pair.
    #[must_use]
    pub fn pairs_with(&self, other: &Card) -> bool {
        self == other
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.shape, self.color)
    }
}
