//! Random card placement.
//!
//! Cards are scattered freely over the board rather than laid out on a
//! grid. The placer picks an origin for each card so that the card stays
//! fully on the board; overlapping cards are allowed.

use serde::{Deserialize, Serialize};

use crate::core::{BoardLayout, EngineError, RandomSource};

/// Top-left corner of a placed card, in layout points.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: u32,
    pub y: u32,
}

/// Picks random card origins within a board.
#[derive(Clone, Copy, Debug, Default)]
pub struct Placer;

impl Placer {
    /// Pick one origin uniformly from every position where the card fits.
    ///
    /// ## Errors
    ///
    /// `InvalidConfiguration` if the card is larger than the board.
    pub fn origin(layout: &BoardLayout, mut source: impl RandomSource) -> Result<Position, EngineError> {
        let (max_x, max_y) = layout.max_origin()?;
        Ok(Position {
            x: source.next_inclusive(max_x),
            y: source.next_inclusive(max_y),
        })
    }

    /// Pick origins for `count` cards.
    ///
    /// ```
    /// use rust_pairs::core::{BoardLayout, GameRng, Size};
    /// use rust_pairs::layout::Placer;
    ///
    /// let layout = BoardLayout::new(Size::new(400, 600));
    /// let positions = Placer::place_all(16, &layout, GameRng::new(1)).unwrap();
    ///
    /// assert_eq!(positions.len(), 16);
    /// assert!(positions.iter().all(|p| p.x <= 320 && p.y <= 480));
    /// ```
    pub fn place_all(
        count: usize,
        layout: &BoardLayout,
        mut source: impl RandomSource,
    ) -> Result<Vec<Position>, EngineError> {
        layout.max_origin()?;
        (0..count)
            .map(|_| Self::origin(layout, &mut source))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameRng, Size};

    #[test]
    fn test_positions_stay_on_board() {
        let layout = BoardLayout::new(Size::new(200, 300));
        let mut rng = GameRng::new(11);

        for _ in 0..200 {
            let p = Placer::origin(&layout, &mut rng).unwrap();
            assert!(p.x + layout.card.width <= layout.board.width);
            assert!(p.y + layout.card.height <= layout.board.height);
        }
    }

    #[test]
    fn test_exact_fit_is_origin() {
        let layout = BoardLayout::new(Size::new(80, 120));
        let p = Placer::origin(&layout, GameRng::new(3)).unwrap();
        assert_eq!(p, Position { x: 0, y: 0 });
    }

    #[test]
    fn test_card_too_large() {
        let layout = BoardLayout::new(Size::new(50, 50));
        assert!(matches!(
            Placer::origin(&layout, GameRng::new(3)),
            Err(EngineError::InvalidConfiguration { .. })
        ));
        assert!(Placer::place_all(0, &layout, GameRng::new(3)).is_err());
    }

    #[test]
    fn test_place_all_deterministic() {
        let layout = BoardLayout::default();
        let a = Placer::place_all(8, &layout, GameRng::new(21)).unwrap();
        let b = Placer::place_all(8, &layout, GameRng::new(21)).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), 8);
    }
}
