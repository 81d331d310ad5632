//! Session and layout configuration.
//!
//! The engine has a single gameplay tunable, the pair count, which sets
//! the deck size (`2 * pair_count`) and therefore round length. The board
//! layout only feeds the placer and never affects matching.
//!
//! - `SessionConfig`: pair count defaults and limits, RNG seed
//! - `BoardLayout`: board and card dimensions for random placement

use serde::{Deserialize, Serialize};

use super::error::EngineError;

/// Pair count used when the caller does not pick one.
pub const DEFAULT_PAIR_COUNT: usize = 8;

/// Largest pair count accepted unless configured otherwise.
pub const DEFAULT_MAX_PAIRS: usize = 64;

/// Session configuration.
///
/// ## Example
///
/// ```
/// use rust_pairs::core::SessionConfig;
///
/// let config = SessionConfig::new()
///     .with_default_pairs(4)
///     .with_seed(7);
///
/// assert_eq!(config.validate_pairs(4), Ok(4));
/// assert!(config.validate_pairs(-1).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Pairs dealt by `BoardSession::start_default_round`.
    pub default_pairs: usize,

    /// Upper bound on the pair count of a round.
    pub max_pairs: usize,

    /// RNG seed. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            default_pairs: DEFAULT_PAIR_COUNT,
            max_pairs: DEFAULT_MAX_PAIRS,
            seed: None,
        }
    }
}

impl SessionConfig {
    /// Create a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the pair count used by default rounds.
    #[must_use]
    pub fn with_default_pairs(mut self, pairs: usize) -> Self {
        self.default_pairs = pairs;
        self
    }

    /// Set the maximum pair count.
    #[must_use]
    pub fn with_max_pairs(mut self, max: usize) -> Self {
        self.max_pairs = max;
        self
    }

    /// Fix the RNG seed for reproducible rounds.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check a requested pair count and convert it to a deck-sized value.
    ///
    /// Rejects negative counts and counts above `max_pairs`.
    pub fn validate_pairs(&self, pair_count: i64) -> Result<usize, EngineError> {
        let pairs = usize::try_from(pair_count).map_err(|_| {
            EngineError::invalid_config(format!(
                "pair count must not be negative, got {pair_count}"
            ))
        })?;

        if pairs > self.max_pairs {
            return Err(EngineError::invalid_config(format!(
                "pair count {pairs} exceeds maximum of {}",
                self.max_pairs
            )));
        }

        Ok(pairs)
    }
}

/// Width and height in layout points.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Board geometry used for random card placement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardLayout {
    /// Playable board area.
    pub board: Size,

    /// Size of a single card.
    pub card: Size,
}

impl Default for BoardLayout {
    fn default() -> Self {
        Self {
            board: Size::new(355, 600),
            card: Size::new(80, 120),
        }
    }
}

impl BoardLayout {
    /// Create a layout for a board of the given size with default cards.
    pub fn new(board: Size) -> Self {
        Self {
            board,
            ..Self::default()
        }
    }

    /// Set the card size.
    #[must_use]
    pub fn with_card_size(mut self, card: Size) -> Self {
        self.card = card;
        self
    }

    /// Largest origin a card can take while staying on the board.
    ///
    /// Fails when the card does not fit on the board at all.
    pub fn max_origin(&self) -> Result<(u32, u32), EngineError> {
        let max_x = self.board.width.checked_sub(self.card.width);
        let max_y = self.board.height.checked_sub(self.card.height);

        match (max_x, max_y) {
            (Some(x), Some(y)) => Ok((x, y)),
            _ => Err(EngineError::invalid_config(format!(
                "card {}x{} does not fit on board {}x{}",
                self.card.width, self.card.height, self.board.width, self.board.height
            ))),
        }
    }
}
