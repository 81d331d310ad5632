//! Engine error types.

use thiserror::Error;

/// Errors returned by fallible engine operations.
///
/// Every operation validates its input before touching session state, so
/// an `Err` always leaves the session exactly as it was.
///
/// Taps on cards that are already face-up or removed are not errors: the
/// session ignores them and reports no actions.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Rejected configuration (negative or oversized pair count, card
    /// larger than the board, ...).
    #[error("Invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },

    /// Card index outside the current deck.
    #[error("Card index {index} out of range for deck of {len} cards")]
    IndexOutOfRange { index: usize, len: usize },

    /// Card list that cannot form a deck (odd length or unpaired card).
    #[error("Invalid deck: {0}")]
    InvalidDeck(String),

    /// Snapshot whose contents are inconsistent with each other.
    #[error("Corrupt snapshot: {0}")]
    CorruptSnapshot(String),

    /// Snapshot bytes that failed to encode or decode.
    #[error("Snapshot encoding error: {0}")]
    Snapshot(String),
}

impl EngineError {
    /// Shorthand for an `InvalidConfiguration` error.
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        EngineError::InvalidConfiguration {
            reason: reason.into(),
        }
    }
}

impl From<bincode::Error> for EngineError {
    fn from(err: bincode::Error) -> Self {
        EngineError::Snapshot(err.to_string())
    }
}
