//! Core engine types: card indices, RNG, configuration, errors.
//!
//! These are the building blocks every other module depends on. None of
//! them know about shapes, colors or matching.

pub mod index;
pub mod rng;
pub mod config;
pub mod error;

pub use index::CardIndex;
pub use rng::{GameRng, GameRngState, RandomSource};
pub use config::{BoardLayout, SessionConfig, Size, DEFAULT_MAX_PAIRS, DEFAULT_PAIR_COUNT};
pub use error::EngineError;
