//! # rust-pairs
//!
//! Engine for a pair-matching (memory) card game: cards showing a shape
//! in a color are dealt face-down, the player turns them over two at a
//! time, and identical pairs leave the board.
//!
//! ## Design Principles
//!
//! 1. **Presentation-Agnostic**: No views, gestures or animation. The
//!    engine speaks in card indices and returns `BoardAction`s for a
//!    frontend to carry out.
//!
//! 2. **Deterministic**: All randomness flows through an injected
//!    `RandomSource`, so any round can be reproduced from a seed or a
//!    scripted source.
//!
//! 3. **Synchronous**: A tap is resolved completely before the call
//!    returns. There are no timers or background work.
//!
//! ## Modules
//!
//! - `core`: Card indices, RNG, configuration, errors
//! - `cards`: Card identities, per-round status, face rendering data
//! - `deck`: Decks and the deck generator
//! - `selection`: Flip selection state machine
//! - `rules`: Match resolution
//! - `session`: Board sessions, actions, presentation contract, snapshots
//! - `layout`: Random card placement on the board

pub mod core;
pub mod cards;
pub mod deck;
pub mod selection;
pub mod rules;
pub mod session;
pub mod layout;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    BoardLayout, CardIndex, EngineError, GameRng, GameRngState, RandomSource, SessionConfig, Size,
};

pub use crate::cards::{Card, CardColor, CardStatus, Shape, StatusTable};

pub use crate::deck::{Deck, DeckGenerator};

pub use crate::selection::{FlipEvent, SelectionMachine, SelectionState, Transition};

pub use crate::rules::{MatchResolver, Outcome};

pub use crate::session::{BoardAction, BoardSession, Presentation, RoundStats, SessionSnapshot};

pub use crate::layout::{Placer, Position};
