//! Board sessions: one round end-to-end.
//!
//! ## Flow
//!
//! 1. `start_round` deals a `Deck`; the presentation layer places one
//!    face-down card per index wherever it likes.
//! 2. Each `tap` flips a card and feeds the selection machine. When a
//!    second card turns up, the resolver decides and the session emits
//!    `RemoveCards` or `FlipBackCards`.
//! 3. When the last pair is removed the session emits `RoundCompleted`.
//!    Starting the next round is up to the caller.
//!
//! ## Threading
//!
//! All mutation goes through `&mut self`; callers sharing a session
//! across threads must serialize access themselves.

mod action;
mod board;
mod snapshot;
mod stats;

pub use action::{BoardAction, Presentation};
pub use board::BoardSession;
pub use snapshot::SessionSnapshot;
pub use stats::RoundStats;
