//! Flip selection state machine.
//!
//! Tracks which cards are face-up and unresolved, and decides when two of
//! them must be compared. It knows nothing about shapes or colors: it only
//! counts indices and hands a completed pair to the resolver.

mod machine;

pub use machine::{FlipEvent, SelectionMachine, SelectionState, Transition};
