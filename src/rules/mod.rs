//! Matching rules.
//!
//! Decides whether two face-up cards form a pair. The session calls into
//! `MatchResolver` and maps its `Outcome` to board actions.

pub mod resolver;

pub use resolver::{MatchResolver, Outcome};
