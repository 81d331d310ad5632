//! Card system: identities, per-round status, face rendering data.
//!
//! ## Key Types
//!
//! - `Card`: Immutable (shape, color) identity; equality is the pairing rule
//! - `Shape`, `CardColor`: Closed tag sets drawn from when dealing
//! - `CardStatus`, `StatusTable`: Face-down / face-up / removed, keyed by index
//! - `FaceInstructions`: Data-only description of how a face is drawn

pub mod card;
pub mod render;
pub mod status;

pub use card::{Card, CardColor, Shape};
pub use render::{face_instructions, FaceInstructions, Paint, Primitive};
pub use status::{CardStatus, StatusTable};
