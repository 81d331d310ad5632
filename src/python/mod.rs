//! Python bindings for the rust-pairs matching engine.
//!
//! Lets Python frontends and bots drive rounds through the same engine.
//!
//! # Quick Start
//!
//! ```python
//! import rust_pairs as rp
//!
//! session = rp.BoardSession(seed=42)
//! cards = session.start_round(2)
//!
//! session.tap(0)
//! for action in session.tap(1):
//!     print(action.kind, action.indices)
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_session;

pub use py_core::*;
pub use py_session::*;

/// rust-pairs: a pair-matching card game engine.
#[pymodule]
fn rust_pairs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyCard>()?;
    m.add_class::<PyBoardAction>()?;
    m.add_class::<PyBoardSession>()?;

    Ok(())
}
