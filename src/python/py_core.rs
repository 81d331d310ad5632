//! Core type bindings for Python.

use pyo3::exceptions::{PyIndexError, PyValueError};
use pyo3::prelude::*;

use crate::cards::Card;
use crate::core::EngineError;
use crate::session::BoardAction;

/// Convert an engine error into the closest Python exception.
pub(crate) fn to_py_err(err: EngineError) -> PyErr {
    match err {
        EngineError::IndexOutOfRange { .. } => PyIndexError::new_err(err.to_string()),
        _ => PyValueError::new_err(err.to_string()),
    }
}

/// Python wrapper for Card.
#[pyclass(name = "Card")]
#[derive(Clone, Debug)]
pub struct PyCard(pub Card);

#[pymethods]
impl PyCard {
    /// Shape name ("circle", "cross", "fill", "square").
    #[getter]
    fn shape(&self) -> &'static str {
        self.0.shape.name()
    }

    /// Color name.
    #[getter]
    fn color(&self) -> &'static str {
        self.0.color.name()
    }

    /// Face color as an (r, g, b) tuple.
    fn rgb(&self) -> (u8, u8, u8) {
        let [r, g, b] = self.0.color.rgb();
        (r, g, b)
    }

    fn __repr__(&self) -> String {
        format!("Card({})", self.0)
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

/// Python wrapper for BoardAction.
///
/// `kind` is one of "flipped", "remove", "flip_back", "completed".
#[pyclass(name = "BoardAction")]
#[derive(Clone, Debug)]
pub struct PyBoardAction(pub BoardAction);

#[pymethods]
impl PyBoardAction {
    #[getter]
    fn kind(&self) -> &'static str {
        match self.0 {
            BoardAction::Flipped { .. } => "flipped",
            BoardAction::RemoveCards(..) => "remove",
            BoardAction::FlipBackCards(..) => "flip_back",
            BoardAction::RoundCompleted => "completed",
        }
    }

    /// Card indices the action applies to.
    #[getter]
    fn indices(&self) -> Vec<usize> {
        match self.0 {
            BoardAction::Flipped { index, .. } => vec![index.0],
            BoardAction::RemoveCards(a, b) | BoardAction::FlipBackCards(a, b) => vec![a.0, b.0],
            BoardAction::RoundCompleted => vec![],
        }
    }

    fn __repr__(&self) -> String {
        format!("BoardAction({:?})", self.0)
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}
