//! Session bindings for Python.

use pyo3::prelude::*;

use crate::cards::CardStatus;
use crate::core::{CardIndex, SessionConfig};
use crate::selection::SelectionState;
use crate::session::{BoardSession, SessionSnapshot};

use super::py_core::{to_py_err, PyBoardAction, PyCard};

/// Python wrapper for BoardSession.
#[pyclass(name = "BoardSession")]
pub struct PyBoardSession {
    session: BoardSession,
}

#[pymethods]
impl PyBoardSession {
    /// Create a new session.
    ///
    /// # Arguments
    /// - default_pairs: Pairs dealt by start_default_round
    /// - max_pairs: Largest accepted pair count
    /// - seed: RNG seed, or None for a random seed
    #[new]
    #[pyo3(signature = (default_pairs = 8, max_pairs = 64, seed = None))]
    fn new(default_pairs: usize, max_pairs: usize, seed: Option<u64>) -> Self {
        let mut config = SessionConfig::new()
            .with_default_pairs(default_pairs)
            .with_max_pairs(max_pairs);
        config.seed = seed;
        Self {
            session: BoardSession::new(config),
        }
    }

    /// Deal a new round and return its cards.
    fn start_round(&mut self, pair_count: i64) -> PyResult<Vec<PyCard>> {
        let deck = self.session.start_round(pair_count).map_err(to_py_err)?;
        Ok(deck.iter().map(|(_, c)| PyCard(*c)).collect())
    }

    /// Deal a round with the default pair count.
    fn start_default_round(&mut self) -> PyResult<Vec<PyCard>> {
        let deck = self.session.start_default_round().map_err(to_py_err)?;
        Ok(deck.iter().map(|(_, c)| PyCard(*c)).collect())
    }

    /// Tap a card; returns the resulting actions.
    fn tap(&mut self, index: usize) -> PyResult<Vec<PyBoardAction>> {
        let actions = self.session.tap(CardIndex(index)).map_err(to_py_err)?;
        Ok(actions.into_iter().map(PyBoardAction).collect())
    }

    /// Status of a card: "face_down", "face_up" or "removed".
    fn status(&self, index: usize) -> PyResult<&'static str> {
        let status = self.session.status(CardIndex(index)).map_err(to_py_err)?;
        Ok(match status {
            CardStatus::FaceDown => "face_down",
            CardStatus::FaceUp => "face_up",
            CardStatus::Removed => "removed",
        })
    }

    /// Index of the card waiting for a partner, if any.
    #[getter]
    fn selected(&self) -> Option<usize> {
        match self.session.selection_state() {
            SelectionState::OneSelected(index) => Some(index.0),
            SelectionState::Empty => None,
        }
    }

    #[getter]
    fn is_complete(&self) -> bool {
        self.session.is_complete()
    }

    #[getter]
    fn remaining_pairs(&self) -> usize {
        self.session.stats().remaining_pairs()
    }

    #[getter]
    fn taps(&self) -> u32 {
        self.session.stats().taps
    }

    /// Pairs compared so far, matched or not.
    #[getter]
    fn attempts(&self) -> u32 {
        self.session.stats().attempts()
    }

    /// Serialize the session to bytes.
    fn snapshot(&self) -> PyResult<Vec<u8>> {
        self.session.snapshot().to_bytes().map_err(to_py_err)
    }

    /// Restore a session from bytes produced by `snapshot`.
    #[staticmethod]
    #[pyo3(signature = (data, max_pairs = 64))]
    fn restore(data: Vec<u8>, max_pairs: usize) -> PyResult<Self> {
        let snapshot = SessionSnapshot::from_bytes(&data).map_err(to_py_err)?;
        let config = SessionConfig::new().with_max_pairs(max_pairs);
        let session = BoardSession::restore(config, snapshot).map_err(to_py_err)?;
        Ok(Self { session })
    }
}
