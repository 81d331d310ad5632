//! Selection machine implementation.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{CardIndex, EngineError};

/// A card changed sides.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlipEvent {
    pub index: CardIndex,
    pub face_up: bool,
}

impl FlipEvent {
    /// A card was turned face-up.
    #[must_use]
    pub const fn face_up(index: CardIndex) -> Self {
        Self {
            index,
            face_up: true,
        }
    }

    /// A card was turned face-down.
    #[must_use]
    pub const fn face_down(index: CardIndex) -> Self {
        Self {
            index,
            face_up: false,
        }
    }
}

/// Observable machine state.
///
/// A third state, "resolving", exists only inside `apply`: the second
/// face-up card produces `Transition::Resolve` and the machine is back to
/// `Empty` before the call returns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionState {
    /// No unresolved face-up card.
    Empty,
    /// One face-up card waiting for a partner.
    OneSelected(CardIndex),
}

/// What a single event did to the machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    /// Card added; the machine now holds one card.
    Selected(CardIndex),
    /// Card dropped from the selection.
    Deselected(CardIndex),
    /// Second card arrived. Compare these two; the selection is already
    /// cleared.
    Resolve { first: CardIndex, second: CardIndex },
    /// Event had no effect (face-down for an unselected card, or a repeat
    /// face-up for the card already selected).
    Ignored,
}

/// Selection state machine.
///
/// ## Invariant
///
/// The selection never holds more than two cards, and it is drained to
/// zero in the same call that brings it to two.
///
/// ## Example
///
/// ```
/// use rust_pairs::core::CardIndex;
/// use rust_pairs::selection::{FlipEvent, SelectionMachine, SelectionState, Transition};
///
/// let mut machine = SelectionMachine::new();
///
/// machine.apply(FlipEvent::face_up(CardIndex(0)));
/// assert_eq!(machine.state(), SelectionState::OneSelected(CardIndex(0)));
///
/// let t = machine.apply(FlipEvent::face_up(CardIndex(3)));
/// assert_eq!(t, Transition::Resolve { first: CardIndex(0), second: CardIndex(3) });
/// assert_eq!(machine.state(), SelectionState::Empty);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawSelection")]
pub struct SelectionMachine {
    selected: SmallVec<[CardIndex; 2]>,
}

/// Unchecked wire form of a `SelectionMachine`.
#[derive(Deserialize)]
struct RawSelection {
    selected: SmallVec<[CardIndex; 2]>,
}

impl TryFrom<RawSelection> for SelectionMachine {
    type Error = EngineError;

    fn try_from(raw: RawSelection) -> Result<Self, Self::Error> {
        match raw.selected.as_slice() {
            [] => Ok(Self::with_selected(None)),
            [index] => Ok(Self::with_selected(Some(*index))),
            many => Err(EngineError::CorruptSnapshot(format!(
                "selection holds {} cards, at most one may be pending",
                many.len()
            ))),
        }
    }
}

impl SelectionMachine {
    /// Create an empty machine.
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one flip event through the machine.
    pub fn apply(&mut self, event: FlipEvent) -> Transition {
        let transition = if event.face_up {
            self.on_face_up(event.index)
        } else {
            self.on_face_down(event.index)
        };

        log::trace!("Selection {:?} -> {:?}", event, transition);
        debug_assert!(self.selected.len() < 2);

        transition
    }

    fn on_face_up(&mut self, index: CardIndex) -> Transition {
        if self.selected.contains(&index) {
            return Transition::Ignored;
        }

        self.selected.push(index);

        if self.selected.len() == 2 {
            let first = self.selected[0];
            let second = self.selected[1];
            self.selected.clear();
            Transition::Resolve { first, second }
        } else {
            Transition::Selected(index)
        }
    }

    fn on_face_down(&mut self, index: CardIndex) -> Transition {
        match self.selected.iter().position(|&i| i == index) {
            Some(pos) => {
                self.selected.remove(pos);
                Transition::Deselected(index)
            }
            None => Transition::Ignored,
        }
    }

    /// Current observable state.
    #[must_use]
    pub fn state(&self) -> SelectionState {
        match self.selected.first() {
            Some(&index) => SelectionState::OneSelected(index),
            None => SelectionState::Empty,
        }
    }

    /// Cards currently selected.
    #[must_use]
    pub fn selected(&self) -> &[CardIndex] {
        &self.selected
    }

    /// Number of cards currently selected.
    #[must_use]
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Drop any selection (new round).
    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Rebuild a machine holding at most one selected card.
    #[must_use]
    pub fn with_selected(index: Option<CardIndex>) -> Self {
        Self {
            selected: index.into_iter().collect(),
        }
    }
}
