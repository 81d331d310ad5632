//! End-to-end round tests.
//!
//! These tests drive a `BoardSession` the way a frontend would:
//! - Deal a round (optionally rigged through a scripted random source)
//! - Tap cards and collect the emitted actions
//! - Check card statuses, selection state and completion

use rust_pairs::cards::{Card, CardColor, CardStatus, Shape};
use rust_pairs::core::{CardIndex, EngineError, RandomSource, SessionConfig};
use rust_pairs::deck::Deck;
use rust_pairs::selection::SelectionState;
use rust_pairs::session::{BoardAction, BoardSession, Presentation};

/// Replays a fixed list of draws, then repeats zeros.
struct Scripted {
    draws: Vec<usize>,
    pos: usize,
}

impl Scripted {
    fn new(draws: &[usize]) -> Self {
        Self {
            draws: draws.to_vec(),
            pos: 0,
        }
    }
}

impl RandomSource for Scripted {
    fn next_index(&mut self, bound: usize) -> usize {
        let draw = self.draws.get(self.pos).copied().unwrap_or(0);
        self.pos += 1;
        draw % bound
    }
}

/// Records every presentation callback as a string.
#[derive(Default)]
struct Recorder {
    events: Vec<String>,
}

impl Presentation for Recorder {
    fn render(&mut self, deck: &Deck) {
        self.events.push(format!("render({})", deck.len()));
    }

    fn flip(&mut self, index: CardIndex, face_up: bool) {
        self.events.push(format!("flip({},{})", index.0, face_up));
    }

    fn remove_cards(&mut self, first: CardIndex, second: CardIndex) {
        self.events.push(format!("removeCards({},{})", first.0, second.0));
    }

    fn flip_back_cards(&mut self, first: CardIndex, second: CardIndex) {
        self.events.push(format!("flipBackCards({},{})", first.0, second.0));
    }

    fn round_completed(&mut self) {
        self.events.push("roundCompleted()".to_string());
    }
}

/// Session whose first deal is [circle/red x2, square/blue x2].
fn rigged_session() -> BoardSession<Scripted> {
    // shape, color per pair: circle=0 red=7, square=3 blue=8
    BoardSession::with_source(SessionConfig::new(), Scripted::new(&[0, 7, 3, 8]))
}

/// Single pair: tap both, match, round completes.
#[test]
fn test_single_pair_round() {
    let mut session = BoardSession::new(SessionConfig::new().with_seed(42));
    let mut view = Recorder::default();

    session.start_round_on(1, &mut view).unwrap();
    let deck = session.deck();
    assert_eq!(deck.len(), 2);
    assert_eq!(deck.get(CardIndex(0)), deck.get(CardIndex(1)));

    session.tap_on(CardIndex(0), &mut view).unwrap();
    assert_eq!(session.selection_state(), SelectionState::OneSelected(CardIndex(0)));

    let actions = session.tap_on(CardIndex(1), &mut view).unwrap();
    assert_eq!(
        actions,
        vec![
            BoardAction::Flipped {
                index: CardIndex(1),
                face_up: true
            },
            BoardAction::RemoveCards(CardIndex(0), CardIndex(1)),
            BoardAction::RoundCompleted,
        ]
    );

    assert_eq!(
        view.events,
        vec![
            "render(2)",
            "flip(0,true)",
            "flip(1,true)",
            "removeCards(0,1)",
            "roundCompleted()",
        ]
    );
    assert!(session.is_complete());
}

/// Rigged [A, A, B, B]: tapping 0 then 2 flips both back.
#[test]
fn test_mismatch_scenario() {
    let mut session = rigged_session();
    let deck = session.start_round(2).unwrap();

    let red_circle = Card::new(Shape::Circle, CardColor::Red);
    let blue_square = Card::new(Shape::Square, CardColor::Blue);
    assert_eq!(deck.to_vec(), vec![red_circle, red_circle, blue_square, blue_square]);

    session.tap(CardIndex(0)).unwrap();
    let actions = session.tap(CardIndex(2)).unwrap();

    assert_eq!(
        actions.last(),
        Some(&BoardAction::FlipBackCards(CardIndex(0), CardIndex(2)))
    );
    assert_eq!(session.status(CardIndex(0)), Ok(CardStatus::FaceDown));
    assert_eq!(session.status(CardIndex(2)), Ok(CardStatus::FaceDown));
    assert_eq!(session.selection_state(), SelectionState::Empty);
    assert!(!session.is_complete());
    assert!(!actions.contains(&BoardAction::RoundCompleted));
}

/// After a mismatch the same cards can be tapped again and matched.
#[test]
fn test_recover_after_mismatch() {
    let mut session = rigged_session();
    session.start_round(2).unwrap();

    session.tap(CardIndex(0)).unwrap();
    session.tap(CardIndex(2)).unwrap();

    session.tap(CardIndex(0)).unwrap();
    let first = session.tap(CardIndex(1)).unwrap();
    assert!(first.contains(&BoardAction::RemoveCards(CardIndex(0), CardIndex(1))));
    assert!(!first.contains(&BoardAction::RoundCompleted));

    session.tap(CardIndex(3)).unwrap();
    let last = session.tap(CardIndex(2)).unwrap();
    assert_eq!(
        &last[1..],
        &[
            BoardAction::RemoveCards(CardIndex(3), CardIndex(2)),
            BoardAction::RoundCompleted,
        ]
    );

    let stats = session.stats();
    assert_eq!(stats.taps, 6);
    assert_eq!(stats.matches, 2);
    assert_eq!(stats.mismatches, 1);
    assert_eq!(stats.remaining_pairs(), 0);
}

/// Out-of-range taps are errors and leave the selection alone.
#[test]
fn test_out_of_range_does_not_corrupt_selection() {
    let mut session = rigged_session();
    session.start_round(2).unwrap();
    session.tap(CardIndex(1)).unwrap();

    assert_eq!(
        session.tap(CardIndex(10)),
        Err(EngineError::IndexOutOfRange { index: 10, len: 4 })
    );
    assert_eq!(session.selection_state(), SelectionState::OneSelected(CardIndex(1)));

    let actions = session.tap(CardIndex(0)).unwrap();
    assert!(actions.contains(&BoardAction::RemoveCards(CardIndex(1), CardIndex(0))));
}

/// Negative pair counts are rejected before any state changes.
#[test]
fn test_invalid_configuration() {
    let mut session = rigged_session();
    let mut view = Recorder::default();

    let err = session.start_round_on(-2, &mut view).unwrap_err();
    assert!(matches!(err, EngineError::InvalidConfiguration { .. }));
    assert!(view.events.is_empty());
    assert!(session.deck().is_empty());
}

/// A zero-pair round is valid and immediately complete.
#[test]
fn test_empty_round() {
    let mut session = BoardSession::new(SessionConfig::new().with_seed(1));
    let mut view = Recorder::default();

    session.start_round_on(0, &mut view).unwrap();
    assert_eq!(view.events, vec!["render(0)"]);
    assert!(session.is_complete());
}

/// Playing every round of a seeded session pair-by-pair always finishes.
#[test]
fn test_seeded_rounds_complete() {
    let mut session = BoardSession::new(SessionConfig::new().with_seed(2024));

    for pairs in 1..=8 {
        session.start_round(pairs).unwrap();
        let mut completed = false;

        for k in 0..pairs as usize {
            session.tap(CardIndex(2 * k)).unwrap();
            let actions = session.tap(CardIndex(2 * k + 1)).unwrap();
            completed |= actions.contains(&BoardAction::RoundCompleted);
        }

        assert!(completed, "round of {} pairs did not complete", pairs);
        assert!(session.is_complete());
    }
}
