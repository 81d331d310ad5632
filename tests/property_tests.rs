//! Property-based tests for deck generation and the selection machine.

use proptest::prelude::*;

use rust_pairs::core::{CardIndex, GameRng, SessionConfig};
use rust_pairs::deck::DeckGenerator;
use rust_pairs::rules::{MatchResolver, Outcome};
use rust_pairs::selection::{FlipEvent, SelectionMachine, Transition};
use rust_pairs::session::{BoardAction, BoardSession};

fn flip_event() -> impl Strategy<Value = FlipEvent> {
    (0usize..8, any::<bool>()).prop_map(|(i, face_up)| FlipEvent {
        index: CardIndex(i),
        face_up,
    })
}

proptest! {
    /// Deck length is always twice the pair count.
    #[test]
    fn prop_deck_size(pairs in 0usize..100, seed in any::<u64>()) {
        let deck = DeckGenerator::generate(pairs, GameRng::new(seed));
        prop_assert_eq!(deck.len(), pairs * 2);
        prop_assert_eq!(deck.pair_count(), pairs);
    }

    /// Every card appears an even number of times, and each emitted pair
    /// holds two equal cards.
    #[test]
    fn prop_deck_pairing(pairs in 0usize..50, seed in any::<u64>()) {
        let deck = DeckGenerator::generate(pairs, GameRng::new(seed));
        prop_assert!(deck.is_fully_paired());

        let cards = deck.to_vec();
        for pair in cards.chunks(2) {
            prop_assert_eq!(pair[0], pair[1]);
        }
    }

    /// The resolver matches exactly when the cards are equal.
    #[test]
    fn prop_resolver_agrees_with_equality(
        pairs in 1usize..20,
        seed in any::<u64>(),
        i in 0usize..40,
        j in 0usize..40,
    ) {
        let deck = DeckGenerator::generate(pairs, GameRng::new(seed));
        let (i, j) = (CardIndex(i % deck.len()), CardIndex(j % deck.len()));

        let result = MatchResolver::resolve(&deck, i, j).unwrap();
        if i == j {
            prop_assert_eq!(result, None);
        } else {
            let expected = if deck.get(i).unwrap() == deck.get(j).unwrap() {
                Outcome::Matched
            } else {
                Outcome::Mismatched
            };
            prop_assert_eq!(result, Some(expected));
        }
    }

    /// The selection never exceeds two cards and is drained whenever it
    /// reaches two.
    #[test]
    fn prop_selection_bounded(events in prop::collection::vec(flip_event(), 0..64)) {
        let mut machine = SelectionMachine::new();

        for event in events {
            let before = machine.len();
            let transition = machine.apply(event);

            prop_assert!(machine.len() <= 1);
            if let Transition::Resolve { first, second } = transition {
                prop_assert_eq!(before, 1);
                prop_assert_ne!(first, second);
            }
        }
    }

    /// Face-down for an unselected card never changes the machine.
    #[test]
    fn prop_face_down_unselected_is_noop(
        events in prop::collection::vec(flip_event(), 0..16),
        target in 0usize..8,
    ) {
        let mut machine = SelectionMachine::new();
        for event in events {
            machine.apply(event);
        }

        let target = CardIndex(target);
        if !machine.selected().contains(&target) {
            let before = machine.clone();
            prop_assert_eq!(machine.apply(FlipEvent::face_down(target)), Transition::Ignored);
            prop_assert_eq!(machine, before);
        }
    }

    /// Random tapping never leaves more than one unresolved face-up card
    /// and never reports completion before every card is removed.
    #[test]
    fn prop_random_taps_keep_session_consistent(
        seed in any::<u64>(),
        pairs in 1i64..6,
        taps in prop::collection::vec(0usize..12, 0..80),
    ) {
        let mut session = BoardSession::new(SessionConfig::new().with_seed(seed));
        let len = session.start_round(pairs).unwrap().len();

        for tap in taps {
            let index = CardIndex(tap % len);
            let actions = session.tap(index).unwrap();

            let face_up = session.statuses().count(rust_pairs::cards::CardStatus::FaceUp);
            prop_assert!(face_up <= 1);

            if actions.contains(&BoardAction::RoundCompleted) {
                prop_assert!(session.is_complete());
            }
        }

        let removed = session.statuses().count(rust_pairs::cards::CardStatus::Removed);
        prop_assert_eq!(removed, session.stats().matches as usize * 2);
    }
}
