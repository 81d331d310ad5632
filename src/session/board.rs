//! Board session implementation.

use log::{debug, info};

use crate::cards::{CardStatus, StatusTable};
use crate::core::{CardIndex, EngineError, GameRng, RandomSource, SessionConfig};
use crate::deck::{Deck, DeckGenerator};
use crate::rules::MatchResolver;
use crate::selection::{FlipEvent, SelectionMachine, SelectionState, Transition};

use super::action::{BoardAction, Presentation};
use super::stats::RoundStats;

/// Runs rounds of the matching game.
///
/// Owns the deck, the per-card status table and the selection machine
/// for the current round. The presentation layer only ever refers to
/// cards by `CardIndex`.
///
/// Generic over the random source so tests can deal rigged decks;
/// production code uses the default `GameRng`.
///
/// ## Example
///
/// ```
/// use rust_pairs::core::{CardIndex, SessionConfig};
/// use rust_pairs::session::{BoardAction, BoardSession};
///
/// let mut session = BoardSession::new(SessionConfig::new().with_seed(1));
/// let deck = session.start_round(1).unwrap();
/// assert_eq!(deck.len(), 2);
///
/// session.tap(CardIndex(0)).unwrap();
/// let actions = session.tap(CardIndex(1)).unwrap();
///
/// assert!(actions.contains(&BoardAction::RemoveCards(CardIndex(0), CardIndex(1))));
/// assert!(session.is_complete());
/// ```
#[derive(Clone, Debug)]
pub struct BoardSession<R = GameRng> {
    pub(super) config: SessionConfig,
    pub(super) rng: R,
    pub(super) deck: Deck,
    pub(super) statuses: StatusTable,
    pub(super) selection: SelectionMachine,
    pub(super) stats: RoundStats,
}

impl BoardSession<GameRng> {
    /// Create a session seeded from the config (or from entropy).
    ///
    /// No round is dealt until `start_round` is called.
    pub fn new(config: SessionConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        Self::with_source(config, rng.for_context("deal"))
    }
}

impl<R: RandomSource> BoardSession<R> {
    /// Create a session that deals from the given random source.
    pub fn with_source(config: SessionConfig, rng: R) -> Self {
        Self {
            config,
            rng,
            deck: Deck::empty(),
            statuses: StatusTable::default(),
            selection: SelectionMachine::new(),
            stats: RoundStats::default(),
        }
    }

    /// Deal a new round of `pair_count` pairs, replacing the previous one.
    ///
    /// All previously handed-out indices become invalid. On error the
    /// current round is left untouched.
    ///
    /// ## Errors
    ///
    /// `InvalidConfiguration` if `pair_count` is negative or above the
    /// configured maximum.
    pub fn start_round(&mut self, pair_count: i64) -> Result<&Deck, EngineError> {
        let pairs = self.config.validate_pairs(pair_count)?;

        self.deck = DeckGenerator::generate(pairs, &mut self.rng);
        self.statuses = StatusTable::face_down(self.deck.len());
        self.selection.clear();
        self.stats = RoundStats::for_round(pairs);

        debug!("Started round with {} pairs ({} cards)", pairs, self.deck.len());

        Ok(&self.deck)
    }

    /// Deal a round with the configured default pair count.
    pub fn start_default_round(&mut self) -> Result<&Deck, EngineError> {
        let pairs = i64::try_from(self.config.default_pairs)
            .map_err(|_| EngineError::invalid_config("default pair count too large"))?;
        self.start_round(pairs)
    }

    /// Deal a round and hand it to a presentation layer for rendering.
    pub fn start_round_on<P: Presentation + ?Sized>(
        &mut self,
        pair_count: i64,
        presentation: &mut P,
    ) -> Result<(), EngineError> {
        let deck = self.start_round(pair_count)?;
        presentation.render(deck);
        Ok(())
    }

    /// Report a tap on a card.
    ///
    /// A face-down card turns face-up. If it is the second unresolved
    /// face-up card, the pair is resolved immediately and the returned
    /// actions include the removal or flip-back, followed by
    /// `RoundCompleted` if that was the last pair.
    ///
    /// Taps on cards that are already face-up or removed return no
    /// actions and change nothing.
    ///
    /// ## Errors
    ///
    /// `IndexOutOfRange` if the index is outside the current deck.
    pub fn tap(&mut self, index: CardIndex) -> Result<Vec<BoardAction>, EngineError> {
        let status = self.statuses.get(index)?;
        if status != CardStatus::FaceDown {
            debug!("Ignoring tap on {} ({:?})", index, status);
            return Ok(Vec::new());
        }

        self.statuses.set(index, CardStatus::FaceUp)?;
        self.stats.taps = self.stats.taps.saturating_add(1);

        let mut actions = vec![BoardAction::Flipped {
            index,
            face_up: true,
        }];

        if let Transition::Resolve { first, second } =
            self.selection.apply(FlipEvent::face_up(index))
        {
            self.resolve_pair(first, second, &mut actions)?;
        }

        Ok(actions)
    }

    /// Report a tap and forward the resulting actions to a presentation.
    pub fn tap_on<P: Presentation + ?Sized>(
        &mut self,
        index: CardIndex,
        presentation: &mut P,
    ) -> Result<Vec<BoardAction>, EngineError> {
        let actions = self.tap(index)?;
        BoardAction::dispatch_all(&actions, presentation);
        Ok(actions)
    }

    fn resolve_pair(
        &mut self,
        first: CardIndex,
        second: CardIndex,
        actions: &mut Vec<BoardAction>,
    ) -> Result<(), EngineError> {
        let Some(outcome) = MatchResolver::resolve(&self.deck, first, second)? else {
            return Ok(());
        };

        if outcome.is_match() {
            self.statuses.set(first, CardStatus::Removed)?;
            self.statuses.set(second, CardStatus::Removed)?;
            self.stats.matches = self.stats.matches.saturating_add(1);
            debug!("Matched {} and {}", first, second);
            actions.push(BoardAction::RemoveCards(first, second));

            if self.statuses.all_removed() {
                info!(
                    "Round completed: {} pairs in {} taps",
                    self.stats.pairs, self.stats.taps
                );
                actions.push(BoardAction::RoundCompleted);
            }
        } else {
            self.statuses.set(first, CardStatus::FaceDown)?;
            self.statuses.set(second, CardStatus::FaceDown)?;
            self.stats.mismatches = self.stats.mismatches.saturating_add(1);
            debug!("Mismatched {} and {}", first, second);
            actions.push(BoardAction::FlipBackCards(first, second));

            // The selection is already drained; these are no-ops that
            // keep the machine in step with the flip-back.
            self.selection.apply(FlipEvent::face_down(first));
            self.selection.apply(FlipEvent::face_down(second));
        }

        Ok(())
    }

    /// True once every card of the round has been removed.
    ///
    /// A zero-pair round is complete as soon as it is dealt.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.statuses.all_removed()
    }

    /// The current round's deck.
    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Status of one card.
    pub fn status(&self, index: CardIndex) -> Result<CardStatus, EngineError> {
        self.statuses.get(index)
    }

    /// Status of every card.
    #[must_use]
    pub fn statuses(&self) -> &StatusTable {
        &self.statuses
    }

    /// Current selection state.
    #[must_use]
    pub fn selection_state(&self) -> SelectionState {
        self.selection.state()
    }

    /// Counters for the current round.
    #[must_use]
    pub fn stats(&self) -> &RoundStats {
        &self.stats
    }

    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }
}
