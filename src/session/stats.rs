//! Per-round counters.

use serde::{Deserialize, Serialize};

/// Running totals for the current round.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundStats {
    /// Pairs dealt this round.
    pub pairs: usize,
    /// Accepted taps (redundant taps are not counted).
    pub taps: u32,
    /// Pairs removed so far.
    pub matches: u32,
    /// Comparisons that flipped cards back.
    pub mismatches: u32,
}

impl RoundStats {
    /// Fresh counters for a round of `pairs` pairs.
    #[must_use]
    pub fn for_round(pairs: usize) -> Self {
        Self {
            pairs,
            ..Self::default()
        }
    }

    /// Pairs still on the board.
    #[must_use]
    pub fn remaining_pairs(&self) -> usize {
        self.pairs.saturating_sub(self.matches as usize)
    }

    /// Completed comparisons (matches plus mismatches).
    #[must_use]
    pub fn attempts(&self) -> u32 {
        self.matches.saturating_add(self.mismatches)
    }
}
