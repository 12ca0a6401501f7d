// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Strategy selection and uniform dispatch.
//!
//! The original formulation of this solver family shares a virtual base
//! class; here a plain enum selects the engine and one method answers the
//! common contract. Exhaustive strategies stop at the first complete
//! placement when dispatched through this interface.

use queens_ls::min_conflicts::MinConflicts;
use queens_ls::swap_search::SwapSearch;
use queens_search::backtracking::{BasicBacktracking, TrackedBacktracking};
use queens_search::result::SearchOutcome;
use rand::Rng;
use std::time::Duration;

/// One of the four search strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Exhaustive backtracking with the O(n) rescan safety check.
    BasicBacktracking,
    /// Exhaustive backtracking with the O(1) tracker safety check.
    TrackedBacktracking,
    /// Min-conflicts repair.
    MinConflicts,
    /// Permutation-swap repair.
    SwapSearch,
}

impl Strategy {
    /// Every strategy, in command-surface order (modes 1 through 4).
    pub const ALL: [Strategy; 4] = [
        Strategy::BasicBacktracking,
        Strategy::TrackedBacktracking,
        Strategy::MinConflicts,
        Strategy::SwapSearch,
    ];

    /// Maps a command-surface mode number (1 through 4) to a strategy.
    #[inline]
    pub fn from_mode(mode: u32) -> Option<Strategy> {
        match mode {
            1 => Some(Strategy::BasicBacktracking),
            2 => Some(Strategy::TrackedBacktracking),
            3 => Some(Strategy::MinConflicts),
            4 => Some(Strategy::SwapSearch),
            _ => None,
        }
    }

    /// Human-readable strategy name.
    #[inline]
    pub fn name(self) -> &'static str {
        match self {
            Strategy::BasicBacktracking => "Basic Backtracking",
            Strategy::TrackedBacktracking => "Tracked Backtracking",
            Strategy::MinConflicts => "Min-Conflicts",
            Strategy::SwapSearch => "Swap Search",
        }
    }

    /// Searches for one placement on an `n x n` board with this strategy.
    ///
    /// The local-search strategies draw from `rng` and run with their
    /// default step budgets; the exhaustive strategies ignore `rng` and
    /// stop at the first complete placement.
    pub fn solve_first<R>(self, n: usize, time_limit: Duration, rng: R) -> SearchOutcome
    where
        R: Rng,
    {
        match self {
            Strategy::BasicBacktracking => BasicBacktracking::new()
                .with_time_limit(time_limit)
                .solve_first(n),
            Strategy::TrackedBacktracking => TrackedBacktracking::new()
                .with_time_limit(time_limit)
                .solve_first(n),
            Strategy::MinConflicts => MinConflicts::new(rng)
                .with_time_limit(time_limit)
                .solve(n),
            Strategy::SwapSearch => SwapSearch::new(rng)
                .with_time_limit(time_limit)
                .solve(n),
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::Strategy;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::time::Duration;

    const AMPLE: Duration = Duration::from_secs(30);

    #[test]
    fn test_mode_mapping_covers_all_strategies() {
        for (index, &strategy) in Strategy::ALL.iter().enumerate() {
            assert_eq!(Strategy::from_mode(index as u32 + 1), Some(strategy));
        }
        assert_eq!(Strategy::from_mode(0), None);
        assert_eq!(Strategy::from_mode(5), None);
    }

    #[test]
    fn test_every_strategy_answers_the_common_contract() {
        for strategy in Strategy::ALL {
            let rng = ChaCha8Rng::seed_from_u64(42);
            let outcome = strategy.solve_first(8, AMPLE, rng);
            assert!(!outcome.is_timed_out(), "{strategy} timed out");
            if let Some(placement) = outcome.placement() {
                assert!(placement.is_valid(), "{strategy} produced an invalid board");
            }
        }
    }

    #[test]
    fn test_exhaustive_strategies_agree_on_the_first_placement() {
        let basic = Strategy::BasicBacktracking.solve_first(
            8,
            AMPLE,
            ChaCha8Rng::seed_from_u64(0),
        );
        let tracked = Strategy::TrackedBacktracking.solve_first(
            8,
            AMPLE,
            ChaCha8Rng::seed_from_u64(0),
        );
        assert_eq!(basic.placement(), tracked.placement());
        assert!(basic.is_solved());
    }

    #[test]
    fn test_swap_search_strategy_solves_large_board() {
        let rng = ChaCha8Rng::seed_from_u64(7);
        let outcome = Strategy::SwapSearch.solve_first(128, AMPLE, rng);
        let placement = outcome.placement().expect("should find a placement");
        assert!(placement.is_valid());
    }

    #[test]
    fn test_display_names() {
        assert_eq!(Strategy::MinConflicts.to_string(), "Min-Conflicts");
        assert_eq!(Strategy::SwapSearch.to_string(), "Swap Search");
    }
}
