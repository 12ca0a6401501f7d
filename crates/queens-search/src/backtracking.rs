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

//! # Exhaustive Backtracking Engines
//!
//! Depth-first enumeration of N-Queens placements with undo, in two
//! variants that differ only in how a candidate square is vetted:
//!
//! - `BasicBacktracking` rescans every previously placed column on each
//!   probe — O(n) per check, the textbook formulation.
//! - `TrackedBacktracking` consults an `OccupancyTracker` — O(1) per
//!   check, the incremental-occupancy formulation.
//!
//! Both explore columns left to right and try rows in ascending order, so
//! they enumerate solutions in exactly the same deterministic order and
//! must agree on counts for every board size. `enumerate` records every
//! placement and never stops early; `solve_first` returns at the first
//! complete placement.
//!
//! The wall-clock budget is polled once per visited node. An expired
//! budget abandons the whole search and surfaces as a `TimedOut` result;
//! nothing found before the expiry is retained.
//!
//! ## Usage
//!
//! ```rust
//! use queens_search::backtracking::TrackedBacktracking;
//!
//! let engine = TrackedBacktracking::new();
//! let outcome = engine.enumerate(6);
//! assert_eq!(outcome.solutions().map(|s| s.len()), Some(4));
//! ```

use crate::monitor::{SearchCommand, TimeLimit};
use crate::placement::Placement;
use crate::result::{EnumerationOutcome, SearchOutcome};
use crate::stats::SearchStatistics;
use crate::tracker::OccupancyTracker;
use std::time::Duration;

/// Default wall-clock budget for a single solve call.
pub const DEFAULT_TIME_LIMIT: Duration = Duration::from_secs(10);

/// Cancellation signal propagated out of the recursion when the
/// wall-clock budget expires.
struct Expired;

/// Exhaustive engine with the O(n) rescan safety check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasicBacktracking {
    time_limit: Duration,
}

impl Default for BasicBacktracking {
    fn default() -> Self {
        Self::new()
    }
}

impl BasicBacktracking {
    /// Creates an engine with the default wall-clock budget.
    #[inline]
    pub fn new() -> Self {
        Self {
            time_limit: DEFAULT_TIME_LIMIT,
        }
    }

    /// Sets the wall-clock budget for each solve call.
    #[inline]
    pub fn with_time_limit(mut self, time_limit: Duration) -> Self {
        self.time_limit = time_limit;
        self
    }

    /// Enumerates every placement for an `n x n` board.
    pub fn enumerate(&self, n: usize) -> EnumerationOutcome {
        let mut search = BasicSearch::new(n, false, TimeLimit::new(self.time_limit));
        finish_enumeration(search.descend(0), &mut search.common)
    }

    /// Searches for one placement, stopping at the first found.
    pub fn solve_first(&self, n: usize) -> SearchOutcome {
        let mut search = BasicSearch::new(n, true, TimeLimit::new(self.time_limit));
        finish_first(search.descend(0), &mut search.common)
    }
}

/// Exhaustive engine with the O(1) tracker safety check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackedBacktracking {
    time_limit: Duration,
}

impl Default for TrackedBacktracking {
    fn default() -> Self {
        Self::new()
    }
}

impl TrackedBacktracking {
    /// Creates an engine with the default wall-clock budget.
    #[inline]
    pub fn new() -> Self {
        Self {
            time_limit: DEFAULT_TIME_LIMIT,
        }
    }

    /// Sets the wall-clock budget for each solve call.
    #[inline]
    pub fn with_time_limit(mut self, time_limit: Duration) -> Self {
        self.time_limit = time_limit;
        self
    }

    /// Enumerates every placement for an `n x n` board.
    pub fn enumerate(&self, n: usize) -> EnumerationOutcome {
        let mut search = TrackedSearch::new(n, false, TimeLimit::new(self.time_limit));
        finish_enumeration(search.descend(0), &mut search.common)
    }

    /// Searches for one placement, stopping at the first found.
    pub fn solve_first(&self, n: usize) -> SearchOutcome {
        let mut search = TrackedSearch::new(n, true, TimeLimit::new(self.time_limit));
        finish_first(search.descend(0), &mut search.common)
    }
}

/// State shared by both recursion variants: the partial placement, the
/// collected solutions, and the run bookkeeping.
struct SearchCommon {
    n: usize,
    first_only: bool,
    rows: Vec<usize>,
    solutions: Vec<Placement>,
    limit: TimeLimit,
    stats: SearchStatistics,
}

impl SearchCommon {
    fn new(n: usize, first_only: bool, limit: TimeLimit) -> Self {
        Self {
            n,
            first_only,
            rows: Vec::with_capacity(n),
            solutions: Vec::new(),
            limit,
            stats: SearchStatistics::default(),
        }
    }

    /// Polls the budget at a node. Returns the cancellation signal once
    /// the clock has run out.
    #[inline]
    fn on_node(&mut self) -> Result<(), Expired> {
        self.stats.on_step();
        self.limit.on_step();
        match self.limit.command() {
            SearchCommand::Continue => Ok(()),
            SearchCommand::Expired => Err(Expired),
        }
    }

    /// Records the current full placement.
    fn record_solution(&mut self) {
        self.stats.on_found_solution();
        self.solutions.push(Placement::new(self.rows.clone()));
    }
}

fn finish_enumeration(
    walk: Result<bool, Expired>,
    common: &mut SearchCommon,
) -> EnumerationOutcome {
    common.stats.set_total_time(common.limit.elapsed());
    let stats = common.stats.clone();
    match walk {
        Ok(_) => EnumerationOutcome::complete(std::mem::take(&mut common.solutions), stats),
        Err(Expired) => EnumerationOutcome::timed_out(stats),
    }
}

fn finish_first(walk: Result<bool, Expired>, common: &mut SearchCommon) -> SearchOutcome {
    common.stats.set_total_time(common.limit.elapsed());
    let stats = common.stats.clone();
    match walk {
        Err(Expired) => SearchOutcome::timed_out(stats),
        Ok(_) => match common.solutions.pop() {
            Some(placement) => SearchOutcome::solved(placement, stats),
            None => SearchOutcome::not_found(stats),
        },
    }
}

struct BasicSearch {
    common: SearchCommon,
}

impl BasicSearch {
    fn new(n: usize, first_only: bool, limit: TimeLimit) -> Self {
        Self {
            common: SearchCommon::new(n, first_only, limit),
        }
    }

    /// Rescans every placed column for a row or diagonal attack.
    #[inline]
    fn is_safe(&self, row: usize, col: usize) -> bool {
        self.common
            .rows
            .iter()
            .enumerate()
            .all(|(c, &r)| r != row && r.abs_diff(row) != col - c)
    }

    fn descend(&mut self, col: usize) -> Result<bool, Expired> {
        self.common.on_node()?;

        if col == self.common.n {
            self.common.record_solution();
            return Ok(true);
        }

        for row in 0..self.common.n {
            if !self.is_safe(row, col) {
                continue;
            }
            self.common.rows.push(row);
            let found = self.descend(col + 1)?;
            self.common.rows.pop();
            if found && self.common.first_only {
                return Ok(true);
            }
        }
        Ok(false)
    }
}

struct TrackedSearch {
    common: SearchCommon,
    tracker: OccupancyTracker,
}

impl TrackedSearch {
    fn new(n: usize, first_only: bool, limit: TimeLimit) -> Self {
        Self {
            common: SearchCommon::new(n, first_only, limit),
            tracker: OccupancyTracker::new(n),
        }
    }

    fn descend(&mut self, col: usize) -> Result<bool, Expired> {
        self.common.on_node()?;

        if col == self.common.n {
            self.common.record_solution();
            return Ok(true);
        }

        for row in 0..self.common.n {
            if !self.tracker.is_safe(row, col) {
                continue;
            }
            self.tracker.mark(row, col);
            self.common.rows.push(row);
            let walk = self.descend(col + 1);
            self.common.rows.pop();
            self.tracker.unmark(row, col);
            let found = walk?;
            if found && self.common.first_only {
                return Ok(true);
            }
        }
        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use super::{BasicBacktracking, TrackedBacktracking};
    use std::time::Duration;

    /// Known N-Queens solution counts, including the degenerate sizes.
    const KNOWN_COUNTS: &[(usize, usize)] = &[
        (0, 1),
        (1, 1),
        (2, 0),
        (3, 0),
        (4, 2),
        (5, 10),
        (6, 4),
        (7, 40),
        (8, 92),
    ];

    #[test]
    fn test_basic_enumeration_matches_known_counts() {
        let engine = BasicBacktracking::new();
        for &(n, count) in KNOWN_COUNTS {
            let outcome = engine.enumerate(n);
            let solutions = outcome.solutions().expect("enumeration should complete");
            assert_eq!(solutions.len(), count, "wrong count for n = {n}");
        }
    }

    #[test]
    fn test_tracked_enumeration_matches_known_counts() {
        let engine = TrackedBacktracking::new();
        for &(n, count) in KNOWN_COUNTS {
            let outcome = engine.enumerate(n);
            let solutions = outcome.solutions().expect("enumeration should complete");
            assert_eq!(solutions.len(), count, "wrong count for n = {n}");
        }
    }

    #[test]
    fn test_variants_agree_on_solutions_and_order() {
        for n in 0..=8 {
            let basic = BasicBacktracking::new().enumerate(n);
            let tracked = TrackedBacktracking::new().enumerate(n);
            assert_eq!(
                basic.solutions(),
                tracked.solutions(),
                "variants disagree for n = {n}"
            );
        }
    }

    #[test]
    fn test_every_enumerated_placement_is_valid() {
        let outcome = TrackedBacktracking::new().enumerate(8);
        for placement in outcome.solutions().expect("enumeration should complete") {
            assert!(placement.is_valid(), "invalid placement:\n{placement}");
        }
    }

    #[test]
    fn test_enumeration_order_is_ascending() {
        let outcome = TrackedBacktracking::new().enumerate(8);
        let solutions = outcome.solutions().expect("enumeration should complete");
        // Ascending row-then-column exploration makes the first solution
        // the lexicographically smallest one.
        assert_eq!(solutions[0].rows(), &[0, 4, 7, 5, 2, 6, 1, 3]);
        let mut sorted = solutions.to_vec();
        sorted.sort_by(|a, b| a.rows().cmp(b.rows()));
        assert_eq!(sorted.as_slice(), solutions);
    }

    #[test]
    fn test_solve_first_finds_first_enumerated_placement() {
        let all = TrackedBacktracking::new().enumerate(8);
        let first = TrackedBacktracking::new().solve_first(8);
        assert_eq!(
            first.placement(),
            all.solutions().and_then(|s| s.first()),
        );
    }

    #[test]
    fn test_solve_first_visits_fewer_nodes_than_enumeration() {
        let all = TrackedBacktracking::new().enumerate(8);
        let first = TrackedBacktracking::new().solve_first(8);
        assert!(first.statistics().steps < all.statistics().steps);
    }

    #[test]
    fn test_solve_first_reports_not_found_for_unsolvable_sizes() {
        for n in [2, 3] {
            let outcome = BasicBacktracking::new().solve_first(n);
            assert!(!outcome.is_solved(), "n = {n} has no solution");
            assert!(!outcome.is_timed_out());
        }
    }

    #[test]
    fn test_zero_budget_times_out_without_poisoning_the_engine() {
        let engine = TrackedBacktracking::new().with_time_limit(Duration::ZERO);
        let outcome = engine.enumerate(8);
        assert!(outcome.is_timed_out());
        assert_eq!(outcome.solutions(), None);

        // A fresh budget on a rebuilt engine must still succeed.
        let recovered = TrackedBacktracking::new().enumerate(8);
        assert_eq!(recovered.solutions().map(|s| s.len()), Some(92));
    }

    #[test]
    fn test_zero_budget_solve_first_times_out() {
        let outcome = BasicBacktracking::new()
            .with_time_limit(Duration::ZERO)
            .solve_first(8);
        assert!(outcome.is_timed_out());
        assert_eq!(outcome.placement(), None);
    }
}
