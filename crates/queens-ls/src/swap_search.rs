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

//! # Permutation-Swap Repair
//!
//! Local search over row permutations. The board is always a permutation
//! of `0..n`, so one queen per row and column holds by construction and
//! diagonals are the only conflict source. Each step samples swap
//! partners for a random queen, scores every candidate swap with an O(1)
//! counter probe, and commits the best one unless it worsens the board.
//! Zero-improvement swaps are taken with low probability to drift off
//! plateaus.
//!
//! This is the only engine here that scales to very large boards: no step
//! touches more than a constant number of diagonal counters, and the
//! running conflict total is maintained incrementally (with a periodic
//! full recount, as in the classic formulation).
//!
//! Budget exhaustion is an ordinary `NotFound` answer. The wall clock is
//! polled once every 65,536 steps.

use queens_search::monitor::{SearchCommand, TimeLimit};
use queens_search::placement::Placement;
use queens_search::result::SearchOutcome;
use queens_search::stats::SearchStatistics;
use rand::seq::SliceRandom;
use rand::Rng;
use std::time::Duration;

/// Default wall-clock budget for a single solve call.
pub const DEFAULT_TIME_LIMIT: Duration = Duration::from_secs(10);

/// Default step budget, sized for boards up to a million queens.
pub const DEFAULT_MAX_STEPS: u64 = 20_000_000;

/// Clock-check cadence: every 65,536 steps.
const CLOCK_CHECK_MASK: u64 = 0xFFFF;

/// Full-recount cadence for the running conflict total.
const RECOUNT_INTERVAL: u64 = 10_000;

/// Swap partners sampled per step.
const PARTNER_SAMPLES: usize = 50;

/// Probability of skipping a queen that has no conflicts of its own.
const SKIP_SETTLED_PROBABILITY: f64 = 0.95;

/// Probability of accepting a swap that neither helps nor hurts.
const SIDEWAYS_PROBABILITY: f64 = 0.10;

/// Diagonal occupancy counters for a permutation board.
///
/// Rows and columns cannot collide on a permutation, so only the two
/// diagonal families are tracked.
#[derive(Debug, Clone, PartialEq, Eq)]
struct DiagonalCounts {
    n: usize,
    rising: Vec<u32>,
    falling: Vec<u32>,
}

impl DiagonalCounts {
    fn new(n: usize) -> Self {
        let diagonals = if n == 0 { 0 } else { 2 * n - 1 };
        Self {
            n,
            rising: vec![0; diagonals],
            falling: vec![0; diagonals],
        }
    }

    #[inline]
    fn rising_index(&self, col: usize, row: usize) -> usize {
        row + col
    }

    #[inline]
    fn falling_index(&self, col: usize, row: usize) -> usize {
        row + self.n - 1 - col
    }

    /// Adds a queen and returns the number of already-placed queens it
    /// collides with.
    #[inline]
    fn place(&mut self, col: usize, row: usize) -> u32 {
        let rising = self.rising_index(col, row);
        let falling = self.falling_index(col, row);
        let collisions = self.rising[rising] + self.falling[falling];
        self.rising[rising] += 1;
        self.falling[falling] += 1;
        collisions
    }

    /// Removes a queen and returns the number of remaining queens it was
    /// colliding with.
    #[inline]
    fn unplace(&mut self, col: usize, row: usize) -> u32 {
        let rising = self.rising_index(col, row);
        let falling = self.falling_index(col, row);
        self.rising[rising] -= 1;
        self.falling[falling] -= 1;
        self.rising[rising] + self.falling[falling]
    }

    /// Collisions of a currently placed queen.
    #[inline]
    fn collisions(&self, col: usize, row: usize) -> u32 {
        (self.rising[self.rising_index(col, row)] - 1)
            + (self.falling[self.falling_index(col, row)] - 1)
    }

    /// Exact number of colliding pairs on the whole board.
    ///
    /// Each pair is seen from both of its queens, hence the halving.
    fn total_conflicts(&self, board: &[usize]) -> u64 {
        let per_queen: u64 = board
            .iter()
            .enumerate()
            .map(|(col, &row)| u64::from(self.collisions(col, row)))
            .sum();
        per_queen / 2
    }
}

/// Permutation-swap local search engine.
///
/// Owns its random generator; successive `solve` calls on one instance
/// continue the same random sequence. Not safe to share across threads.
#[derive(Debug, Clone)]
pub struct SwapSearch<R> {
    rng: R,
    max_steps: u64,
    time_limit: Duration,
}

impl<R> SwapSearch<R>
where
    R: Rng,
{
    /// Creates an engine around a caller-seeded generator.
    #[inline]
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            max_steps: DEFAULT_MAX_STEPS,
            time_limit: DEFAULT_TIME_LIMIT,
        }
    }

    /// Sets an explicit step budget.
    #[inline]
    pub fn with_max_steps(mut self, max_steps: u64) -> Self {
        self.max_steps = max_steps;
        self
    }

    /// Sets the wall-clock budget for each solve call.
    #[inline]
    pub fn with_time_limit(mut self, time_limit: Duration) -> Self {
        self.time_limit = time_limit;
        self
    }

    /// Runs the search for an `n x n` board.
    pub fn solve(&mut self, n: usize) -> SearchOutcome {
        let mut limit = TimeLimit::with_check_mask(self.time_limit, CLOCK_CHECK_MASK);
        let mut stats = SearchStatistics::default();

        let mut board: Vec<usize> = (0..n).collect();
        board.shuffle(&mut self.rng);

        let mut diagonals = DiagonalCounts::new(n);
        for (col, &row) in board.iter().enumerate() {
            diagonals.place(col, row);
        }
        let mut conflicts = diagonals.total_conflicts(&board);

        for step in 0..self.max_steps {
            stats.on_step();
            limit.on_step();
            if limit.command() == SearchCommand::Expired {
                stats.set_total_time(limit.elapsed());
                return SearchOutcome::timed_out(stats);
            }

            if conflicts == 0 {
                stats.on_found_solution();
                stats.set_total_time(limit.elapsed());
                return SearchOutcome::solved(Placement::new(board), stats);
            }

            if step > 0 && step % RECOUNT_INTERVAL == 0 {
                conflicts = diagonals.total_conflicts(&board);
            }

            let i = self.rng.random_range(0..n);
            if diagonals.collisions(i, board[i]) == 0
                && self.rng.random_bool(SKIP_SETTLED_PROBABILITY)
            {
                // Mostly leave settled queens alone; the occasional probe
                // of one keeps the search from tunneling on the same
                // conflicted subset.
                continue;
            }

            let mut best: Option<(usize, i64)> = None;
            for _ in 0..PARTNER_SAMPLES {
                let j = self.rng.random_range(0..n);
                if j == i {
                    continue;
                }
                let gain = Self::swap_gain(&mut diagonals, &board, i, j);
                if best.map_or(true, |(_, g)| gain > g) {
                    best = Some((j, gain));
                }
            }
            let Some((j, gain)) = best else {
                continue;
            };

            if gain < 0 {
                continue;
            }
            if gain == 0 && !self.rng.random_bool(SIDEWAYS_PROBABILITY) {
                continue;
            }

            let (row_i, row_j) = (board[i], board[j]);
            diagonals.unplace(i, row_i);
            diagonals.unplace(j, row_j);
            diagonals.place(i, row_j);
            diagonals.place(j, row_i);
            board.swap(i, j);
            conflicts -= gain as u64;
        }

        stats.set_total_time(limit.elapsed());
        SearchOutcome::not_found(stats)
    }

    /// Net colliding pairs removed by swapping the queens in columns `i`
    /// and `j`, scored with a temporary probe that leaves the counters
    /// untouched.
    fn swap_gain(diagonals: &mut DiagonalCounts, board: &[usize], i: usize, j: usize) -> i64 {
        let (row_i, row_j) = (board[i], board[j]);

        let broken = diagonals.unplace(i, row_i) + diagonals.unplace(j, row_j);
        let formed = diagonals.place(i, row_j) + diagonals.place(j, row_i);

        diagonals.unplace(i, row_j);
        diagonals.unplace(j, row_i);
        diagonals.place(i, row_i);
        diagonals.place(j, row_j);

        i64::from(broken) - i64::from(formed)
    }
}

#[cfg(test)]
mod tests {
    use super::{DiagonalCounts, SwapSearch};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::time::Duration;

    fn engine(seed: u64) -> SwapSearch<ChaCha8Rng> {
        SwapSearch::new(ChaCha8Rng::seed_from_u64(seed))
    }

    fn is_permutation(rows: &[usize]) -> bool {
        let mut seen = vec![false; rows.len()];
        rows.iter().all(|&r| !std::mem::replace(&mut seen[r], true))
    }

    #[test]
    fn test_solves_eight_queens() {
        let mut solver = engine(42).with_max_steps(1_000_000);
        let outcome = solver.solve(8);
        let placement = outcome.placement().expect("should find a placement");
        assert!(placement.is_valid());
        assert!(is_permutation(placement.rows()));
    }

    #[test]
    fn test_solves_two_hundred_queens() {
        let mut solver = engine(7);
        let outcome = solver.solve(200);
        let placement = outcome.placement().expect("should find a placement");
        assert!(placement.is_valid());
        assert!(is_permutation(placement.rows()));
        assert_eq!(placement.n(), 200);
    }

    #[test]
    fn test_degenerate_boards_solve_immediately() {
        let mut solver = engine(1);
        assert_eq!(solver.solve(0).placement().map(|p| p.n()), Some(0));
        assert_eq!(
            solver.solve(1).placement().map(|p| p.rows()),
            Some([0usize].as_slice())
        );
    }

    #[test]
    fn test_unsolvable_sizes_exhaust_budget_without_error() {
        for n in [2usize, 3] {
            let mut solver = engine(3).with_max_steps(5_000);
            let outcome = solver.solve(n);
            assert!(!outcome.is_solved(), "n = {n} has no solution");
            assert!(!outcome.is_timed_out());
            assert_eq!(outcome.statistics().steps, 5_000);
        }
    }

    #[test]
    fn test_zero_time_limit_times_out_at_first_clock_check() {
        let mut solver = engine(5).with_time_limit(Duration::ZERO);
        let outcome = solver.solve(3);
        assert!(outcome.is_timed_out());
        assert_eq!(outcome.statistics().steps, 65_536);

        // A fresh engine with an ample budget is unaffected.
        let recovered = engine(5).solve(100);
        assert!(recovered.placement().is_some());
    }

    #[test]
    fn test_fixed_seed_is_deterministic() {
        let a = engine(9).solve(64);
        let b = engine(9).solve(64);
        assert_eq!(a.placement(), b.placement());
        assert_eq!(a.statistics().steps, b.statistics().steps);
    }

    #[test]
    fn test_diagonal_counts_track_colliding_pairs() {
        // Identity permutation: every queen on the main falling diagonal.
        let n = 4;
        let board: Vec<usize> = (0..n).collect();
        let mut diagonals = DiagonalCounts::new(n);
        for (col, &row) in board.iter().enumerate() {
            diagonals.place(col, row);
        }
        // All 4 queens collide pairwise: C(4, 2) pairs.
        assert_eq!(diagonals.total_conflicts(&board), 6);
        assert_eq!(diagonals.collisions(0, 0), 3);
    }

    #[test]
    fn test_swap_gain_matches_recount() {
        let n = 6;
        let board: Vec<usize> = (0..n).collect();
        let mut diagonals = DiagonalCounts::new(n);
        for (col, &row) in board.iter().enumerate() {
            diagonals.place(col, row);
        }
        let before = diagonals.total_conflicts(&board);
        let snapshot = diagonals.clone();

        let gain = SwapSearch::<ChaCha8Rng>::swap_gain(&mut diagonals, &board, 1, 4);
        // The probe must leave the counters exactly as they were.
        assert_eq!(diagonals, snapshot);

        // Apply the swap for real and recount.
        let mut swapped = board.clone();
        diagonals.unplace(1, board[1]);
        diagonals.unplace(4, board[4]);
        diagonals.place(1, board[4]);
        diagonals.place(4, board[1]);
        swapped.swap(1, 4);
        let after = diagonals.total_conflicts(&swapped);

        assert_eq!(before as i64 - gain, after as i64);
    }
}
