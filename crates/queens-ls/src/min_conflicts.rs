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

//! # Min-Conflicts Repair
//!
//! Greedy construction followed by iterative conflict repair.
//!
//! Phase 1 places one queen per column, each on a row with the least
//! attack pressure so far, breaking ties uniformly at random. Phase 2
//! repeatedly picks a random column whose queen is under pressure,
//! retracts it, and recommits it on a least-pressure row, until no column
//! qualifies or the step budget runs out.
//!
//! "Under pressure" means the sum of the row and two diagonal counters at
//! the queen's square exceeds [`SETTLED_PRESSURE`]. A committed queen
//! contributes one count on each of its three axes, so a conflict-free
//! assignment scores exactly 3 and the search stops precisely when every
//! pairwise conflict is gone.
//!
//! Budget exhaustion is an ordinary `NotFound` answer. The wall clock is
//! polled once every 1,024 repair steps.

use queens_search::monitor::{SearchCommand, TimeLimit};
use queens_search::placement::Placement;
use queens_search::result::SearchOutcome;
use queens_search::stats::SearchStatistics;
use queens_search::tracker::AttackCounts;
use rand::Rng;
use std::time::Duration;

/// Default wall-clock budget for a single solve call.
pub const DEFAULT_TIME_LIMIT: Duration = Duration::from_secs(10);

/// Pressure of a committed queen with no conflicting assignment: one
/// self-count per axis.
pub const SETTLED_PRESSURE: u32 = 3;

/// Clock-check cadence: every 1,024 repair steps.
const CLOCK_CHECK_MASK: u64 = 0x3FF;

/// Step budget multiplier applied to the board size when no explicit
/// budget is configured.
const DEFAULT_STEPS_PER_QUEEN: u64 = 10;

/// Min-conflicts local search engine.
///
/// Owns its random generator; successive `solve` calls on one instance
/// continue the same random sequence. Not safe to share across threads.
#[derive(Debug, Clone)]
pub struct MinConflicts<R> {
    rng: R,
    max_steps: Option<u64>,
    time_limit: Duration,
}

impl<R> MinConflicts<R>
where
    R: Rng,
{
    /// Creates an engine around a caller-seeded generator.
    #[inline]
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            max_steps: None,
            time_limit: DEFAULT_TIME_LIMIT,
        }
    }

    /// Sets an explicit repair-step budget. Without one, the budget is
    /// ten steps per queen.
    #[inline]
    pub fn with_max_steps(mut self, max_steps: u64) -> Self {
        self.max_steps = Some(max_steps);
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

        if n == 0 {
            stats.on_found_solution();
            stats.set_total_time(limit.elapsed());
            return SearchOutcome::solved(Placement::new(Vec::new()), stats);
        }

        let max_steps = self
            .max_steps
            .unwrap_or(DEFAULT_STEPS_PER_QUEEN * n as u64);

        let mut counts = AttackCounts::new(n);
        let mut board = vec![0usize; n];
        let mut ties = Vec::with_capacity(n);

        // Greedy construction, column by column.
        for col in 0..n {
            let row = self.least_pressure_row(&counts, col, n, &mut ties);
            board[col] = row;
            counts.add(row, col);
        }

        let mut conflicted = Vec::with_capacity(n);
        for _ in 0..max_steps {
            stats.on_step();
            limit.on_step();
            if limit.command() == SearchCommand::Expired {
                stats.set_total_time(limit.elapsed());
                return SearchOutcome::timed_out(stats);
            }

            conflicted.clear();
            conflicted.extend(
                (0..n).filter(|&col| counts.pressure(board[col], col) > SETTLED_PRESSURE),
            );
            if conflicted.is_empty() {
                stats.on_found_solution();
                stats.set_total_time(limit.elapsed());
                return SearchOutcome::solved(Placement::new(board), stats);
            }

            // Retract one queen under pressure and recommit it on a
            // least-pressure row, exactly as in the construction phase.
            let col = conflicted[self.rng.random_range(0..conflicted.len())];
            counts.remove(board[col], col);
            let row = self.least_pressure_row(&counts, col, n, &mut ties);
            board[col] = row;
            counts.add(row, col);
        }

        stats.set_total_time(limit.elapsed());
        SearchOutcome::not_found(stats)
    }

    /// Row with the least attack pressure in `col`, ties broken uniformly
    /// at random. `ties` is caller-owned scratch to avoid reallocation.
    fn least_pressure_row(
        &mut self,
        counts: &AttackCounts,
        col: usize,
        n: usize,
        ties: &mut Vec<usize>,
    ) -> usize {
        ties.clear();
        let mut best = u32::MAX;
        for row in 0..n {
            let pressure = counts.pressure(row, col);
            if pressure < best {
                best = pressure;
                ties.clear();
                ties.push(row);
            } else if pressure == best {
                ties.push(row);
            }
        }
        ties[self.rng.random_range(0..ties.len())]
    }
}
