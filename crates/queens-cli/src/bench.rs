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

//! Fixed benchmark sweep over all four strategies.
//!
//! One table row per board size, one column per strategy. Sizes past a
//! strategy's practical cap are skipped up front rather than left to time
//! out, so a full sweep finishes in minutes.

use queens_search::result::SearchResult;
use queens_solver::Strategy;
use std::time::{Duration, Instant};

/// Board sizes covered by the sweep.
const SWEEP_SIZES: &[usize] = &[
    4, 6, 8, 10, 12, 13, 20, 50, 100, 1_000, 10_000, 100_000, 1_000_000,
];

/// Wall-clock budget per table cell.
const CELL_TIME_LIMIT: Duration = Duration::from_secs(10);

const SIZE_WIDTH: usize = 9;
const CELL_WIDTH: usize = 20;

/// Largest board size a strategy is given at all.
///
/// The exhaustive engines blow up combinatorially; min-conflicts rescans
/// every column each repair step; swap search is the only strategy that
/// stays practical up to a million queens.
fn practical_cap(strategy: Strategy) -> usize {
    match strategy {
        Strategy::BasicBacktracking => 13,
        Strategy::TrackedBacktracking => 15,
        Strategy::MinConflicts => 10_000,
        Strategy::SwapSearch => 1_000_000,
    }
}

/// Formats one table cell, running the strategy unless its cap excludes
/// the size.
fn cell(strategy: Strategy, n: usize) -> String {
    let cap = practical_cap(strategy);
    if n > cap {
        return format!("Skip (>{cap})");
    }

    let start = Instant::now();
    let outcome = strategy.solve_first(n, CELL_TIME_LIMIT, rand::rng());
    let elapsed = start.elapsed();

    match outcome.result() {
        SearchResult::Solved(_) => format_millis(elapsed),
        SearchResult::NotFound => "Not Found".to_string(),
        SearchResult::TimedOut => "Timeout".to_string(),
    }
}

fn format_millis(elapsed: Duration) -> String {
    format!("{:.3} ms", elapsed.as_secs_f64() * 1_000.0)
}

/// Runs the whole sweep and prints the table.
pub fn run_sweep() {
    print!("{:>SIZE_WIDTH$}", "N");
    for strategy in Strategy::ALL {
        print!("{:>CELL_WIDTH$}", strategy.name());
    }
    println!();

    for &n in SWEEP_SIZES {
        print!("{n:>SIZE_WIDTH$}");
        for strategy in Strategy::ALL {
            print!("{:>CELL_WIDTH$}", cell(strategy, n));
        }
        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::{cell, format_millis, practical_cap};
    use queens_solver::Strategy;
    use std::time::Duration;

    #[test]
    fn test_sizes_past_the_cap_are_skipped() {
        assert_eq!(cell(Strategy::BasicBacktracking, 14), "Skip (>13)");
        assert_eq!(cell(Strategy::MinConflicts, 100_000), "Skip (>10000)");
    }

    #[test]
    fn test_swap_search_covers_the_largest_sweep_size() {
        assert_eq!(practical_cap(Strategy::SwapSearch), 1_000_000);
    }

    #[test]
    fn test_solved_cell_reports_milliseconds() {
        let rendered = cell(Strategy::TrackedBacktracking, 8);
        assert!(rendered.ends_with(" ms"), "unexpected cell: {rendered}");
    }

    #[test]
    fn test_millisecond_formatting() {
        assert_eq!(format_millis(Duration::from_millis(1500)), "1500.000 ms");
    }
}
