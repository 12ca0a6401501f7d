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

//! Command surface for the N-Queens workspace.
//!
//! Two invocations:
//!
//! - `queens <mode> <n>` — run one strategy (1 = basic backtracking,
//!   2 = tracked backtracking, 3 = min-conflicts, 4 = swap search) on an
//!   `n x n` board and report the outcome.
//! - `queens` — run the fixed benchmark sweep and print the timing table.
//!
//! The driver only measures wall-clock time around each solve call; no
//! search logic lives here.

mod bench;

use queens_search::result::SearchResult;
use queens_solver::Strategy;
use std::time::{Duration, Instant};

/// Wall-clock budget for a single-run invocation.
const RUN_TIME_LIMIT: Duration = Duration::from_secs(30);

/// Largest board rendered as a grid in single-run reports.
const PREVIEW_LIMIT: usize = 32;

/// A parsed command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Invocation {
    /// No arguments: run the benchmark sweep.
    Sweep,
    /// `<mode> <n>`: run one strategy once.
    Single { strategy: Strategy, n: usize },
}

fn parse_args(args: &[String]) -> Result<Invocation, String> {
    match args {
        [] => Ok(Invocation::Sweep),
        [mode, n] => {
            let mode: u32 = mode
                .parse()
                .map_err(|_| format!("mode must be a number, got `{mode}`"))?;
            let strategy = Strategy::from_mode(mode)
                .ok_or_else(|| format!("mode must be between 1 and 4, got {mode}"))?;
            let n: usize = n
                .parse()
                .map_err(|_| format!("board size must be a non-negative number, got `{n}`"))?;
            Ok(Invocation::Single { strategy, n })
        }
        _ => Err(format!("expected 0 or 2 arguments, got {}", args.len())),
    }
}

fn run_single(strategy: Strategy, n: usize) {
    println!("Running: {} with N={}", strategy, n);

    let start = Instant::now();
    let outcome = strategy.solve_first(n, RUN_TIME_LIMIT, rand::rng());
    let elapsed = start.elapsed();

    println!("Time: {:.3} ms", elapsed.as_secs_f64() * 1_000.0);
    match outcome.result() {
        SearchResult::Solved(placement) => {
            println!("Solution found.");
            if n <= PREVIEW_LIMIT {
                print!("{placement}");
            }
        }
        SearchResult::NotFound => println!("No solution found within the step budget."),
        SearchResult::TimedOut => println!("Timeout: search abandoned."),
    }
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    match parse_args(&args) {
        Ok(Invocation::Sweep) => bench::run_sweep(),
        Ok(Invocation::Single { strategy, n }) => run_single(strategy, n),
        Err(message) => {
            eprintln!("error: {message}");
            eprintln!("usage: queens [<mode 1-4> <n>]");
            std::process::exit(2);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_args, Invocation};
    use queens_solver::Strategy;

    fn args(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_no_arguments_requests_the_sweep() {
        assert_eq!(parse_args(&[]), Ok(Invocation::Sweep));
    }

    #[test]
    fn test_mode_and_size_request_a_single_run() {
        assert_eq!(
            parse_args(&args(&["4", "1000"])),
            Ok(Invocation::Single {
                strategy: Strategy::SwapSearch,
                n: 1000
            })
        );
    }

    #[test]
    fn test_invalid_mode_is_rejected() {
        assert!(parse_args(&args(&["0", "8"])).is_err());
        assert!(parse_args(&args(&["5", "8"])).is_err());
        assert!(parse_args(&args(&["fast", "8"])).is_err());
    }

    #[test]
    fn test_invalid_size_is_rejected() {
        assert!(parse_args(&args(&["1", "-3"])).is_err());
        assert!(parse_args(&args(&["1", "big"])).is_err());
    }

    #[test]
    fn test_wrong_arity_is_rejected() {
        assert!(parse_args(&args(&["1"])).is_err());
        assert!(parse_args(&args(&["1", "8", "9"])).is_err());
    }
}
