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

//! # Time Limit Monitor
//!
//! A lightweight monitor that enforces a wall-clock time budget on a
//! search. It periodically checks elapsed time (using a bitmask-based step
//! filter) and requests termination once the configured `Duration` has
//! been exceeded.
//!
//! ## Motivation
//!
//! Exhaustive search is compute-intensive and local search may churn for
//! millions of steps. Both need predictable time-bounded behavior without
//! paying for a clock read at every step. The mask makes the polling
//! cadence explicit: `(steps & mask) == 0` triggers a check, so a mask of
//! `0` checks every step and a mask of `0x3FF` checks every 1,024 steps.
//!
//! ## Usage
//!
//! ```rust
//! use queens_search::monitor::{SearchCommand, TimeLimit};
//! use std::time::Duration;
//!
//! let mut limit = TimeLimit::new(Duration::from_secs(5));
//! // In the search loop:
//! limit.on_step();
//! match limit.command() {
//!     SearchCommand::Continue => { /* keep searching */ }
//!     SearchCommand::Expired => { /* abandon the search */ }
//! }
//! ```

use std::time::{Duration, Instant};

/// Control-flow decision emitted by a monitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchCommand {
    /// Keep searching.
    #[default]
    Continue,
    /// The time budget is spent; abandon the search.
    Expired,
}

impl std::fmt::Display for SearchCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchCommand::Continue => write!(f, "Continue"),
            SearchCommand::Expired => write!(f, "Expired"),
        }
    }
}

/// Wall-clock budget monitor with a step-filtered clock check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeLimit {
    check_mask: u64,
    steps: u64,
    budget: Duration,
    start: Instant,
}

impl TimeLimit {
    /// Creates a monitor that reads the clock at every step.
    #[inline]
    pub fn new(budget: Duration) -> Self {
        Self::with_check_mask(budget, 0)
    }

    /// Creates a monitor that reads the clock only when
    /// `(steps & check_mask) == 0`.
    ///
    /// `check_mask` should be a power of two minus one so the check fires
    /// at a fixed cadence.
    #[inline]
    pub fn with_check_mask(budget: Duration, check_mask: u64) -> Self {
        Self {
            check_mask,
            steps: 0,
            budget,
            start: Instant::now(),
        }
    }

    /// Restarts the budget window and step counter.
    #[inline]
    pub fn restart(&mut self) {
        self.start = Instant::now();
        self.steps = 0;
    }

    /// Counts one unit of search work.
    #[inline(always)]
    pub fn on_step(&mut self) {
        self.steps = self.steps.wrapping_add(1);
    }

    /// Returns the current control-flow decision.
    ///
    /// The clock is only consulted when the step counter passes the mask
    /// filter, so a decision of `Continue` may be stale by at most one
    /// polling interval.
    #[inline(always)]
    pub fn command(&self) -> SearchCommand {
        if (self.steps & self.check_mask) == 0 && self.start.elapsed() >= self.budget {
            return SearchCommand::Expired;
        }
        SearchCommand::Continue
    }

    /// Time elapsed since construction or the last `restart`.
    #[inline]
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

#[cfg(test)]
mod tests {
    use super::{SearchCommand, TimeLimit};
    use std::time::Duration;

    #[test]
    fn test_zero_budget_expires_at_first_check() {
        let limit = TimeLimit::new(Duration::ZERO);
        // steps == 0, mask == 0: the clock is consulted immediately.
        assert_eq!(limit.command(), SearchCommand::Expired);
    }

    #[test]
    fn test_generous_budget_continues() {
        let limit = TimeLimit::new(Duration::from_secs(3600));
        assert_eq!(limit.command(), SearchCommand::Continue);
    }

    #[test]
    fn test_mask_skips_clock_between_cadence_points() {
        let mut limit = TimeLimit::with_check_mask(Duration::ZERO, 0x3);
        // Steps 1..=3 fail the mask filter, so even an exhausted budget is
        // not observed until the counter wraps to a multiple of 4.
        for _ in 0..3 {
            limit.on_step();
            assert_eq!(limit.command(), SearchCommand::Continue);
        }
        limit.on_step();
        assert_eq!(limit.command(), SearchCommand::Expired);
    }

    #[test]
    fn test_restart_resets_step_counter() {
        let mut limit = TimeLimit::with_check_mask(Duration::from_secs(3600), 0x3);
        for _ in 0..3 {
            limit.on_step();
        }
        limit.restart();
        assert_eq!(limit.command(), SearchCommand::Continue);
        limit.on_step();
        // One step after restart fails the mask filter again.
        assert_eq!(limit.command(), SearchCommand::Continue);
    }

    #[test]
    fn test_on_step_wraps_at_u64_boundary() {
        let mut limit = TimeLimit::new(Duration::from_secs(3600));
        limit.steps = u64::MAX;
        limit.on_step();
        assert_eq!(limit.steps, 0);
    }
}
