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

//! Statistics reporting for search runs.
//!
//! A lightweight container for aggregate metrics shared by every engine:
//! steps taken (nodes for the exhaustive engines, repair iterations for
//! local search), solutions found, and total elapsed time. Updates use
//! saturating arithmetic so hot loops never trap on overflow.

use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct SearchStatistics {
    /// Number of search steps performed.
    pub steps: u64,

    /// Number of complete placements found.
    pub solutions_found: u64,

    /// Total time taken by the search.
    pub time_total: Duration,
}

impl SearchStatistics {
    /// Called once per search step.
    #[inline]
    pub fn on_step(&mut self) {
        self.steps = self.steps.saturating_add(1);
    }

    /// Called when a complete placement is found.
    #[inline]
    pub fn on_found_solution(&mut self) {
        self.solutions_found = self.solutions_found.saturating_add(1);
    }

    /// Sets the total time taken by the search.
    #[inline]
    pub fn set_total_time(&mut self, duration: Duration) {
        self.time_total = duration;
    }
}

impl std::fmt::Display for SearchStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Search Statistics:")?;
        writeln!(f, "   Steps:           {}", self.steps)?;
        writeln!(f, "   Solutions Found: {}", self.solutions_found)?;
        writeln!(f, "   Total Time:      {:?}", self.time_total)?;
        Ok(())
    }
}
