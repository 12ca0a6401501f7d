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

//! Search outcome and termination reporting.
//!
//! Every engine returns a single transport object bundling the result with
//! run statistics. Three result states are distinguished: a placement was
//! found, the budget (step count) ran out without one, or the wall-clock
//! limit expired and the search was abandoned with nothing to show.
//! Budget exhaustion is an ordinary answer, not a failure; a timeout means
//! "no answer produced" and leaves no partial results behind.

use crate::placement::Placement;
use crate::stats::SearchStatistics;

/// Result of a single-solution search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchResult {
    /// A complete, conflict-free placement.
    Solved(Placement),
    /// The step budget ran out before a placement was reached, or no
    /// placement exists for this board size.
    NotFound,
    /// The wall-clock limit expired mid-search.
    TimedOut,
}

impl std::fmt::Display for SearchResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchResult::Solved(placement) => write!(f, "Solved(n={})", placement.n()),
            SearchResult::NotFound => write!(f, "Not Found"),
            SearchResult::TimedOut => write!(f, "Timed Out"),
        }
    }
}

/// Outcome of a single-solution search after termination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    result: SearchResult,
    statistics: SearchStatistics,
}

impl SearchOutcome {
    /// Creates a solved outcome.
    #[inline]
    pub fn solved(placement: Placement, statistics: SearchStatistics) -> Self {
        Self {
            result: SearchResult::Solved(placement),
            statistics,
        }
    }

    /// Creates a budget-exhausted outcome.
    #[inline]
    pub fn not_found(statistics: SearchStatistics) -> Self {
        Self {
            result: SearchResult::NotFound,
            statistics,
        }
    }

    /// Creates a timed-out outcome.
    #[inline]
    pub fn timed_out(statistics: SearchStatistics) -> Self {
        Self {
            result: SearchResult::TimedOut,
            statistics,
        }
    }

    /// Returns the result.
    #[inline]
    pub fn result(&self) -> &SearchResult {
        &self.result
    }

    /// Returns the run statistics.
    #[inline]
    pub fn statistics(&self) -> &SearchStatistics {
        &self.statistics
    }

    /// Returns the placement if one was found.
    #[inline]
    pub fn placement(&self) -> Option<&Placement> {
        match &self.result {
            SearchResult::Solved(placement) => Some(placement),
            _ => None,
        }
    }

    #[inline]
    pub fn is_solved(&self) -> bool {
        matches!(self.result, SearchResult::Solved(_))
    }

    #[inline]
    pub fn is_timed_out(&self) -> bool {
        matches!(self.result, SearchResult::TimedOut)
    }
}

/// Result of an exhaustive solve-all search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnumerationResult {
    /// The search space was fully explored; the set holds every placement
    /// in discovery order (empty when none exists).
    Complete(Vec<Placement>),
    /// The wall-clock limit expired before the space was exhausted.
    TimedOut,
}

/// Outcome of an exhaustive solve-all search after termination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumerationOutcome {
    result: EnumerationResult,
    statistics: SearchStatistics,
}

impl EnumerationOutcome {
    /// Creates a completed-enumeration outcome.
    #[inline]
    pub fn complete(solutions: Vec<Placement>, statistics: SearchStatistics) -> Self {
        Self {
            result: EnumerationResult::Complete(solutions),
            statistics,
        }
    }

    /// Creates a timed-out outcome.
    #[inline]
    pub fn timed_out(statistics: SearchStatistics) -> Self {
        Self {
            result: EnumerationResult::TimedOut,
            statistics,
        }
    }

    /// Returns the result.
    #[inline]
    pub fn result(&self) -> &EnumerationResult {
        &self.result
    }

    /// Returns the run statistics.
    #[inline]
    pub fn statistics(&self) -> &SearchStatistics {
        &self.statistics
    }

    /// Returns the solution set if the enumeration completed.
    #[inline]
    pub fn solutions(&self) -> Option<&[Placement]> {
        match &self.result {
            EnumerationResult::Complete(solutions) => Some(solutions),
            EnumerationResult::TimedOut => None,
        }
    }

    #[inline]
    pub fn is_timed_out(&self) -> bool {
        matches!(self.result, EnumerationResult::TimedOut)
    }
}

#[cfg(test)]
mod tests {
    use super::{EnumerationOutcome, SearchOutcome, SearchResult};
    use crate::placement::Placement;
    use crate::stats::SearchStatistics;

    #[test]
    fn test_solved_outcome_exposes_placement() {
        let placement = Placement::new(vec![1, 3, 0, 2]);
        let outcome = SearchOutcome::solved(placement.clone(), SearchStatistics::default());
        assert!(outcome.is_solved());
        assert!(!outcome.is_timed_out());
        assert_eq!(outcome.placement(), Some(&placement));
    }

    #[test]
    fn test_not_found_outcome_has_no_placement() {
        let outcome = SearchOutcome::not_found(SearchStatistics::default());
        assert!(!outcome.is_solved());
        assert_eq!(outcome.placement(), None);
        assert_eq!(*outcome.result(), SearchResult::NotFound);
    }

    #[test]
    fn test_timed_out_outcome() {
        let outcome = SearchOutcome::timed_out(SearchStatistics::default());
        assert!(outcome.is_timed_out());
        assert_eq!(outcome.placement(), None);
    }

    #[test]
    fn test_enumeration_complete_exposes_solutions() {
        let solutions = vec![Placement::new(vec![1, 3, 0, 2]), Placement::new(vec![2, 0, 3, 1])];
        let outcome = EnumerationOutcome::complete(solutions.clone(), SearchStatistics::default());
        assert_eq!(outcome.solutions(), Some(solutions.as_slice()));
        assert!(!outcome.is_timed_out());
    }

    #[test]
    fn test_enumeration_timed_out_has_no_solutions() {
        let outcome = EnumerationOutcome::timed_out(SearchStatistics::default());
        assert!(outcome.is_timed_out());
        assert_eq!(outcome.solutions(), None);
    }

    #[test]
    fn test_result_display() {
        assert_eq!(format!("{}", SearchResult::NotFound), "Not Found");
        assert_eq!(format!("{}", SearchResult::TimedOut), "Timed Out");
    }
}
