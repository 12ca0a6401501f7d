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

//! # Conflict Tracking
//!
//! Constant-time occupancy bookkeeping for the three attack axes of the
//! N-Queens constraint structure: rows, rising diagonals (`row + col`),
//! and falling diagonals (`row - col + n - 1`).
//!
//! ## Motivation
//!
//! The naive safety check rescans every previously placed queen, which is
//! O(n) per probe and dominates the cost of deep backtracking. Keeping one
//! marker per axis turns the probe into three array reads.
//!
//! ## Types
//!
//! - `OccupancyTracker`: boolean occupancy over the three axes, backed by
//!   `FixedBitSet`. Used by the exhaustive engine, where at most one queen
//!   can ever occupy an axis entry.
//! - `AttackCounts`: counter arrays over the same axes. Used by
//!   repair-style searches, where several queens may legally pile onto the
//!   same row or diagonal mid-search and the interesting quantity is *how
//!   many*.
//!
//! Both trackers leave bounds checking to the caller: `row` and `col` must
//! be in `[0, n)`.

use fixedbitset::FixedBitSet;

/// Number of diagonals per family on an `n x n` board.
#[inline]
fn diagonal_count(n: usize) -> usize {
    if n == 0 { 0 } else { 2 * n - 1 }
}

/// Index into the rising-diagonal family.
#[inline]
fn rising(row: usize, col: usize) -> usize {
    row + col
}

/// Index into the falling-diagonal family.
#[inline]
fn falling(row: usize, col: usize, n: usize) -> usize {
    row + n - 1 - col
}

/// Boolean occupancy over rows and both diagonal families.
///
/// State always reflects exactly the currently placed queens; every
/// `mark`/`unmark` updates all three axes together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OccupancyTracker {
    n: usize,
    rows: FixedBitSet,
    rising: FixedBitSet,
    falling: FixedBitSet,
}

impl OccupancyTracker {
    /// Creates an empty tracker for an `n x n` board.
    pub fn new(n: usize) -> Self {
        Self {
            n,
            rows: FixedBitSet::with_capacity(n),
            rising: FixedBitSet::with_capacity(diagonal_count(n)),
            falling: FixedBitSet::with_capacity(diagonal_count(n)),
        }
    }

    /// Returns the board size this tracker was created for.
    #[inline]
    pub fn n(&self) -> usize {
        self.n
    }

    /// Returns `true` if `(row, col)` is attacked by no placed queen.
    #[inline]
    pub fn is_safe(&self, row: usize, col: usize) -> bool {
        !self.rows.contains(row)
            && !self.rising.contains(rising(row, col))
            && !self.falling.contains(falling(row, col, self.n))
    }

    /// Records a queen at `(row, col)`.
    #[inline]
    pub fn mark(&mut self, row: usize, col: usize) {
        self.rows.set(row, true);
        self.rising.set(rising(row, col), true);
        self.falling.set(falling(row, col, self.n), true);
    }

    /// Removes the queen at `(row, col)`.
    #[inline]
    pub fn unmark(&mut self, row: usize, col: usize) {
        self.rows.set(row, false);
        self.rising.set(rising(row, col), false);
        self.falling.set(falling(row, col, self.n), false);
    }
}

/// Counting occupancy over rows and both diagonal families.
///
/// `pressure` sums the three counters for a square; a queen committed via
/// `add` contributes exactly 3 to the pressure of its own square.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttackCounts {
    n: usize,
    rows: Vec<u32>,
    rising: Vec<u32>,
    falling: Vec<u32>,
}

impl AttackCounts {
    /// Creates zeroed counters for an `n x n` board.
    pub fn new(n: usize) -> Self {
        Self {
            n,
            rows: vec![0; n],
            rising: vec![0; diagonal_count(n)],
            falling: vec![0; diagonal_count(n)],
        }
    }

    /// Sum of the three axis counters at `(row, col)`.
    #[inline]
    pub fn pressure(&self, row: usize, col: usize) -> u32 {
        self.rows[row]
            + self.rising[rising(row, col)]
            + self.falling[falling(row, col, self.n)]
    }

    /// Commits a queen at `(row, col)`, incrementing all three axes.
    #[inline]
    pub fn add(&mut self, row: usize, col: usize) {
        self.rows[row] += 1;
        self.rising[rising(row, col)] += 1;
        self.falling[falling(row, col, self.n)] += 1;
    }

    /// Retracts the queen at `(row, col)`, decrementing all three axes.
    #[inline]
    pub fn remove(&mut self, row: usize, col: usize) {
        self.rows[row] -= 1;
        self.rising[rising(row, col)] -= 1;
        self.falling[falling(row, col, self.n)] -= 1;
    }
}
