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

//! Board placements for the N-Queens problem.
//!
//! A placement stores one row index per column, so column/row uniqueness
//! is representable directly and only diagonal attacks need a pairwise
//! check. The type is produced by every engine in this workspace and is
//! the unit stored in enumeration results.

/// A full assignment of queens to an `n x n` board.
///
/// `rows()[col]` is the row occupied in column `col`. Engines that work on
/// permutations guarantee each row appears exactly once; `is_valid` checks
/// that property explicitly together with the diagonal constraints.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Placement {
    rows: Vec<usize>,
}

impl Placement {
    /// Creates a placement from a row-per-column vector.
    ///
    /// # Panics
    ///
    /// Panics if any row index is out of bounds for the board size implied
    /// by the vector length.
    pub fn new(rows: Vec<usize>) -> Self {
        let n = rows.len();
        assert!(
            rows.iter().all(|&r| r < n),
            "called `Placement::new` with a row index out of bounds for board size {}",
            n
        );
        Self { rows }
    }

    /// Returns the board size.
    #[inline]
    pub fn n(&self) -> usize {
        self.rows.len()
    }

    /// Returns the row occupied in each column.
    #[inline]
    pub fn rows(&self) -> &[usize] {
        &self.rows
    }

    /// Returns `true` if no two queens share a row, column, or diagonal.
    ///
    /// Columns are distinct by construction (one entry per column), so
    /// this checks row uniqueness and `|rows[i] - rows[j]| != |i - j|`
    /// for every pair.
    pub fn is_valid(&self) -> bool {
        let n = self.rows.len();
        for i in 0..n {
            for j in (i + 1)..n {
                if self.rows[i] == self.rows[j] {
                    return false;
                }
                if self.rows[i].abs_diff(self.rows[j]) == j - i {
                    return false;
                }
            }
        }
        true
    }

    /// Consumes the placement and returns the underlying vector.
    #[inline]
    pub fn into_rows(self) -> Vec<usize> {
        self.rows
    }
}

impl std::fmt::Display for Placement {
    /// Renders the board as a grid of `Q` and `.` cells, one rank per line.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let n = self.rows.len();
        for row in 0..n {
            for col in 0..n {
                if self.rows[col] == row {
                    write!(f, "Q ")?;
                } else {
                    write!(f, ". ")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
