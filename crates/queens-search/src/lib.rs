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

//! # Queens Search
//!
//! Foundational crate for the N-Queens workspace: board placements,
//! constant-time conflict tracking, exhaustive backtracking engines, and
//! the shared result/monitoring plumbing used by every search strategy.
//!
//! ## Modules
//!
//! - `placement`: The `Placement` type (row-per-column assignment vector)
//!   with validity checking and board rendering.
//! - `tracker`: `OccupancyTracker` (bitset occupancy for columns and both
//!   diagonal families) and `AttackCounts` (the counter-array sibling used
//!   by repair-style searches).
//! - `monitor`: `TimeLimit`, a wall-clock budget monitor with a
//!   bitmask-filtered clock check, and the `SearchCommand` it emits.
//! - `result`: `SearchOutcome` / `EnumerationOutcome`, bundling a result
//!   variant with run statistics.
//! - `stats`: `SearchStatistics`, per-run counters updated from the hot
//!   loop.
//! - `backtracking`: The two exhaustive depth-first engines
//!   (`BasicBacktracking`, `TrackedBacktracking`).
//!
//! Refer to each module for detailed APIs and examples.

pub mod backtracking;
pub mod monitor;
pub mod placement;
pub mod result;
pub mod stats;
pub mod tracker;
