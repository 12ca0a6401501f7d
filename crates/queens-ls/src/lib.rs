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

//! # Queens Local Search
//!
//! Randomized repair engines for the N-Queens problem. Unlike the
//! exhaustive engines in `queens-search`, these start from a complete
//! (possibly conflicted) assignment and iteratively reduce conflicts,
//! trading completeness for scalability: they either produce a valid
//! placement or report that the step budget ran out.
//!
//! ## Modules
//!
//! - `min_conflicts`: Greedy initial assignment followed by min-conflicts
//!   repair with randomized tie-breaking.
//! - `swap_search`: Permutation-invariant pairwise-swap repair with
//!   incremental delta scoring, practical up to boards of a million
//!   queens.
//!
//! Both engines own the random generator handed to them at construction,
//! so callers control seeding and tests can be made deterministic.

pub mod min_conflicts;
pub mod swap_search;
