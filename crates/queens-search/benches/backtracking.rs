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

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use queens_search::backtracking::{BasicBacktracking, TrackedBacktracking};
use std::hint::black_box;

fn bench_enumeration(c: &mut Criterion) {
    let mut group = c.benchmark_group("enumerate");

    for n in [6usize, 8, 10] {
        group.bench_with_input(BenchmarkId::new("basic", n), &n, |b, &n| {
            let engine = BasicBacktracking::new();
            b.iter(|| black_box(engine.enumerate(black_box(n))));
        });
        group.bench_with_input(BenchmarkId::new("tracked", n), &n, |b, &n| {
            let engine = TrackedBacktracking::new();
            b.iter(|| black_box(engine.enumerate(black_box(n))));
        });
    }

    group.finish();
}

fn bench_solve_first(c: &mut Criterion) {
    let mut group = c.benchmark_group("solve_first");

    for n in [8usize, 12, 16] {
        group.bench_with_input(BenchmarkId::new("tracked", n), &n, |b, &n| {
            let engine = TrackedBacktracking::new();
            b.iter(|| black_box(engine.solve_first(black_box(n))));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_enumeration, bench_solve_first);
criterion_main!(benches);
